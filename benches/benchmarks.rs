// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use conventional_shields::{
    BadgeCatalog, BadgeOptions, BadgeStyle, ColorTable, ConventionalBadgeRequest, Decoration,
    Label, Palette, build_badge, build_conventional_badge, encode_badge_content,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn benchmark_plain_badge(c: &mut Criterion,)
{
    let options = BadgeOptions {
        label: Some("build status".to_owned(),),
        message: Some("passing-ok".to_owned(),),
        color: Some("#4c1".to_owned(),),
        style: Some(BadgeStyle::Plastic,),
        logo: Some("github".to_owned(),),
        links: vec!["https://example.com".to_owned()],
        ..BadgeOptions::default()
    };

    c.bench_function("build_badge", |b| b.iter(|| build_badge(black_box(&options,),),),);
}

fn benchmark_conventional_badge(c: &mut Criterion,)
{
    let request = ConventionalBadgeRequest::for_label(Label::Issue,)
        .with_decorations([Decoration::Security, Decoration::Blocking,],);

    c.bench_function("build_conventional_badge", |b| {
        b.iter(|| build_conventional_badge(black_box(&request,),),)
    },);
}

fn benchmark_escaping(c: &mut Criterion,)
{
    let content = "non-blocking suggestion_with mixed-content and spaces";

    c.bench_function("encode_badge_content", |b| {
        b.iter(|| encode_badge_content(black_box(content,),).into_owned(),)
    },);
}

fn benchmark_table_and_catalog(c: &mut Criterion,)
{
    let palette = Palette::builtin();

    c.bench_function("color_table_from_palette", |b| {
        b.iter(|| ColorTable::from_palette(black_box(palette,),),)
    },);

    c.bench_function("catalog_generate", |b| {
        b.iter(|| BadgeCatalog::generate(black_box(palette,),),)
    },);
}

criterion_group!(
    benches,
    benchmark_plain_badge,
    benchmark_conventional_badge,
    benchmark_escaping,
    benchmark_table_and_catalog
);
criterion_main!(benches);
