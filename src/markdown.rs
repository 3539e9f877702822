// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Markdown output for badge URLs and catalogues.
//!
//! Covers the snippet inserted into review comments, the recap and grid
//! documents rendered from a [`BadgeCatalog`], and the examples document
//! rendered straight from a palette.

use std::fmt::Write as _;

use crate::{
    catalog::{BadgeCatalog, BadgeConfiguration},
    color::ColorTable,
    conventional::{Decoration, Label},
    palette::Palette,
    shield::{ConventionalBadgeRequest, build_conventional_badge_with}
};

/// Number of leading [`Decoration::ALL`] entries listed as common
/// decorations in the examples document.
const COMMON_DECORATIONS: usize = 10;

/// Multi-decoration badges showcased after the per-label sections.
const CURATED_EXAMPLES: [(Label, &[Decoration], &str); 5] = [
    (
        Label::Suggestion,
        &[Decoration::Security, Decoration::Blocking],
        "Blocking security suggestion"
    ),
    (Label::Issue, &[Decoration::Ux, Decoration::NonBlocking], "Non-blocking UX issue"),
    (
        Label::Suggestion,
        &[Decoration::Test, Decoration::IfMinor],
        "Test suggestion (if-minor)"
    ),
    (
        Label::Question,
        &[Decoration::Performance, Decoration::NonBlocking],
        "Performance question"
    ),
    (Label::Todo, &[Decoration::Accessibility], "Accessibility todo")
];

/// Formats a markdown image.
///
/// ```
/// use conventional_shields::markdown_image;
///
/// assert_eq!(markdown_image("praise", "https://x/y"), "![praise](https://x/y)");
/// ```
pub fn markdown_image(alt: &str, url: &str) -> String {
    format!("![{}]({url})", escape_alt(alt))
}

fn escape_alt(alt: &str) -> String {
    alt.replace('[', "\\[").replace(']', "\\]")
}

/// Inserts `snippet` into `text` at character offset `cursor`.
///
/// Returns the new text and the cursor position right after the snippet.
/// Offsets past the end of `text` insert at the end.
///
/// ```
/// use conventional_shields::insert_at_cursor;
///
/// let (text, cursor) = insert_at_cursor("Looks good", 0, "![praise](u) ");
/// assert_eq!(text, "![praise](u) Looks good");
/// assert_eq!(cursor, 13);
/// ```
pub fn insert_at_cursor(text: &str, cursor: usize, snippet: &str) -> (String, usize) {
    let split = text
        .char_indices()
        .nth(cursor)
        .map_or(text.len(), |(index, _)| index);
    let inserted_at = text[..split].chars().count();

    let mut updated = String::with_capacity(text.len() + snippet.len());
    updated.push_str(&text[..split]);
    updated.push_str(snippet);
    updated.push_str(&text[split..]);

    (updated, inserted_at + snippet.chars().count())
}

/// Renders the recap document: summary, label overview, badge tables and
/// palette.
pub fn render_recap(catalog: &BadgeCatalog) -> String {
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("# Conventional Comments Badge Recap\n\n");
    out.push_str(
        "This document provides a comprehensive overview of all available conventional comment badge configurations.\n\n"
    );
    out.push_str("## Summary\n\n");
    let _ = writeln!(out, "- **Total Labels:** {}", catalog.metadata.total_labels);
    let _ = writeln!(out, "- **Total Configurations:** {}", catalog.configurations.len());
    let _ = writeln!(out, "- **Generator Version:** {}\n", catalog.metadata.version);

    out.push_str("## Labels Overview\n\n");
    out.push_str("| Label | Description | Default Color | Relevant Decoration |\n");
    out.push_str("|-------|-------------|---------------|---------------------|\n");
    for entry in &catalog.labels {
        let _ = writeln!(
            out,
            "| **{}** | {} | `{}` | {} |",
            entry.label,
            escape_cell(&entry.description),
            entry.default_color,
            join_decorations(&entry.relevant_decorations)
        );
    }

    out.push_str("\n## All Badge Configurations\n\n");
    out.push_str("### Default Badges (No Decorations)\n\n");
    out.push_str("| Label | Badge | Description |\n");
    out.push_str("|-------|-------|-------------|\n");
    for config in catalog.default_configurations() {
        let _ = writeln!(
            out,
            "| **{}** | {} | {} |",
            config.label,
            badge_image(config),
            escape_cell(&config.description)
        );
    }

    out.push_str("\n### Decorated Badges (With Relevant Decorations)\n\n");
    out.push_str("| Label | Decorations | Badge | Example |\n");
    out.push_str("|-------|-------------|-------|---------|\n");
    for config in catalog.decorated_configurations() {
        let _ = writeln!(
            out,
            "| **{}** | {} | {} | {} |",
            config.label,
            join_decorations(&config.decorations),
            badge_image(config),
            escape_cell(&config.example)
        );
    }

    out.push_str("\n## Color Palette\n\n");
    out.push_str("| Color Name | Hex Code |\n");
    out.push_str("|------------|----------|\n");
    for color in &catalog.color_palette {
        let _ = writeln!(out, "| **{}** | `{}` |", escape_cell(&color.name), color.hex);
    }

    push_recap_usage(&mut out, catalog);

    out.push_str("\n## Quick Reference\n\n### Available Labels\n\n");
    for entry in &catalog.labels {
        let _ = writeln!(out, "- **{}** - {}", entry.label, entry.description);
    }

    out.push_str("\n### Decorations\n\n");
    push_decoration_list(&mut out, &Decoration::ALL);

    out
}

fn push_recap_usage(out: &mut String, catalog: &BadgeCatalog) {
    out.push_str("\n## Usage Examples\n\n### CLI Usage\n\n```bash\n");
    out.push_str("# Default badge\nconventional-shields generate praise\n\n");
    out.push_str("# Badge with decorations\nconventional-shields generate issue security blocking\n\n");
    out.push_str(
        "# Manual colors\nconventional-shields generate suggestion performance --manual --color '#ff0000' --label-color '#00ff00'\n"
    );
    out.push_str("```\n\n### Markdown Usage\n\n```markdown\n");

    let showcased = ["praise-default", "issue-decorated", "suggestion-decorated"];
    let mut first = true;
    for config in showcased
        .iter()
        .filter_map(|id| catalog.configurations.iter().find(|config| config.id == *id))
    {
        if !first {
            out.push('\n');
        }
        first = false;
        let _ = writeln!(out, "<!-- {} -->\n{}", config.description, badge_image(config));
    }
    out.push_str("```\n");
}

/// Renders the examples document: one section per label with its sample
/// decorations, curated multi-decoration badges, the palette and the label
/// list.
///
/// Every badge is shown as an image followed by its markdown source.
pub fn render_examples(palette: &Palette) -> String {
    let table = ColorTable::from_palette(palette);
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("# Conventional Comments Badge Examples\n\n");
    out.push_str(
        "This file contains examples of all conventional comment badges with their respective colors.\n\n"
    );

    out.push_str("## All Labels\n\n");
    for label in Label::ALL {
        let decorations = sample_decorations(label);
        let _ = writeln!(out, "### {}\n", capitalize(label.as_str()));
        let _ = writeln!(out, "**Decorations:** {}\n", join_decorations(decorations));
        push_example_badge(&mut out, &table, label, decorations);
    }

    out.push_str("## With Decorations\n\n### Examples with Common Decorations\n\n");
    for (label, decorations, title) in CURATED_EXAMPLES {
        let _ = writeln!(out, "### {title}\n");
        let _ = writeln!(out, "**Label:** {label}");
        let _ = writeln!(out, "**Decorations:** {}\n", join_decorations(decorations));
        push_example_badge(&mut out, &table, label, decorations);
    }

    out.push_str("## Color Palette\n\nThe following colors are used in the badges:\n\n");
    for color in &palette.colors {
        let _ = writeln!(out, "- **{}**: `{}`", color.name, color.hex);
    }

    out.push_str("\n## Usage\n\n### CLI Usage\n\n```bash\n");
    out.push_str("# Generate a badge with decorations\nconventional-shields generate praise non-blocking\n\n");
    out.push_str(
        "# Generate with multiple decorations\nconventional-shields generate nitpick style non-blocking\n"
    );
    out.push_str("```\n\n### Library Usage\n\n```rust\n");
    out.push_str("use conventional_shields::{ConventionalBadgeRequest, Decoration, Label, build_conventional_badge};\n\n");
    out.push_str("let request = ConventionalBadgeRequest::for_label(Label::Praise)\n");
    out.push_str("    .with_decorations([Decoration::NonBlocking]);\n");
    out.push_str("let url = build_conventional_badge(&request);\n```\n");

    out.push_str("\n## Available Labels\n\n");
    for label in Label::ALL {
        let _ = writeln!(out, "- **{label}**");
    }

    out.push_str("\n## Common Decorations\n\n");
    push_decoration_list(&mut out, &Decoration::ALL[..COMMON_DECORATIONS]);

    out
}

/// Decorations paired with each label in the examples document.
pub fn sample_decorations(label: Label) -> &'static [Decoration] {
    match label {
        Label::Praise => &[Decoration::NonBlocking],
        Label::Nitpick => &[Decoration::Style, Decoration::NonBlocking],
        Label::Suggestion => &[Decoration::Performance],
        Label::Issue => &[Decoration::Security, Decoration::Blocking],
        Label::Todo => &[Decoration::Test],
        Label::Question => &[Decoration::Ux],
        Label::Thought => &[Decoration::NonBlocking],
        Label::Chore => &[Decoration::Documentation],
        Label::Note => &[Decoration::NonBlocking],
        Label::Typo => &[Decoration::Style],
        Label::Polish => &[Decoration::Ux],
        Label::Quibble => &[Decoration::Style, Decoration::NonBlocking]
    }
}

fn push_example_badge(out: &mut String, table: &ColorTable, label: Label, decorations: &[Decoration]) {
    let request = ConventionalBadgeRequest::for_label(label).with_decorations(decorations.iter().copied());
    let image = markdown_image(label.as_str(), &build_conventional_badge_with(table, &request));
    let _ = writeln!(out, "{image}\n\n```markdown\n{image}\n```\n\n---\n");
}

fn push_decoration_list(out: &mut String, decorations: &[Decoration]) {
    for decoration in decorations {
        let _ = writeln!(out, "- **{decoration}** - {}", decoration.description());
    }
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Renders the grid document: every badge as an inline image, default
/// badges first.
pub fn render_grid(catalog: &BadgeCatalog) -> String {
    let mut out = String::from(
        "# Conventional Comments Badge Grid\n\nA simple grid display of all conventional comment badges.\n\n"
    );

    out.push_str("## Default Badges (No Decorations)\n\n");
    push_inline(&mut out, catalog.default_configurations());

    out.push_str("\n\n## Decorated Badges (With Relevant Decorations)\n\n");
    push_inline(&mut out, catalog.decorated_configurations());
    out.push('\n');

    out
}

fn push_inline<'a>(out: &mut String, configs: impl Iterator<Item = &'a BadgeConfiguration>) {
    let images: Vec<String> = configs.map(badge_image).collect();
    out.push_str(&images.join(" "));
}

fn badge_image(config: &BadgeConfiguration) -> String {
    markdown_image(&config.id, &config.badge_url)
}

fn join_decorations(decorations: &[Decoration]) -> String {
    let tokens: Vec<&str> = decorations.iter().map(|decoration| decoration.as_str()).collect();
    tokens.join(", ")
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
