// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Shields.io static badge URL construction.
//!
//! URLs follow the static badge grammar
//! `https://img.shields.io/badge/<label>-<message>-<color>?<query>`. Any of
//! the three path segments is omitted when its source is empty, textual
//! segments are escaped with the Shields dash/underscore rules, and hex colors
//! lose their leading `#`.

use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::error::Error;

/// Base URL of the static badge endpoint.
pub const BADGE_BASE_URL: &str = "https://img.shields.io/badge/";

/// Visual presets supported by Shields.io.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeStyle {
    /// Default flat preset. Never emitted as a query parameter.
    #[default]
    Flat,
    /// Flat preset with square corners.
    FlatSquare,
    /// Glossy preset.
    Plastic,
    /// Large uppercase preset.
    ForTheBadge,
    /// GitHub social preset.
    Social
}

impl BadgeStyle {
    /// Every style in declaration order.
    pub const ALL: [BadgeStyle; 5] = [
        BadgeStyle::Flat,
        BadgeStyle::FlatSquare,
        BadgeStyle::Plastic,
        BadgeStyle::ForTheBadge,
        BadgeStyle::Social
    ];

    /// Value used in the `style` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            BadgeStyle::Flat => "flat",
            BadgeStyle::FlatSquare => "flat-square",
            BadgeStyle::Plastic => "plastic",
            BadgeStyle::ForTheBadge => "for-the-badge",
            BadgeStyle::Social => "social"
        }
    }
}

impl fmt::Display for BadgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeStyle {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == value)
            .ok_or_else(|| Error::validation(format!("unknown badge style '{value}'")))
    }
}

/// Options accepted by [`build_badge`].
///
/// Every field is optional. Empty strings behave exactly like `None`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct BadgeOptions {
    /// Left-hand text.
    pub label:         Option<String>,
    /// Right-hand text.
    pub message:       Option<String>,
    /// Right-hand background color, emitted as the last path segment.
    pub color:         Option<String>,
    /// Visual preset; `None` and [`BadgeStyle::Flat`] are equivalent.
    pub style:         Option<BadgeStyle>,
    pub logo:          Option<String>,
    pub logo_color:    Option<String>,
    pub logo_size:     Option<String>,
    /// Left-hand background color.
    pub label_color:   Option<String>,
    /// Cache lifetime hint; zero is treated as absent.
    pub cache_seconds: Option<u64>,
    /// Click targets, emitted as repeated `link` parameters in order.
    pub links:         Vec<String>
}

/// Builds a static badge URL.
///
/// The path is assembled from the label, message and color in that order.
/// Query parameters follow a fixed order: `style`, `logo`, `logoColor`,
/// `logoSize`, `labelColor`, `cacheSeconds`, then one `link` per entry.
/// The message color only appears in the path.
///
/// # Example
///
/// ```
/// use conventional_shields::{BadgeOptions, BadgeStyle, build_badge};
///
/// let url = build_badge(&BadgeOptions {
///     label: Some("build".to_owned()),
///     message: Some("passing".to_owned()),
///     color: Some("#4c1".to_owned()),
///     style: Some(BadgeStyle::Plastic),
///     ..BadgeOptions::default()
/// });
/// assert_eq!(url, "https://img.shields.io/badge/build-passing-4c1?style=plastic");
/// ```
pub fn build_badge(options: &BadgeOptions) -> String {
    let mut segments: Vec<Cow<'_, str>> = Vec::with_capacity(3);

    if let Some(label) = present(&options.label) {
        segments.push(encode_badge_content(label));
    }
    if let Some(message) = present(&options.message) {
        segments.push(encode_badge_content(message));
    }
    if let Some(color) = present(&options.color) {
        segments.push(Cow::Borrowed(normalize_color(color)));
    }

    let mut url = String::with_capacity(BADGE_BASE_URL.len() + 64);
    url.push_str(BADGE_BASE_URL);
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            url.push('-');
        }
        url.extend(form_urlencoded::byte_serialize(segment.as_bytes()));
    }

    let query = build_query(options);
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }

    url
}

fn build_query(options: &BadgeOptions) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut appended = false;
    let mut append = |key: &str, value: &str| {
        query.append_pair(key, value);
        appended = true;
    };

    if let Some(style) = options.style.filter(|style| *style != BadgeStyle::Flat) {
        append("style", style.as_str());
    }
    if let Some(logo) = present(&options.logo) {
        append("logo", logo);
    }
    if let Some(logo_color) = present(&options.logo_color) {
        append("logoColor", logo_color);
    }
    if let Some(logo_size) = present(&options.logo_size) {
        append("logoSize", logo_size);
    }
    if let Some(label_color) = present(&options.label_color) {
        append("labelColor", normalize_color(label_color));
    }
    if let Some(seconds) = options.cache_seconds.filter(|seconds| *seconds > 0) {
        append("cacheSeconds", &seconds.to_string());
    }
    for link in &options.links {
        append("link", link);
    }

    if appended { query.finish() } else { String::new() }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Escapes text for a badge path segment.
///
/// `-` becomes `--`, `_` becomes `__` and whitespace becomes `_`. Whitespace
/// is the ECMAScript `\s` class: Unicode `White_Space` without U+0085, plus
/// U+FEFF. The result equals applying the three substitutions one after another in that order,
/// so underscores produced from whitespace are never doubled.
///
/// ```
/// use conventional_shields::encode_badge_content;
///
/// assert_eq!(encode_badge_content("a-b_c d"), "a--b__c_d");
/// ```
pub fn encode_badge_content(content: &str) -> Cow<'_, str> {
    if !content
        .chars()
        .any(|character| character == '-' || character == '_' || is_badge_whitespace(character))
    {
        return Cow::Borrowed(content);
    }

    let mut escaped = String::with_capacity(content.len() + 4);
    for character in content.chars() {
        match character {
            '-' => escaped.push_str("--"),
            '_' => escaped.push_str("__"),
            other if is_badge_whitespace(other) => escaped.push('_'),
            other => escaped.push(other)
        }
    }
    Cow::Owned(escaped)
}

fn is_badge_whitespace(character: char) -> bool {
    match character {
        '\u{feff}' => true,
        '\u{0085}' => false,
        other => other.is_whitespace()
    }
}

/// Strips a single leading `#` from a color value.
pub fn normalize_color(color: &str) -> &str {
    color.strip_prefix('#').unwrap_or(color)
}
