// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Conventional Comments badges.
//!
//! A conventional badge renders the label on the left and the comma-joined
//! decorations on the right. With automatic coloring the left side takes the
//! label color and the right side takes the color of the first decoration,
//! falling back to the label color. Unknown tokens never fail: an unknown
//! label leaves its color unset and an unknown decoration is skipped when
//! picking the message color.

use serde::{Deserialize, Serialize};

use crate::{
    badge::{BadgeOptions, BadgeStyle, build_badge},
    color::ColorTable,
    conventional::{Decoration, Label}
};

/// Style applied when the request leaves it unset.
pub const CONVENTIONAL_DEFAULT_STYLE: BadgeStyle = BadgeStyle::ForTheBadge;

/// Input of [`build_conventional_badge`].
///
/// # Examples
///
/// ```
/// use conventional_shields::{ConventionalBadgeRequest, Decoration, Label};
///
/// let request = ConventionalBadgeRequest::for_label(Label::Issue)
///     .with_decorations([Decoration::Security, Decoration::Blocking]);
/// assert_eq!(request.label, "issue");
/// assert_eq!(request.decorations, ["security", "blocking"]);
/// assert!(request.auto_color);
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConventionalBadgeRequest {
    /// Label token, normally one of [`Label::ALL`].
    pub label:         String,
    /// Decoration tokens in display order. The first one drives the message
    /// color.
    pub decorations:   Vec<String>,
    /// Derive colors from the label and decorations, discarding `color` and
    /// `label_color`.
    pub auto_color:    bool,
    pub color:         Option<String>,
    pub label_color:   Option<String>,
    /// Visual preset; unset means [`CONVENTIONAL_DEFAULT_STYLE`].
    pub style:         Option<BadgeStyle>,
    pub logo:          Option<String>,
    pub logo_color:    Option<String>,
    pub logo_size:     Option<String>,
    pub cache_seconds: Option<u64>,
    pub links:         Vec<String>
}

impl Default for ConventionalBadgeRequest {
    fn default() -> Self {
        Self {
            label:         String::new(),
            decorations:   Vec::new(),
            auto_color:    true,
            color:         None,
            label_color:   None,
            style:         None,
            logo:          None,
            logo_color:    None,
            logo_size:     None,
            cache_seconds: None,
            links:         Vec::new()
        }
    }
}

impl ConventionalBadgeRequest {
    /// Creates a request for an arbitrary label token.
    pub fn new<L>(label: L) -> Self
    where
        L: Into<String>
    {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Creates a request for a known label.
    pub fn for_label(label: Label) -> Self {
        Self::new(label.as_str())
    }

    /// Replaces the decorations with the provided known decorations.
    pub fn with_decorations<I>(mut self, decorations: I) -> Self
    where
        I: IntoIterator<Item = Decoration>
    {
        self.decorations = decorations
            .into_iter()
            .map(|decoration| decoration.as_str().to_owned())
            .collect();
        self
    }

    /// Joined decorations used as the badge message.
    pub fn message(&self) -> String {
        self.decorations.join(",")
    }

    /// Resolves `(label_color, color)` for this request.
    ///
    /// Automatic coloring ignores any explicit colors. Manual coloring returns
    /// the explicit values untouched, including `None`. An unknown label has
    /// no color, so its message color is unset as well unless the first
    /// decoration is known.
    pub fn resolve_colors(&self, table: &ColorTable) -> (Option<String>, Option<String>) {
        if !self.auto_color {
            return (self.label_color.clone(), self.color.clone());
        }

        let label_color = table.label_color(&self.label);
        let message_color = self
            .decorations
            .first()
            .and_then(|decoration| table.decoration_color(decoration))
            .or(label_color);

        (label_color.map(str::to_owned), message_color.map(str::to_owned))
    }
}

/// Builds a conventional badge URL using the built-in palette.
///
/// # Example
///
/// ```
/// use conventional_shields::{ConventionalBadgeRequest, build_conventional_badge};
///
/// let url = build_conventional_badge(&ConventionalBadgeRequest::new("praise"));
/// assert_eq!(
///     url,
///     "https://img.shields.io/badge/praise-90be6d?style=for-the-badge&labelColor=90be6d"
/// );
/// ```
pub fn build_conventional_badge(request: &ConventionalBadgeRequest) -> String {
    build_conventional_badge_with(ColorTable::builtin(), request)
}

/// Builds a conventional badge URL against a specific color table.
pub fn build_conventional_badge_with(table: &ColorTable, request: &ConventionalBadgeRequest) -> String {
    let (label_color, color) = request.resolve_colors(table);

    build_badge(&BadgeOptions {
        label: Some(request.label.clone()),
        message: Some(request.message()),
        color,
        style: Some(request.style.unwrap_or(CONVENTIONAL_DEFAULT_STYLE)),
        logo: request.logo.clone(),
        logo_color: request.logo_color.clone(),
        logo_size: request.logo_size.clone(),
        label_color,
        cache_seconds: request.cache_seconds,
        links: request.links.clone()
    })
}

fn labelled(label: Label, decorations: &[Decoration]) -> String {
    build_conventional_badge(
        &ConventionalBadgeRequest::for_label(label).with_decorations(decorations.iter().copied())
    )
}

/// `praise` badge with the given decorations.
pub fn praise_badge(decorations: &[Decoration]) -> String {
    labelled(Label::Praise, decorations)
}

/// `suggestion` badge with the given decorations.
pub fn suggestion_badge(decorations: &[Decoration]) -> String {
    labelled(Label::Suggestion, decorations)
}

/// `issue` badge with the given decorations.
pub fn issue_badge(decorations: &[Decoration]) -> String {
    labelled(Label::Issue, decorations)
}

/// `question` badge with the given decorations.
pub fn question_badge(decorations: &[Decoration]) -> String {
    labelled(Label::Question, decorations)
}

/// `todo` badge with the given decorations.
pub fn todo_badge(decorations: &[Decoration]) -> String {
    labelled(Label::Todo, decorations)
}

/// `chore` badge with the given decorations.
pub fn chore_badge(decorations: &[Decoration]) -> String {
    labelled(Label::Chore, decorations)
}
