// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Label and decoration color tables.
//!
//! Each label and decoration is bound to a palette name plus a literal
//! fallback used when the palette has no entry under that name. Tables are
//! resolved once per palette and never mutated afterwards, so a single
//! instance can be shared freely across threads.

use std::{collections::HashMap, sync::LazyLock};

use crate::{
    conventional::{Decoration, Label},
    palette::Palette
};

static DEFAULT_TABLE: LazyLock<ColorTable> =
    LazyLock::new(|| ColorTable::from_palette(Palette::builtin()));

/// Palette binding for a single label or decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSlot {
    /// Palette entry consulted first.
    pub palette:  &'static str,
    /// Literal color used when the palette lacks the entry.
    pub fallback: &'static str
}

const fn slot(palette: &'static str, fallback: &'static str) -> ColorSlot {
    ColorSlot {
        palette,
        fallback
    }
}

/// Palette binding of a label.
pub const fn label_slot(label: Label) -> ColorSlot {
    match label {
        Label::Praise => slot("LightGreen", "brightgreen"),
        Label::Nitpick => slot("MintGreen", "blue"),
        Label::Suggestion => slot("Blue", "purple"),
        Label::Issue => slot("Yellow", "yellow"),
        Label::Todo => slot("Cream", "orange"),
        Label::Question => slot("DarkBlue", "blue"),
        Label::Thought => slot("Cyan", "lightblue"),
        Label::Chore => slot("DarkOrange", "brown"),
        Label::Note => slot("Black", "blue"),
        Label::Typo => slot("Orange", "orange"),
        Label::Polish => slot("MintGreen", "blue"),
        Label::Quibble => slot("MintGreen", "blue")
    }
}

/// Palette binding of a decoration.
pub const fn decoration_slot(decoration: Decoration) -> ColorSlot {
    match decoration {
        Decoration::NonBlocking => slot("LightGreen", "brightgreen"),
        Decoration::Blocking => slot("Red", "red"),
        Decoration::IfMinor => slot("Yellow", "yellow"),
        Decoration::Security => slot("Burgundy", "red"),
        Decoration::Test => slot("Cyan", "lightblue"),
        Decoration::Ux => slot("MintGreen", "lightgreen"),
        Decoration::Performance => slot("BurntOrange", "orange"),
        Decoration::Accessibility => slot("Blue", "blue"),
        Decoration::Documentation => slot("BlueGray", "blue"),
        Decoration::Style => slot("Black", "lightgray"),
        Decoration::Refactor => slot("DarkBlue", "blue"),
        Decoration::Bug => slot("Burgundy", "red"),
        Decoration::Feature => slot("LightGreen", "green"),
        Decoration::Breaking => slot("Burgundy", "red"),
        Decoration::Deprecated => slot("BurntOrange", "orange"),
        Decoration::Experimental => slot("Cyan", "lightblue"),
        Decoration::Wip => slot("Yellow", "yellow"),
        Decoration::Draft => slot("Black", "lightgray"),
        Decoration::Review => slot("Blue", "blue"),
        Decoration::Approved => slot("LightGreen", "green"),
        Decoration::Rejected => slot("Red", "red")
    }
}

/// Resolved colors for every label and decoration.
///
/// # Examples
///
/// ```
/// use conventional_shields::{ColorTable, Label, Palette};
///
/// let table = ColorTable::from_palette(Palette::builtin());
/// assert_eq!(table.label(Label::Issue), "#f9c74f");
/// assert_eq!(table.decoration_color("security"), Some("#9b2226"));
/// assert_eq!(table.decoration_color("shiny"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    labels:      HashMap<Label, String>,
    decorations: HashMap<Decoration, String>
}

impl ColorTable {
    /// Resolves every slot against `palette`.
    pub fn from_palette(palette: &Palette) -> Self {
        let resolve = |slot: ColorSlot| {
            palette
                .hex(slot.palette)
                .unwrap_or(slot.fallback)
                .to_owned()
        };

        let labels = Label::ALL
            .into_iter()
            .map(|label| (label, resolve(label_slot(label))))
            .collect();
        let decorations = Decoration::ALL
            .into_iter()
            .map(|decoration| (decoration, resolve(decoration_slot(decoration))))
            .collect();

        Self {
            labels,
            decorations
        }
    }

    /// Shared table resolved against the built-in palette.
    pub fn builtin() -> &'static Self {
        &DEFAULT_TABLE
    }

    /// Color of a known label.
    pub fn label(&self, label: Label) -> &str {
        self.labels
            .get(&label)
            .map_or(label_slot(label).fallback, String::as_str)
    }

    /// Color of a known decoration.
    pub fn decoration(&self, decoration: Decoration) -> &str {
        self.decorations
            .get(&decoration)
            .map_or(decoration_slot(decoration).fallback, String::as_str)
    }

    /// Color of a label token, or `None` when the token is unknown.
    pub fn label_color(&self, token: &str) -> Option<&str> {
        Label::from_token(token).map(|label| self.label(label))
    }

    /// Color of a decoration token, or `None` when the token is unknown.
    pub fn decoration_color(&self, token: &str) -> Option<&str> {
        Decoration::from_token(token).map(|decoration| self.decoration(decoration))
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::palette::PaletteColor;

    fn palette_of(entries: &[(&str, &str)]) -> Palette {
        Palette {
            colors: entries
                .iter()
                .map(|(name, hex)| PaletteColor {
                    name: (*name).to_owned(),
                    hex:  (*hex).to_owned()
                })
                .collect()
        }
    }

    #[test]
    fn builtin_table_resolves_label_colors() {
        let table = ColorTable::builtin();
        assert_eq!(table.label(Label::Praise), "#90be6d");
        assert_eq!(table.label(Label::Nitpick), "#94d2bd");
        assert_eq!(table.label(Label::Suggestion), "#277da1");
        assert_eq!(table.label(Label::Todo), "#e9d8a6");
        assert_eq!(table.label(Label::Question), "#005f73");
        assert_eq!(table.label(Label::Thought), "#0a9396");
        assert_eq!(table.label(Label::Chore), "#ca6702");
        assert_eq!(table.label(Label::Note), "#001219");
        assert_eq!(table.label(Label::Typo), "#f8961e");
    }

    #[test]
    fn builtin_table_resolves_decoration_colors() {
        let table = ColorTable::builtin();
        assert_eq!(table.decoration(Decoration::Blocking), "#f94144");
        assert_eq!(table.decoration(Decoration::Performance), "#bb3e03");
        assert_eq!(table.decoration(Decoration::Documentation), "#577590");
        assert_eq!(table.decoration(Decoration::Style), "#001219");
    }

    #[test]
    fn empty_palette_uses_literal_fallbacks() {
        let table = ColorTable::from_palette(&palette_of(&[]));
        assert_eq!(table.label(Label::Praise), "brightgreen");
        assert_eq!(table.label(Label::Suggestion), "purple");
        assert_eq!(table.label(Label::Chore), "brown");
        assert_eq!(table.decoration(Decoration::Ux), "lightgreen");
        assert_eq!(table.decoration(Decoration::Draft), "lightgray");
        assert_eq!(table.decoration(Decoration::Feature), "green");
    }

    #[test]
    fn partial_palette_mixes_hex_and_fallbacks() {
        let table = ColorTable::from_palette(&palette_of(&[("Yellow", "#ffff00")]));
        assert_eq!(table.label(Label::Issue), "#ffff00");
        assert_eq!(table.decoration(Decoration::Wip), "#ffff00");
        assert_eq!(table.label(Label::Note), "blue");
    }

    #[test]
    fn unknown_label_token_has_no_color() {
        let table = ColorTable::builtin();
        assert_eq!(table.label_color("rant"), None);
        assert_eq!(table.label_color("issue"), Some("#f9c74f"));
    }

    #[test]
    fn unknown_decoration_token_has_no_color() {
        assert_eq!(ColorTable::builtin().decoration_color("urgent"), None);
    }

    #[test]
    fn default_matches_builtin() {
        assert_eq!(&ColorTable::default(), ColorTable::builtin());
    }

    proptest! {
        #[test]
        fn every_label_resolves_to_palette_or_fallback(index in 0usize..12) {
            let label = Label::ALL[index];
            let slot = label_slot(label);
            let palette = Palette::builtin();
            let expected = palette.hex(slot.palette).unwrap_or(slot.fallback);
            prop_assert_eq!(ColorTable::builtin().label(label), expected);
        }
    }
}
