// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Named color palette backing every automatic badge color.
//!
//! The palette is an ordered list of `{name, hex}` pairs. A copy ships inside
//! the crate and callers may load their own from JSON or YAML. Palettes are
//! validated on load and are read-only afterwards.

use std::{collections::HashSet, fs, path::Path, sync::LazyLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Error};

const BUILTIN_PALETTE: &str = include_str!("../config/palette.json");

static BUILTIN: LazyLock<Palette> = LazyLock::new(|| {
    serde_json::from_str(BUILTIN_PALETTE).unwrap_or_else(|source| {
        tracing::error!("Embedded palette is malformed, only fallback colors apply: {source}");
        Palette {
            colors: Vec::new()
        }
    })
});

/// Single named color entry.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PaletteColor {
    /// Palette name referenced by the label and decoration tables.
    pub name: String,
    /// Hex color, conventionally written as `#rrggbb`.
    pub hex:  String
}

/// Ordered palette document.
///
/// # Examples
///
/// ```
/// use conventional_shields::Palette;
///
/// let palette = Palette::builtin();
/// assert_eq!(palette.hex("Burgundy"), Some("#9b2226"));
/// assert_eq!(palette.hex("Magenta"), None);
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    /// Colors in declaration order.
    #[serde(default)]
    pub colors: Vec<PaletteColor>
}

impl Palette {
    /// Returns the palette embedded in the crate, decoded on first use.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Looks up the hex value registered under `name`.
    ///
    /// When a name appears more than once the first entry wins.
    pub fn hex(&self, name: &str) -> Option<&str> {
        self.colors
            .iter()
            .find(|color| color.name == name)
            .map(|color| color.hex.as_str())
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` when the palette holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Loads a palette from a JSON or YAML file.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, [`Error::Parse`] when
/// it cannot be decoded and [`Error::Validation`] when the palette is empty
/// or contains blank or duplicate names.
pub fn load_palette(path: &Path) -> Result<Palette, Error> {
    debug!("Reading palette from {}", path.display());
    let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
    parse_palette(&contents)
}

/// Parses a palette document.
///
/// JSON documents are accepted as well since they are valid YAML flow
/// mappings.
///
/// # Errors
///
/// Propagates [`Error::Parse`] for malformed documents and
/// [`Error::Validation`] for palettes that violate invariants.
pub fn parse_palette(contents: &str) -> Result<Palette, Error> {
    let palette: Palette = serde_yaml::from_str(contents)?;
    validate(&palette)?;
    debug!("Parsed palette with {} colors", palette.len());
    Ok(palette)
}

fn validate(palette: &Palette) -> Result<(), Error> {
    if palette.is_empty() {
        return Err(Error::validation("palette must include at least one color"));
    }

    let mut seen = HashSet::with_capacity(palette.len());
    for color in &palette.colors {
        let name = color.name.trim();
        if name.is_empty() {
            return Err(Error::validation("palette color names must not be empty"));
        }
        if !seen.insert(name) {
            return Err(Error::validation(format!("duplicate palette color '{name}'")));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn builtin_palette_lists_fourteen_colors_in_order() {
        let palette = Palette::builtin();
        assert_eq!(palette.len(), 14);
        assert_eq!(palette.colors[0].name, "Burgundy");
        assert_eq!(palette.colors[13].name, "Black");
        assert_eq!(palette.hex("LightGreen"), Some("#90be6d"));
        assert_eq!(palette.hex("DarkBlue"), Some("#005f73"));
    }

    #[test]
    fn builtin_palette_passes_validation() {
        let palette = parse_palette(BUILTIN_PALETTE).expect("builtin palette should parse");
        assert_eq!(&palette, Palette::builtin());
    }

    #[test]
    fn builtin_palette_is_decoded_once() {
        assert!(std::ptr::eq(Palette::builtin(), Palette::builtin()));
    }

    #[test]
    fn parse_palette_accepts_yaml() {
        let yaml = r##"
colors:
  - name: Red
    hex: "#ff0000"
  - name: Teal
    hex: "#008080"
"##;
        let palette = parse_palette(yaml).expect("yaml palette should parse");
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.hex("Teal"), Some("#008080"));
    }

    #[test]
    fn parse_palette_rejects_empty_palette() {
        let error = parse_palette("colors: []").expect_err("expected validation error");
        assert!(matches!(error, Error::Validation { .. }));
    }

    #[test]
    fn parse_palette_rejects_blank_names() {
        let error = parse_palette(r##"{"colors": [{"name": "  ", "hex": "#000000"}]}"##)
            .expect_err("expected validation error");
        assert!(error.to_string().contains("must not be empty"));
    }

    #[test]
    fn parse_palette_rejects_duplicate_names() {
        let json = r##"{"colors": [{"name": "Red", "hex": "#f00"}, {"name": "Red", "hex": "#e00"}]}"##;
        let error = parse_palette(json).expect_err("expected validation error");
        assert!(error.to_string().contains("duplicate palette color 'Red'"));
    }

    #[test]
    fn parse_palette_rejects_unknown_fields() {
        let json = r##"{"colors": [{"name": "Red", "hex": "#f00", "alpha": 1}]}"##;
        let error = parse_palette(json).expect_err("expected parse error");
        assert!(matches!(error, Error::Parse { .. }));
    }

    #[test]
    fn load_palette_reads_file() {
        let directory = tempdir().expect("failed to create temp dir");
        let path = directory.path().join("palette.json");
        fs::write(&path, r##"{"colors": [{"name": "Blue", "hex": "#0000ff"}]}"##)
            .expect("failed to write palette");

        let palette = load_palette(&path).expect("palette should load");
        assert_eq!(palette.hex("Blue"), Some("#0000ff"));
    }

    #[test]
    fn load_palette_reports_missing_file() {
        let directory = tempdir().expect("failed to create temp dir");
        let path = directory.path().join("absent.json");

        match load_palette(&path).expect_err("expected io error") {
            Error::Io {
                path: stored, ..
            } => assert_eq!(stored, path),
            other => panic!("unexpected error variant: {other:?}")
        }
    }
}
