// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Badge catalogue generation.
//!
//! The catalogue lists every label with its default color and a relevant
//! decoration set, the active palette, and two ready-made badge
//! configurations per label (undecorated and decorated). It is written as
//! pretty JSON so it can be checked in and consumed by the markdown
//! renderers.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    color::ColorTable,
    conventional::{Decoration, Label},
    error::{self, Error},
    palette::{Palette, PaletteColor},
    shield::{ConventionalBadgeRequest, build_conventional_badge_with}
};

/// Complete catalogue document.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BadgeCatalog {
    pub metadata:       CatalogMetadata,
    /// Labels in canonical order.
    pub labels:         Vec<LabelEntry>,
    pub color_palette:  Vec<PaletteColor>,
    /// Two configurations per label: `<label>-default` then
    /// `<label>-decorated`.
    pub configurations: Vec<BadgeConfiguration>
}

/// Summary counters of a catalogue.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    pub total_labels:         usize,
    pub total_configurations: usize,
    /// Version of the generator that produced the document.
    pub version:              String
}

/// Per-label overview entry.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelEntry {
    pub label:                Label,
    pub description:          String,
    /// Resolved label color as found in the palette (with `#`).
    pub default_color:        String,
    pub relevant_decorations: Vec<Decoration>
}

/// Ready-made badge for a label and decoration set.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BadgeConfiguration {
    pub id:          String,
    pub label:       Label,
    pub decorations: Vec<Decoration>,
    pub badge_url:   String,
    pub description: String,
    /// Sample comment text matching the configuration.
    pub example:     String
}

impl BadgeConfiguration {
    /// Returns `true` for configurations without decorations.
    pub fn is_default(&self) -> bool {
        self.decorations.is_empty()
    }
}

impl BadgeCatalog {
    /// Generates the catalogue for `palette`.
    ///
    /// # Examples
    ///
    /// ```
    /// use conventional_shields::{BadgeCatalog, Palette};
    ///
    /// let catalog = BadgeCatalog::generate(Palette::builtin());
    /// assert_eq!(catalog.metadata.total_labels, 12);
    /// assert_eq!(catalog.configurations.len(), 24);
    /// assert_eq!(catalog.configurations[0].id, "praise-default");
    /// ```
    pub fn generate(palette: &Palette) -> Self {
        let table = ColorTable::from_palette(palette);

        let labels: Vec<LabelEntry> = Label::ALL
            .into_iter()
            .map(|label| LabelEntry {
                label,
                description: label.description().to_owned(),
                default_color: table.label(label).to_owned(),
                relevant_decorations: relevant_decorations(label).to_vec()
            })
            .collect();

        let mut configurations = Vec::with_capacity(Label::ALL.len() * 2);
        for label in Label::ALL {
            configurations.push(configuration(&table, label, &[]));
            configurations.push(configuration(&table, label, relevant_decorations(label)));
        }

        debug!("Generated {} badge configurations", configurations.len());

        Self {
            metadata: CatalogMetadata {
                total_labels:         labels.len(),
                total_configurations: configurations.len(),
                version:              env!("CARGO_PKG_VERSION").to_owned()
            },
            labels,
            color_palette: palette.colors.clone(),
            configurations
        }
    }

    /// Configurations without decorations.
    pub fn default_configurations(&self) -> impl Iterator<Item = &BadgeConfiguration> {
        self.configurations.iter().filter(|config| config.is_default())
    }

    /// Configurations with at least one decoration.
    pub fn decorated_configurations(&self) -> impl Iterator<Item = &BadgeConfiguration> {
        self.configurations.iter().filter(|config| !config.is_default())
    }
}

fn configuration(table: &ColorTable, label: Label, decorations: &[Decoration]) -> BadgeConfiguration {
    let request =
        ConventionalBadgeRequest::for_label(label).with_decorations(decorations.iter().copied());
    let joined = request.decorations.join(", ");

    let (id, description) = if decorations.is_empty() {
        (
            format!("{label}-default"),
            format!("{label} badge with no decorations")
        )
    } else {
        (
            format!("{label}-decorated"),
            format!("{label} badge with {joined} decoration")
        )
    };

    BadgeConfiguration {
        id,
        label,
        decorations: decorations.to_vec(),
        badge_url: build_conventional_badge_with(table, &request),
        description,
        example: example_text(label, decorations)
    }
}

/// Decorations showcased for each label.
pub fn relevant_decorations(label: Label) -> &'static [Decoration] {
    match label {
        Label::Praise => &[Decoration::Feature],
        Label::Nitpick => &[Decoration::Style, Decoration::NonBlocking],
        Label::Suggestion => &[Decoration::Performance],
        Label::Issue => &[Decoration::Security, Decoration::Blocking],
        Label::Todo => &[Decoration::Test],
        Label::Question => &[Decoration::Ux],
        Label::Thought => &[Decoration::Refactor],
        Label::Chore => &[Decoration::Documentation],
        Label::Note => &[Decoration::Security],
        Label::Typo => &[Decoration::Documentation],
        Label::Polish => &[Decoration::Ux],
        Label::Quibble => &[Decoration::Style]
    }
}

fn example_text(label: Label, decorations: &[Decoration]) -> String {
    let canned = if decorations.is_empty() {
        Some(match label {
            Label::Praise => "Great work!",
            Label::Nitpick => "Minor preference",
            Label::Suggestion => "Consider this improvement",
            Label::Issue => "Issue found",
            Label::Todo => "TODO item",
            Label::Question => "Question about this",
            Label::Thought => "Thought about this",
            Label::Chore => "Chore task",
            Label::Note => "Note about this",
            Label::Typo => "Typo found",
            Label::Polish => "Polish needed",
            Label::Quibble => "Minor quibble"
        })
    } else if decorations == relevant_decorations(label) {
        Some(match label {
            Label::Praise => "Great feature implementation!",
            Label::Nitpick => "Minor style preference, not blocking",
            Label::Suggestion => "Consider performance optimization",
            Label::Issue => "Critical security issue that blocks acceptance",
            Label::Todo => "Add tests for this feature",
            Label::Question => "UX design question",
            Label::Thought => "Refactoring idea",
            Label::Chore => "Update documentation",
            Label::Note => "Security note",
            Label::Typo => "Fix documentation typo",
            Label::Polish => "UX polish needed",
            Label::Quibble => "Style quibble"
        })
    } else {
        None
    };

    canned.map_or_else(
        || {
            let joined: Vec<&str> = decorations.iter().map(|decoration| decoration.as_str()).collect();
            format!("{label} with {}", joined.join(","))
        },
        str::to_owned
    )
}

/// Writes `catalog` as pretty JSON, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`Error::OutputIo`] when the directory or file cannot be written
/// and [`Error::Serialize`] if encoding fails.
pub fn write_catalog(catalog: &BadgeCatalog, path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| error::output_io_error(parent, source))?;
    }

    let file = File::create(path).map_err(|source| error::output_io_error(path, source))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, catalog)?;
    writer
        .write_all(b"\n")
        .map_err(|source| error::output_io_error(path, source))?;
    writer
        .flush()
        .map_err(|source| error::output_io_error(path, source))?;

    info!(
        "Wrote {} badge configurations to {}",
        catalog.configurations.len(),
        path.display()
    );
    Ok(())
}

/// Reads a catalogue previously produced by [`write_catalog`].
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, [`Error::Serialize`]
/// when the JSON cannot be decoded into a catalogue, and
/// [`Error::Validation`] when the metadata counters disagree with the
/// document contents.
pub fn load_catalog(path: &Path) -> Result<BadgeCatalog, Error> {
    debug!("Reading catalogue from {}", path.display());
    let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
    let catalog: BadgeCatalog = serde_json::from_str(&contents)?;

    if catalog.metadata.total_labels != catalog.labels.len() {
        return Err(Error::validation(format!(
            "catalogue declares {} labels but lists {}",
            catalog.metadata.total_labels,
            catalog.labels.len()
        )));
    }
    if catalog.metadata.total_configurations != catalog.configurations.len() {
        return Err(Error::validation(format!(
            "catalogue declares {} configurations but lists {}",
            catalog.metadata.total_configurations,
            catalog.configurations.len()
        )));
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use tempfile::tempdir;

    use super::*;

    fn builtin() -> BadgeCatalog {
        BadgeCatalog::generate(Palette::builtin())
    }

    #[test]
    fn catalog_contains_default_and_decorated_entry_per_label() {
        let catalog = builtin();
        assert_eq!(catalog.metadata.total_labels, 12);
        assert_eq!(catalog.metadata.total_configurations, 24);
        assert_eq!(catalog.default_configurations().count(), 12);
        assert_eq!(catalog.decorated_configurations().count(), 12);

        for (index, label) in Label::ALL.into_iter().enumerate() {
            assert_eq!(catalog.configurations[index * 2].id, format!("{label}-default"));
            assert_eq!(catalog.configurations[index * 2 + 1].id, format!("{label}-decorated"));
        }
    }

    #[test]
    fn catalog_label_entries_use_resolved_colors() {
        let catalog = builtin();
        let issue = &catalog.labels[3];
        assert_eq!(issue.label, Label::Issue);
        assert_eq!(issue.default_color, "#f9c74f");
        assert_eq!(
            issue.relevant_decorations,
            vec![Decoration::Security, Decoration::Blocking]
        );
        assert_eq!(issue.description, "Issues highlight specific problems");
    }

    #[test]
    fn decorated_configuration_carries_badge_url_and_example() {
        let catalog = builtin();
        let decorated = catalog
            .configurations
            .iter()
            .find(|config| config.id == "issue-decorated")
            .expect("issue-decorated should exist");

        assert_eq!(
            decorated.badge_url,
            "https://img.shields.io/badge/issue-security%2Cblocking-9b2226?style=for-the-badge&labelColor=f9c74f"
        );
        assert_eq!(decorated.description, "issue badge with security, blocking decoration");
        assert_eq!(decorated.example, "Critical security issue that blocks acceptance");
    }

    #[test]
    fn example_text_falls_back_for_unlisted_combinations() {
        assert_eq!(
            example_text(Label::Praise, &[Decoration::Wip, Decoration::Draft]),
            "praise with wip,draft"
        );
        assert_eq!(example_text(Label::Typo, &[]), "Typo found");
    }

    #[test]
    fn catalog_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(builtin()).expect("catalogue should serialize");
        assert_eq!(value["metadata"]["totalConfigurations"], 24);
        assert_eq!(value["colorPalette"].as_array().map(Vec::len), Some(14));
        assert_eq!(value["configurations"][1]["decorations"], Value::from(vec!["feature"]));
        assert!(value["configurations"][0]["badgeUrl"].is_string());
        assert_eq!(value["labels"][1]["relevantDecorations"][1], "non-blocking");
    }

    #[test]
    fn write_and_load_catalog_preserves_document() {
        let directory = tempdir().expect("failed to create temp dir");
        let path = directory.path().join("nested").join("badge-configurations.json");
        let catalog = builtin();

        write_catalog(&catalog, &path).expect("write should succeed");
        let loaded = load_catalog(&path).expect("load should succeed");
        assert_eq!(loaded, catalog);

        let raw = fs::read_to_string(&path).expect("should read catalogue");
        assert!(raw.ends_with("}\n"));
    }

    #[test]
    fn write_catalog_reports_blocked_directory() {
        let directory = tempdir().expect("failed to create temp dir");
        let blocker = directory.path().join("blocked");
        File::create(&blocker).expect("failed to create placeholder file");

        let error = write_catalog(&builtin(), &blocker.join("catalog.json"))
            .expect_err("expected io failure");
        match error {
            Error::OutputIo {
                path, ..
            } => assert_eq!(path, blocker),
            other => panic!("unexpected error variant: {other:?}")
        }
    }

    #[test]
    fn load_catalog_rejects_inconsistent_metadata() {
        let directory = tempdir().expect("failed to create temp dir");
        let path = directory.path().join("catalog.json");
        let mut catalog = builtin();
        catalog.configurations.truncate(3);
        write_catalog(&catalog, &path).expect("write should succeed");

        let error = load_catalog(&path).expect_err("expected validation error");
        assert!(error.to_string().contains("declares 24 configurations but lists 3"));
    }

    #[test]
    fn load_catalog_reports_malformed_json_as_decode_failure() {
        let directory = tempdir().expect("failed to create temp dir");
        let path = directory.path().join("catalog.json");
        fs::write(&path, "{\"metadata\": ").expect("failed to write catalogue");

        let error = load_catalog(&path).expect_err("expected decode error");
        assert!(matches!(error, Error::Serialize { .. }));
        assert!(error.to_string().contains("decode JSON document"));
    }
}
