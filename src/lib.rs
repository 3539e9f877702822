//! Shields.io badge URLs for Conventional Comments.
//!
//! The crate turns a review-comment label (`praise`, `issue`, ...) and its
//! decorations (`blocking`, `security`, ...) into a static badge URL whose
//! colors come from a named palette. Badge construction is pure and never
//! fails; unknown tokens degrade to fallback colors. File-backed helpers load
//! custom palettes and produce a catalogue of ready-made badges with markdown
//! renderings and an examples document.
//!
//! ```
//! use conventional_shields::{ConventionalBadgeRequest, Decoration, Label, build_conventional_badge};
//!
//! let request = ConventionalBadgeRequest::for_label(Label::Issue)
//!     .with_decorations([Decoration::Security, Decoration::Blocking]);
//! let url = build_conventional_badge(&request);
//! assert!(url.starts_with("https://img.shields.io/badge/issue-security%2Cblocking-9b2226"));
//! ```

mod badge;
mod catalog;
mod color;
mod conventional;
mod error;
mod markdown;
mod palette;
mod shield;

pub use badge::{BADGE_BASE_URL, BadgeOptions, BadgeStyle, build_badge, encode_badge_content, normalize_color};
pub use catalog::{
    BadgeCatalog, BadgeConfiguration, CatalogMetadata, LabelEntry, load_catalog, relevant_decorations,
    write_catalog
};
pub use color::{ColorSlot, ColorTable, decoration_slot, label_slot};
pub use conventional::{Decoration, Label};
pub use error::{Error, io_error, output_io_error};
pub use markdown::{insert_at_cursor, markdown_image, render_examples, render_grid, render_recap, sample_decorations};
pub use palette::{Palette, PaletteColor, load_palette, parse_palette};
pub use shield::{
    CONVENTIONAL_DEFAULT_STYLE, ConventionalBadgeRequest, build_conventional_badge, build_conventional_badge_with,
    chore_badge, issue_badge, praise_badge, question_badge, suggestion_badge, todo_badge
};
