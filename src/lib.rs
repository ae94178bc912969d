//! # cvforme
//!
//! A résumé formatting engine.
//!
//! A résumé is structured data: a header, free-form contact details and a
//! handful of entry collections. A format is the user's visual configuration
//! for it. cvforme turns the pair into a page-native document tree that a
//! PDF engine paginates and serializes, or that a preview surface draws
//! directly.
//!
//! Composition is a pure, total function. Nothing a user can put in a
//! résumé or a format makes it fail: unknown section kinds are skipped,
//! invalid settings fall back to their defaults, unreadable dates print
//! blank and empty collections render nothing.
//!
//! ## Architecture
//!
//! ```text
//! Resume + Format (JSON/API)
//!       ↓
//!   [theme]       Format → named StyleSheet (classic | modern)
//!       ↓
//!   [sections]    one renderer per section kind, dates via [date],
//!       ↓         editor HTML via [richtext]
//!   [composer]    personal header, then visible sections in order
//!       ↓
//!   [model]       Document tree (one flowing page)
//!       ↓
//!   [export]      JSON for the PDF engine, download file name
//! ```

pub mod composer;
pub mod date;
pub mod error;
pub mod export;
pub mod format;
mod lenient;
pub mod model;
pub mod resume;
pub mod richtext;
pub mod sections;
pub mod style;
pub mod theme;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use composer::Composer;
pub use error::CvError;
pub use export::{compose_json, file_name, file_name_today};
pub use format::{Format, SectionKind};
pub use model::Document;
pub use resume::Resume;
pub use theme::{ThemeCache, ThemeKind};

/// Compose a résumé with the classic theme and the default HTML adapter.
///
/// This is the primary entry point. For the modern theme, a custom
/// rich-text adapter or cached style sheets, use [`Composer`].
pub fn compose(resume: &Resume, format: &Format) -> Document {
    Composer::classic().compose(resume, format)
}
