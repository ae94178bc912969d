//! # Section Renderer Registry
//!
//! One pure renderer per [`SectionKind`]. The registry is a closed `match`:
//! adding a kind without a renderer doesn't compile.
//!
//! Every renderer follows the same contract:
//! - an empty collection renders nothing, never an empty heading
//! - a rendered section is a View keyed `section-<kind>` holding the title,
//!   the theme's separator, then one block per entry
//! - entries are keyed by their own id, not by position
//! - HTML fields go through the rich-text adapter unchanged

mod certifications;
mod education;
mod experience;
mod languages;
mod personal;
mod projects;
mod skills;
mod summary;
pub mod table;

use crate::date::DateFormatter;
use crate::format::{Format, SectionKind};
use crate::model::Node;
use crate::resume::Resume;
use crate::richtext::RichTextAdapter;
use crate::style::Style;
use crate::theme::StyleSheet;

/// Everything a section renderer may read.
pub struct SectionContext<'a> {
    pub resume: &'a Resume,
    pub styles: &'a StyleSheet,
    pub dates: &'a DateFormatter,
    /// Raw format, for the odd field the style sheet doesn't abstract.
    pub format: &'a Format,
    pub rich_text: &'a dyn RichTextAdapter,
}

impl SectionContext<'_> {
    /// Convert an HTML field with the body style as base.
    pub(crate) fn rich_nodes(&self, html: &str) -> Vec<Node> {
        self.rich_text
            .to_nodes(html, &self.styles.body, self.styles.accent)
    }
}

/// Render one section. `None` when there's nothing to show.
pub fn render(kind: SectionKind, ctx: &SectionContext) -> Option<Node> {
    match kind {
        SectionKind::Personal => personal::render(ctx),
        SectionKind::Summary => summary::render(ctx),
        SectionKind::Skills => skills::render(ctx),
        SectionKind::Education => education::render(ctx),
        SectionKind::Experience => experience::render(ctx),
        SectionKind::Projects => projects::render(ctx),
        SectionKind::Certifications => certifications::render(ctx),
        SectionKind::Languages => languages::render(ctx),
    }
}

/// Wrap `body` into a titled section block.
pub(crate) fn section(kind: SectionKind, ctx: &SectionContext, body: Vec<Node>) -> Node {
    let styles = ctx.styles;
    let mut children = Vec::with_capacity(body.len() + 2);
    children.push(Node::text(kind.title(), styles.section_title.clone()).with_bookmark(kind.title()));
    children.push(Node::view(styles.section_separator.clone(), vec![]));
    children.extend(body);
    Node::view(styles.section.clone(), children).with_id(kind.node_id())
}

/// Stable key for one entry of a section.
pub(crate) fn entry_id(kind: SectionKind, id: &str) -> String {
    format!("{}-{}", kind.label(), id)
}

/// Title on the left, dates on the right.
pub(crate) fn entry_header(ctx: &SectionContext, title: &str, date: &str) -> Node {
    let styles = ctx.styles;
    let mut children = vec![Node::text(
        title,
        styles.entry_title.merge(&Style {
            flex_shrink: Some(1.0),
            ..Default::default()
        }),
    )];
    if !date.is_empty() {
        children.push(Node::text(date, styles.entry_date.clone()));
    }
    Node::view(styles.entry_header.clone(), children)
}

/// One `label: value` line of a list section.
pub(crate) fn label_value_row(ctx: &SectionContext, label: &str, value: &str) -> Node {
    let styles = ctx.styles;
    let mut children = Vec::with_capacity(2);
    if !label.trim().is_empty() {
        children.push(Node::text(&format!("{}:", label.trim()), styles.strong.clone()));
    }
    children.push(Node::text(value, styles.info_value.clone()));
    Node::view(styles.info_row.clone(), children)
}

/// Lay out list rows in one column, or in two when the format asks for a
/// double column layout.
pub(crate) fn list_body(ctx: &SectionContext, rows: Vec<Node>) -> Vec<Node> {
    if !matches!(
        ctx.format.column_layout.trim().to_ascii_lowercase().as_str(),
        "double" | "two-column"
    ) {
        return rows;
    }
    let (left, right) = split_columns(rows);
    let styles = ctx.styles;
    vec![Node::view(
        styles.info_columns.clone(),
        vec![
            Node::view(styles.info_column.clone(), left),
            Node::view(styles.info_column.clone(), right),
        ],
    )]
}

/// Alternate items between two columns: even indices left, odd right.
pub fn split_columns<T>(items: impl IntoIterator<Item = T>) -> (Vec<T>, Vec<T>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (i, item) in items.into_iter().enumerate() {
        if i % 2 == 0 {
            left.push(item);
        } else {
            right.push(item);
        }
    }
    (left, right)
}

/// `a - b`, skipping blank parts.
pub(crate) fn joined(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" - ")
}
