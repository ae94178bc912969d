//! # Document Model
//!
//! The output of composition: a tree of page/view/text boxes with resolved
//! style attributes. It is renderer-agnostic. The same tree feeds the PDF
//! engine that paginates and serializes it, and the on-screen preview.
//!
//! The shape follows the React PDF mental model: containers (View), text
//! (Text, optionally split into styled runs), images and tables. A composed
//! résumé is always a single flowing `Page`; breaking it into physical pages
//! is the layout engine's job, not ours.

use crate::style::Style;
use serde::{Deserialize, Serialize};

/// A complete document ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub children: Vec<Node>,

    #[serde(default)]
    pub metadata: Metadata,

    #[serde(default)]
    pub default_page: PageConfig,
}

/// Document metadata embedded in the PDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
}

/// Configuration for a page: size, margins, overflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub size: PageSize,

    /// Page margins in points (1/72 inch).
    #[serde(default)]
    pub margin: Edges,

    /// Whether content that overflows flows onto a new page.
    #[serde(default = "default_true")]
    pub wrap: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            margin: Edges::uniform(40.0),
            wrap: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Physical page sizes. Résumés are always laid out on A4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
}

/// Edge values (top, right, bottom, left) used for margin and padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn only_bottom(v: f64) -> Self {
        Self {
            bottom: v,
            ..Default::default()
        }
    }

    pub fn only_left(v: f64) -> Self {
        Self {
            left: v,
            ..Default::default()
        }
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub kind: NodeKind,

    #[serde(default)]
    pub style: Style,

    #[serde(default)]
    pub children: Vec<Node>,

    /// Stable key. Sections use `section-<kind>`, entries `<kind>-<entry id>`,
    /// so identity survives reordering in the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Bookmark title for this node (creates a PDF outline entry).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<String>,

    /// Optional hyperlink URL for this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// The different kinds of nodes in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    Page {
        #[serde(default)]
        config: PageConfig,
    },

    View,

    Text {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        href: Option<String>,
        /// Inline styled runs. When non-empty, `content` mirrors their
        /// concatenation.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        runs: Vec<TextRun>,
    },

    Image {
        /// Data URI, URL or file path, passed through untouched.
        src: String,
        width: Option<f64>,
        height: Option<f64>,
    },

    /// Children are TableRow nodes.
    Table {
        #[serde(default)]
        columns: Vec<ColumnDef>,
    },

    TableRow {
        #[serde(default)]
        is_header: bool,
    },

    TableCell {
        #[serde(default = "default_one")]
        col_span: u32,
        #[serde(default = "default_one")]
        row_span: u32,
    },
}

fn default_one() -> u32 {
    1
}

/// An inline styled run within a Text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub content: String,
    #[serde(default)]
    pub style: Style,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Column definition for tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub width: ColumnWidth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnWidth {
    /// Fixed width in points.
    Fixed(f64),
    /// Share the remaining width with other Auto columns.
    Auto,
}

impl Node {
    fn bare(kind: NodeKind, style: Style, children: Vec<Node>) -> Self {
        Self {
            kind,
            style,
            children,
            id: None,
            bookmark: None,
            href: None,
        }
    }

    /// Create a View node with children.
    pub fn view(style: Style, children: Vec<Node>) -> Self {
        Self::bare(NodeKind::View, style, children)
    }

    /// Create a Text node.
    pub fn text(content: &str, style: Style) -> Self {
        Self::bare(
            NodeKind::Text {
                content: content.to_string(),
                href: None,
                runs: vec![],
            },
            style,
            vec![],
        )
    }

    /// Create a Text node made of inline runs.
    pub fn runs(runs: Vec<TextRun>, style: Style) -> Self {
        let content = runs.iter().map(|r| r.content.as_str()).collect();
        Self::bare(
            NodeKind::Text {
                content,
                href: None,
                runs,
            },
            style,
            vec![],
        )
    }

    /// Create a linked Text node.
    pub fn link(content: &str, href: &str, style: Style) -> Self {
        Self::bare(
            NodeKind::Text {
                content: content.to_string(),
                href: Some(href.to_string()),
                runs: vec![],
            },
            style,
            vec![],
        )
    }

    pub fn image(src: &str, width: f64, height: f64, style: Style) -> Self {
        Self::bare(
            NodeKind::Image {
                src: src.to_string(),
                width: Some(width),
                height: Some(height),
            },
            style,
            vec![],
        )
    }

    pub fn page(config: PageConfig, style: Style, children: Vec<Node>) -> Self {
        Self::bare(NodeKind::Page { config }, style, children)
    }

    pub fn table(columns: Vec<ColumnDef>, style: Style, rows: Vec<Node>) -> Self {
        Self::bare(NodeKind::Table { columns }, style, rows)
    }

    pub fn table_row(style: Style, cells: Vec<Node>) -> Self {
        Self::bare(NodeKind::TableRow { is_header: false }, style, cells)
    }

    pub fn table_cell(style: Style, children: Vec<Node>) -> Self {
        Self::bare(
            NodeKind::TableCell {
                col_span: 1,
                row_span: 1,
            },
            style,
            children,
        )
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_bookmark(mut self, title: impl Into<String>) -> Self {
        self.bookmark = Some(title.into());
        self
    }

    /// Depth-first search for the node carrying `id`.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Every text content in this subtree, in document order.
    pub fn text_content(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut Vec<String>) {
        if let NodeKind::Text { content, .. } = &self.kind {
            out.push(content.clone());
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

impl Document {
    /// The composed page. Composition always produces exactly one.
    pub fn page(&self) -> Option<&Node> {
        self.children
            .iter()
            .find(|n| matches!(n.kind, NodeKind::Page { .. }))
    }

    /// Ids of the top-level section blocks, in render order.
    pub fn section_ids(&self) -> Vec<&str> {
        self.page()
            .map(|page| {
                page.children
                    .iter()
                    .filter_map(|n| n.id.as_deref())
                    .filter(|id| id.starts_with("section-"))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn find(&self, id: &str) -> Option<&Node> {
        self.children.iter().find_map(|c| c.find(id))
    }

    pub fn text_content(&self) -> Vec<String> {
        self.children.iter().flat_map(|c| c.text_content()).collect()
    }
}
