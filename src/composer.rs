//! # Document Composer
//!
//! Assembles the section renderers into one flowing page:
//!
//! 1. the personal header, always first and never hidden, followed by the
//!    theme's header separator
//! 2. every other visible kind from [`Format::effective_order`], through the
//!    registry, in that order
//!
//! Kinds that render nothing are skipped. The result is a single `Page`; the
//! PDF engine downstream decides where physical pages break.

use std::sync::Arc;

use log::debug;

use crate::date::DateFormatter;
use crate::format::{Format, SectionKind};
use crate::model::{Document, Metadata, Node, PageConfig, PageSize};
use crate::resume::Resume;
use crate::richtext::{HtmlAdapter, RichTextAdapter};
use crate::sections::{self, SectionContext};
use crate::theme::{resolve, StyleSheet, ThemeKind};

pub const CREATOR: &str = "cvforme";

/// Composes résumés with one theme and one rich-text adapter.
#[derive(Clone)]
pub struct Composer {
    theme: ThemeKind,
    rich_text: Arc<dyn RichTextAdapter>,
}

impl Default for Composer {
    fn default() -> Self {
        Self::classic()
    }
}

impl Composer {
    pub fn new(theme: ThemeKind) -> Self {
        Self {
            theme,
            rich_text: Arc::new(HtmlAdapter),
        }
    }

    pub fn classic() -> Self {
        Self::new(ThemeKind::Classic)
    }

    pub fn modern() -> Self {
        Self::new(ThemeKind::Modern)
    }

    /// Swap the HTML adapter used for overview, descriptions and details.
    pub fn with_rich_text(mut self, adapter: Arc<dyn RichTextAdapter>) -> Self {
        self.rich_text = adapter;
        self
    }

    pub fn theme(&self) -> ThemeKind {
        self.theme
    }

    /// Resolve the style sheet for `format` and compose.
    pub fn compose(&self, resume: &Resume, format: &Format) -> Document {
        let styles = resolve(format, self.theme);
        self.compose_with(resume, format, &styles)
    }

    /// Compose with an already resolved sheet, e.g. one from a
    /// [`ThemeCache`](crate::theme::ThemeCache).
    pub fn compose_with(&self, resume: &Resume, format: &Format, styles: &StyleSheet) -> Document {
        let dates = DateFormatter::new(&format.date_format);
        let ctx = SectionContext {
            resume,
            styles,
            dates: &dates,
            format,
            rich_text: self.rich_text.as_ref(),
        };

        let mut blocks = Vec::new();
        if let Some(personal) = sections::render(SectionKind::Personal, &ctx) {
            blocks.push(personal);
            blocks.push(Node::view(styles.header_separator.clone(), vec![]));
        }

        for kind in format.effective_order() {
            if kind == SectionKind::Personal {
                continue;
            }
            if format.is_hidden(kind) {
                debug!("Section {} is hidden", kind.label());
                continue;
            }
            match sections::render(kind, &ctx) {
                Some(block) => blocks.push(block),
                None => debug!("Section {} has no content, skipping", kind.label()),
            }
        }

        let config = PageConfig {
            size: PageSize::A4,
            margin: styles.page_margin,
            wrap: true,
        };
        debug!(
            "Composed {} blocks with the {:?} theme",
            blocks.len(),
            self.theme
        );
        Document {
            children: vec![Node::page(config.clone(), styles.page.clone(), blocks)],
            metadata: metadata(resume),
            default_page: config,
        }
    }
}

fn metadata(resume: &Resume) -> Metadata {
    let non_blank = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };
    Metadata {
        title: non_blank(&resume.title),
        author: non_blank(&resume.title),
        subject: non_blank(&resume.subtitle),
        creator: Some(CREATOR.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{Information, Skill};
    use crate::style::Style;
    use crate::theme::ThemeCache;

    fn resume() -> Resume {
        Resume {
            title: "Jane Doe".to_string(),
            subtitle: "Platform Engineer".to_string(),
            overview: "<p>Builds things.</p>".to_string(),
            information: vec![Information {
                id: "i1".to_string(),
                label: "Email".to_string(),
                value: "jane@example.com".to_string(),
                ..Default::default()
            }],
            skills: vec![Skill {
                id: "s1".to_string(),
                label: "Languages".to_string(),
                value: "Rust, Go".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_single_page_with_margins() {
        let format = Format {
            margin: 28.0,
            ..Default::default()
        };
        let doc = Composer::classic().compose(&resume(), &format);
        assert_eq!(doc.children.len(), 1);
        assert_eq!(doc.default_page.margin.left, 28.0);
        assert_eq!(doc.default_page.size, PageSize::A4);
    }

    #[test]
    fn test_personal_then_separator_then_sections() {
        let doc = Composer::classic().compose(&resume(), &Format::default());
        let page = doc.page().unwrap();
        assert_eq!(page.children[0].id.as_deref(), Some("section-personal"));
        assert_eq!(page.children[1].id, None);
        assert_eq!(
            doc.section_ids(),
            vec!["section-personal", "section-summary", "section-skills"]
        );
    }

    #[test]
    fn test_no_separator_without_header() {
        let resume = Resume {
            skills: resume().skills,
            ..Default::default()
        };
        let doc = Composer::classic().compose(&resume, &Format::default());
        let page = doc.page().unwrap();
        assert_eq!(page.children.len(), 1);
        assert_eq!(page.children[0].id.as_deref(), Some("section-skills"));
    }

    #[test]
    fn test_metadata() {
        let doc = Composer::modern().compose(&resume(), &Format::default());
        assert_eq!(doc.metadata.title.as_deref(), Some("Jane Doe"));
        assert_eq!(doc.metadata.subject.as_deref(), Some("Platform Engineer"));
        assert_eq!(doc.metadata.creator.as_deref(), Some(CREATOR));
        let empty = Composer::modern().compose(&Resume::default(), &Format::default());
        assert_eq!(empty.metadata.title, None);
    }

    #[test]
    fn test_compose_with_cached_sheet_matches_compose() {
        let composer = Composer::modern();
        let format = Format::default();
        let mut cache = ThemeCache::new();
        let sheet = cache.get(&format, composer.theme());
        assert_eq!(
            composer.compose_with(&resume(), &format, &sheet),
            composer.compose(&resume(), &format)
        );
    }

    struct Literal;

    impl RichTextAdapter for Literal {
        fn to_nodes(&self, html: &str, _base: &Style, _accent: crate::style::Color) -> Vec<Node> {
            vec![Node::text(html, Style::default())]
        }
    }

    #[test]
    fn test_custom_rich_text_adapter() {
        let doc = Composer::classic()
            .with_rich_text(Arc::new(Literal))
            .compose(&resume(), &Format::default());
        let summary = doc.find("section-summary").unwrap();
        assert!(summary
            .text_content()
            .contains(&"<p>Builds things.</p>".to_string()));
    }
}
