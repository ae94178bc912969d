use crate::format::SectionKind;
use crate::model::Node;

use super::{section, SectionContext};

pub(super) fn render(ctx: &SectionContext) -> Option<Node> {
    let overview = &ctx.resume.overview;
    if overview.trim().is_empty() {
        return None;
    }
    let body = ctx.rich_nodes(overview);
    if body.is_empty() {
        return None;
    }
    Some(section(SectionKind::Summary, ctx, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::Resume;
    use crate::sections::test_support::Fixture;

    #[test]
    fn test_overview_goes_through_rich_text() {
        let fixture = Fixture::new(Resume {
            overview: "<p>Ships <strong>reliable</strong> systems.</p>".to_string(),
            ..Default::default()
        });
        let node = render(&fixture.ctx()).unwrap();
        assert_eq!(node.id.as_deref(), Some("section-summary"));
        assert_eq!(
            node.text_content(),
            vec!["Summary", "Ships reliable systems."]
        );
    }

    #[test]
    fn test_markup_without_text_renders_nothing() {
        let fixture = Fixture::new(Resume {
            overview: "<p><br></p>".to_string(),
            ..Default::default()
        });
        assert!(render(&fixture.ctx()).is_none());
    }
}
