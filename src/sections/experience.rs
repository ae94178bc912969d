use crate::format::SectionKind;
use crate::model::Node;
use crate::resume::WorkExperience;
use crate::style::Style;

use super::{entry_header, entry_id, section, SectionContext};

const LONG_DESCRIPTION: usize = 600;

pub(super) fn render(ctx: &SectionContext) -> Option<Node> {
    let experiences = &ctx.resume.work_experiences;
    if experiences.is_empty() {
        return None;
    }
    let body = experiences.iter().map(|e| entry(ctx, e)).collect();
    Some(section(SectionKind::Experience, ctx, body))
}

fn entry(ctx: &SectionContext, experience: &WorkExperience) -> Node {
    let styles = ctx.styles;
    let dates = ctx
        .dates
        .range(experience.start_date.as_ref(), experience.end_date.as_ref());
    let mut children = vec![entry_header(ctx, &experience.company, &dates)];
    if !experience.position.trim().is_empty() {
        children.push(Node::text(
            experience.position.trim(),
            styles.entry_subtitle.clone(),
        ));
    }
    if !experience.description.trim().is_empty() {
        children.extend(ctx.rich_nodes(&experience.description));
    }
    // Entries stay on one page unless the description alone could fill one.
    let style = if experience.description.len() > LONG_DESCRIPTION {
        styles.entry.merge(&Style {
            wrap: Some(true),
            ..Default::default()
        })
    } else {
        styles.entry.clone()
    };
    Node::view(style, children).with_id(entry_id(SectionKind::Experience, &experience.id))
}
