use crate::format::SectionKind;
use crate::model::Node;
use crate::resume::Education;

use super::{entry_header, entry_id, joined, section, SectionContext};

pub(super) fn render(ctx: &SectionContext) -> Option<Node> {
    let educations = &ctx.resume.educations;
    if educations.is_empty() {
        return None;
    }
    let body = educations.iter().map(|e| entry(ctx, e)).collect();
    Some(section(SectionKind::Education, ctx, body))
}

fn entry(ctx: &SectionContext, education: &Education) -> Node {
    let styles = ctx.styles;
    let dates = ctx
        .dates
        .range(education.start_date.as_ref(), education.end_date.as_ref());
    let mut children = vec![entry_header(ctx, &education.school, &dates)];
    let study = joined(&[&education.major, &education.degree]);
    if !study.is_empty() {
        children.push(Node::text(&study, styles.entry_subtitle.clone()));
    }
    Node::view(styles.entry.clone(), children)
        .with_id(entry_id(SectionKind::Education, &education.id))
}
