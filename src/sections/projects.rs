//! Projects render as a heading plus a bordered label/value table with a
//! fixed row order. The Demo row only appears when there is a demo URL.

use crate::format::SectionKind;
use crate::model::Node;
use crate::resume::Project;
use crate::style::Style;

use super::table::label_table;
use super::{entry_id, section, SectionContext};

pub(super) fn render(ctx: &SectionContext) -> Option<Node> {
    let projects = &ctx.resume.projects;
    if projects.is_empty() {
        return None;
    }
    let body = projects.iter().map(|p| entry(ctx, p)).collect();
    Some(section(SectionKind::Projects, ctx, body))
}

fn entry(ctx: &SectionContext, project: &Project) -> Node {
    let styles = ctx.styles;
    let plain = |value: &str| vec![Node::text(value.trim(), Style::default())];

    let mut heading = vec![Node::text(project.title.trim(), styles.entry_title.clone())];
    if !project.subtitle.trim().is_empty() {
        heading.push(Node::text(project.subtitle.trim(), styles.small.clone()));
    }

    let mut rows = vec![
        ("Description", ctx.rich_nodes(&project.details)),
        ("Responsibilities", plain(&project.responsibilities)),
        ("Technologies", plain(&project.technologies)),
        ("Position", plain(&project.position)),
        ("Domain", plain(&project.domain)),
    ];
    if let Some(demo) = project.demo.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        rows.push(("Demo", vec![Node::link(demo, demo, styles.link.clone())]));
    }

    Node::view(
        styles.entry.merge(&Style {
            wrap: Some(true),
            ..Default::default()
        }),
        vec![
            Node::view(styles.entry_header.clone(), heading),
            label_table(rows, styles),
        ],
    )
    .with_id(entry_id(SectionKind::Projects, &project.id))
}
