//! The personal header: name, headline, avatar, and contact details split
//! into two alternating columns.

use crate::format::SectionKind;
use crate::model::Node;
use crate::resume::Information;
use crate::style::Style;
use crate::theme::AVATAR_SIZE;

use super::{entry_id, split_columns, SectionContext};

pub(super) fn render(ctx: &SectionContext) -> Option<Node> {
    let resume = ctx.resume;
    let styles = ctx.styles;
    let title = resume.title.trim();
    let subtitle = resume.subtitle.trim();
    let avatar = resume.avatar.as_deref().map(str::trim).filter(|a| !a.is_empty());

    if title.is_empty() && subtitle.is_empty() && avatar.is_none() && resume.information.is_empty() {
        return None;
    }

    let mut heading = Vec::with_capacity(2);
    if !title.is_empty() {
        heading.push(Node::text(title, styles.title.clone()).with_id("personal-title"));
    }
    if !subtitle.is_empty() {
        heading.push(Node::text(subtitle, styles.subtitle.clone()).with_id("personal-subtitle"));
    }
    let heading = Node::view(styles.header.clone(), heading);
    let header = match avatar {
        Some(src) => Node::view(
            styles.header_row.clone(),
            vec![
                Node::image(src, AVATAR_SIZE, AVATAR_SIZE, styles.avatar.clone()),
                heading,
            ],
        ),
        None => heading,
    };

    let mut children = vec![header];
    if !resume.information.is_empty() {
        let (left, right) = split_columns(resume.information.iter().map(|info| info_row(ctx, info)));
        children.push(Node::view(
            styles.info_columns.clone(),
            vec![
                Node::view(styles.info_column.clone(), left).with_id("personal-info-left"),
                Node::view(styles.info_column.clone(), right).with_id("personal-info-right"),
            ],
        ));
    }

    Some(Node::view(Style::default(), children).with_id(SectionKind::Personal.node_id()))
}

fn info_row(ctx: &SectionContext, info: &Information) -> Node {
    let styles = ctx.styles;
    let value = info.value.trim();
    let value_node = match link_target(value) {
        Some(href) => Node::link(value, &href, styles.info_value.merge(&styles.link)),
        None => Node::text(value, styles.info_value.clone()),
    };
    Node::view(
        styles.info_row.clone(),
        vec![Node::text(info.label.trim(), styles.info_label.clone()), value_node],
    )
    .with_id(entry_id(SectionKind::Personal, &info.id))
}

/// Web addresses and e-mail addresses become links.
fn link_target(value: &str) -> Option<String> {
    if value.starts_with("https://") || value.starts_with("http://") {
        return Some(value.to_string());
    }
    let (user, domain) = value.split_once('@')?;
    if !user.is_empty() && domain.contains('.') && !value.contains(char::is_whitespace) {
        return Some(format!("mailto:{}", value));
    }
    None
}
