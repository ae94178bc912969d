use crate::format::SectionKind;
use crate::model::Node;

use super::{entry_id, label_value_row, list_body, section, SectionContext};

pub(super) fn render(ctx: &SectionContext) -> Option<Node> {
    let languages = &ctx.resume.languages;
    if languages.is_empty() {
        return None;
    }
    let rows = languages
        .iter()
        .map(|language| {
            label_value_row(ctx, &language.name, &language.proficiency)
                .with_id(entry_id(SectionKind::Languages, &language.id))
        })
        .collect();
    Some(section(SectionKind::Languages, ctx, list_body(ctx, rows)))
}
