use crate::format::SectionKind;
use crate::model::Node;

use super::{entry_id, label_value_row, list_body, section, SectionContext};

pub(super) fn render(ctx: &SectionContext) -> Option<Node> {
    let skills = &ctx.resume.skills;
    if skills.is_empty() {
        return None;
    }
    let rows = skills
        .iter()
        .map(|skill| {
            label_value_row(ctx, &skill.label, &skill.value)
                .with_id(entry_id(SectionKind::Skills, &skill.id))
        })
        .collect();
    Some(section(SectionKind::Skills, ctx, list_body(ctx, rows)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Format;
    use crate::resume::{Resume, Skill};
    use crate::sections::test_support::Fixture;

    fn skill(id: &str, label: &str, value: &str) -> Skill {
        Skill {
            id: id.to_string(),
            label: label.to_string(),
            value: value.to_string(),
            ..Default::default()
        }
    }

    fn resume() -> Resume {
        Resume {
            skills: vec![
                skill("s1", "Languages", "Rust, Go"),
                skill("s2", "Cloud", "AWS"),
                skill("s3", "", "Mentoring"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_keyed_by_entry_id() {
        let fixture = Fixture::new(resume());
        let node = render(&fixture.ctx()).unwrap();
        assert!(node.find("skills-s2").is_some());
        assert_eq!(
            node.find("skills-s1").unwrap().text_content(),
            vec!["Languages:", "Rust, Go"]
        );
        assert_eq!(node.find("skills-s3").unwrap().text_content(), vec!["Mentoring"]);
    }

    #[test]
    fn test_double_column_layout() {
        let mut fixture = Fixture::new(resume());
        fixture.format = Format {
            column_layout: "double".to_string(),
            ..Default::default()
        };
        let node = render(&fixture.ctx()).unwrap();
        // title, separator, columns
        assert_eq!(node.children.len(), 3);
        let columns = &node.children[2];
        assert_eq!(columns.children[0].children.len(), 2);
        assert_eq!(columns.children[1].children.len(), 1);
    }
}
