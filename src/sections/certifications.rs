use crate::format::SectionKind;
use crate::model::Node;
use crate::resume::Certification;

use super::{entry_header, entry_id, section, SectionContext};

pub(super) fn render(ctx: &SectionContext) -> Option<Node> {
    let certifications = &ctx.resume.certifications;
    if certifications.is_empty() {
        return None;
    }
    let body = certifications.iter().map(|c| entry(ctx, c)).collect();
    Some(section(SectionKind::Certifications, ctx, body))
}

fn entry(ctx: &SectionContext, certification: &Certification) -> Node {
    let styles = ctx.styles;
    // A certification without a date is still valid: it reads "Present".
    let date = ctx.dates.format(certification.date.as_ref());
    let mut children = vec![entry_header(ctx, &certification.name, &date)];
    if !certification.issuer.trim().is_empty() {
        children.push(Node::text(
            certification.issuer.trim(),
            styles.entry_subtitle.clone(),
        ));
    }
    Node::view(styles.entry.clone(), children)
        .with_id(entry_id(SectionKind::Certifications, &certification.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{DateValue, Resume};
    use crate::sections::test_support::Fixture;

    #[test]
    fn test_name_date_issuer() {
        let fixture = Fixture::new(Resume {
            certifications: vec![
                Certification {
                    id: "c1".to_string(),
                    name: "CKA".to_string(),
                    issuer: "CNCF".to_string(),
                    date: Some(DateValue::from("2022-11-03")),
                    ..Default::default()
                },
                Certification {
                    id: "c2".to_string(),
                    name: "Rust Foundations".to_string(),
                    date: None,
                    ..Default::default()
                },
            ],
            ..Default::default()
        });
        let node = render(&fixture.ctx()).unwrap();
        assert_eq!(
            node.find("certifications-c1").unwrap().text_content(),
            vec!["CKA", "11/2022", "CNCF"]
        );
        assert_eq!(
            node.find("certifications-c2").unwrap().text_content(),
            vec!["Rust Foundations", "Present"]
        );
    }
}
