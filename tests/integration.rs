//! Integration tests for the cvforme composition pipeline.
//!
//! These tests exercise the full path from résumé/format JSON to the
//! document tree. They verify:
//! - JSON deserialization of résumés and (partial, stale) formats
//! - Section ordering, hiding and empty-section omission
//! - Date display, including open-ended ranges
//! - The personal header's column split
//! - The rich-text hand-off and the JSON output shape

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde_json::json;

use cvforme::model::*;
use cvforme::richtext::RichTextAdapter;
use cvforme::style::*;
use cvforme::theme::{font_weight_value, resolve};
use cvforme::*;

// ─── Helpers ────────────────────────────────────────────────────

fn resume_from(value: serde_json::Value) -> Resume {
    serde_json::from_value(value).unwrap()
}

fn format_from(value: serde_json::Value) -> Format {
    serde_json::from_value(value).unwrap()
}

/// Jane Doe: one MIT education still in progress, no skills.
fn jane() -> Resume {
    resume_from(json!({
        "id": "r1",
        "title": "Jane Doe",
        "skills": [],
        "educations": [{
            "id": "e1",
            "school": "MIT",
            "degree": "BSc",
            "major": "CS",
            "startDate": "2019-01-01",
            "endDate": null
        }]
    }))
}

/// A résumé with something in every section.
fn full() -> Resume {
    resume_from(json!({
        "id": "r2",
        "title": "Sam Rivera",
        "subtitle": "Backend Engineer",
        "overview": "<p>Builds <strong>boring</strong> infrastructure.</p>",
        "information": [
            { "id": "i1", "label": "Email", "value": "sam@example.com" },
            { "id": "i2", "label": "Phone", "value": "+1 555 0100" },
            { "id": "i3", "label": "City", "value": "Austin" }
        ],
        "skills": [{ "id": "s1", "label": "Languages", "value": "Rust, Go" }],
        "educations": [{
            "id": "e1", "school": "UT Austin", "degree": "BSc", "major": "EE",
            "startDate": "2010-09-01", "endDate": "2014-05-31"
        }],
        "workExperiences": [{
            "id": "w1", "company": "Acme", "position": "Engineer",
            "description": "<ul><li>Ran the queue</li></ul>",
            "startDate": "2014-07-01", "endDate": null
        }],
        "projects": [{
            "id": "p1", "title": "Ledger", "details": "<p>Bookkeeping</p>",
            "technologies": "Rust", "position": "Lead", "responsibilities": "All of it",
            "domain": "Fintech"
        }],
        "certifications": [{ "id": "c1", "name": "CKA", "issuer": "CNCF", "date": "2022-11-03" }],
        "languages": [{ "id": "l1", "name": "Spanish", "proficiency": "Native" }]
    }))
}

fn section_ids(doc: &Document) -> Vec<String> {
    doc.section_ids().into_iter().map(str::to_string).collect()
}

fn all_text(doc: &Document) -> Vec<String> {
    doc.text_content()
}

// ─── End-to-End ─────────────────────────────────────────────────

#[test]
fn test_jane_doe_scenario() {
    let doc = compose(&jane(), &Format::default());

    let title = doc.find("personal-title").unwrap();
    assert_eq!(title.text_content(), vec!["Jane Doe"]);

    assert!(!all_text(&doc).contains(&"Skills".to_string()));
    assert!(doc.find("section-skills").is_none());

    let education = doc.find("education-e1").unwrap();
    assert_eq!(
        education.text_content(),
        vec!["MIT", "01/2019 - Present", "CS - BSc"]
    );
    assert_eq!(
        section_ids(&doc),
        vec!["section-personal", "section-education"]
    );
}

#[test]
fn test_full_resume_canonical_order() {
    let doc = compose(&full(), &Format::default());
    assert_eq!(
        section_ids(&doc),
        vec![
            "section-personal",
            "section-summary",
            "section-skills",
            "section-education",
            "section-experience",
            "section-projects",
            "section-certifications",
            "section-languages",
        ]
    );
}

#[test]
fn test_determinism() {
    for composer in [Composer::classic(), Composer::modern()] {
        let a = composer.compose(&full(), &Format::default());
        let b = composer.compose(&full(), &Format::default());
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

#[test]
fn test_empty_resume_composes() {
    let doc = compose(&Resume::default(), &Format::default());
    assert_eq!(doc.children.len(), 1);
    assert!(doc.section_ids().is_empty());
    assert!(doc.page().unwrap().children.is_empty());
}

// ─── Ordering & Hiding ──────────────────────────────────────────

#[test]
fn test_hidden_section_excluded_then_restored() {
    let order = json!(["personal", "languages", "experience", "skills", "summary",
                       "education", "projects", "certifications"]);
    let hidden = format_from(json!({ "sectionOrder": order, "hiddenSections": ["experience"] }));
    let doc = compose(&full(), &hidden);
    assert!(doc.find("section-experience").is_none());
    assert!(doc.find("experience-w1").is_none());

    let shown = format_from(json!({ "sectionOrder": order, "hiddenSections": [] }));
    let doc = compose(&full(), &shown);
    let ids = section_ids(&doc);
    assert_eq!(ids[1], "section-languages");
    assert_eq!(ids[2], "section-experience");
}

#[test]
fn test_personal_always_first() {
    let format = format_from(json!({
        "sectionOrder": ["languages", "skills", "personal"],
        "hiddenSections": ["personal", "skills"]
    }));
    let doc = compose(&full(), &format);
    let ids = section_ids(&doc);
    assert_eq!(ids[0], "section-personal");
    assert_eq!(ids[1], "section-languages");
    assert!(!ids.contains(&"section-skills".to_string()));
}

#[test]
fn test_legacy_section_order_without_newer_kinds() {
    let format = format_from(json!({
        "sectionOrder": ["personal", "experience", "education", "skills", "projects", "summary"]
    }));
    let ids = section_ids(&compose(&full(), &format));
    assert_eq!(
        ids[1..],
        [
            "section-experience",
            "section-education",
            "section-skills",
            "section-projects",
            "section-summary",
            "section-certifications",
            "section-languages",
        ]
    );
}

#[test]
fn test_missing_order_and_unknown_kinds() {
    let missing = format_from(json!({ "fontSize": 11 }));
    let missing = Format {
        section_order: None,
        hidden_sections: None,
        ..missing
    };
    assert_eq!(section_ids(&compose(&full(), &missing)).len(), 8);

    let stale = format_from(json!({
        "sectionOrder": ["hobbies", "languages", "languages", "references"],
        "hiddenSections": ["hobbies"]
    }));
    let ids = section_ids(&compose(&full(), &stale));
    assert_eq!(ids[1], "section-languages");
    assert_eq!(ids.len(), 8);
}

// ─── Dates ──────────────────────────────────────────────────────

#[test]
fn test_open_end_reads_present_for_any_pattern() {
    for pattern in ["MM/YYYY", "YYYY", "MMM YYYY", "DD.MM.YYYY"] {
        let format = format_from(json!({ "dateFormat": pattern }));
        let doc = compose(&full(), &format);
        let experience = doc.find("experience-w1").unwrap().text_content();
        assert!(
            experience[1].ends_with(" - Present"),
            "{} gave {:?}",
            pattern,
            experience[1]
        );
    }
}

#[test]
fn test_custom_date_pattern() {
    let doc = compose(&full(), &format_from(json!({ "dateFormat": "MMM YYYY" })));
    let education = doc.find("education-e1").unwrap().text_content();
    assert_eq!(education[1], "Sep 2010 - May 2014");
}

// ─── Personal Header ────────────────────────────────────────────

#[test]
fn test_information_column_split() {
    for n in 0..6usize {
        let information: Vec<_> = (0..n)
            .map(|i| json!({ "id": format!("i{}", i), "label": "L", "value": format!("v{}", i) }))
            .collect();
        let resume = resume_from(json!({ "title": "X", "information": information }));
        let doc = compose(&resume, &Format::default());
        if n == 0 {
            assert!(doc.find("personal-info-left").is_none());
            continue;
        }
        let left = doc.find("personal-info-left").unwrap();
        let right = doc.find("personal-info-right").unwrap();
        assert_eq!(left.children.len(), (n + 1) / 2);
        assert_eq!(right.children.len(), n / 2);
        assert_eq!(left.children[0].id.as_deref(), Some("personal-i0"));
        if n > 1 {
            assert_eq!(right.children[0].id.as_deref(), Some("personal-i1"));
        }
    }
}

// ─── Format Resolution ──────────────────────────────────────────

#[test]
fn test_font_weight_fallback() {
    assert_eq!(font_weight_value("ultra"), 400);
    let styles = resolve(&format_from(json!({ "fontWeight": "ultra" })), ThemeKind::Classic);
    assert_eq!(styles.font_weight, 400);
    assert_eq!(styles.page.font_weight, Some(400));
}

#[test]
fn test_lenient_format_json() {
    let format = format_from(json!({
        "fontSize": "big",
        "margin": -12,
        "color": 42,
        "sectionOrder": "skills",
        "hiddenSections": null
    }));
    let styles = resolve(&format, ThemeKind::Modern);
    assert_eq!(styles.font_size, 10.0);
    assert_eq!(styles.small_size, 8.0);
    assert_eq!(styles.extra_small_size, 6.0);
    assert_eq!(styles.page_margin, Edges::uniform(40.0));
    assert_eq!(styles.accent, Color::hex("#2563eb"));

    let doc = compose(&full(), &format);
    assert_eq!(section_ids(&doc).len(), 8);
}

#[test]
fn test_modern_theme_header() {
    let doc = Composer::modern().compose(&full(), &Format::default());
    let title = doc.find("personal-title").unwrap();
    assert_eq!(title.style.text_transform, Some(TextTransform::Uppercase));
    assert_eq!(title.style.text_align, Some(TextAlign::Center));
}

// ─── Rich Text ──────────────────────────────────────────────────

#[derive(Default)]
struct Recording {
    seen: Mutex<Vec<String>>,
}

impl RichTextAdapter for Recording {
    fn to_nodes(&self, html: &str, base: &Style, _accent: Color) -> Vec<Node> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(html.to_string());
        }
        vec![Node::text("rich", base.clone())]
    }
}

#[test]
fn test_html_reaches_adapter_unchanged() {
    let recording = Arc::new(Recording::default());
    let composer = Composer::classic().with_rich_text(recording.clone());
    let doc = composer.compose(&full(), &Format::default());

    let seen = recording.seen.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![
            "<p>Builds <strong>boring</strong> infrastructure.</p>",
            "<ul><li>Ran the queue</li></ul>",
            "<p>Bookkeeping</p>",
        ]
    );
    assert!(doc.find("section-summary").unwrap().text_content().contains(&"rich".to_string()));
}

#[test]
fn test_project_table_rows() {
    let doc = compose(&full(), &Format::default());
    let project = doc.find("projects-p1").unwrap();
    let table = project
        .children
        .iter()
        .find(|n| matches!(n.kind, NodeKind::Table { .. }))
        .unwrap();
    let labels: Vec<String> = table
        .children
        .iter()
        .map(|row| row.children[0].text_content().join(""))
        .collect();
    assert_eq!(
        labels,
        vec!["Description", "Responsibilities", "Technologies", "Position", "Domain"]
    );
}

// ─── JSON Boundary ──────────────────────────────────────────────

#[test]
fn test_compose_json_shape() {
    let resume = serde_json::to_string(&full()).unwrap();
    let json = compose_json(&resume, Some(r#"{"theme": "modern"}"#), ThemeKind::Classic).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let page = &value["children"][0];
    assert_eq!(page["kind"]["type"], "Page");
    assert_eq!(page["kind"]["config"]["size"], "A4");
    assert_eq!(page["children"][0]["id"], "section-personal");
    assert_eq!(value["metadata"]["creator"], "cvforme");

    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back.section_ids().len(), 8);
    assert_eq!(back.metadata.title.as_deref(), Some("Sam Rivera"));
}

#[test]
fn test_non_text_date_renders_blank() {
    let json = r#"{
        "title": "Jane Doe",
        "educations": [{ "id": "e1", "school": "MIT", "startDate": 1546300800000, "endDate": null }],
        "certifications": [{ "id": "c1", "name": "CKA", "date": { "seconds": 1 } }]
    }"#;
    let out = compose_json(json, None, ThemeKind::Classic).unwrap();
    let doc: Document = serde_json::from_str(&out).unwrap();
    assert_eq!(
        doc.find("education-e1").unwrap().text_content(),
        vec!["MIT", "Present"]
    );
    assert_eq!(doc.find("certifications-c1").unwrap().text_content(), vec!["CKA"]);
}

#[test]
fn test_null_and_wrong_typed_collections() {
    let resume = export::parse_resume(
        r#"{
            "title": "Jane",
            "skills": null,
            "languages": { "en": "native" },
            "information": [{ "id": "i1", "label": "Email", "value": "jane@example.com" }, "stray"]
        }"#,
    )
    .unwrap();
    let doc = compose(&resume, &Format::default());
    assert_eq!(section_ids(&doc), vec!["section-personal"]);
    assert!(doc.find("personal-i1").is_some());
}

#[test]
fn test_null_text_fields() {
    let resume = export::parse_resume(
        r#"{ "title": "Jane Doe", "subtitle": null, "overview": null, "avatar": null }"#,
    )
    .unwrap();
    let doc = compose(&resume, &Format::default());
    assert!(doc.find("personal-subtitle").is_none());
    assert!(doc.find("section-summary").is_none());
    assert_eq!(doc.metadata.subject, None);
}

#[test]
fn test_html_entities_in_overview() {
    let resume = resume_from(json!({ "overview": "<p>Jane&rsquo;s R&amp;D work</p>" }));
    let doc = compose(&resume, &Format::default());
    assert_eq!(
        doc.find("section-summary").unwrap().text_content(),
        vec!["Summary", "Jane\u{2019}s R&D work"]
    );
}

#[test]
fn test_compose_json_errors() {
    let err = compose_json("[1, 2", None, ThemeKind::Classic).unwrap_err();
    assert!(err.to_string().contains("résumé"));
    let err = compose_json("{}", Some("{,}"), ThemeKind::Classic).unwrap_err();
    assert!(err.to_string().contains("format"));
}

#[test]
fn test_file_name() {
    let day = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    assert_eq!(file_name(&full(), day), "sam-rivera-backend-engineer-2025-01-31.pdf");
    assert_eq!(file_name(&Resume::default(), day), "resume-2025-01-31.pdf");
}
