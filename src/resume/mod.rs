//! # Résumé Data
//!
//! The input aggregate as the form/store layer hands it over. Plain data, no
//! behavior: persistence owns ids, back-references and timestamps, and the
//! formatting core trusts them as given.
//!
//! Reading never fails on a single field. A missing, `null` or wrong-typed
//! collection is empty, a bad entry inside one is skipped, `null` text is
//! empty, and a date of any shape is kept for the date adapter to judge.
//! Partially filled résumés and older stored documents that predate a
//! section deserialize cleanly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient;

/// One user's résumé.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(deserialize_with = "lenient::id")]
    pub user_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub subtitle: String,
    /// Rich text, HTML produced by the editor.
    #[serde(deserialize_with = "lenient::text")]
    pub overview: String,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub avatar: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub information: Vec<Information>,
    #[serde(deserialize_with = "lenient::list")]
    pub educations: Vec<Education>,
    #[serde(deserialize_with = "lenient::list")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "lenient::list")]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(deserialize_with = "lenient::list")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "lenient::list")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "lenient::list")]
    pub languages: Vec<Language>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub updated_at: Option<String>,
}

/// Free-form contact/metadata pair (email, phone, city, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Information {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(deserialize_with = "lenient::id")]
    pub resume_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub label: String,
    #[serde(deserialize_with = "lenient::text")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(deserialize_with = "lenient::id")]
    pub resume_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub school: String,
    #[serde(deserialize_with = "lenient::text")]
    pub degree: String,
    #[serde(deserialize_with = "lenient::text")]
    pub major: String,
    pub start_date: Option<DateValue>,
    /// `None` while still enrolled.
    pub end_date: Option<DateValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(deserialize_with = "lenient::id")]
    pub resume_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub label: String,
    #[serde(deserialize_with = "lenient::text")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(deserialize_with = "lenient::id")]
    pub resume_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub company: String,
    #[serde(deserialize_with = "lenient::text")]
    pub position: String,
    /// Rich text, HTML produced by the editor.
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    pub start_date: Option<DateValue>,
    /// `None` for the current position.
    pub end_date: Option<DateValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(deserialize_with = "lenient::id")]
    pub resume_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub subtitle: String,
    /// Rich text, HTML produced by the editor.
    #[serde(deserialize_with = "lenient::text")]
    pub details: String,
    #[serde(deserialize_with = "lenient::text")]
    pub technologies: String,
    #[serde(deserialize_with = "lenient::text")]
    pub position: String,
    #[serde(deserialize_with = "lenient::text")]
    pub responsibilities: String,
    #[serde(deserialize_with = "lenient::text")]
    pub domain: String,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(deserialize_with = "lenient::id")]
    pub resume_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub issuer: String,
    pub date: Option<DateValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(deserialize_with = "lenient::id")]
    pub resume_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub proficiency: String,
}

/// A date as it arrives from the store: a native calendar date, whatever
/// text the form produced (ISO date, RFC 3339 timestamp, `YYYY-MM`, or junk),
/// or some other JSON value entirely (an epoch number, an object).
///
/// Values are kept verbatim. Interpreting them is the date adapter's job, and
/// it never fails: anything that isn't text reads as unparseable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Date(NaiveDate),
    Text(String),
    Other(Value),
}

impl From<NaiveDate> for DateValue {
    fn from(d: NaiveDate) -> Self {
        DateValue::Date(d)
    }
}

impl From<&str> for DateValue {
    fn from(s: &str) -> Self {
        DateValue::Text(s.to_string())
    }
}
