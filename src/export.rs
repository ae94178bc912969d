//! Export helpers: the download file name and the JSON boundary the PDF
//! engine and the CLI consume.

use chrono::{Local, NaiveDate};
use log::info;

use crate::composer::Composer;
use crate::error::CvError;
use crate::format::Format;
use crate::resume::Resume;
use crate::theme::ThemeKind;

/// `{slug of title and subtitle}-{YYYY-MM-DD}.pdf`.
pub fn file_name(resume: &Resume, on: NaiveDate) -> String {
    let stem = slug::slugify(format!("{} {}", resume.title, resume.subtitle));
    let stem = if stem.is_empty() { "resume" } else { stem.as_str() };
    format!("{}-{}.pdf", stem, on.format("%Y-%m-%d"))
}

/// [`file_name`] dated with the local clock.
pub fn file_name_today(resume: &Resume) -> String {
    file_name(resume, Local::now().date_naive())
}

pub fn parse_resume(json: &str) -> Result<Resume, CvError> {
    serde_json::from_str(json).map_err(|e| CvError::parse("résumé", e))
}

/// A missing format is the default one.
pub fn parse_format(json: Option<&str>) -> Result<Format, CvError> {
    match json {
        Some(json) => serde_json::from_str(json).map_err(|e| CvError::parse("format", e)),
        None => Ok(Format::default()),
    }
}

/// Compose a résumé given as JSON and return the document as JSON.
pub fn compose_json(
    resume_json: &str,
    format_json: Option<&str>,
    theme: ThemeKind,
) -> Result<String, CvError> {
    let resume = parse_resume(resume_json)?;
    let format = parse_format(format_json)?;
    let document = Composer::new(theme).compose(&resume, &format);
    let json = serde_json::to_string_pretty(&document).map_err(CvError::Serialize)?;
    info!(
        "Composed {:?} with {} sections",
        resume.title,
        document.section_ids().len()
    );
    Ok(json)
}
