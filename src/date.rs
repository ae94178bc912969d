//! Date Formatting Adapter.
//!
//! Renders the heterogeneous dates stored on a résumé with the user's
//! display pattern. Patterns use the day.js token set the editor exposes
//! (`YYYY`, `YY`, `MMMM`, `MMM`, `MM`, `M`, `DD`, `D`); anything else is
//! literal, and `[...]` escapes a literal run.
//!
//! This runs inside the render path, so it never fails: a missing date is an
//! open range and prints "Present", an unreadable one prints nothing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::debug;

use crate::format::DEFAULT_DATE_FORMAT;
use crate::resume::DateValue;

pub const PRESENT: &str = "Present";

/// Formats dates with one display pattern, translated once up front.
#[derive(Debug, Clone, PartialEq)]
pub struct DateFormatter {
    pattern: String,
    strftime: String,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl DateFormatter {
    /// An empty pattern falls back to `MM/YYYY`.
    pub fn new(pattern: &str) -> Self {
        let pattern = if pattern.trim().is_empty() {
            DEFAULT_DATE_FORMAT
        } else {
            pattern
        };
        Self {
            pattern: pattern.to_string(),
            strftime: translate(pattern),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Display one date. `None` is "Present"; unparseable input is empty.
    pub fn format(&self, date: Option<&DateValue>) -> String {
        let Some(date) = date else {
            return PRESENT.to_string();
        };
        match parse(date) {
            Some(day) => day.format(&self.strftime).to_string(),
            None => {
                debug!("Unreadable date {:?}, leaving it blank", date);
                String::new()
            }
        }
    }

    /// Display `start - end`. An open end reads "Present"; a blank start is
    /// dropped so the range never opens with a dangling dash.
    pub fn range(&self, start: Option<&DateValue>, end: Option<&DateValue>) -> String {
        let start = match start {
            Some(date) => self.format(Some(date)),
            None => String::new(),
        };
        let end = self.format(end);
        match (start.is_empty(), end.is_empty()) {
            (true, _) => end,
            (false, true) => start,
            (false, false) => format!("{} - {}", start, end),
        }
    }
}

/// Read a stored date as a calendar day.
///
/// Timestamps keep the calendar day they were written with, regardless of
/// their offset.
pub fn parse(date: &DateValue) -> Option<NaiveDate> {
    let text = match date {
        DateValue::Date(day) => return Some(*day),
        DateValue::Text(text) => text.trim(),
        DateValue::Other(_) => return None,
    };
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d").ok())
}

/// Translate a day.js-style pattern to a chrono format string.
fn translate(pattern: &str) -> String {
    const TOKENS: [(&str, &str); 8] = [
        ("YYYY", "%Y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("YY", "%y"),
        ("MM", "%m"),
        ("DD", "%d"),
        ("M", "%-m"),
        ("D", "%-d"),
    ];

    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;
    'scan: while let Some(ch) = rest.chars().next() {
        if ch == '[' {
            if let Some(close) = rest.find(']') {
                push_literal(&mut out, &rest[1..close]);
                rest = &rest[close + 1..];
                continue;
            }
        }
        for (token, spec) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = tail;
                continue 'scan;
            }
        }
        push_literal(&mut out, &rest[..ch.len_utf8()]);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

fn push_literal(out: &mut String, literal: &str) {
    for ch in literal.chars() {
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
    }
}
