//! Structured error types for the cvforme boundaries.
//!
//! Composition itself is total. Only reading JSON input, writing the
//! document back out and touching the filesystem can fail.

use thiserror::Error;

/// The unified error type returned by the fallible public functions.
#[derive(Debug, Error)]
pub enum CvError {
    /// Input JSON failed to parse as a résumé or format.
    #[error("Failed to parse {input}: {source}{}", hint_suffix(.hint))]
    Parse {
        input: &'static str,
        #[source]
        source: serde_json::Error,
        hint: String,
    },
    /// The composed document could not be serialized.
    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn hint_suffix(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl CvError {
    /// Wrap a serde error raised while reading `input` ("résumé", "format").
    pub fn parse(input: &'static str, e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => format!(
                "The JSON is valid but doesn't match the {} schema. Check field names and types.",
                input
            ),
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        CvError::Parse {
            input,
            source: e,
            hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_carries_hint() {
        let e = serde_json::from_str::<serde_json::Value>("{\"a\": 1,}").unwrap_err();
        let err = CvError::parse("résumé", e);
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to parse résumé"));
        assert!(msg.contains("trailing commas"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_truncated_input() {
        let e = serde_json::from_str::<serde_json::Value>("{\"a\": ").unwrap_err();
        assert!(CvError::parse("format", e).to_string().contains("truncated"));
    }
}
