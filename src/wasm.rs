use wasm_bindgen::prelude::*;

use crate::composer::Composer;
use crate::export::parse_resume;
use crate::format::Format;
use crate::theme::ThemeKind;

fn theme_of(label: &str) -> ThemeKind {
    ThemeKind::from_label(label).unwrap_or_default()
}

/// Compose from JSON strings. `format_json` may be empty for the default
/// format.
#[wasm_bindgen(js_name = composeDocument)]
pub fn compose_document(resume_json: &str, format_json: &str, theme: &str) -> Result<String, JsValue> {
    let format_json = Some(format_json).filter(|s| !s.trim().is_empty());
    crate::compose_json(resume_json, format_json, theme_of(theme))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compose from JS objects straight into a JS object, for the live preview.
#[wasm_bindgen(js_name = composePreview)]
pub fn compose_preview(resume: JsValue, format: JsValue, theme: &str) -> Result<JsValue, JsValue> {
    let resume = match resume.as_string() {
        Some(json) => parse_resume(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => serde_wasm_bindgen::from_value(resume)?,
    };
    let format: Format = if format.is_undefined() || format.is_null() {
        Format::default()
    } else {
        serde_wasm_bindgen::from_value(format)?
    };
    let document = Composer::new(theme_of(theme)).compose(&resume, &format);
    Ok(serde_wasm_bindgen::to_value(&document)?)
}
