//! # Format Configuration
//!
//! The user-controlled visual configuration applied when rendering a résumé.
//! It is edited live from the UI, stored as a whole, and may come back from
//! storage stale, partial or simply wrong.
//!
//! Parsing therefore never rejects a Format. A field of the wrong JSON type
//! is read as "invalid" (NaN for numbers, empty for labels) and the theme
//! resolver swaps in the documented default later. Missing fields take their
//! defaults directly.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::lenient;

/// Visual/layout configuration for one résumé view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Format {
    // ── Typography ─────────────────────────────────────────────
    #[serde(deserialize_with = "lenient::number")]
    pub font_size: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub title_size: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub section_title_size: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub sub_title_size: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub line_height: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub letter_spacing: f64,
    /// One of `normal`, `medium`, `semibold`, `bold`.
    #[serde(deserialize_with = "lenient::text")]
    pub font_weight: String,

    // ── Layout ─────────────────────────────────────────────────
    #[serde(deserialize_with = "lenient::number")]
    pub section_spacing: f64,
    /// Page margin in points.
    #[serde(deserialize_with = "lenient::number")]
    pub margin: f64,
    /// Always A4; other values are accepted and ignored.
    #[serde(deserialize_with = "lenient::text")]
    pub page_format: String,
    #[serde(deserialize_with = "lenient::text")]
    pub column_layout: String,
    #[serde(deserialize_with = "lenient::text")]
    pub header_style: String,
    /// Section kinds in display order. `None` when the stored configuration
    /// predates the field.
    #[serde(deserialize_with = "lenient::labels")]
    pub section_order: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::labels")]
    pub hidden_sections: Option<Vec<String>>,

    // ── Appearance ─────────────────────────────────────────────
    /// Accent palette entry, by name or hex.
    #[serde(deserialize_with = "lenient::text")]
    pub color: String,
    /// Preferred theme label. Composition itself picks the theme from the
    /// composer variant; this only records the user's last choice.
    #[serde(deserialize_with = "lenient::text")]
    pub theme: String,
    #[serde(deserialize_with = "lenient::text")]
    pub border_style: String,
    /// Display pattern such as `MM/YYYY`.
    #[serde(deserialize_with = "lenient::text")]
    pub date_format: String,
}

pub const DEFAULT_FONT_SIZE: f64 = 10.0;
pub const DEFAULT_TITLE_SIZE: f64 = 24.0;
pub const DEFAULT_SECTION_TITLE_SIZE: f64 = 14.0;
pub const DEFAULT_SUB_TITLE_SIZE: f64 = 12.0;
pub const DEFAULT_LINE_HEIGHT: f64 = 1.4;
pub const DEFAULT_LETTER_SPACING: f64 = 0.0;
pub const DEFAULT_SECTION_SPACING: f64 = 16.0;
pub const DEFAULT_MARGIN: f64 = 40.0;
pub const DEFAULT_DATE_FORMAT: &str = "MM/YYYY";

impl Default for Format {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            title_size: DEFAULT_TITLE_SIZE,
            section_title_size: DEFAULT_SECTION_TITLE_SIZE,
            sub_title_size: DEFAULT_SUB_TITLE_SIZE,
            line_height: DEFAULT_LINE_HEIGHT,
            letter_spacing: DEFAULT_LETTER_SPACING,
            font_weight: FontWeight::Normal.label().to_string(),
            section_spacing: DEFAULT_SECTION_SPACING,
            margin: DEFAULT_MARGIN,
            page_format: "A4".to_string(),
            column_layout: "single".to_string(),
            header_style: "left".to_string(),
            section_order: Some(
                SectionKind::ALL
                    .iter()
                    .map(|k| k.label().to_string())
                    .collect(),
            ),
            hidden_sections: Some(vec![]),
            color: AccentColor::Blue.label().to_string(),
            theme: "classic".to_string(),
            border_style: BorderStyle::Thin.label().to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Format {
    /// The order sections are rendered in.
    ///
    /// Known kinds from `section_order` come first, in order, with duplicates
    /// and unknown labels dropped. Kinds the stored order doesn't mention
    /// (sections added after it was saved) follow in canonical order.
    pub fn effective_order(&self) -> Vec<SectionKind> {
        let mut order = Vec::with_capacity(SectionKind::ALL.len());
        for label in self.section_order.as_deref().unwrap_or_default() {
            match SectionKind::from_label(label) {
                Some(kind) if !order.contains(&kind) => order.push(kind),
                Some(_) => debug!("Ignoring duplicate section kind {:?} in sectionOrder", label),
                None => debug!("Ignoring unknown section kind {:?} in sectionOrder", label),
            }
        }
        for kind in SectionKind::ALL {
            if !order.contains(&kind) {
                order.push(kind);
            }
        }
        order
    }

    /// Whether `kind` is hidden. The personal header can't be hidden.
    pub fn is_hidden(&self, kind: SectionKind) -> bool {
        if kind == SectionKind::Personal {
            return false;
        }
        self.hidden_sections
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|label| SectionKind::from_label(label) == Some(kind))
    }
}

// ── Section kinds ───────────────────────────────────────────────

/// The closed set of résumé sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Personal,
    Summary,
    Skills,
    Education,
    Experience,
    Projects,
    Certifications,
    Languages,
}

impl SectionKind {
    /// Canonical order.
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Personal,
        SectionKind::Summary,
        SectionKind::Skills,
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Certifications,
        SectionKind::Languages,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Personal => "personal",
            SectionKind::Summary => "summary",
            SectionKind::Skills => "skills",
            SectionKind::Education => "education",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
            SectionKind::Languages => "languages",
        }
    }

    /// Heading printed above the section.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Personal => "Personal",
            SectionKind::Summary => "Summary",
            SectionKind::Skills => "Skills",
            SectionKind::Education => "Education",
            SectionKind::Experience => "Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Certifications => "Certifications",
            SectionKind::Languages => "Languages",
        }
    }

    pub fn from_label(label: &str) -> Option<SectionKind> {
        let label = label.trim().to_ascii_lowercase();
        SectionKind::ALL.into_iter().find(|k| k.label() == label)
    }

    /// Key of the section's block in the document tree.
    pub fn node_id(&self) -> String {
        format!("section-{}", self.label())
    }
}

// ── Enumerated appearance settings ──────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    pub fn from_label(label: &str) -> Option<FontWeight> {
        match label.trim().to_ascii_lowercase().as_str() {
            "normal" => Some(FontWeight::Normal),
            "medium" => Some(FontWeight::Medium),
            "semibold" => Some(FontWeight::Semibold),
            "bold" => Some(FontWeight::Bold),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
        }
    }

    pub fn numeric(&self) -> u32 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// The fixed accent palette offered by the color picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccentColor {
    #[default]
    Blue,
    Slate,
    Green,
    Red,
    Purple,
    Orange,
    Teal,
    Black,
}

impl AccentColor {
    pub const ALL: [AccentColor; 8] = [
        AccentColor::Blue,
        AccentColor::Slate,
        AccentColor::Green,
        AccentColor::Red,
        AccentColor::Purple,
        AccentColor::Orange,
        AccentColor::Teal,
        AccentColor::Black,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Slate => "slate",
            AccentColor::Green => "green",
            AccentColor::Red => "red",
            AccentColor::Purple => "purple",
            AccentColor::Orange => "orange",
            AccentColor::Teal => "teal",
            AccentColor::Black => "black",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            AccentColor::Blue => "#2563eb",
            AccentColor::Slate => "#475569",
            AccentColor::Green => "#16a34a",
            AccentColor::Red => "#dc2626",
            AccentColor::Purple => "#7c3aed",
            AccentColor::Orange => "#ea580c",
            AccentColor::Teal => "#0d9488",
            AccentColor::Black => "#111827",
        }
    }

    /// Match a palette entry by name or by its hex value.
    pub fn from_label(value: &str) -> Option<AccentColor> {
        let value = value.trim().to_ascii_lowercase();
        AccentColor::ALL
            .into_iter()
            .find(|c| c.label() == value || c.hex() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderStyle {
    None,
    #[default]
    Thin,
    Medium,
    Thick,
}

impl BorderStyle {
    pub fn from_label(label: &str) -> Option<BorderStyle> {
        match label.trim().to_ascii_lowercase().as_str() {
            "none" => Some(BorderStyle::None),
            "thin" => Some(BorderStyle::Thin),
            "medium" => Some(BorderStyle::Medium),
            "thick" => Some(BorderStyle::Thick),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Thin => "thin",
            BorderStyle::Medium => "medium",
            BorderStyle::Thick => "thick",
        }
    }

    /// Stroke width in points.
    pub fn width(&self) -> f64 {
        match self {
            BorderStyle::None => 0.0,
            BorderStyle::Thin => 0.5,
            BorderStyle::Medium => 1.0,
            BorderStyle::Thick => 2.0,
        }
    }
}
