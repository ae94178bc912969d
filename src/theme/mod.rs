//! # Style Theme Resolver
//!
//! Turns a flat [`Format`] into a [`StyleSheet`]: the named, composable rules
//! every section renderer draws from. Resolution is a pure function of
//! (Format, ThemeKind). It never fails; an invalid or out-of-range field is
//! replaced by its documented default.
//!
//! Secondary sizes are derived rather than configured: `small` is the base
//! size minus 2pt and `extra_small_size` minus 4pt, so one font-size change
//! cascades through the whole document.
//!
//! Two themes resolve from the same Format shape:
//! - **classic**: left-aligned header, full-width gray rules, bordered
//!   label/value tables
//! - **modern**: centered uppercase header with letter-spacing, short accent
//!   bars as separators, shaded tables with row dividers

use std::ops::RangeInclusive;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::format::*;
use crate::model::Edges;
use crate::style::*;

const FONT_FAMILY: &str = "Helvetica";
const TEXT_COLOR: &str = "#1f2937";
const MUTED_COLOR: &str = "#6b7280";
const RULE_COLOR: &str = "#d1d5db";
const SHADE_COLOR: &str = "#f3f4f6";

/// Width of the label column in project tables, in points.
pub const TABLE_LABEL_WIDTH: f64 = 96.0;
/// Edge length of the avatar image, in points.
pub const AVATAR_SIZE: f64 = 56.0;

/// Which visual theme a composer renders with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Classic,
    Modern,
}

impl ThemeKind {
    pub fn from_label(label: &str) -> Option<ThemeKind> {
        match label.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(ThemeKind::Classic),
            "modern" => Some(ThemeKind::Modern),
            _ => None,
        }
    }
}

/// Resolved, immutable style bundle shared by all section renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub theme: ThemeKind,

    // Resolved metrics
    pub font_size: f64,
    pub small_size: f64,
    pub extra_small_size: f64,
    pub font_weight: u32,
    pub accent: Color,
    pub border_width: f64,

    // Page-level
    pub page: Style,
    pub page_margin: Edges,
    pub section: Style,

    // Header
    pub header: Style,
    pub header_row: Style,
    pub avatar: Style,
    pub title: Style,
    pub subtitle: Style,
    pub header_separator: Style,

    // Section chrome
    pub section_title: Style,
    pub section_separator: Style,

    // Text
    pub body: Style,
    pub small: Style,
    pub strong: Style,
    pub link: Style,

    // Entries (education, experience, certifications)
    pub entry: Style,
    pub entry_header: Style,
    pub entry_title: Style,
    pub entry_subtitle: Style,
    pub entry_date: Style,

    // Personal info columns and label/value lists
    pub info_columns: Style,
    pub info_column: Style,
    pub info_row: Style,
    pub info_label: Style,
    pub info_value: Style,

    // Label/value tables
    pub table: Style,
    pub table_row: Style,
    pub table_row_first: Style,
    pub table_label_cell: Style,
    pub table_content_cell: Style,
}

/// Map a font-weight label to its numeric weight. Unknown labels resolve to
/// 400.
pub fn font_weight_value(label: &str) -> u32 {
    FontWeight::from_label(label).unwrap_or_default().numeric()
}

fn sanitize(field: &str, value: f64, default: f64, range: RangeInclusive<f64>) -> f64 {
    if value.is_finite() && range.contains(&value) {
        value
    } else {
        debug!(
            "Format field {} = {} is invalid, using default {}",
            field, value, default
        );
        default
    }
}

fn text_style(size: f64) -> Style {
    Style {
        font_size: Some(size),
        ..Default::default()
    }
}

fn bold() -> Style {
    Style {
        font_weight: Some(FontWeight::Bold.numeric()),
        ..Default::default()
    }
}

fn row() -> Style {
    Style {
        flex_direction: Some(FlexDirection::Row),
        ..Default::default()
    }
}

/// Resolve `format` for `theme`.
pub fn resolve(format: &Format, theme: ThemeKind) -> StyleSheet {
    let font_size = sanitize("fontSize", format.font_size, DEFAULT_FONT_SIZE, 6.0..=32.0);
    let title_size = sanitize("titleSize", format.title_size, DEFAULT_TITLE_SIZE, 8.0..=72.0);
    let section_title_size = sanitize(
        "sectionTitleSize",
        format.section_title_size,
        DEFAULT_SECTION_TITLE_SIZE,
        6.0..=48.0,
    );
    let sub_title_size = sanitize(
        "subTitleSize",
        format.sub_title_size,
        DEFAULT_SUB_TITLE_SIZE,
        6.0..=48.0,
    );
    let line_height = sanitize("lineHeight", format.line_height, DEFAULT_LINE_HEIGHT, 0.8..=3.0);
    let letter_spacing = sanitize(
        "letterSpacing",
        format.letter_spacing,
        DEFAULT_LETTER_SPACING,
        -2.0..=10.0,
    );
    let section_spacing = sanitize(
        "sectionSpacing",
        format.section_spacing,
        DEFAULT_SECTION_SPACING,
        0.0..=96.0,
    );
    let margin = sanitize("margin", format.margin, DEFAULT_MARGIN, 0.0..=144.0);

    let font_weight = FontWeight::from_label(&format.font_weight)
        .unwrap_or_else(|| {
            debug!("Unknown font weight {:?}, using normal", format.font_weight);
            FontWeight::Normal
        })
        .numeric();
    let accent = Color::hex(
        AccentColor::from_label(&format.color)
            .unwrap_or_else(|| {
                debug!("Color {:?} is not in the palette, using blue", format.color);
                AccentColor::default()
            })
            .hex(),
    );
    let border_width = BorderStyle::from_label(&format.border_style)
        .unwrap_or_else(|| {
            debug!("Unknown border style {:?}, using thin", format.border_style);
            BorderStyle::default()
        })
        .width();

    let small_size = font_size - 2.0;
    let extra_small_size = font_size - 4.0;
    let text_color = Color::hex(TEXT_COLOR);
    let muted = Color::hex(MUTED_COLOR);
    let rule = Color::hex(RULE_COLOR);

    let page = Style {
        font_family: Some(FONT_FAMILY.to_string()),
        font_size: Some(font_size),
        font_weight: Some(font_weight),
        line_height: Some(line_height),
        letter_spacing: Some(letter_spacing),
        color: Some(text_color),
        ..Default::default()
    };
    let small = Style {
        color: Some(muted),
        ..text_style(small_size)
    };
    let link = Style {
        color: Some(accent),
        text_decoration: Some(TextDecoration::Underline),
        ..Default::default()
    };
    let entry_header = Style {
        justify_content: Some(JustifyContent::SpaceBetween),
        align_items: Some(AlignItems::FlexStart),
        gap: Some(8.0),
        ..row()
    };
    let table_label_cell = Style {
        width: Some(Dimension::Pt(TABLE_LABEL_WIDTH)),
        padding: Some(Edges::symmetric(3.0, 6.0)),
        ..bold().merge(&text_style(small_size))
    };
    let table_content_cell = Style {
        flex_grow: Some(1.0),
        padding: Some(Edges::symmetric(3.0, 6.0)),
        ..text_style(font_size)
    };

    let base = StyleSheet {
        theme,
        font_size,
        small_size,
        extra_small_size,
        font_weight,
        accent,
        border_width,

        page,
        page_margin: Edges::uniform(margin),
        section: Style {
            margin: Some(Edges::only_bottom(section_spacing)),
            ..Default::default()
        },

        header: Style {
            gap: Some(2.0),
            align_items: Some(AlignItems::FlexStart),
            ..Default::default()
        },
        header_row: Style {
            align_items: Some(AlignItems::Center),
            gap: Some(12.0),
            ..row()
        },
        avatar: Style {
            border_radius: Some(CornerValues::uniform(AVATAR_SIZE / 2.0)),
            ..Default::default()
        },
        title: Style {
            line_height: Some(1.2),
            ..bold().merge(&text_style(title_size))
        },
        subtitle: Style {
            color: Some(muted),
            ..text_style(sub_title_size)
        },
        header_separator: Style {
            margin: Some(Edges::symmetric(8.0, 0.0)),
            ..Style::bottom_rule(border_width.max(0.5), rule)
        },

        section_title: Style {
            margin: Some(Edges::only_bottom(2.0)),
            ..bold().merge(&text_style(section_title_size))
        },
        section_separator: Style {
            margin: Some(Edges::only_bottom(6.0)),
            ..Style::bottom_rule(border_width, rule)
        },

        body: text_style(font_size),
        small,
        strong: bold(),
        link,

        entry: Style {
            margin: Some(Edges::only_bottom(8.0)),
            gap: Some(2.0),
            wrap: Some(false),
            ..Default::default()
        },
        entry_header,
        entry_title: bold(),
        entry_subtitle: Style {
            font_style: Some(FontStyle::Italic),
            ..Default::default()
        },
        entry_date: Style {
            color: Some(muted),
            text_align: Some(TextAlign::Right),
            ..text_style(small_size)
        },

        info_columns: Style {
            gap: Some(16.0),
            margin: Some(Edges {
                top: 6.0,
                ..Default::default()
            }),
            ..row()
        },
        info_column: Style {
            flex_grow: Some(1.0),
            gap: Some(2.0),
            ..Default::default()
        },
        info_row: Style {
            gap: Some(4.0),
            ..row()
        },
        info_label: Style {
            min_width: Some(Dimension::Pt(64.0)),
            ..bold()
        },
        info_value: Style {
            flex_grow: Some(1.0),
            ..Default::default()
        },

        table: Style {
            margin: Some(Edges::symmetric(4.0, 0.0)),
            border_width: Some(EdgeValues {
                top: border_width,
                right: 0.0,
                bottom: border_width,
                left: 0.0,
            }),
            border_color: Some(EdgeValues::uniform(rule)),
            ..Default::default()
        },
        table_row: Style {
            border_width: Some(EdgeValues {
                top: border_width,
                right: 0.0,
                bottom: 0.0,
                left: 0.0,
            }),
            border_color: Some(EdgeValues::uniform(rule)),
            ..row()
        },
        table_row_first: row(),
        table_label_cell: Style {
            border_width: Some(EdgeValues {
                top: 0.0,
                right: border_width,
                bottom: 0.0,
                left: border_width,
            }),
            border_color: Some(EdgeValues::uniform(rule)),
            ..table_label_cell
        },
        table_content_cell: Style {
            border_width: Some(EdgeValues {
                top: 0.0,
                right: border_width,
                bottom: 0.0,
                left: 0.0,
            }),
            border_color: Some(EdgeValues::uniform(rule)),
            ..table_content_cell
        },
    };

    match theme {
        ThemeKind::Classic => base,
        ThemeKind::Modern => modernize(base, letter_spacing, border_width),
    }
}

/// Overrides that turn the classic sheet into the modern one.
fn modernize(sheet: StyleSheet, letter_spacing: f64, border_width: f64) -> StyleSheet {
    let accent = sheet.accent;
    let divider = Color::hex(RULE_COLOR);
    let accent_bar = |width: f64, height: f64| Style {
        width: Some(Dimension::Pt(width)),
        height: Some(Dimension::Pt(height)),
        background_color: Some(accent),
        ..Default::default()
    };

    StyleSheet {
        header: sheet.header.merge(&Style {
            align_items: Some(AlignItems::Center),
            ..Default::default()
        }),
        header_row: sheet.header_row.merge(&Style {
            justify_content: Some(JustifyContent::Center),
            ..Default::default()
        }),
        title: sheet.title.merge(&Style {
            text_transform: Some(TextTransform::Uppercase),
            text_align: Some(TextAlign::Center),
            letter_spacing: Some(letter_spacing + 2.0),
            ..Default::default()
        }),
        subtitle: sheet.subtitle.merge(&Style {
            color: Some(accent),
            text_align: Some(TextAlign::Center),
            ..Default::default()
        }),
        header_separator: Style {
            align_self: Some(AlignItems::Center),
            margin: Some(Edges::symmetric(10.0, 0.0)),
            ..accent_bar(48.0, 3.0)
        },
        section_title: sheet.section_title.merge(&Style {
            color: Some(accent),
            text_transform: Some(TextTransform::Uppercase),
            letter_spacing: Some(letter_spacing + 1.0),
            ..Default::default()
        }),
        section_separator: Style {
            margin: Some(Edges::only_bottom(6.0)),
            ..accent_bar(32.0, 2.0)
        },
        info_label: sheet.info_label.merge(&Style {
            color: Some(accent),
            ..Default::default()
        }),
        table: Style {
            margin: Some(Edges::symmetric(4.0, 0.0)),
            background_color: Some(Color::hex(SHADE_COLOR)),
            border_radius: Some(CornerValues::uniform(4.0)),
            padding: Some(Edges::symmetric(2.0, 0.0)),
            ..Default::default()
        },
        table_row: Style {
            border_width: Some(EdgeValues {
                top: border_width,
                right: 0.0,
                bottom: 0.0,
                left: 0.0,
            }),
            border_color: Some(EdgeValues::uniform(divider)),
            flex_direction: Some(FlexDirection::Row),
            ..Default::default()
        },
        table_label_cell: Style {
            border_width: None,
            border_color: None,
            color: Some(accent),
            ..sheet.table_label_cell.clone()
        },
        table_content_cell: Style {
            border_width: None,
            border_color: None,
            ..sheet.table_content_cell.clone()
        },
        ..sheet
    }
}

/// Caller-owned memo for [`resolve`]. Holds the most recent key and its
/// sheet; a lookup with an equal Format and theme returns the shared sheet
/// without resolving again.
#[derive(Debug, Default)]
pub struct ThemeCache {
    entry: Option<(Format, ThemeKind, Arc<StyleSheet>)>,
    resolutions: usize,
}

impl ThemeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, format: &Format, theme: ThemeKind) -> Arc<StyleSheet> {
        if let Some((cached_format, cached_theme, sheet)) = &self.entry {
            if *cached_theme == theme && cached_format == format {
                return Arc::clone(sheet);
            }
        }
        let sheet = Arc::new(resolve(format, theme));
        self.entry = Some((format.clone(), theme, Arc::clone(&sheet)));
        self.resolutions += 1;
        sheet
    }

    /// How many times the cache had to resolve a sheet.
    pub fn resolutions(&self) -> usize {
        self.resolutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_weight_fallback() {
        assert_eq!(font_weight_value("normal"), 400);
        assert_eq!(font_weight_value("medium"), 500);
        assert_eq!(font_weight_value("semibold"), 600);
        assert_eq!(font_weight_value("bold"), 700);
        assert_eq!(font_weight_value("extra-heavy"), 400);
        assert_eq!(font_weight_value(""), 400);
    }

    #[test]
    fn test_derived_sizes_follow_base() {
        let format = Format {
            font_size: 13.0,
            ..Default::default()
        };
        let sheet = resolve(&format, ThemeKind::Classic);
        assert_eq!(sheet.small.font_size, Some(11.0));
        assert_eq!(sheet.extra_small_size, 9.0);
        assert_eq!(sheet.body.font_size, Some(13.0));
    }

    #[test]
    fn test_invalid_numbers_use_defaults() {
        let format = Format {
            font_size: f64::NAN,
            line_height: -3.0,
            margin: 10_000.0,
            ..Default::default()
        };
        let sheet = resolve(&format, ThemeKind::Classic);
        assert_eq!(sheet.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(sheet.page.line_height, Some(DEFAULT_LINE_HEIGHT));
        assert_eq!(sheet.page_margin, Edges::uniform(DEFAULT_MARGIN));
    }

    #[test]
    fn test_unknown_color_falls_back_to_blue() {
        let format = Format {
            color: "chartreuse".to_string(),
            ..Default::default()
        };
        let sheet = resolve(&format, ThemeKind::Modern);
        assert_eq!(sheet.accent, Color::hex("#2563eb"));
    }

    #[test]
    fn test_unknown_border_style_falls_back_to_thin() {
        let format = Format {
            border_style: "dotted".to_string(),
            ..Default::default()
        };
        let sheet = resolve(&format, ThemeKind::Classic);
        assert_eq!(sheet.border_width, 0.5);
        let thick = resolve(
            &Format {
                border_style: "thick".to_string(),
                ..Default::default()
            },
            ThemeKind::Classic,
        );
        assert_eq!(thick.border_width, 2.0);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let format = Format::default();
        assert_eq!(
            resolve(&format, ThemeKind::Modern),
            resolve(&format, ThemeKind::Modern)
        );
    }

    #[test]
    fn test_modern_header_is_centered_uppercase() {
        let format = Format {
            letter_spacing: 0.5,
            ..Default::default()
        };
        let sheet = resolve(&format, ThemeKind::Modern);
        assert_eq!(sheet.title.text_transform, Some(TextTransform::Uppercase));
        assert_eq!(sheet.title.text_align, Some(TextAlign::Center));
        assert_eq!(sheet.title.letter_spacing, Some(2.5));
        assert_eq!(sheet.header_separator.background_color, Some(sheet.accent));

        let classic = resolve(&format, ThemeKind::Classic);
        assert_eq!(classic.title.text_transform, None);
        assert_eq!(classic.header_separator.width, Some(Dimension::Percent(100.0)));
    }

    #[test]
    fn test_cache_reuses_sheet_until_format_changes() {
        let mut cache = ThemeCache::new();
        let mut format = Format::default();

        let first = cache.get(&format, ThemeKind::Classic);
        let second = cache.get(&format, ThemeKind::Classic);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.resolutions(), 1);

        format.font_size = 12.0;
        let third = cache.get(&format, ThemeKind::Classic);
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(third.font_size, 12.0);

        cache.get(&format, ThemeKind::Modern);
        assert_eq!(cache.resolutions(), 3);
    }
}
