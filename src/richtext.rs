//! # Rich Text Adapter
//!
//! Overview, experience descriptions and project details are HTML fragments
//! produced by the editor (bold, italic, underline, strike, links, colored
//! spans, headings, nested lists). Section renderers don't look inside them:
//! they hand the string, untouched, to a [`RichTextAdapter`] and embed the
//! nodes it returns.
//!
//! [`HtmlAdapter`] is the default adapter. It reads the fragment with
//! `quick-xml` in lenient mode and maps it onto Text nodes with styled runs.
//! HTML named entities (`&rsquo;`, `&nbsp;`, ...) are decoded, not just the
//! five XML ones.
//! Malformed markup ends the read early; whatever was collected so far is
//! still returned.

use std::borrow::Cow;

use log::warn;
use quick_xml::escape::resolve_html5_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::model::{Edges, Node, TextRun};
use crate::style::*;

/// Converts an HTML fragment into document nodes.
pub trait RichTextAdapter: Send + Sync {
    /// `base` is the text style of the surrounding block; `accent` colors
    /// links.
    fn to_nodes(&self, html: &str, base: &Style, accent: Color) -> Vec<Node>;
}

/// Default HTML adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlAdapter;

impl RichTextAdapter for HtmlAdapter {
    fn to_nodes(&self, html: &str, base: &Style, accent: Color) -> Vec<Node> {
        let mut builder = Builder::new(base.clone(), accent);
        let mut reader = Reader::from_str(html);
        reader.config_mut().check_end_names = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => builder.open(&e),
                Ok(Event::Empty(e)) => builder.void(&e),
                Ok(Event::End(e)) => {
                    builder.close(&String::from_utf8_lossy(e.local_name().as_ref()).to_ascii_lowercase())
                }
                Ok(Event::Text(t)) => {
                    let text = match t.unescape_with(resolve_html5_entity) {
                        Ok(text) => text,
                        Err(_) => Cow::Owned(String::from_utf8_lossy(&t).into_owned()),
                    };
                    builder.text(&text);
                }
                Ok(Event::CData(t)) => builder.text(&String::from_utf8_lossy(&t)),
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!(
                        "Malformed rich text at byte {}: {}",
                        reader.buffer_position(),
                        e
                    );
                    break;
                }
            }
        }
        builder.finish()
    }
}

#[derive(Debug, Clone, Default)]
struct Inline {
    bold: bool,
    italic: bool,
    underline: bool,
    strike: bool,
    color: Option<Color>,
    href: Option<String>,
    size: Option<f64>,
}

struct ListFrame {
    ordered: bool,
    counter: u32,
}

/// An open element and what it pushed, so closing it can undo exactly that.
struct Frame {
    name: String,
    pushed_inline: bool,
}

struct Builder {
    base: Style,
    accent: Color,
    nodes: Vec<Node>,
    runs: Vec<TextRun>,
    inline: Vec<Inline>,
    frames: Vec<Frame>,
    lists: Vec<ListFrame>,
    /// Marker of the list item whose text is being collected.
    item_marker: Option<(String, usize)>,
}

impl Builder {
    fn new(base: Style, accent: Color) -> Self {
        Self {
            base,
            accent,
            nodes: Vec::new(),
            runs: Vec::new(),
            inline: vec![Inline::default()],
            frames: Vec::new(),
            lists: Vec::new(),
            item_marker: None,
        }
    }

    fn current(&self) -> Inline {
        self.inline.last().cloned().unwrap_or_default()
    }

    fn open(&mut self, e: &BytesStart) {
        let name = String::from_utf8_lossy(e.local_name().as_ref()).to_ascii_lowercase();
        if is_void(&name) {
            self.void(e);
            return;
        }

        let mut next = self.current();
        let pushed_inline = match name.as_str() {
            "strong" | "b" => {
                next.bold = true;
                true
            }
            "em" | "i" => {
                next.italic = true;
                true
            }
            "u" | "ins" => {
                next.underline = true;
                true
            }
            "s" | "strike" | "del" => {
                next.strike = true;
                true
            }
            "a" => {
                next.href = attribute(e, "href");
                if next.href.is_some() {
                    next.color = Some(self.accent);
                    next.underline = true;
                }
                true
            }
            "span" | "font" => {
                if let Some(color) = attribute(e, "style").as_deref().and_then(style_color) {
                    next.color = Some(color);
                }
                if let Some(color) = attribute(e, "color").as_deref().and_then(Color::parse_hex) {
                    next.color = Some(color);
                }
                true
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.flush();
                let body = self.base.font_size.unwrap_or(10.0);
                next.bold = true;
                next.size = Some(match name.as_str() {
                    "h1" => body + 6.0,
                    "h2" => body + 4.0,
                    "h3" => body + 2.0,
                    _ => body,
                });
                true
            }
            "ul" | "ol" => {
                self.flush();
                self.lists.push(ListFrame {
                    ordered: name == "ol",
                    counter: 0,
                });
                false
            }
            "li" => {
                self.flush();
                let depth = self.lists.len().max(1);
                let marker = match self.lists.last_mut() {
                    Some(list) if list.ordered => {
                        list.counter += 1;
                        format!("{}.", list.counter)
                    }
                    _ => "\u{2022}".to_string(),
                };
                self.item_marker = Some((marker, depth));
                false
            }
            "p" | "div" | "blockquote" => {
                self.flush();
                false
            }
            _ => false,
        };
        if pushed_inline {
            self.inline.push(next);
        }
        self.frames.push(Frame {
            name,
            pushed_inline,
        });
    }

    fn void(&mut self, e: &BytesStart) {
        let name = String::from_utf8_lossy(e.local_name().as_ref()).to_ascii_lowercase();
        if name == "br" {
            self.flush();
        }
    }

    fn close(&mut self, name: &str) {
        // Lenient HTML: close up to the matching element, ignore strays.
        let Some(pos) = self.frames.iter().rposition(|f| f.name == name) else {
            return;
        };
        while self.frames.len() > pos {
            let Some(frame) = self.frames.pop() else {
                break;
            };
            if frame.pushed_inline {
                self.inline.pop();
            }
            match frame.name.as_str() {
                "ul" | "ol" => {
                    self.flush();
                    self.lists.pop();
                }
                "li" | "p" | "div" | "blockquote" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                    self.flush();
                }
                _ => {}
            }
        }
    }

    fn text(&mut self, text: &str) {
        let collapsed = collapse_whitespace(text);
        if collapsed.is_empty() {
            return;
        }
        let inline = self.current();
        let style = self.run_style(&inline);
        match self.runs.last_mut() {
            Some(last) if last.style == style && last.href == inline.href => {
                last.content.push_str(&collapsed);
            }
            _ => self.runs.push(TextRun {
                content: collapsed,
                style,
                href: inline.href,
            }),
        }
    }

    fn run_style(&self, inline: &Inline) -> Style {
        Style {
            font_size: inline.size,
            font_weight: inline.bold.then_some(700),
            font_style: inline.italic.then_some(FontStyle::Italic),
            text_decoration: if inline.underline {
                Some(TextDecoration::Underline)
            } else if inline.strike {
                Some(TextDecoration::LineThrough)
            } else {
                None
            },
            color: inline.color,
            ..Default::default()
        }
    }

    /// Close the current paragraph (or list item) into a node.
    fn flush(&mut self) {
        let runs = trim_runs(std::mem::take(&mut self.runs));
        if runs.is_empty() {
            return;
        }
        let marker = self.item_marker.take();
        let paragraph = Node::runs(runs, self.base.clone());
        let node = match marker {
            Some((marker, depth)) => Node::view(
                Style {
                    flex_direction: Some(FlexDirection::Row),
                    gap: Some(4.0),
                    padding: Some(Edges::only_left(10.0 * (depth - 1) as f64)),
                    ..Default::default()
                },
                vec![
                    Node::text(&marker, self.base.clone()),
                    Node {
                        style: self.base.merge(&Style {
                            flex_grow: Some(1.0),
                            ..Default::default()
                        }),
                        ..paragraph
                    },
                ],
            ),
            None => paragraph,
        };
        self.nodes.push(node);
    }

    fn finish(mut self) -> Vec<Node> {
        self.flush();
        self.nodes
    }
}

fn is_void(name: &str) -> bool {
    matches!(name, "br" | "hr" | "img" | "wbr" | "input" | "meta" | "link")
}

fn attribute(e: &BytesStart, key: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref().eq_ignore_ascii_case(key.as_bytes()))
        .and_then(|a| a.unescape_value_with(resolve_html5_entity).ok().map(|v| v.into_owned()))
}

/// Pull a hex `color:` out of an inline `style` attribute.
fn style_color(style: &str) -> Option<Color> {
    style.split(';').find_map(|decl| {
        let (prop, value) = decl.split_once(':')?;
        if prop.trim().eq_ignore_ascii_case("color") {
            Color::parse_hex(value)
        } else {
            None
        }
    })
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_space = false;
    for ch in text.chars() {
        // U+00A0 is kept: it's the editor's way of asking for a hard space.
        if ch.is_whitespace() && ch != '\u{a0}' {
            if !last_space {
                out.push(' ');
            }
            last_space = true;
        } else {
            out.push(ch);
            last_space = false;
        }
    }
    out
}

fn trim_runs(mut runs: Vec<TextRun>) -> Vec<TextRun> {
    if let Some(first) = runs.first_mut() {
        first.content = first.content.trim_start_matches(' ').to_string();
    }
    if let Some(last) = runs.last_mut() {
        last.content = last.content.trim_end_matches(' ').to_string();
    }
    runs.retain(|r| !r.content.is_empty());
    runs
}
