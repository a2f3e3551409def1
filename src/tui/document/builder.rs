//! Document builder utilities

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{Anchor, AnchorKind, Document, LottieSlot};

/// Handle returned by `begin_anchor`, closed by `end_anchor`
#[derive(Debug)]
#[must_use]
pub struct OpenAnchor(usize);

/// Builder for constructing documents line by line
#[derive(Debug)]
pub struct DocumentBuilder {
    width: u16,
    lines: Vec<Line<'static>>,
    anchors: Vec<Anchor>,
    lottie_slots: Vec<LottieSlot>,
}

impl DocumentBuilder {
    pub fn new(width: u16) -> Self {
        Self {
            width: width.max(1),
            lines: Vec::new(),
            anchors: Vec::new(),
            lottie_slots: Vec::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Row the next line will land on
    pub fn row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    pub fn line(&mut self, line: Line<'static>) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn lines(&mut self, lines: impl IntoIterator<Item = Line<'static>>) -> &mut Self {
        self.lines.extend(lines);
        self
    }

    pub fn plain(&mut self, text: impl Into<String>) -> &mut Self {
        self.line(Line::raw(text.into()))
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line(Line::default())
    }

    /// Wrapped paragraph in a single style
    pub fn text(&mut self, content: &str, style: Style) -> &mut Self {
        for row in wrap_text(content, self.width as usize) {
            self.lines.push(Line::from(Span::styled(row, style)));
        }
        self
    }

    /// Bold heading followed by an underline of the same width
    pub fn heading(&mut self, content: &str, style: Style) -> &mut Self {
        let style = style.add_modifier(Modifier::BOLD);
        for row in wrap_text(content, self.width as usize) {
            self.lines.push(Line::from(Span::styled(row, style)));
        }
        self
    }

    /// Full-width horizontal rule
    pub fn rule(&mut self, style: Style) -> &mut Self {
        self.line(Line::from(Span::styled(
            "─".repeat(self.width as usize),
            style,
        )))
    }

    /// "Label: value" line, skipped when the value is absent
    pub fn field(&mut self, label: &str, value: Option<&str>, label_style: Style) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.line(Line::from(vec![
                Span::styled(format!("{}: ", label), label_style),
                Span::raw(value.to_string()),
            ]));
        }
        self
    }

    pub fn begin_anchor(&mut self, id: impl Into<String>, kind: AnchorKind) -> OpenAnchor {
        self.anchors.push(Anchor {
            id: id.into(),
            kind,
            top: self.row(),
            height: 0,
        });
        OpenAnchor(self.anchors.len() - 1)
    }

    pub fn end_anchor(&mut self, open: OpenAnchor) {
        let row = self.row();
        if let Some(anchor) = self.anchors.get_mut(open.0) {
            anchor.height = row.saturating_sub(anchor.top).max(1);
        }
    }

    /// Reserve a lottie frame starting at the current row
    pub fn lottie_slot(&mut self, key: impl Into<String>, left: u16, width: u16, height: u16) {
        self.lottie_slots.push(LottieSlot {
            key: key.into(),
            top: self.row(),
            left,
            width,
            height,
        });
    }

    pub fn build(self) -> Document {
        Document {
            lines: self.lines,
            anchors: self.anchors,
            lottie_slots: self.lottie_slots,
            width: self.width,
        }
    }
}

/// Greedy word wrap by display width; words wider than the line are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if current.is_empty() { word_width } else { current_width + 1 + word_width };

            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width + ch_width > width && !current.is_empty() {
                        rows.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
            }
        }

        rows.push(current);
    }

    rows
}
