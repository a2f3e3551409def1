//! Laid-out pages
//!
//! Every route is laid out into a `Document`: a flat list of styled lines at
//! a fixed width, plus the named vertical ranges (anchors) that navigation
//! and the viewport observer work against, plus the rectangles reserved for
//! lottie players. Scrolling is a `Viewport` over the document.

pub mod builder;
pub mod viewport;

use ratatui::text::Line;

pub use builder::{wrap_text, DocumentBuilder};
pub use viewport::Viewport;

/// What an anchor marks, which decides the navigation state it drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    /// One project entry of a company work page
    Project,
    /// A platform group of a company work page
    Platform,
    /// A section of a case-study page
    Section,
}

/// A named vertical range of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub id: String,
    pub kind: AnchorKind,
    pub top: u16,
    pub height: u16,
}

impl Anchor {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Rectangle inside a document reserved for an animated lottie frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LottieSlot {
    pub key: String,
    pub top: u16,
    pub left: u16,
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<Anchor>,
    pub lottie_slots: Vec<LottieSlot>,
    pub width: u16,
}

impl Document {
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    pub fn anchor(&self, id: &str) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.id == id)
    }

    pub fn anchors_of(&self, kind: AnchorKind) -> impl Iterator<Item = &Anchor> {
        self.anchors.iter().filter(move |a| a.kind == kind)
    }

    /// Lines inside the viewport, cloned for rendering
    pub fn visible_lines(&self, viewport: &Viewport) -> Vec<Line<'static>> {
        let range = viewport.visible_range();
        self.lines
            .iter()
            .skip(range.start as usize)
            .take(range.len())
            .cloned()
            .collect()
    }

    /// Plain text of every line, trailing whitespace trimmed
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }
}
