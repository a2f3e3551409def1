//! Visible window over a laid-out document

use std::ops::Range;

/// Viewport that manages scrolling through document content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Current scroll offset from top
    offset: u16,
    /// Height of the viewport (visible area)
    height: u16,
    /// Total height of the content
    content_height: u16,
}

impl Viewport {
    /// Create a new viewport; the offset is clamped so the last page stays full
    pub fn new(offset: u16, height: u16, content_height: u16) -> Self {
        Self {
            offset: offset.min(content_height.saturating_sub(height)),
            height,
            content_height,
        }
    }

    /// Get the range of visible lines
    pub fn visible_range(&self) -> Range<u16> {
        self.offset..self.offset.saturating_add(self.height).min(self.content_height)
    }

    /// Check if rows `top..top + height` are at least partially visible
    pub fn is_range_visible(&self, top: u16, height: u16) -> bool {
        let visible = self.visible_range();
        top < visible.end && top.saturating_add(height) > visible.start
    }

    /// Largest valid offset
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.height)
    }

    /// Scroll up by a number of lines
    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Scroll down by a number of lines
    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    /// Set a new offset directly
    pub fn set_offset(&mut self, offset: u16) {
        self.offset = offset.min(self.max_offset());
    }

    pub fn is_at_top(&self) -> bool {
        self.offset == 0
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }
}
