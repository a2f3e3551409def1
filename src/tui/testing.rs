//! General test utilities for TUI tests.
//!
//! # Usage
//!
//! ```rust
//! #[cfg(test)]
//! mod tests {
//!     use crate::tui::testing::*;
//!
//!     #[test]
//!     fn test_example() {
//!         let state = bundled_state(RENDER_WIDTH, 24);
//!         // Dispatch actions, render elements...
//!     }
//! }
//! ```

use std::sync::Arc;
use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::component::Element;
use super::reducers::mount_route;
use super::renderer::Renderer;
use super::state::AppState;
use crate::config::{Config, DisplayConfig};
use crate::content::ContentStore;
use crate::route::Route;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Application state over the bundled content, sized like a terminal
///
/// # Panics
///
/// Panics if the bundled content fails to parse (acceptable in test code).
pub fn bundled_state(width: u16, height: u16) -> AppState {
    let content = ContentStore::bundled().expect("bundled content should parse");
    let mut state = AppState::new(Arc::new(content), Config::default(), Instant::now());
    state.width = width;
    state.height = height;
    mount_route(&mut state, Route::Home);
    state
}

/// Render an element tree into a fresh buffer
pub fn render_element(element: Element, width: u16, height: u16, display: &DisplayConfig) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    Renderer::new().render(element, area, &mut buf, display);
    buf
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_lines_reads_rows() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 2));
        buf.set_string(0, 1, "ab", ratatui::style::Style::default());
        assert_eq!(buffer_lines(&buf), vec!["   ".to_string(), "ab ".to_string()]);
        assert_buffer(&buf, &["", "ab"]);
    }

    #[test]
    fn test_bundled_state_has_content() {
        let state = bundled_state(RENDER_WIDTH, 30);
        assert!(!state.content.projects.is_empty());
        assert_eq!((state.width, state.height), (RENDER_WIDTH, 30));
    }
}
