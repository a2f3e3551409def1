use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::component::{Component, Element, ElementWidget};

#[derive(Clone, Default)]
pub struct StatusBarProps {
    pub year: i32,
    pub name: String,
    pub show_back_to_top: bool,
    pub message: Option<String>,
}

/// StatusBar component - footer line, back-to-top hint and status notes
///
/// Left side: copyright footer
/// Right side: status message and the back-to-top hint
pub struct StatusBar;

impl Component for StatusBar {
    type Props = StatusBarProps;

    fn view(&self, props: &Self::Props) -> Element {
        Element::Widget(Box::new(StatusBarWidget {
            footer: format!("© {} Designed & Built by {}", props.year, props.name),
            right: right_text(props),
        }))
    }
}

fn right_text(props: &StatusBarProps) -> String {
    let mut parts = Vec::new();
    if let Some(message) = &props.message {
        parts.push(message.clone());
    }
    if props.show_back_to_top {
        parts.push("g ↑ back to top".to_string());
    }
    parts.join("  ·  ")
}

#[derive(Clone)]
struct StatusBarWidget {
    footer: String,
    right: String,
}

impl ElementWidget for StatusBarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_string(
            area.x,
            area.y,
            "─".repeat(area.width as usize),
            Style::default().fg(config.border_fg),
        );
        if area.height < 2 {
            return;
        }

        let y = area.y + 1;
        let muted = Style::default().fg(config.muted_fg);
        buf.set_stringn(area.x + 1, y, &self.footer, area.width.saturating_sub(1) as usize, muted);

        let right_width = self.right.width() as u16;
        let footer_end = area.x + 1 + self.footer.width() as u16;
        if right_width > 0 && area.width > right_width + 1 {
            let x = area.x + area.width - right_width - 1;
            // The hint yields to the footer when the terminal is narrow
            if x > footer_end {
                buf.set_string(x, y, &self.right, Style::default().fg(config.selection_fg));
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}
