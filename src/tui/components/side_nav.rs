use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::tui::blocks::frame::fit;
use crate::tui::component::{Component, Element, ElementWidget};

#[derive(Debug, Clone, PartialEq)]
pub struct SideNavEntry {
    pub title: String,
    pub media_count: usize,
    pub active: bool,
}

#[derive(Clone, Default)]
pub struct SideNavProps {
    /// Tag of the platform tab the entries belong to
    pub heading: String,
    pub entries: Vec<SideNavEntry>,
}

/// Projects of the active platform tab, next to a work page
pub struct SideNav;

impl Component for SideNav {
    type Props = SideNavProps;

    fn view(&self, props: &Self::Props) -> Element {
        Element::Widget(Box::new(SideNavWidget {
            props: props.clone(),
        }))
    }
}

#[derive(Clone)]
struct SideNavWidget {
    props: SideNavProps,
}

impl ElementWidget for SideNavWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 4 || area.height == 0 {
            return;
        }
        let border = Style::default().fg(config.border_fg);
        for y in area.top()..area.bottom() {
            buf.set_string(area.x, y, "│", border);
        }

        let inner = (area.width - 2) as usize;
        let x = area.x + 2;
        buf.set_string(
            x,
            area.y,
            fit(&self.props.heading.to_uppercase(), inner),
            Style::default().fg(config.muted_fg).add_modifier(Modifier::BOLD),
        );

        for (i, entry) in self.props.entries.iter().enumerate() {
            let y = area.y + 2 + i as u16;
            if y >= area.bottom() {
                break;
            }
            let marker = if entry.active { "▸ " } else { "  " };
            let text = format!("{}{} ({})", marker, entry.title, entry.media_count);
            let style = if entry.active {
                Style::default()
                    .fg(config.selection_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(config.text_fg)
            };
            buf.set_string(x, y, fit(&text, inner), style);
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{assert_buffer, render_element};

    #[test]
    fn test_side_nav_marks_active_project() {
        let props = SideNavProps {
            heading: "Web".to_string(),
            entries: vec![
                SideNavEntry {
                    title: "Dispatch board".to_string(),
                    media_count: 3,
                    active: true,
                },
                SideNavEntry {
                    title: "Yard map".to_string(),
                    media_count: 0,
                    active: false,
                },
            ],
        };
        let display = DisplayConfig::default();
        let buf = render_element(SideNav.view(&props), 24, 5, &display);
        assert_buffer(
            &buf,
            &[
                "│ WEB",
                "│",
                "│ ▸ Dispatch board (3)",
                "│   Yard map (0)",
                "│",
            ],
        );
        assert_eq!(buf[(4, 2)].fg, display.selection_fg);
        assert_eq!(buf[(4, 3)].fg, display.text_fg);
    }
}
