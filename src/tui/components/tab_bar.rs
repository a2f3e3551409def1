use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::component::{Component, Element, ElementWidget};

/// Props for the sticky tab bar of detail pages
#[derive(Clone, Default)]
pub struct TabBarProps {
    pub labels: Vec<String>,
    /// Index of the active tab, driven by the scroll-spy
    pub active: Option<usize>,
}

/// Sticky tab bar: platform tabs on work pages, section tabs on case studies
pub struct TabBar;

impl Component for TabBar {
    type Props = TabBarProps;

    fn view(&self, props: &Self::Props) -> Element {
        Element::Widget(Box::new(TabBarWidget {
            labels: props.labels.clone(),
            active: props.active,
        }))
    }
}

#[derive(Clone)]
struct TabBarWidget {
    labels: Vec<String>,
    active: Option<usize>,
}

impl TabBarWidget {
    /// Build segments for the tab line with separators
    fn build_tab_line(&self, config: &DisplayConfig) -> Vec<(String, Style)> {
        let box_style = Style::default().fg(config.border_fg);
        let mut segments = vec![(" ".to_string(), box_style)];

        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                segments.push((" │ ".to_string(), box_style));
            }
            let style = if self.active == Some(i) {
                Style::default()
                    .fg(config.selection_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(config.muted_fg)
            };
            segments.push((label.clone(), style));
        }

        segments
    }

    /// Separator line with connectors under the tab gaps; the active tab
    /// is underlined with a heavy rule
    fn build_separator_line(&self, area_width: usize, config: &DisplayConfig) -> Vec<(String, Style)> {
        let box_style = Style::default().fg(config.border_fg);
        let active_style = Style::default().fg(config.selection_fg);

        let mut segments = vec![("─".to_string(), box_style)];
        let mut pos = 1;

        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                segments.push(("─┴─".to_string(), box_style));
                pos += 3;
            }
            let width = label.width();
            if self.active == Some(i) {
                segments.push(("━".repeat(width), active_style));
            } else {
                segments.push(("─".repeat(width), box_style));
            }
            pos += width;
        }

        if pos < area_width {
            segments.push(("─".repeat(area_width - pos), box_style));
        }

        segments
    }
}

fn draw_segments(segments: Vec<(String, Style)>, area: Rect, y: u16, buf: &mut Buffer) {
    let right = area.x + area.width;
    let mut x = area.x;
    for (text, style) in segments {
        if x >= right {
            break;
        }
        let (next_x, _) = buf.set_stringn(x, y, &text, (right - x) as usize, style);
        x = next_x;
    }
}

impl ElementWidget for TabBarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if self.labels.is_empty() || area.width == 0 || area.height < 2 {
            return;
        }

        draw_segments(self.build_tab_line(config), area, area.y, buf);
        draw_segments(
            self.build_separator_line(area.width as usize, config),
            area,
            area.y + 1,
            buf,
        );
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}
