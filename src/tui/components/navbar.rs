use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::route::Route;
use crate::tui::component::{Component, Element, ElementWidget};

#[derive(Clone)]
pub struct NavbarProps {
    pub handle: String,
    pub route: Route,
}

impl NavbarProps {
    /// Index into `Route::NAVBAR` of the highlighted entry
    ///
    /// Project, work and redesign pages all belong to "Work".
    fn active(&self) -> usize {
        match self.route {
            Route::About => 1,
            Route::Resume => 2,
            _ => 0,
        }
    }
}

/// Top bar: owner handle on the left, route links on the right
pub struct Navbar;

impl Component for Navbar {
    type Props = NavbarProps;

    fn view(&self, props: &Self::Props) -> Element {
        Element::Widget(Box::new(NavbarWidget {
            handle: props.handle.clone(),
            active: props.active(),
        }))
    }
}

#[derive(Clone)]
struct NavbarWidget {
    handle: String,
    active: usize,
}

impl ElementWidget for NavbarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let right = area.x + area.width;

        buf.set_stringn(
            area.x + 1,
            area.y,
            &self.handle,
            area.width.saturating_sub(1) as usize,
            Style::default().fg(config.text_fg).add_modifier(Modifier::BOLD),
        );

        // Links are laid out right to left so they stay flush with the edge
        let mut x = right.saturating_sub(1);
        for (i, (label, _)) in Route::NAVBAR.iter().enumerate().rev() {
            let width = label.width() as u16;
            x = x.saturating_sub(width);
            if x <= area.x + self.handle.width() as u16 + 1 {
                break;
            }
            let style = if i == self.active {
                Style::default()
                    .fg(config.selection_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(config.muted_fg)
            };
            buf.set_string(x, area.y, *label, style);
            x = x.saturating_sub(3);
        }

        if area.height > 1 {
            buf.set_string(
                area.x,
                area.y + 1,
                "─".repeat(area.width as usize),
                Style::default().fg(config.border_fg),
            );
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{buffer_lines, render_element};

    fn render(route: Route) -> Buffer {
        let element = Navbar.view(&NavbarProps {
            handle: "samcarter".to_string(),
            route,
        });
        render_element(element, 40, 2, &DisplayConfig::default())
    }

    #[test]
    fn test_navbar_layout() {
        let buf = render(Route::Home);
        let lines = buffer_lines(&buf);
        assert_eq!(lines[0], " samcarter        Work   About   Resume ");
        assert_eq!(lines[1], "─".repeat(40));
    }

    #[test]
    fn test_detail_routes_highlight_work() {
        let display = DisplayConfig::default();
        let buf = render(Route::Work("northwind".to_string()));
        let work_x = buffer_lines(&buf)[0].find("Work").unwrap() as u16;
        assert_eq!(buf[(work_x, 0)].fg, display.selection_fg);

        let buf = render(Route::Resume);
        assert_ne!(buf[(work_x, 0)].fg, display.selection_fg);
    }
}
