use ratatui::{buffer::Buffer, layout::Rect, text::Line};

use crate::config::DisplayConfig;
use crate::tui::component::{Component, Element, ElementWidget};

/// Lines drawn over the page at a position relative to the viewport top
///
/// `row` is negative when the overlay starts above the viewport.
#[derive(Debug, Clone)]
pub struct PageOverlay {
    pub row: i32,
    pub left: u16,
    pub lines: Vec<Line<'static>>,
}

#[derive(Debug, Clone, Default)]
pub struct PageViewProps {
    pub lines: Vec<Line<'static>>,
    pub overlays: Vec<PageOverlay>,
    /// Width the document was laid out at
    pub width: u16,
}

/// Scrolled page body; lottie frames are drawn over their slots
pub struct PageView;

impl Component for PageView {
    type Props = PageViewProps;

    fn view(&self, props: &Self::Props) -> Element {
        Element::Widget(Box::new(PageViewWidget {
            props: props.clone(),
        }))
    }
}

#[derive(Clone)]
struct PageViewWidget {
    props: PageViewProps,
}

impl ElementWidget for PageViewWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
        let width = self.props.width.min(area.width);
        let x = area.x + (area.width - width) / 2;

        for (i, line) in self.props.lines.iter().enumerate().take(area.height as usize) {
            buf.set_line(x, area.y + i as u16, line, width);
        }

        for overlay in &self.props.overlays {
            for (i, line) in overlay.lines.iter().enumerate() {
                let row = overlay.row + i as i32;
                if row < 0 || row >= i32::from(area.height) || overlay.left >= width {
                    continue;
                }
                buf.set_line(x + overlay.left, area.y + row as u16, line, width - overlay.left);
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
