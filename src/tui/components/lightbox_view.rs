use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::assets::resolve_url;
use crate::config::DisplayConfig;
use crate::content::MediaItem;
use crate::tui::component::{Component, Element, ElementWidget};

/// Widest the lightbox frame grows
const MAX_WIDTH: u16 = 72;
const HEIGHT: u16 = 11;

#[derive(Clone)]
pub struct LightboxViewProps {
    pub media: Vec<MediaItem>,
    pub current: usize,
    pub asset_base: String,
}

/// Modal media viewer drawn over the page
pub struct LightboxView;

impl Component for LightboxView {
    type Props = LightboxViewProps;

    fn view(&self, props: &Self::Props) -> Element {
        if props.media.is_empty() {
            return Element::None;
        }
        Element::Widget(Box::new(LightboxWidget {
            props: props.clone(),
        }))
    }
}

#[derive(Clone)]
struct LightboxWidget {
    props: LightboxViewProps,
}

impl LightboxWidget {
    fn frame(area: Rect) -> Rect {
        let width = area.width.saturating_sub(4).min(MAX_WIDTH);
        let height = area.height.saturating_sub(2).min(HEIGHT);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }

    /// One numbered entry per item; the current one is highlighted
    fn thumbnails(&self, config: &DisplayConfig) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, item) in self.props.media.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if i == self.props.current {
                Style::default()
                    .fg(config.selection_fg)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(config.muted_fg)
            };
            spans.push(Span::styled(format!("[{}] {}", i + 1, item.kind.label()), style));
        }
        Line::from(spans)
    }
}

impl ElementWidget for LightboxWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let Some(item) = self.props.media.get(self.props.current) else {
            return;
        };
        let frame = Self::frame(area);
        if frame.width < 8 || frame.height < 4 {
            return;
        }

        Clear.render(frame, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(config.border_fg))
            .title(format!(
                " {} {} / {} ",
                item.kind.label(),
                self.props.current + 1,
                self.props.media.len()
            ));

        let muted = Style::default().fg(config.muted_fg);
        let lines = vec![
            Line::from(Span::styled(
                format!("▣ {}", resolve_url(&self.props.asset_base, &item.src)),
                Style::default().fg(config.text_fg),
            )),
            Line::from(Span::styled(
                item.caption.clone().unwrap_or_default(),
                muted.add_modifier(Modifier::ITALIC),
            )),
            Line::default(),
            self.thumbnails(config),
            Line::default(),
            Line::from(Span::styled("← → browse · 1-9 pick · Esc close", muted)),
        ];

        Paragraph::new(lines).block(block).render(frame, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
