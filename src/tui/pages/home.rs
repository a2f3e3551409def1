use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

use super::{LayoutContext, PageLayout};
use crate::assets::resolve_url;
use crate::content::{distribute_columns, HomeCard, HOME_COLUMNS};
use crate::layout_constants::{HOME_CARD_GAP, HOME_CARD_HEIGHT};
use crate::tui::blocks::frame::{boxed, side_by_side};
use crate::tui::document::DocumentBuilder;

/// Rows above the card grid
pub const HOME_HEADER_ROWS: u16 = 3;

/// Document row of the top border of a card
pub fn card_top(index: usize) -> u16 {
    let position = (index / HOME_COLUMNS) as u16;
    HOME_HEADER_ROWS + position * (HOME_CARD_HEIGHT + 1)
}

/// Move the selection by `delta` cards, clamped to the grid
pub fn move_selection(selected: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let target = selected as i64 + delta as i64;
    if target < 0 || target >= len as i64 {
        selected.min(len - 1)
    } else {
        target as usize
    }
}

pub fn layout(cards: &[HomeCard], selected: usize, ctx: &LayoutContext) -> PageLayout {
    let display = ctx.display;
    let mut b = DocumentBuilder::new(ctx.width);

    b.blank();
    b.heading("Selected work", ctx.title_style());
    b.blank();

    let card_width = ctx
        .width
        .saturating_sub(HOME_CARD_GAP * (HOME_COLUMNS as u16 - 1))
        / HOME_COLUMNS as u16;

    let columns: Vec<Vec<Line<'static>>> = distribute_columns(cards, HOME_COLUMNS)
        .into_iter()
        .map(|column| {
            let mut lines = Vec::new();
            for (position, (index, card)) in column.into_iter().enumerate() {
                if position > 0 {
                    lines.push(Line::default());
                }
                let is_selected = index == selected;
                let border = if is_selected {
                    Style::default().fg(display.selection_fg)
                } else {
                    Style::default().fg(display.border_fg)
                };
                let title = Style::default()
                    .fg(if is_selected { display.selection_fg } else { display.text_fg })
                    .add_modifier(Modifier::BOLD);
                let cover = card
                    .cover
                    .as_deref()
                    .map(|c| resolve_url(ctx.asset_base, c))
                    .unwrap_or_default();
                lines.extend(boxed(
                    &[
                        (card.title.clone(), title),
                        (card.tags.join(" · "), Style::default().fg(display.muted_fg)),
                        (String::new(), Style::default()),
                        (cover, Style::default().fg(display.muted_fg)),
                    ],
                    card_width,
                    HOME_CARD_HEIGHT,
                    border,
                ));
            }
            lines
        })
        .collect();

    let widths = vec![card_width; HOME_COLUMNS];
    b.lines(side_by_side(columns, &widths, HOME_CARD_GAP));
    b.blank();

    PageLayout::plain(b.build())
}
