//! Block renderer
//!
//! Turns the typed blocks of one section into document lines. Rendering is a
//! pure function of the section and the render context; lottie blocks only
//! reserve a frame here and are animated by their `LottiePlayer` at draw time.

pub mod frame;
pub mod lottie;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use self::frame::{boxed, fit, side_by_side, wrap_columns};
use self::lottie::{placeholder_lines, rows_for_height};
use super::document::{wrap_text, DocumentBuilder};
use crate::assets::resolve_url;
use crate::config::DisplayConfig;
use crate::content::{Block, GridImage, LottieSource, Section};

/// Widest a non-full image may be drawn
pub const CONSTRAINED_WIDTH: u16 = 72;

const FIGURE_ROWS: u16 = 4;
const GRID_CELL_ROWS: u16 = 4;
const GAP: u16 = 2;

pub struct RenderContext<'a> {
    pub width: u16,
    pub asset_base: &'a str,
    pub display: &'a DisplayConfig,
}

/// One rendered block
#[derive(Debug, Clone)]
pub enum RenderedBlock {
    Text(Vec<Line<'static>>),
    Figure {
        full_width: bool,
        lines: Vec<Line<'static>>,
    },
    Grid {
        columns: usize,
        cells: usize,
        lines: Vec<Line<'static>>,
    },
    Lottie {
        key: String,
        source: Option<LottieSource>,
        rows: u16,
        width: u16,
        caption: Option<String>,
    },
    Comparison(Vec<Line<'static>>),
}

/// Key a lottie block is known by for the lifetime of a page
pub fn lottie_key(section_anchor: &str, block_index: usize) -> String {
    format!("{}#{}", section_anchor, block_index)
}

/// Render the blocks of a section in order; unknown blocks produce nothing
pub fn render_section(section: &Section, ctx: &RenderContext) -> Vec<RenderedBlock> {
    let anchor = section.anchor_id();
    section
        .blocks
        .iter()
        .enumerate()
        .filter_map(|(index, block)| render_block(block, &lottie_key(&anchor, index), ctx))
        .collect()
}

pub fn render_block(block: &Block, key: &str, ctx: &RenderContext) -> Option<RenderedBlock> {
    let display = ctx.display;
    match block {
        Block::Text { content } => Some(RenderedBlock::Text(
            wrap_text(content, ctx.width as usize)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, Style::default().fg(display.text_fg))))
                .collect(),
        )),
        Block::Image {
            url,
            caption,
            width,
        } => {
            let full_width = width.as_deref() == Some("full");
            let box_width = if full_width {
                ctx.width
            } else {
                ctx.width.min(CONSTRAINED_WIDTH)
            };
            Some(RenderedBlock::Figure {
                full_width,
                lines: figure(url, caption.as_deref(), box_width, FIGURE_ROWS, ctx),
            })
        }
        Block::Grid { images, columns } => Some(grid(images, *columns, ctx)),
        Block::Lottie {
            url,
            height,
            caption,
        } => Some(RenderedBlock::Lottie {
            key: key.to_string(),
            source: url.clone(),
            rows: rows_for_height(height.as_deref()),
            width: ctx.width.min(CONSTRAINED_WIDTH),
            caption: caption.clone(),
        }),
        Block::Comparison {
            before_image,
            after_image,
            content,
        } => Some(RenderedBlock::Comparison(comparison(
            before_image,
            after_image,
            content.as_deref(),
            ctx,
        ))),
        Block::Unknown => None,
    }
}

/// Framed image reference with an optional caption line under it
pub fn figure(
    url: &str,
    caption: Option<&str>,
    width: u16,
    rows: u16,
    ctx: &RenderContext,
) -> Vec<Line<'static>> {
    let display = ctx.display;
    let resolved = if url.is_empty() {
        String::new()
    } else {
        resolve_url(ctx.asset_base, url)
    };
    // The URL wraps inside the frame; the frame grows to fit it
    let inner = width.max(4) as usize - 4;
    let mut content = vec![("▣ image".to_string(), Style::default().fg(display.muted_fg))];
    content.extend(
        wrap_columns(&resolved, inner)
            .into_iter()
            .map(|chunk| (chunk, Style::default().fg(display.text_fg))),
    );
    let rows = rows.max(content.len() as u16 + 2);
    let mut lines = boxed(&content, width, rows, Style::default().fg(display.border_fg));
    if let Some(caption) = caption {
        lines.push(caption_line(caption, width, display));
    }
    lines
}

fn caption_line(caption: &str, width: u16, display: &DisplayConfig) -> Line<'static> {
    Line::from(Span::styled(
        fit(caption, width as usize),
        Style::default()
            .fg(display.muted_fg)
            .add_modifier(Modifier::ITALIC),
    ))
}

fn grid(images: &[GridImage], columns: u8, ctx: &RenderContext) -> RenderedBlock {
    let columns = if columns == 3 { 3 } else { 2 };
    let cell_width = ctx
        .width
        .saturating_sub(GAP * (columns as u16 - 1))
        / columns as u16;
    let widths = vec![cell_width; columns];

    let mut lines = Vec::new();
    for (row_index, row) in images.chunks(columns).enumerate() {
        if row_index > 0 {
            lines.push(Line::default());
        }
        let cells: Vec<Vec<Line<'static>>> = row
            .iter()
            .map(|image| {
                figure(
                    &image.url,
                    image.caption.as_deref(),
                    cell_width,
                    GRID_CELL_ROWS,
                    ctx,
                )
            })
            .collect();
        lines.extend(side_by_side(cells, &widths, GAP));
    }

    RenderedBlock::Grid {
        columns,
        cells: images.len(),
        lines,
    }
}

fn comparison(
    before: &str,
    after: &str,
    content: Option<&str>,
    ctx: &RenderContext,
) -> Vec<Line<'static>> {
    let display = ctx.display;
    let mut lines = Vec::new();
    if let Some(content) = content {
        for row in wrap_text(content, ctx.width as usize) {
            lines.push(Line::from(Span::styled(row, Style::default().fg(display.text_fg))));
        }
        lines.push(Line::default());
    }

    let pane_width = ctx.width.saturating_sub(GAP) / 2;
    let labelled = |label: &str, url: &str, color| {
        let mut pane = vec![Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))];
        pane.extend(figure(url, None, pane_width, FIGURE_ROWS, ctx));
        pane
    };

    lines.extend(side_by_side(
        vec![
            labelled("BEFORE", before, display.before_fg),
            labelled("AFTER", after, display.after_fg),
        ],
        &[pane_width, pane_width],
        GAP,
    ));
    lines
}

/// Write rendered blocks into a document, one blank line between blocks
pub fn write_blocks(builder: &mut DocumentBuilder, blocks: Vec<RenderedBlock>, display: &DisplayConfig) {
    for (i, block) in blocks.into_iter().enumerate() {
        if i > 0 {
            builder.blank();
        }
        match block {
            RenderedBlock::Text(lines)
            | RenderedBlock::Figure { lines, .. }
            | RenderedBlock::Grid { lines, .. }
            | RenderedBlock::Comparison(lines) => {
                builder.lines(lines);
            }
            RenderedBlock::Lottie {
                key,
                rows,
                width,
                caption,
                ..
            } => {
                builder.lottie_slot(key, 0, width, rows);
                builder.lines(placeholder_lines(width, rows, None, display));
                if let Some(caption) = caption {
                    builder.line(caption_line(&caption, width, display));
                }
            }
        }
    }
}
