use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{LayoutContext, LottieSpec, PageLayout};
use crate::assets::resolve_url;
use crate::config::ThemeMode;
use crate::content::{CompanyWork, LottieSource, MediaItem, MediaKind, Platform, WorkProject};
use crate::tui::blocks::frame::{boxed, fit, side_by_side};
use crate::tui::blocks::lottie::placeholder_lines;
use crate::tui::blocks::CONSTRAINED_WIDTH;
use crate::tui::document::{AnchorKind, DocumentBuilder};

/// Width of one phone-shaped media frame
const PHONE_WIDTH: u16 = 24;
const PHONE_ROWS: u16 = 8;
const WIDE_ROWS: u16 = 5;
const GAP: u16 = 2;

/// Key of the lottie player behind a work media item
pub fn media_key(project_id: &str, index: usize) -> String {
    format!("media:{}:{}", project_id, index)
}

/// Media shown for a project on a platform; website groups only show their
/// first item
pub fn visible_media(platform: Platform, project: &WorkProject) -> &[MediaItem] {
    if platform == Platform::Website {
        &project.media[..project.media.len().min(1)]
    } else {
        &project.media
    }
}

/// Logo variant for the theme: full logo on dark, favicon on light
pub fn logo_for(company: &CompanyWork, mode: ThemeMode) -> Option<&str> {
    match mode {
        ThemeMode::Dark => company.company_logo.as_deref(),
        ThemeMode::Light => company.company_favicon.as_deref(),
    }
}

pub fn layout(company: &CompanyWork, ctx: &LayoutContext) -> PageLayout {
    let mut b = DocumentBuilder::new(ctx.width);
    let mut lotties = Vec::new();
    let label = ctx.label_style();

    b.blank();
    if let Some(logo) = logo_for(company, ctx.display.mode) {
        b.line(Line::from(Span::styled(
            format!("◆ {}", resolve_url(ctx.asset_base, logo)),
            label,
        )));
    }
    b.heading(&company.company_name, ctx.title_style());
    if let Some(description) = &company.company_description {
        b.blank();
        b.text(description, label);
    }
    b.blank();
    b.field("Service", company.company_type.as_deref(), label);
    b.field("Platforms", Some(company.platforms_label().as_str()), label);
    b.field("Role", company.role.as_deref(), label);
    b.field("Period", company.time_period.as_deref(), label);
    b.blank();

    for platform in company.tabs() {
        let group = b.begin_anchor(platform.anchor_id(), AnchorKind::Platform);
        b.rule(ctx.rule_style());
        b.line(Line::from(Span::styled(
            platform.tag().to_uppercase(),
            ctx.title_style(),
        )));
        b.blank();

        for project in company.projects_for(platform) {
            let anchor = b.begin_anchor(project.id.clone(), AnchorKind::Project);
            write_project(&mut b, platform, project, ctx, &mut lotties);
            b.blank();
            b.end_anchor(anchor);
        }
        b.end_anchor(group);
    }

    PageLayout {
        document: b.build(),
        lotties,
    }
}

fn write_project(
    b: &mut DocumentBuilder,
    platform: Platform,
    project: &WorkProject,
    ctx: &LayoutContext,
    lotties: &mut Vec<LottieSpec>,
) {
    let label = ctx.label_style().add_modifier(Modifier::BOLD);

    b.line(Line::from(vec![
        Span::styled("▍ ", ctx.body_style()),
        Span::styled(project.title.clone(), ctx.title_style()),
    ]));
    b.blank();

    let mut paragraph = |title: &str, body: &Option<String>, style: Style| {
        if let Some(body) = body.as_deref().filter(|s| !s.is_empty()) {
            b.line(Line::from(Span::styled(title.to_string(), label)));
            b.text(body, style);
            b.blank();
        }
    };
    paragraph("Problem Statement", &project.problem_statement, ctx.body_style());
    paragraph("Solution", &project.solution, ctx.body_style());
    let quoted = project
        .achievements
        .as_ref()
        .map(|a| format!("\u{201c}{}\u{201d}", a));
    paragraph(
        "Impact & Results",
        &quoted,
        ctx.body_style().add_modifier(Modifier::ITALIC),
    );
    paragraph("Task", &project.task, ctx.label_style());

    let media = visible_media(platform, project);
    if !media.is_empty() {
        write_media(b, platform, &project.id, media, ctx, lotties);
    }
}

fn write_media(
    b: &mut DocumentBuilder,
    platform: Platform,
    project_id: &str,
    media: &[MediaItem],
    ctx: &LayoutContext,
    lotties: &mut Vec<LottieSpec>,
) {
    let (cell_width, rows) = if platform.is_web() {
        (ctx.width.min(CONSTRAINED_WIDTH), WIDE_ROWS)
    } else {
        (PHONE_WIDTH.min(ctx.width), PHONE_ROWS)
    };
    let per_row = if platform.is_web() {
        1
    } else {
        ((ctx.width + GAP) / (cell_width + GAP)).max(1) as usize
    };

    for (chunk_index, chunk) in media.chunks(per_row).enumerate() {
        if chunk_index > 0 {
            b.blank();
        }
        let top_index = chunk_index * per_row;
        let mut cells = Vec::with_capacity(chunk.len());
        for (column, item) in chunk.iter().enumerate() {
            let index = top_index + column;
            if item.kind == MediaKind::Lottie {
                let key = media_key(project_id, index);
                b.lottie_slot(key.clone(), column as u16 * (cell_width + GAP), cell_width, rows);
                lotties.push(LottieSpec {
                    key,
                    source: Some(LottieSource::Url(item.src.clone())),
                });
            }
            cells.push(media_cell(index, item, cell_width, rows, ctx));
        }
        let widths = vec![cell_width; cells.len()];
        b.lines(side_by_side(cells, &widths, GAP));
    }
}

fn media_cell(
    index: usize,
    item: &MediaItem,
    width: u16,
    rows: u16,
    ctx: &LayoutContext,
) -> Vec<Line<'static>> {
    let display = ctx.display;
    let muted = Style::default().fg(display.muted_fg);
    let mut lines = if item.kind == MediaKind::Lottie {
        placeholder_lines(width, rows, None, display)
    } else {
        boxed(
            &[
                (format!("[{}] ▣ {}", index + 1, item.kind.label()), muted),
                (
                    resolve_url(ctx.asset_base, &item.src),
                    Style::default().fg(display.text_fg),
                ),
            ],
            width,
            rows,
            Style::default().fg(display.border_fg),
        )
    };
    lines.push(Line::from(Span::styled(
        fit(item.caption.as_deref().unwrap_or(""), width as usize),
        muted.add_modifier(Modifier::ITALIC),
    )));
    lines
}
