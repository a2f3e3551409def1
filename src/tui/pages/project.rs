use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use super::{LayoutContext, LottieSpec, PageLayout};
use crate::content::Project;
use crate::tui::blocks::{render_section, write_blocks, RenderedBlock};
use crate::tui::document::{AnchorKind, DocumentBuilder};

/// Section tabs of a case study: (anchor id, label)
pub fn section_tabs(project: &Project) -> Vec<(String, String)> {
    project
        .sections()
        .iter()
        .map(|s| (s.anchor_id(), s.title.clone()))
        .collect()
}

pub fn layout(project: &Project, ctx: &LayoutContext) -> PageLayout {
    let mut b = DocumentBuilder::new(ctx.width);
    let mut lotties = Vec::new();

    b.blank();
    b.heading(&project.title, ctx.title_style());
    if let Some(summary) = &project.summary {
        b.blank();
        b.text(summary, ctx.label_style());
    }
    b.blank();

    let label = ctx.label_style();
    b.field("Service", project.kind.as_deref(), label);
    b.field("Platforms", project.platforms.as_deref(), label);
    b.field("Roles", project.role.as_deref(), label);
    if !project.tools.is_empty() {
        b.field("Tools", Some(project.tools.join(" · ").as_str()), label);
    }
    b.field("Company", project.company.as_deref(), label);
    b.blank();
    b.rule(ctx.rule_style());
    b.blank();

    for section in project.sections() {
        let anchor = b.begin_anchor(section.anchor_id(), AnchorKind::Section);
        b.line(Line::from(vec![
            Span::styled("▍ ", ctx.body_style()),
            Span::styled(section.title.clone(), ctx.title_style()),
        ]));
        b.blank();
        if let Some(content) = &section.content {
            b.text(content, ctx.label_style());
            b.blank();
        }

        let blocks = render_section(&section, &ctx.blocks());
        lotties.extend(blocks.iter().filter_map(|block| match block {
            RenderedBlock::Lottie { key, source, .. } => Some(LottieSpec {
                key: key.clone(),
                source: source.clone(),
            }),
            _ => None,
        }));
        write_blocks(&mut b, blocks, ctx.display);
        b.blank();
        b.blank();
        b.end_anchor(anchor);
    }

    if project.sections().is_empty() {
        b.text("Nothing to show yet.", ctx.label_style().add_modifier(Modifier::ITALIC));
    }

    PageLayout {
        document: b.build(),
        lotties,
    }
}
