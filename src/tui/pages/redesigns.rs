use ratatui::text::{Line, Span};

use super::{LayoutContext, PageLayout};
use crate::content::{Block, Project};
use crate::tui::blocks::{render_block, write_blocks};
use crate::tui::document::{AnchorKind, DocumentBuilder};

pub fn layout(projects: &[&Project], ctx: &LayoutContext) -> PageLayout {
    let mut b = DocumentBuilder::new(ctx.width);

    b.blank();
    b.heading("Redesigns", ctx.title_style());
    b.text(
        "Old work, revisited. Each pair shows what shipped and what I would ship today.",
        ctx.label_style(),
    );
    b.blank();

    if projects.is_empty() {
        b.text("No redesigns yet.", ctx.label_style());
    }

    for project in projects {
        let Some(redesign) = project.legacy_redesign() else {
            continue;
        };
        let anchor = b.begin_anchor(project.id.clone(), AnchorKind::Project);
        b.rule(ctx.rule_style());
        b.line(Line::from(vec![
            Span::styled("▍ ", ctx.body_style()),
            Span::styled(project.title.clone(), ctx.title_style()),
        ]));
        b.blank();

        let block = Block::Comparison {
            before_image: redesign.before_image.clone(),
            after_image: redesign.after_image.clone(),
            content: redesign.description.clone(),
        };
        let rendered = render_block(&block, &project.id, &ctx.blocks());
        write_blocks(&mut b, rendered.into_iter().collect(), ctx.display);
        b.blank();
        b.end_anchor(anchor);
    }

    PageLayout::plain(b.build())
}
