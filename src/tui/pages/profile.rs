//! About and resume routes

use ratatui::style::Modifier;

use super::{LayoutContext, PageLayout};
use crate::assets::resolve_url;
use crate::content::Profile;
use crate::tui::blocks::figure;
use crate::tui::document::DocumentBuilder;

const PORTRAIT_WIDTH: u16 = 36;
const PORTRAIT_ROWS: u16 = 6;

pub fn about(profile: &Profile, ctx: &LayoutContext) -> PageLayout {
    let mut b = DocumentBuilder::new(ctx.width);
    let label = ctx.label_style();

    b.blank();
    b.heading(&format!("Hi, I'm {}", profile.name), ctx.title_style());
    b.blank();
    if let Some(portrait) = &profile.portrait {
        b.lines(figure(
            portrait,
            None,
            ctx.width.min(PORTRAIT_WIDTH),
            PORTRAIT_ROWS,
            &ctx.blocks(),
        ));
        b.blank();
    }
    b.text(&profile.about, ctx.body_style());
    b.blank();
    b.field("Email", profile.email.as_deref(), label);
    b.field("Handle", Some(profile.handle.as_str()), label);

    PageLayout::plain(b.build())
}

pub fn resume(profile: &Profile, ctx: &LayoutContext) -> PageLayout {
    let mut b = DocumentBuilder::new(ctx.width);
    let label = ctx.label_style();

    b.blank();
    b.heading("Resume", ctx.title_style());
    b.blank();
    match &profile.resume_url {
        Some(url) => {
            b.text(
                &format!("The full resume of {} is available as a PDF.", profile.name),
                ctx.body_style(),
            );
            b.blank();
            b.field("Download", Some(resolve_url(ctx.asset_base, url).as_str()), label);
        }
        None => {
            b.text(
                "No resume is published right now.",
                label.add_modifier(Modifier::ITALIC),
            );
        }
    }
    b.field("Email", profile.email.as_deref(), label);

    PageLayout::plain(b.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::content::ContentStore;

    fn ctx(display: &DisplayConfig) -> LayoutContext<'_> {
        LayoutContext {
            width: 80,
            asset_base: "https://assets.test",
            display,
        }
    }

    #[test]
    fn test_about_lists_contact() {
        let store = ContentStore::bundled().unwrap();
        let display = DisplayConfig::default();
        let text = about(&store.profile, &ctx(&display)).document.plain_lines();

        assert_eq!(text[1], format!("Hi, I'm {}", store.profile.name));
        assert!(text.iter().any(|l| l == "Email: hello@samcarter.design"));
        assert!(text.iter().any(|l| l.contains("▣ image")));
    }

    #[test]
    fn test_resume_link_is_resolved() {
        let store = ContentStore::bundled().unwrap();
        let display = DisplayConfig::default();
        let text = resume(&store.profile, &ctx(&display)).document.plain_lines();
        assert!(text
            .iter()
            .any(|l| l == "Download: https://assets.test/cv/resume/Sam%20Carter-CV.pdf"));
    }

    #[test]
    fn test_resume_without_url() {
        let display = DisplayConfig::default();
        let text = resume(&Profile::default(), &ctx(&display)).document.plain_lines();
        assert!(text.iter().any(|l| l == "No resume is published right now."));
    }
}
