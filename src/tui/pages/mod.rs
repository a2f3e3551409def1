//! Route layouts
//!
//! Each route lays its content out into a `Document` at a given width. The
//! layout also lists the lottie players the page needs so the page state can
//! create them once per mount.

pub mod home;
pub mod profile;
pub mod project;
pub mod redesigns;
pub mod work;

use ratatui::style::{Modifier, Style};

use super::blocks::RenderContext;
use super::document::Document;
use crate::config::DisplayConfig;
use crate::content::LottieSource;

pub struct LayoutContext<'a> {
    pub width: u16,
    pub asset_base: &'a str,
    pub display: &'a DisplayConfig,
}

impl<'a> LayoutContext<'a> {
    pub fn blocks(&self) -> RenderContext<'a> {
        RenderContext {
            width: self.width,
            asset_base: self.asset_base,
            display: self.display,
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.display.text_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.display.muted_fg)
    }

    pub fn body_style(&self) -> Style {
        Style::default().fg(self.display.text_fg)
    }

    pub fn rule_style(&self) -> Style {
        Style::default().fg(self.display.border_fg)
    }
}

/// A lottie player the page needs
#[derive(Debug, Clone, PartialEq)]
pub struct LottieSpec {
    pub key: String,
    pub source: Option<LottieSource>,
}

#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub document: Document,
    pub lotties: Vec<LottieSpec>,
}

impl PageLayout {
    pub fn plain(document: Document) -> Self {
        Self {
            document,
            lotties: Vec::new(),
        }
    }
}
