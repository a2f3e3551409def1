use tracing::debug;

use crate::content::{Block, MediaItem, MediaKind};
use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::pages::work::visible_media;
use crate::tui::state::{AppState, PageKind};

pub fn reduce_lightbox(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    let mut state = state;
    match action {
        Action::OpenLightbox(index) => open_lightbox(&mut state, *index),
        Action::LightboxNext => state.page.lightbox.next(),
        Action::LightboxPrevious => state.page.lightbox.previous(),
        Action::LightboxSelect(index) => state.page.lightbox.select(*index),
        Action::LightboxClose => state.page.lightbox.close(),
        _ => return Err(state),
    }
    Ok((state, Effect::None))
}

/// Open the lightbox over the media of whatever is active on the page
pub fn open_lightbox(state: &mut AppState, index: usize) {
    let media = active_media(state);
    if media.is_empty() {
        debug!("LIGHTBOX: nothing to show on {}", state.route);
        state.status_message = Some("No media here".to_string());
        return;
    }
    state.page.lightbox.open(index, media);
}

/// Media of the active work project, or every image of a case study
pub fn active_media(state: &AppState) -> Vec<MediaItem> {
    match &state.page.kind {
        PageKind::Work { company_id, nav } => {
            let (Some(company), Some(tab), Some(active)) = (
                state.content.company_or_first(company_id),
                nav.active_tab(),
                nav.active_project(),
            ) else {
                return Vec::new();
            };
            company
                .projects_for(tab)
                .iter()
                .find(|p| p.id == active)
                .map(|p| visible_media(tab, p).to_vec())
                .unwrap_or_default()
        }
        PageKind::Project { project_id, .. } => state
            .content
            .project(project_id)
            .map(|project| {
                project
                    .sections()
                    .iter()
                    .flat_map(|section| section.blocks.iter())
                    .flat_map(images_of)
                    .collect()
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

fn images_of(block: &Block) -> Vec<MediaItem> {
    let image = |url: &str, caption: &Option<String>| MediaItem {
        kind: MediaKind::Image,
        src: url.to_string(),
        caption: caption.clone(),
    };
    match block {
        Block::Image { url, caption, .. } if !url.is_empty() => vec![image(url, caption)],
        Block::Grid { images, .. } => images
            .iter()
            .filter(|i| !i.url.is_empty())
            .map(|i| image(&i.url, &i.caption))
            .collect(),
        _ => Vec::new(),
    }
}
