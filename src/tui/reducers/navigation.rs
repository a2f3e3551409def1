use tracing::{debug, trace};

use super::lightbox::open_lightbox;
use super::page::{mount_route, relayout};
use super::scroll::scroll_to_anchor;
use crate::config::DisplayConfig;
use crate::content::Platform;
use crate::layout_constants::HOME_CARD_HEIGHT;
use crate::route::Route;
use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::navigator::JumpTarget;
use crate::tui::pages::home::{card_top, move_selection};
use crate::tui::state::{AppState, PageKind};

/// Handle routing, sticky-navigation jumps, the home grid and theme/size
/// changes
pub fn reduce_navigation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    let mut state = state;
    match action {
        Action::Navigate(route) => {
            mount_route(&mut state, route.clone());
        }
        Action::Back => {
            if state.route != Route::Home {
                mount_route(&mut state, Route::Home);
            }
        }
        Action::NextTab => jump(&mut state, Jump::AdjacentTab(true)),
        Action::PreviousTab => jump(&mut state, Jump::AdjacentTab(false)),
        Action::NextProject => jump(&mut state, Jump::AdjacentProject(true)),
        Action::PreviousProject => jump(&mut state, Jump::AdjacentProject(false)),
        Action::JumpToTab(tab) => jump(&mut state, Jump::Tab(*tab)),
        Action::JumpToProject(id) => jump(&mut state, Jump::Project(id.clone())),
        Action::JumpToSection(id) => jump(&mut state, Jump::Section(id.clone())),
        Action::HomeMove(delta) => home_move(&mut state, *delta),
        Action::Activate => activate(&mut state),
        Action::ToggleTheme => {
            state.theme_mode = state.theme_mode.toggled();
            state.display = DisplayConfig::with_mode(&state.config.theme, state.theme_mode);
            debug!("THEME: switched to {}", state.theme_mode.as_str());
            relayout(&mut state);
        }
        Action::Resize { width, height } => {
            if (state.width, state.height) != (*width, *height) {
                trace!("RESIZE: {}x{}", width, height);
                state.width = *width;
                state.height = *height;
                relayout(&mut state);
            }
        }
        _ => return Err(state),
    }
    Ok((state, Effect::None))
}

enum Jump {
    AdjacentTab(bool),
    AdjacentProject(bool),
    Tab(Platform),
    Project(String),
    Section(String),
}

/// Move the active navigation item and scroll its anchor into the band
fn jump(state: &mut AppState, request: Jump) {
    if state.scroll_lock.is_locked() {
        return;
    }
    let now = state.now;
    let band = state.band();
    let duration = state.config.navigation.scroll_animation();
    let page = &mut state.page;

    let target: Option<JumpTarget> = match (&mut page.kind, request) {
        (PageKind::Work { nav, .. }, Jump::AdjacentTab(forward)) => nav
            .adjacent_tab(forward)
            .and_then(|tab| nav.jump_to_tab(tab, now)),
        (PageKind::Work { nav, .. }, Jump::AdjacentProject(forward)) => nav
            .adjacent_project(forward)
            .and_then(|id| nav.jump_to_project(&id, now)),
        (PageKind::Work { nav, .. }, Jump::Tab(tab)) => nav.jump_to_tab(tab, now),
        (PageKind::Work { nav, .. }, Jump::Project(id)) => nav.jump_to_project(&id, now),
        (PageKind::Project { sections, .. }, Jump::AdjacentTab(forward)) => sections
            .adjacent(forward)
            .and_then(|id| sections.jump_to(&id, now)),
        (PageKind::Project { sections, .. }, Jump::Section(id)) => sections.jump_to(&id, now),
        _ => None,
    };

    if let Some(target) = target {
        scroll_to_anchor(page, &target.anchor_id, band, now, duration);
    }
}

fn home_move(state: &mut AppState, delta: i32) {
    let PageKind::Home { cards, selected } = &mut state.page.kind else {
        return;
    };
    let next = move_selection(*selected, delta, cards.len());
    if next == *selected {
        return;
    }
    *selected = next;
    relayout(state);

    // Keep the selected card on screen
    let top = card_top(next);
    let bottom = top + HOME_CARD_HEIGHT;
    let viewport = &mut state.page.scroll.viewport;
    if top < viewport.offset() {
        viewport.set_offset(top);
    } else if bottom > viewport.offset() + viewport.height() {
        viewport.set_offset(bottom.saturating_sub(viewport.height()));
    }
}

fn activate(state: &mut AppState) {
    let route = match &state.page.kind {
        PageKind::Home { cards, selected } => cards.get(*selected).map(|c| c.route.clone()),
        PageKind::Work { .. } | PageKind::Project { .. } => {
            open_lightbox(state, 0);
            return;
        }
        _ => None,
    };
    if let Some(route) = route {
        mount_route(state, route);
    }
}
