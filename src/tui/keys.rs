/// Keyboard event to action mapping
///
/// Converts crossterm KeyEvents into Actions. The lightbox captures every
/// key while it is open; otherwise keys map per route.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::action::Action;
use super::state::{AppState, PageKind};
use crate::content::HOME_COLUMNS;
use crate::route::Route;

/// Handle keys while the lightbox is open; everything else is swallowed
fn handle_lightbox_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Right => Some(Action::LightboxNext),
        KeyCode::Left => Some(Action::LightboxPrevious),
        KeyCode::Esc => Some(Action::LightboxClose),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(Action::LightboxSelect(index))
        }
        KeyCode::Char('q') if key.modifiers.is_empty() => Some(Action::Quit),
        _ => None,
    }
}

/// Handle global keys that work on every route
fn handle_global_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='3') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Route::NAVBAR
                .get(index)
                .map(|(_, route)| Action::Navigate(route.clone()))
        }
        KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('g') => Some(Action::ScrollToTop),
        KeyCode::Char('G') => Some(Action::ScrollToBottom),
        KeyCode::PageDown => Some(Action::ScrollPage { forward: true }),
        KeyCode::PageUp => Some(Action::ScrollPage { forward: false }),
        KeyCode::Char('j') => Some(Action::ScrollBy(1)),
        KeyCode::Char('k') => Some(Action::ScrollBy(-1)),
        KeyCode::Enter => Some(Action::Activate),
        _ => None,
    }
}

/// Arrows move the card selection on the home grid; cards are dealt
/// round-robin, so Up/Down step a whole row
fn handle_home_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Left => Some(Action::HomeMove(-1)),
        KeyCode::Right => Some(Action::HomeMove(1)),
        KeyCode::Up => Some(Action::HomeMove(-(HOME_COLUMNS as i32))),
        KeyCode::Down => Some(Action::HomeMove(HOME_COLUMNS as i32)),
        _ => None,
    }
}

/// Tab bar and project jumps on detail pages
fn handle_detail_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PreviousTab),
        KeyCode::Char(']') => Some(Action::NextProject),
        KeyCode::Char('[') => Some(Action::PreviousProject),
        KeyCode::Down => Some(Action::ScrollBy(1)),
        KeyCode::Up => Some(Action::ScrollBy(-1)),
        _ => None,
    }
}

pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?} on {}", key.code, state.route);

    if state.page.lightbox.is_open() {
        return handle_lightbox_keys(key);
    }

    let routed = match &state.page.kind {
        PageKind::Home { .. } => handle_home_keys(key),
        PageKind::Project { .. } | PageKind::Work { .. } => handle_detail_keys(key),
        _ => match key.code {
            KeyCode::Down => Some(Action::ScrollBy(1)),
            KeyCode::Up => Some(Action::ScrollBy(-1)),
            _ => None,
        },
    };

    routed.or_else(|| handle_global_keys(key))
}
