use tracing::debug;

use super::action::Action;
use super::component::Effect;
use super::state::AppState;

use crate::tui::reducers::{reduce_frame, reduce_lightbox, reduce_navigation, reduce_scroll};

/// Pure state reducer
///
/// Takes the current state and an action, returns the new state and an
/// optional effect. No I/O happens here; fetches are returned as effects for
/// the runtime to execute.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    let state = match reduce_frame(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_scroll(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_lightbox(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_navigation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::SetStatusMessage(message) => {
            let mut new_state = state;
            new_state.status_message = message;
            (new_state, Effect::None)
        }
        Action::Quit => {
            debug!("ACTION: quit requested");
            (state, Effect::None)
        }
        _ => (state, Effect::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;
    use crate::tui::state::PageKind;
    use crate::tui::testing::bundled_state;

    #[test]
    fn test_actions_reach_their_reducers() {
        let (state, _) = reduce(bundled_state(80, 30), Action::Navigate(Route::Redesigns));
        assert_eq!(state.route, Route::Redesigns);

        let (state, _) = reduce(state, Action::ScrollBy(3));
        assert!(state.page.scroll.viewport.offset() <= 3);

        let (state, effect) = reduce(state, Action::Tick);
        assert!(matches!(effect, Effect::None));
        assert!(state.page.last_tick.is_some());
    }

    #[test]
    fn test_status_message() {
        let (state, _) = reduce(
            bundled_state(80, 30),
            Action::SetStatusMessage(Some("hello".to_string())),
        );
        assert_eq!(state.status_message.as_deref(), Some("hello"));
        let (state, _) = reduce(state, Action::SetStatusMessage(None));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_quit_leaves_state_alone() {
        let (state, effect) = reduce(bundled_state(80, 30), Action::Quit);
        assert!(matches!(effect, Effect::None));
        assert!(matches!(state.page.kind, PageKind::Home { .. }));
    }
}
