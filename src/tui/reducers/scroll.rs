use std::time::{Duration, Instant};
use tracing::trace;

use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::observer::ActivationBand;
use crate::tui::state::{AppState, PageState, ScrollAnimation, ScrollState};

/// Handle page scrolling; ignored while the scroll lock is held
pub fn reduce_scroll(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    if !matches!(
        action,
        Action::ScrollBy(_) | Action::ScrollPage { .. } | Action::ScrollToTop | Action::ScrollToBottom
    ) {
        return Err(state);
    }

    let mut state = state;
    if state.scroll_lock.is_locked() {
        trace!("SCROLL: locked, ignoring {:?}", action);
        return Ok((state, Effect::None));
    }

    let now = state.now;
    let duration = state.config.navigation.scroll_animation();
    let scroll = &mut state.page.scroll;
    match action {
        Action::ScrollBy(delta) => {
            scroll.animation = None;
            let lines = u16::try_from(delta.unsigned_abs()).unwrap_or(u16::MAX);
            if *delta < 0 {
                scroll.viewport.scroll_up(lines);
            } else {
                scroll.viewport.scroll_down(lines);
            }
        }
        Action::ScrollPage { forward } => {
            scroll.animation = None;
            let page = scroll.viewport.height().saturating_sub(2).max(1);
            if *forward {
                scroll.viewport.scroll_down(page);
            } else {
                scroll.viewport.scroll_up(page);
            }
        }
        Action::ScrollToTop => animate_to(scroll, 0, now, duration),
        Action::ScrollToBottom => {
            scroll.animation = None;
            scroll.viewport.scroll_to_bottom();
        }
        _ => {}
    }
    Ok((state, Effect::None))
}

/// Start a smooth scroll from the current offset to `target` (clamped)
pub fn animate_to(scroll: &mut ScrollState, target: u16, now: Instant, duration: Duration) {
    let target = target.min(scroll.viewport.max_offset());
    let from = scroll.viewport.offset();
    if from == target {
        scroll.animation = None;
        return;
    }
    trace!("SCROLL: animate {} -> {}", from, target);
    scroll.animation = Some(ScrollAnimation::new(from, target, now, duration));
}

/// Smooth scroll so the anchor sits at the start of the activation band
pub fn scroll_to_anchor(
    page: &mut PageState,
    anchor_id: &str,
    band: ActivationBand,
    now: Instant,
    duration: Duration,
) -> bool {
    let Some(anchor) = page.document.anchor(anchor_id) else {
        return false;
    };
    let target = band.offset_for(anchor.top, page.scroll.viewport.height());
    animate_to(&mut page.scroll, target, now, duration);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;
    use crate::tui::reducers::mount_route;
    use crate::tui::testing::bundled_state;

    fn project_state() -> AppState {
        let mut state = bundled_state(80, 30);
        mount_route(&mut state, Route::Project("atlas-design-system".to_string()));
        state
    }

    fn reduce(state: AppState, action: Action) -> AppState {
        match reduce_scroll(state, &action) {
            Ok((state, _)) => state,
            Err(_) => panic!("scroll action not handled: {:?}", action),
        }
    }

    #[test]
    fn test_scroll_by_lines() {
        let state = reduce(project_state(), Action::ScrollBy(5));
        assert_eq!(state.page.scroll.viewport.offset(), 5);
        let state = reduce(state, Action::ScrollBy(-9));
        assert_eq!(state.page.scroll.viewport.offset(), 0);
    }

    #[test]
    fn test_scroll_page_and_bottom() {
        let state = reduce(project_state(), Action::ScrollPage { forward: true });
        let page = state.viewport_height() - 2;
        assert_eq!(state.page.scroll.viewport.offset(), page);

        let state = reduce(state, Action::ScrollToBottom);
        assert!(state.page.scroll.viewport.is_at_bottom());
    }

    #[test]
    fn test_scroll_to_top_animates() {
        let mut state = reduce(project_state(), Action::ScrollBy(20));
        state = reduce(state, Action::ScrollToTop);
        let animation = state.page.scroll.animation.expect("animation should start");
        assert_eq!((animation.from, animation.to), (20, 0));
        // Offset only moves on ticks
        assert_eq!(state.page.scroll.viewport.offset(), 20);
    }

    #[test]
    fn test_scroll_ignored_while_locked() {
        let state = project_state();
        let _guard = state.scroll_lock.acquire();
        let state = reduce(state, Action::ScrollBy(5));
        assert_eq!(state.page.scroll.viewport.offset(), 0);
    }

    #[test]
    fn test_other_actions_pass_through() {
        assert!(reduce_scroll(project_state(), &Action::Tick).is_err());
    }

    #[test]
    fn test_scroll_to_anchor_targets_band_start() {
        let mut state = project_state();
        let now = state.now;
        let band = state.band();
        let anchor = state.page.document.anchor("components").unwrap().clone();

        assert!(scroll_to_anchor(&mut state.page, "components", band, now, Duration::from_millis(600)));
        let animation = state.page.scroll.animation.unwrap();
        let height = state.page.scroll.viewport.height();
        assert_eq!(animation.to, band.offset_for(anchor.top, height));

        assert!(!scroll_to_anchor(&mut state.page, "nope", band, now, Duration::ZERO));
    }
}
