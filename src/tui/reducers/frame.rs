//! Per-frame work: scroll animation, scroll-spy and lottie playback

use std::sync::Arc;
use tracing::{debug, trace};

use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::{AppState, PageKind};

pub fn reduce_frame(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::Tick => Ok(tick(state)),
        Action::LottieLoaded { mount, key, result } => {
            let mut state = state;
            if *mount != state.page.mount {
                debug!("LOTTIE: dropping result for {} from stale {:?}", key, mount);
                return Ok((state, Effect::None));
            }
            match state.page.lotties.get_mut(key) {
                Some(player) => player.on_loaded(result.clone()),
                None => trace!("LOTTIE: no player {}", key),
            }
            Ok((state, Effect::None))
        }
        _ => Err(state),
    }
}

fn tick(state: AppState) -> (AppState, Effect) {
    let mut state = state;
    let now = state.now;
    let content = Arc::clone(&state.content);
    let page = &mut state.page;

    let elapsed = page
        .last_tick
        .map(|last| now.saturating_duration_since(last))
        .unwrap_or_default();
    page.last_tick = Some(now);

    if let Some(animation) = page.scroll.animation {
        page.scroll.viewport.set_offset(animation.offset_at(now));
        if animation.is_done(now) {
            page.scroll.animation = None;
        }
    }

    let changes = page
        .observer
        .evaluate(&page.document.anchors, &page.scroll.viewport);
    match &mut page.kind {
        PageKind::Work { company_id, nav } => {
            if nav.on_visibility(&changes, now) {
                trace!(
                    "NAV: active {:?} / {:?}",
                    nav.active_tab().map(|t| t.tag()),
                    nav.active_project()
                );
            }
            if let Some(company) = content.company_or_first(company_id) {
                nav.reconcile(company, now);
            }
        }
        PageKind::Project { sections, .. } => {
            sections.on_visibility(&changes, now);
        }
        _ => {}
    }

    let mut effects = Vec::new();
    for slot in &page.document.lottie_slots {
        let Some(player) = page.lotties.get_mut(&slot.key) else {
            continue;
        };
        let visible = page.scroll.viewport.is_range_visible(slot.top, slot.height);
        if let Some(path) = player.set_visible(visible) {
            effects.push(Effect::FetchLottie {
                mount: page.mount,
                key: slot.key.clone(),
                path,
            });
        }
        player.advance(elapsed);
    }

    let effect = if effects.is_empty() {
        Effect::None
    } else {
        Effect::Batch(effects)
    };
    (state, effect)
}
