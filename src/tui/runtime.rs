use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::clock::Clock;
use super::component::{Component, Effect, Element};
use super::effects::LottieEffects;
use super::reducer::reduce;
use super::state::AppState;

/// Component runtime - owns the state and drives actions through the reducer
///
/// The Runtime is responsible for:
/// - Stamping every action with the clock's time
/// - Dispatching actions through the reducer
/// - Executing side effects asynchronously
/// - Building the virtual component tree
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Channel for dispatching actions
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,

    effects: Arc<LottieEffects>,
    clock: Arc<dyn Clock>,
}

impl Runtime {
    /// Create a new runtime. Must be called inside a tokio runtime.
    pub fn new(initial_state: AppState, effects: Arc<LottieEffects>, clock: Arc<dyn Clock>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        // Spawn effect executor task
        let action_tx_clone = action_tx.clone();
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx_clone).await;
        });

        Self {
            state: initial_state,
            action_tx,
            action_rx,
            effect_tx,
            effects,
            clock,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        if !matches!(action, Action::Tick) {
            trace!("ACTION: Dispatching {:?}", action);
        }

        self.state.now = self.clock.now();
        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    /// Execute an effect, converting fetch requests into async work
    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchLottie { mount, key, path } => {
                debug!("EFFECT: fetching lottie {} ({}) for {:?}", key, path, mount);
                let fetch_effect = self.effects.fetch_lottie(mount, key, path);
                let _ = self.effect_tx.send(fetch_effect);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::Async(_) => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Build the virtual element tree from current state
    pub fn build(&self) -> Element {
        use crate::tui::components::App;

        App.view(&self.state)
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Execute effects asynchronously
    ///
    /// Runs in its own tokio task. Completed effects feed actions back into
    /// the runtime's queue.
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Batch(effects) => {
                for e in effects {
                    Self::process_effect_async(e, action_tx);
                }
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
            // Converted by execute_effect() before queueing
            Effect::FetchLottie { key, .. } => {
                tracing::warn!("Lottie fetch {} reached async executor unconverted", key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;
    use crate::tui::blocks::lottie::LottieStatus;
    use crate::tui::clock::ManualClock;
    use crate::tui::effects::test_support::StubProvider;
    use crate::tui::testing::bundled_state;
    use serde_json::json;
    use std::time::Duration;

    fn create_test_runtime(provider: Arc<StubProvider>) -> (Runtime, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let effects = Arc::new(LottieEffects::new(provider, "https://assets.test"));
        let runtime = Runtime::new(bundled_state(100, 30), effects, clock.clone());
        (runtime, clock)
    }

    /// Let spawned effect tasks finish, then drain the queue
    async fn settle(runtime: &mut Runtime) -> usize {
        let mut total = 0;
        for _ in 0..20 {
            tokio::time::sleep(Duration::from_millis(10)).await;
            total += runtime.process_actions();
        }
        total
    }

    #[tokio::test]
    async fn test_dispatch_stamps_clock_time() {
        let (mut runtime, clock) = create_test_runtime(Arc::new(StubProvider::serving(None)));
        clock.advance(Duration::from_secs(5));
        runtime.dispatch(Action::ScrollBy(1));
        assert_eq!(runtime.state().now, clock.now());
    }

    #[tokio::test]
    async fn test_action_queue() {
        let (mut runtime, _clock) = create_test_runtime(Arc::new(StubProvider::serving(None)));

        let tx = runtime.action_sender();
        tx.send(Action::Navigate(Route::About)).unwrap();

        assert_eq!(runtime.process_actions(), 1);
        assert_eq!(runtime.state().route, Route::About);
    }

    #[tokio::test]
    async fn test_effect_action_feeds_back() {
        let (mut runtime, _clock) = create_test_runtime(Arc::new(StubProvider::serving(None)));

        runtime
            .effect_tx
            .send(Effect::Async(Box::pin(async {
                Action::SetStatusMessage(Some("hello".to_string()))
            })))
            .unwrap();
        settle(&mut runtime).await;

        assert_eq!(runtime.state().status_message.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_visible_lottie_is_fetched_once_and_plays() {
        let provider = Arc::new(StubProvider::serving(Some(json!({"fr": 30, "op": 60}))));
        let (mut runtime, clock) = create_test_runtime(provider.clone());

        runtime.dispatch(Action::Navigate(Route::Project("atlas-design-system".to_string())));
        let keys: Vec<String> = runtime
            .state()
            .page
            .document
            .lottie_slots
            .iter()
            .map(|slot| slot.key.clone())
            .collect();
        assert!(!keys.is_empty());

        // Walk the page so every slot becomes visible
        for _ in 0..200 {
            runtime.dispatch(Action::ScrollBy(1));
            runtime.dispatch(Action::Tick);
            clock.advance(Duration::from_millis(16));
        }
        settle(&mut runtime).await;

        let fetched = provider.calls();
        assert!(fetched >= 1);
        assert!(fetched <= keys.len(), "each slot fetches at most once");

        runtime.dispatch(Action::ScrollToTop);
        for _ in 0..60 {
            clock.advance(Duration::from_millis(16));
            runtime.dispatch(Action::Tick);
        }
        settle(&mut runtime).await;
        assert_eq!(provider.calls(), fetched, "revisiting does not refetch");

        let players = &runtime.state().page.lotties;
        let requested: u32 = players.values().map(|player| player.fetches()).sum();
        assert_eq!(requested as usize, fetched);
        for player in players.values().filter(|player| player.fetches() > 0) {
            assert!(matches!(player.status(), LottieStatus::Ready(_)));
        }
    }

    #[tokio::test]
    async fn test_build_returns_component_tree() {
        let (runtime, _clock) = create_test_runtime(Arc::new(StubProvider::serving(None)));
        assert!(matches!(runtime.build(), Element::Container { .. } | Element::Overlay { .. }));
    }
}
