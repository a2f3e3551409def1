// Module declarations
pub mod blocks;
pub mod clock;
pub mod components;
pub mod document;
pub mod lightbox;
pub mod navigator;
pub mod observer;
pub mod pages;

// Core modules
pub mod action;
pub mod component;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod reducers;
pub mod renderer;
pub mod runtime;
pub mod state;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use component::{Component, Effect, Element};
pub use effects::LottieEffects;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::assets::provider_for;
use crate::config::Config;
use crate::content::ContentStore;
use crate::route::Route;
use self::clock::SystemClock;

/// Frame interval; every frame dispatches a `Tick`
const FRAME: Duration = Duration::from_millis(33);

/// Restores the terminal when dropped, including on error paths
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

/// Main entry point for TUI mode
pub async fn run(content: Arc<ContentStore>, config: Config, initial: Route) -> Result<(), io::Error> {
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let effects = Arc::new(LottieEffects::new(
        provider_for(&config.asset_base_url),
        config.asset_base_url.clone(),
    ));
    let initial_state = AppState::new(content, config, Instant::now());
    let mut runtime = Runtime::new(initial_state, effects, Arc::new(SystemClock));

    let size = terminal.size()?;
    runtime.dispatch(Action::Resize {
        width: size.width,
        height: size.height,
    });
    runtime.dispatch(Action::Navigate(initial));

    loop {
        // Process any actions from effects first so loaded lotties show this frame
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::trace!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| {
            let element = runtime.build();
            let mut renderer = Renderer::new();
            renderer.render(element, f.area(), f.buffer_mut(), &runtime.state().display);
        })?;

        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = key_to_action(key, runtime.state()) {
                        if action == Action::Quit {
                            tracing::debug!("ACTION: Quitting application");
                            break;
                        }
                        runtime.dispatch(action);
                    }
                }
                Event::Resize(width, height) => {
                    runtime.dispatch(Action::Resize { width, height });
                }
                _ => {}
            }
        }

        runtime.dispatch(Action::Tick);
    }

    terminal.show_cursor()?;
    Ok(())
}
