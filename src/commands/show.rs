use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::content::ContentStore;
use crate::layout_constants::PRINT_WIDTH;
use crate::route::Route;
use crate::tui::reducers::mount_route;
use crate::tui::state::AppState;

/// Lay a route out at print width and return its plain text
///
/// Unknown routes fall back the same way they do in the TUI; the returned
/// note says so.
pub fn render_route(content: Arc<ContentStore>, config: Config, route: Route) -> (String, Option<String>) {
    let mut state = AppState::new(content, config, Instant::now());
    state.width = PRINT_WIDTH;
    mount_route(&mut state, route);

    let mut output = state.page.document.plain_lines().join("\n");
    output.push('\n');
    (output, state.status_message.take())
}

pub fn run(content: Arc<ContentStore>, config: Config, route: &str) -> Result<()> {
    let route: Route = route
        .parse()
        .with_context(|| format!("Cannot show '{}'", route))?;

    let (output, note) = render_route(content, config, route);
    if let Some(note) = note {
        eprintln!("{}", note);
    }
    print!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(route: Route) -> (String, Option<String>) {
        let content = Arc::new(ContentStore::bundled().unwrap());
        render_route(content, Config::default(), route)
    }

    #[test]
    fn test_show_project_prints_sections() {
        let (output, note) = show(Route::Project("atlas-design-system".to_string()));
        assert!(note.is_none());
        assert!(output.contains("Atlas"));
        assert!(output.contains("▍"));
        assert!(output.lines().all(|l| l.chars().count() <= PRINT_WIDTH as usize));
    }

    #[test]
    fn test_show_unknown_project_falls_back_home() {
        let (output, note) = show(Route::Project("missing".to_string()));
        assert!(note.is_some());
        assert!(output.contains("Selected work"));
    }

    #[test]
    fn test_show_rejects_unparseable_route() {
        let content = Arc::new(ContentStore::bundled().unwrap());
        let err = run(content, Config::default(), "nowhere/at/all").unwrap_err();
        assert!(err.to_string().contains("nowhere/at/all"));
    }
}
