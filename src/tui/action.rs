use serde_json::Value;

use super::state::MountId;
use crate::content::Platform;
use crate::route::Route;

/// Global actions
///
/// All state changes happen through actions. Actions are dispatched from
/// key events, from the frame tick and from completed effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Routing
    Navigate(Route),
    /// Esc / Backspace: back to the home route
    Back,
    Quit,

    // Scrolling
    ScrollBy(i32),
    ScrollPage { forward: bool },
    /// Smooth scroll back to the top
    ScrollToTop,
    ScrollToBottom,

    // Sticky navigation (jumps)
    NextTab,
    PreviousTab,
    NextProject,
    PreviousProject,
    JumpToTab(Platform),
    JumpToProject(String),
    JumpToSection(String),

    // Home grid
    HomeMove(i32),
    /// Enter: open the selected card, or the lightbox on detail pages
    Activate,

    // Lightbox
    OpenLightbox(usize),
    LightboxNext,
    LightboxPrevious,
    LightboxSelect(usize),
    LightboxClose,

    // System
    ToggleTheme,
    Resize { width: u16, height: u16 },
    /// Frame tick: animations, scroll-spy and lottie playback
    Tick,
    LottieLoaded {
        mount: MountId,
        key: String,
        result: Result<Value, String>,
    },
    SetStatusMessage(Option<String>),
}
