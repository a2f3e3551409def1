use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Datelike;

use super::blocks::lottie::LottiePlayer;
use super::document::{Document, Viewport};
use super::lightbox::{Lightbox, ScrollLock};
use super::navigator::{NavigationController, SectionNavigator};
use super::observer::{ActivationBand, Subscription, ViewportObserver};
use crate::config::{Config, DisplayConfig, ThemeMode};
use crate::content::{ContentStore, HomeCard};
use crate::layout_constants::{
    MAX_CONTENT_WIDTH, NAVBAR_HEIGHT, SIDE_NAV_MIN_TERMINAL_WIDTH, SIDE_NAV_WIDTH,
    STATUS_BAR_HEIGHT, STICKY_TABS_HEIGHT,
};
use crate::route::Route;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer. Components receive slices
/// of this state as props.
#[derive(Debug)]
pub struct AppState {
    pub content: Arc<ContentStore>,
    pub config: Config,
    /// Current theme; starts from the config and toggles at runtime
    pub theme_mode: ThemeMode,
    pub display: DisplayConfig,
    pub route: Route,
    pub page: PageState,
    /// Terminal size
    pub width: u16,
    pub height: u16,
    /// Set by the runtime from its clock before every action
    pub now: Instant,
    pub next_mount: u64,
    pub scroll_lock: ScrollLock,
    pub status_message: Option<String>,
    /// Footer year
    pub year: i32,
}

impl AppState {
    pub fn new(content: Arc<ContentStore>, config: Config, now: Instant) -> Self {
        let theme_mode = config.theme.mode;
        let display = DisplayConfig::with_mode(&config.theme, theme_mode);
        let scroll_lock = ScrollLock::new();
        Self {
            content,
            theme_mode,
            display,
            route: Route::Home,
            page: PageState::unmounted(scroll_lock.clone()),
            width: 80,
            height: 24,
            now,
            next_mount: 0,
            scroll_lock,
            status_message: None,
            year: chrono::Local::now().year(),
            config,
        }
    }

    /// Whether the work side nav fits next to the page
    pub fn shows_side_nav(&self) -> bool {
        matches!(self.route, Route::Work(_)) && self.width >= SIDE_NAV_MIN_TERMINAL_WIDTH
    }

    /// Width available to the page body
    pub fn body_width(&self) -> u16 {
        if self.shows_side_nav() {
            self.width.saturating_sub(SIDE_NAV_WIDTH)
        } else {
            self.width
        }
    }

    /// Width the page document is laid out at
    pub fn content_width(&self) -> u16 {
        self.body_width().min(MAX_CONTENT_WIDTH).max(1)
    }

    /// Rows of chrome around the page body
    pub fn chrome_height(&self) -> u16 {
        let tabs = if self.route.is_detail() { STICKY_TABS_HEIGHT } else { 0 };
        NAVBAR_HEIGHT + STATUS_BAR_HEIGHT + tabs
    }

    pub fn viewport_height(&self) -> u16 {
        self.height.saturating_sub(self.chrome_height())
    }

    pub fn band(&self) -> ActivationBand {
        ActivationBand::from_config(&self.config.navigation)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(ContentStore::default()), Config::default(), Instant::now())
    }
}

/// Identifier of one page mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MountId(pub u64);

/// Route-specific page state
#[derive(Debug)]
pub enum PageKind {
    Home {
        cards: Vec<HomeCard>,
        selected: usize,
    },
    About,
    Resume,
    Redesigns,
    Project {
        project_id: String,
        sections: SectionNavigator,
    },
    Work {
        company_id: String,
        nav: NavigationController,
    },
}

/// Everything that lives exactly as long as one mounted route
#[derive(Debug)]
pub struct PageState {
    pub mount: MountId,
    pub kind: PageKind,
    pub document: Document,
    pub scroll: ScrollState,
    pub observer: ViewportObserver,
    pub subscriptions: Vec<Subscription>,
    /// Lottie players by slot key, created once per mount
    pub lotties: HashMap<String, LottiePlayer>,
    pub lightbox: Lightbox,
    pub last_tick: Option<Instant>,
}

impl PageState {
    /// Empty page used before the first route is mounted
    pub fn unmounted(lock: ScrollLock) -> Self {
        Self::new(
            MountId::default(),
            PageKind::Home {
                cards: Vec::new(),
                selected: 0,
            },
            ActivationBand::default(),
            lock,
        )
    }

    pub fn new(mount: MountId, kind: PageKind, band: ActivationBand, lock: ScrollLock) -> Self {
        Self {
            mount,
            kind,
            document: Document::default(),
            scroll: ScrollState::default(),
            observer: ViewportObserver::new(band),
            subscriptions: Vec::new(),
            lotties: HashMap::new(),
            lightbox: Lightbox::new(lock),
            last_tick: None,
        }
    }
}

impl Drop for PageState {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    pub viewport: Viewport,
    pub animation: Option<ScrollAnimation>,
}

/// Smooth scroll between two offsets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub from: u16,
    pub to: u16,
    pub started: Instant,
    pub duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: u16, to: u16, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// Offset at `now`, eased out
    pub fn offset_at(&self, now: Instant) -> u16 {
        if self.duration.is_zero() || self.is_done(now) {
            return self.to;
        }
        let t = now.saturating_duration_since(self.started).as_secs_f64()
            / self.duration.as_secs_f64();
        let eased = 1.0 - (1.0 - t).powi(3);
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        (from + (to - from) * eased).round() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_animation_eases_to_target() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(0, 100, start, Duration::from_millis(600));

        assert_eq!(anim.offset_at(start), 0);
        let mid = anim.offset_at(start + Duration::from_millis(300));
        assert!(mid > 50 && mid < 100, "ease-out passes halfway early, got {}", mid);
        assert_eq!(anim.offset_at(start + Duration::from_millis(600)), 100);
        assert!(anim.is_done(start + Duration::from_millis(700)));
    }

    #[test]
    fn test_scroll_animation_upwards() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(80, 20, start, Duration::from_millis(100));
        let mid = anim.offset_at(start + Duration::from_millis(50));
        assert!(mid < 80 && mid > 20);
        assert_eq!(anim.offset_at(start + Duration::from_secs(1)), 20);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(5, 9, start, Duration::ZERO);
        assert_eq!(anim.offset_at(start), 9);
    }

    #[test]
    fn test_chrome_depends_on_route() {
        let mut state = AppState::default();
        state.height = 30;
        assert_eq!(state.viewport_height(), 30 - NAVBAR_HEIGHT - STATUS_BAR_HEIGHT);

        state.route = Route::Project("p".to_string());
        assert_eq!(
            state.viewport_height(),
            30 - NAVBAR_HEIGHT - STATUS_BAR_HEIGHT - STICKY_TABS_HEIGHT
        );
    }

    #[test]
    fn test_side_nav_only_on_wide_work_pages() {
        let mut state = AppState::default();
        state.width = 120;
        assert!(!state.shows_side_nav());
        assert_eq!(state.content_width(), MAX_CONTENT_WIDTH);

        state.route = Route::Work("acme".to_string());
        assert!(state.shows_side_nav());
        assert_eq!(state.content_width(), 120 - SIDE_NAV_WIDTH);

        state.width = SIDE_NAV_MIN_TERMINAL_WIDTH - 1;
        assert!(!state.shows_side_nav());
    }

    #[test]
    fn test_dropping_page_releases_scroll_lock() {
        let state = AppState::default();
        let lock = state.scroll_lock.clone();
        let mut page = PageState::unmounted(lock.clone());
        page.lightbox.open(
            0,
            vec![crate::content::MediaItem {
                kind: crate::content::MediaKind::Image,
                src: "/a.png".to_string(),
                caption: None,
            }],
        );
        assert!(lock.is_locked());
        drop(page);
        assert!(!lock.is_locked());
    }
}
