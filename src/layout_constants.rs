//! Shared layout constants used across CLI and TUI components.
//!
//! This module centralizes common layout values to ensure consistency
//! and make it easier to adjust layouts globally.

/// Navbar rows (labels + rule)
pub const NAVBAR_HEIGHT: u16 = 2;

/// Footer / status bar rows (rule + text)
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Sticky platform or section tab bar rows on detail pages
pub const STICKY_TABS_HEIGHT: u16 = 2;

/// Width of the project side nav on company work pages
pub const SIDE_NAV_WIDTH: u16 = 30;

/// Terminals narrower than this hide the side nav
pub const SIDE_NAV_MIN_TERMINAL_WIDTH: u16 = 90;

/// Rows of one home grid card (borders included)
pub const HOME_CARD_HEIGHT: u16 = 6;

/// Gap between home grid columns
pub const HOME_CARD_GAP: u16 = 2;

/// Scroll offset after which the back-to-top hint shows
pub const BACK_TO_TOP_THRESHOLD: u16 = 10;

/// Width used when printing pages outside the TUI
pub const PRINT_WIDTH: u16 = 80;

/// Widest the page body is laid out, even on wide terminals
pub const MAX_CONTENT_WIDTH: u16 = 110;
