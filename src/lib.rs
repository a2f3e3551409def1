pub mod assets;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod layout_constants;
pub mod route;
pub mod tui;
