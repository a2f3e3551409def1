// Component library exports

pub mod app;
pub mod lightbox_view;
pub mod navbar;
pub mod page_view;
pub mod side_nav;
pub mod status_bar;
pub mod tab_bar;

pub use app::App;
pub use lightbox_view::{LightboxView, LightboxViewProps};
pub use navbar::{Navbar, NavbarProps};
pub use page_view::{PageOverlay, PageView, PageViewProps};
pub use side_nav::{SideNav, SideNavEntry, SideNavProps};
pub use status_bar::{StatusBar, StatusBarProps};
pub use tab_bar::{TabBar, TabBarProps};
