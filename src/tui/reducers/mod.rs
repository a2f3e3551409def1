pub mod frame;
pub mod lightbox;
pub mod navigation;
pub mod page;
pub mod scroll;

pub use frame::reduce_frame;
pub use lightbox::reduce_lightbox;
pub use navigation::reduce_navigation;
pub use page::{mount_route, relayout};
pub use scroll::reduce_scroll;
