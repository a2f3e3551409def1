//! Static portfolio content: data contracts and loading

pub mod model;
pub mod store;

pub use model::{
    Block, CompanyWork, GridImage, LegacyRedesign, LottieSource, MediaItem, MediaKind, Platform,
    Profile, Project, ProjectSections, Section, WorkProject,
};
pub use store::{distribute_columns, ContentStore, HomeCard, HOME_COLUMNS};
