pub mod list;
pub mod show;

use anyhow::{Context, Result};
use std::path::Path;

use crate::content::ContentStore;

/// Load content from a directory, or the bundled content when none is given
pub fn load_content(dir: Option<&Path>) -> Result<ContentStore> {
    match dir {
        Some(dir) => ContentStore::from_dir(dir)
            .with_context(|| format!("Failed to load content from {}", dir.display())),
        None => ContentStore::bundled().context("Bundled content is malformed"),
    }
}
