//! Location of the compiled dashboard bundle.

use std::path::PathBuf;

use serde::Deserialize;

/// Where the dashboard bundle lives on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory produced by the dashboard build (`trunk build --release`).
    pub dir: PathBuf,
    /// Entry document served for every path without a matching file.
    pub index: String,
}

impl AssetConfig {
    /// Absolute-or-relative path of the entry document.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.dir.join(&self.index)
    }

    /// Whether the entry document exists. The server still starts without it.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.index_path().is_file()
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("crates/adapters/dashboard_leptos/dist"),
            index: "index.html".to_string(),
        }
    }
}
