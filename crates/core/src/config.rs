//! Run configuration.

use crate::error::{GuidegenError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that enables debug source-location markers.
pub const DEBUG_HELPERS_ENV: &str = "DEBUG_HELPERS";

/// Paths and switches for one generation run.
///
/// Resolved once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Project root; also stripped from source locations in debug markers.
    pub root_dir: PathBuf,
    /// Directory (relative to the root) holding intermediate JSON files.
    pub temp_write_dir: PathBuf,
    /// File name of the guide set inside `temp_write_dir`.
    pub attached_nodes_file_name: String,
    /// Directory (relative to the root) that receives generated Markdown.
    pub content_write_dir: PathBuf,
    /// Wrap every section in a `<SourceFile>` marker.
    #[serde(default)]
    pub debug_helpers: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            temp_write_dir: PathBuf::from(".tmp"),
            attached_nodes_file_name: "guide_configs_with_attached_nodes.json".to_string(),
            content_write_dir: PathBuf::from("docs"),
            debug_helpers: false,
        }
    }
}

impl GlobalConfig {
    /// Reads a JSON configuration file. Unknown keys are ignored.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| GuidegenError::io(path, err))?;
        serde_json::from_str(&raw).map_err(|err| GuidegenError::json(path, err))
    }

    /// `<root>/<temp_write_dir>/<attached_nodes_file_name>`
    pub fn guide_set_path(&self) -> PathBuf {
        self.root_dir
            .join(&self.temp_write_dir)
            .join(&self.attached_nodes_file_name)
    }

    /// `<root>/<content_write_dir>`
    pub fn content_dir(&self) -> PathBuf {
        self.root_dir.join(&self.content_write_dir)
    }

    /// Strips the project root from the front of a source path. Paths outside
    /// the root are returned unchanged.
    pub fn relative_source(&self, file_path: &str) -> String {
        let root = self.root_dir.to_string_lossy();
        let root = root.trim_end_matches('/');
        match file_path.strip_prefix(root) {
            Some(rest) if !root.is_empty() && (rest.is_empty() || rest.starts_with('/')) => {
                rest.to_string()
            }
            _ => file_path.to_string(),
        }
    }
}

/// Interprets the `DEBUG_HELPERS` toggle: on only for a case-insensitive `true`.
pub fn debug_helpers_enabled(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}
