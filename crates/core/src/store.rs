//! Reading and writing the guide set and the generated guide files.

use crate::config::GlobalConfig;
use crate::error::{GuidegenError, Result};
use crate::model::{GuideConfig, GuideSet};
use std::fs;
use std::path::{Path, PathBuf};

/// `file_dir` value placing a guide directly in the content directory.
pub const ROOT_FILE_DIR: &str = "/";

/// Loads the guide set. A missing or malformed file is an error.
pub fn load_guide_set(path: impl AsRef<Path>) -> Result<GuideSet> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|err| GuidegenError::io(path, err))?;
    serde_json::from_str(&raw).map_err(|err| GuidegenError::json(path, err))
}

/// Overwrites the guide set file with `guides`.
pub fn save_guide_set(path: impl AsRef<Path>, guides: &GuideSet) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string(guides).map_err(|err| GuidegenError::json(path, err))?;
    fs::write(path, json).map_err(|err| GuidegenError::io(path, err))
}

/// Where a guide's Markdown file goes.
///
/// Relative `file_dir` values are used as-is below the content directory;
/// a leading `/` is not treated as an absolute path.
pub fn guide_output_path(config: &GlobalConfig, guide: &GuideConfig) -> PathBuf {
    let content_dir = config.content_dir();
    if guide.file_dir == ROOT_FILE_DIR {
        content_dir.join(&guide.file_name)
    } else {
        content_dir
            .join(guide.file_dir.trim_start_matches('/'))
            .join(&guide.file_name)
    }
}

/// Writes the guide's rendered `markdown_content`, replacing any previous file.
///
/// A failure to create the parent directories is logged and the write is
/// attempted anyway; only the write itself reports an error.
pub fn write_guide(config: &GlobalConfig, guide: &GuideConfig) -> Result<PathBuf> {
    let path = guide_output_path(config, guide);
    if let Some(parent) = path.parent()
        && let Err(err) = fs::create_dir_all(parent)
    {
        log::error!("failed to create {}: {}", parent.display(), err);
    }

    let contents = guide.markdown_content.as_deref().unwrap_or_default();
    fs::write(&path, contents).map_err(|err| GuidegenError::io(&path, err))?;
    Ok(path)
}
