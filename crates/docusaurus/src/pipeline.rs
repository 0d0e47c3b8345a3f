//! The generation run: load the guide set, generate every guide, save the set.

use crate::guide::{generate_guide, render_guide};
use guidegen_core::{GlobalConfig, GuidegenError, Result, load_guide_set, save_guide_set};
use std::path::PathBuf;

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Files written, in generation order.
    pub written: Vec<PathBuf>,
    /// Guides whose file could not be written, with the error.
    pub failed: Vec<(String, GuidegenError)>,
}

impl GenerateReport {
    /// Number of guides processed.
    pub fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }
}

/// Runs the whole pipeline.
///
/// Loading or saving the guide set is fatal. A guide file that cannot be
/// written is logged and reported; its rendered content still goes back into
/// the guide set.
pub fn generate_guides(config: &GlobalConfig) -> Result<GenerateReport> {
    log::info!("generating the full markdown for all guides...");
    let path = config.guide_set_path();
    let mut guides = load_guide_set(&path)?;

    let mut report = GenerateReport::default();
    let mut updated = Vec::with_capacity(guides.cfgs.len());
    for guide in std::mem::take(&mut guides.cfgs) {
        let id = guide.id.clone();
        let (guide, written) = generate_guide(config, guide);
        match written {
            Ok(file) => report.written.push(file),
            Err(err) => {
                log::error!("failed to write guide {id}: {err}");
                report.failed.push((id, err));
            }
        }
        updated.push(guide);
    }
    guides.cfgs = updated;

    save_guide_set(&path, &guides)?;
    log::debug!("updated {}", path.display());
    Ok(report)
}

/// Renders a single guide from the guide set without writing anything.
pub fn preview_guide(config: &GlobalConfig, id: &str) -> Result<String> {
    let guides = load_guide_set(config.guide_set_path())?;
    let guide = guides
        .find(id)
        .ok_or_else(|| GuidegenError::UnknownGuide(id.to_string()))?;
    Ok(render_guide(config, guide))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::fs;
    use tempfile::TempDir;

    fn guide_set() -> Value {
        json!({
            "cfgs": [
                {
                    "id": "root-guide",
                    "title": "Root",
                    "sidebar_label": "Root",
                    "description": "At the root.",
                    "toc_max_heading_level": 4,
                    "add_tabs_support": false,
                    "use_description": true,
                    "file_dir": "/",
                    "file_name": "root.md",
                    "sections": [
                        { "type": "p", "node": { "id": "p1", "markdown_content": "Root body.", "ssdi": [] } }
                    ],
                    "markdown_content": "stale"
                },
                {
                    "id": "nested-guide",
                    "title": "Nested",
                    "sidebar_label": "Nested",
                    "sidebar_position": 1,
                    "description": "Nested.",
                    "slug": "/nested",
                    "toc_max_heading_level": 2,
                    "add_tabs_support": true,
                    "use_description": false,
                    "file_dir": "dev-guide/go",
                    "file_name": "nested.md",
                    "sections": [
                        { "type": "quote", "text": "kept as-is" },
                        { "type": "h2", "node": { "id": "h", "title": "Head", "label": "Head", "markdown_content": "x", "ssdi": ["s"], "tags": ["b", "a"] } }
                    ],
                    "maintainer": "sdk-team"
                }
            ],
            "matched_at": "2024-05-01"
        })
    }

    fn setup(value: &Value) -> (TempDir, GlobalConfig) {
        let dir = TempDir::new().unwrap();
        let config = GlobalConfig {
            root_dir: dir.path().to_path_buf(),
            ..GlobalConfig::default()
        };
        let path = config.guide_set_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, value.to_string()).unwrap();
        (dir, config)
    }

    #[test]
    fn generates_all_guides_and_rewrites_set() {
        let original = guide_set();
        let (dir, config) = setup(&original);

        let report = generate_guides(&config).unwrap();
        assert_eq!(report.total(), 2);
        assert!(report.failed.is_empty());

        let root = dir.path().join("docs").join("root.md");
        let nested = dir.path().join("docs/dev-guide/go/nested.md");
        assert_eq!(report.written, vec![root.clone(), nested.clone()]);

        let root_md = fs::read_to_string(&root).unwrap();
        assert!(root_md.ends_with("At the root.\n\nRoot body.\n\n"));
        let nested_md = fs::read_to_string(&nested).unwrap();
        assert!(nested_md.contains("sidebar_position: 1\n"));
        assert!(nested_md.contains("- nested-guide-a\n- nested-guide-b\n"));

        let rewritten: Value =
            serde_json::from_str(&fs::read_to_string(config.guide_set_path()).unwrap()).unwrap();
        let mut expected = original;
        expected["cfgs"][0]["markdown_content"] = json!(root_md);
        expected["cfgs"][1]["markdown_content"] = json!(nested_md);
        assert_eq!(rewritten, expected);
    }

    #[test]
    fn write_failure_is_not_fatal() {
        let (dir, config) = setup(&guide_set());
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs").join("dev-guide"), "not a directory").unwrap();

        let report = generate_guides(&config).unwrap();
        assert_eq!(report.written.len(), 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "nested-guide");

        let rewritten: Value =
            serde_json::from_str(&fs::read_to_string(config.guide_set_path()).unwrap()).unwrap();
        assert!(rewritten["cfgs"][1]["markdown_content"].is_string());
    }

    #[test]
    fn missing_guide_set_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = GlobalConfig {
            root_dir: dir.path().to_path_buf(),
            ..GlobalConfig::default()
        };
        assert!(matches!(
            generate_guides(&config),
            Err(GuidegenError::Io { .. })
        ));
    }

    #[test]
    fn preview_renders_without_writing() {
        let (dir, config) = setup(&guide_set());
        let out = preview_guide(&config, "root-guide").unwrap();
        assert!(out.starts_with("---\nid: root-guide\n"));
        assert!(!dir.path().join("docs").exists());

        let err = preview_guide(&config, "nope").unwrap_err();
        assert!(matches!(err, GuidegenError::UnknownGuide(id) if id == "nope"));
    }
}
