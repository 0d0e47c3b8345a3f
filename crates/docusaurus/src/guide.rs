//! Whole-guide rendering.

use crate::builder::MarkdownBuilder;
use crate::frontmatter::push_frontmatter;
use crate::section::push_section;
use crate::source_file;
use guidegen_core::{GlobalConfig, GuideConfig, Result, write_guide};
use std::path::PathBuf;

/// Renders a guide: frontmatter followed by every section in order.
///
/// With debug helpers enabled each section is wrapped in a `<SourceFile>`
/// marker naming the file the section's content came from.
pub fn render_guide(config: &GlobalConfig, guide: &GuideConfig) -> String {
    let mut out = MarkdownBuilder::new();
    push_frontmatter(&mut out, config, guide);

    for section in &guide.sections {
        if config.debug_helpers {
            let mut inner = MarkdownBuilder::new();
            push_section(&mut inner, section);
            let location = source_file::section_location(config, section);
            source_file::wrap(&mut out, &location, inner);
        } else {
            push_section(&mut out, section);
        }
    }

    out.finish()
}

/// Renders a guide, stores the result in `markdown_content`, and writes it
/// to its output file.
///
/// The updated guide is returned together with the write outcome so the
/// caller keeps the rendered content even when the file could not be written.
pub fn generate_guide(
    config: &GlobalConfig,
    mut guide: GuideConfig,
) -> (GuideConfig, Result<PathBuf>) {
    log::info!("generating {}", guide.title);
    guide.markdown_content = Some(render_guide(config, &guide));
    let written = write_guide(config, &guide);
    (guide, written)
}
