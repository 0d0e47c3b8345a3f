//! Debug markers around each section, rendered by the site's `SourceFile`
//! theme component as a box labelled with the section's source location.

use crate::builder::MarkdownBuilder;
use guidegen_core::{GlobalConfig, Section};

/// Import line added to the page when debug helpers are enabled.
pub const SOURCE_FILE_IMPORT: &str = "import SourceFile from '@theme/SourceFile';";

/// Location shown for a section: the node's source file relative to the
/// project root, or empty when the section has no node or no path.
pub fn section_location(config: &GlobalConfig, section: &Section) -> String {
    section
        .node()
        .and_then(|node| node.file_path())
        .map(|path| config.relative_source(path))
        .unwrap_or_default()
}

/// Opening marker: `<SourceFile location="...">`.
pub fn open(location: &str) -> String {
    format!("<SourceFile location=\"{}\">\n", escape_attr(location))
}

/// Closing marker.
pub fn close() -> &'static str {
    "</SourceFile>\n"
}

/// Wraps an already rendered section.
pub fn wrap<'a>(out: &mut MarkdownBuilder<'a>, location: &str, section: MarkdownBuilder<'a>) {
    out.push(open(location)).append(section).push(close());
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
