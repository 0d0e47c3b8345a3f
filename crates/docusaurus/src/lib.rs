#![deny(missing_docs)]
//! guidegen Docusaurus engine: renders guides to Markdown pages and runs the
//! generation pipeline.

/// Markdown fragment builder.
pub mod builder;
/// Frontmatter, imports, and the generated-file warning.
pub mod frontmatter;
/// Whole-guide rendering and output.
pub mod guide;
/// Per-language tab blocks.
pub mod langtabs;
/// Load, generate, and save runs.
pub mod pipeline;
/// Heading, paragraph, and tab sections.
pub mod section;
/// Debug source-location markers.
pub mod source_file;
/// Support, stability, and dependency info callouts.
pub mod ssdi;

pub use builder::MarkdownBuilder;
pub use frontmatter::{collect_tags, render_frontmatter};
pub use guide::{generate_guide, render_guide};
pub use langtabs::render_langtabs;
pub use pipeline::{GenerateReport, generate_guides, preview_guide};
pub use section::{heading_text, render_section};
pub use ssdi::render_ssdi;
