//! Page frontmatter and the preamble that follows it.

use crate::builder::MarkdownBuilder;
use crate::source_file::SOURCE_FILE_IMPORT;
use guidegen_core::{GlobalConfig, GuideConfig, local_ref};
use std::collections::BTreeSet;

/// Comment placed after the frontmatter of every generated page.
pub const GENERATED_WARNING: &str = "<!-- THIS FILE IS GENERATED. DO NOT EDIT THIS FILE DIRECTLY -->";
/// Imports needed by pages with language tabs.
pub const TABS_IMPORTS: [&str; 2] = [
    "import Tabs from '@theme/Tabs';",
    "import TabItem from '@theme/TabItem';",
];

/// Renders the frontmatter block, the generated-file warning, the optional
/// component imports, and the optional description paragraph.
pub fn render_frontmatter(config: &GlobalConfig, guide: &GuideConfig) -> String {
    let mut out = MarkdownBuilder::new();
    push_frontmatter(&mut out, config, guide);
    out.finish()
}

pub(crate) fn push_frontmatter<'a>(
    out: &mut MarkdownBuilder<'a>,
    config: &GlobalConfig,
    guide: &'a GuideConfig,
) {
    out.push_line("---")
        .push_line(format!("id: {}", guide.id))
        .push_line(format!("title: {}", guide.title))
        .push_line(format!("sidebar_label: {}", guide.sidebar_label));
    if let Some(position) = guide.sidebar_position() {
        out.push_line(format!("sidebar_position: {}", format_number(position)));
    }
    out.push_line(format!("description: {}", guide.description));
    if let Some(slug) = guide.slug() {
        out.push_line(format!("slug: {slug}"));
    }
    out.push_line(format!(
        "toc_max_heading_level: {}",
        guide.toc_max_heading_level
    ));

    let tags = collect_tags(guide);
    out.push_line("keywords:");
    for keyword in &tags {
        out.push_line(format!("- {keyword}"));
    }
    out.push_line("tags:");
    for tag in &tags {
        out.push_line(format!("- {}", local_ref(&guide.id, tag)));
    }
    out.push_block("---");
    out.push_block(GENERATED_WARNING);

    if guide.add_tabs_support() {
        out.push_line(TABS_IMPORTS[0]).push_block(TABS_IMPORTS[1]);
    }
    if config.debug_helpers {
        out.push_block(SOURCE_FILE_IMPORT);
    }
    if guide.use_description() {
        out.push_block(guide.description.as_str());
    }
}

/// Union of the tags of every section node, deduplicated and sorted by
/// UTF-16 code units, the order JavaScript's default sort produces.
///
/// `langtabs` sections have no single node and do not contribute.
pub fn collect_tags(guide: &GuideConfig) -> Vec<&str> {
    let unique: BTreeSet<&str> = guide
        .sections
        .iter()
        .filter_map(|section| section.node())
        .flat_map(|node| node.tags())
        .map(String::as_str)
        .collect();
    let mut tags: Vec<&str> = unique.into_iter().collect();
    tags.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
    tags
}

/// Formats a number the way a JavaScript template literal does: integral
/// floats lose their fractional part.
fn format_number(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e21 => {
            format!("{value:.0}")
        }
        _ => number.to_string(),
    }
}
