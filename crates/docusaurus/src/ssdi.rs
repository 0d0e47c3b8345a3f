//! "Support, stability, and dependency info" callouts.

use crate::builder::MarkdownBuilder;

/// Title of the SSDI tip callout.
pub const SSDI_TITLE: &str = "Support, stability, and dependency info";

/// Renders the SSDI tip callout, or nothing for an empty list.
///
/// Items are emitted in input order, duplicates included.
pub fn render_ssdi(items: &[String]) -> String {
    let mut out = MarkdownBuilder::new();
    push_ssdi(&mut out, items);
    out.finish()
}

pub(crate) fn push_ssdi<'a>(out: &mut MarkdownBuilder<'a>, items: &'a [String]) {
    if items.is_empty() {
        return;
    }
    out.push_line(format!(":::tip {SSDI_TITLE}"));
    for item in items {
        out.push("- ").push_line(item.as_str());
    }
    out.push_line("").push_block(":::");
}
