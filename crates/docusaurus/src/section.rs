//! Section rendering: headings, paragraphs, and language tabs.

use crate::builder::MarkdownBuilder;
use crate::langtabs::push_langtabs;
use crate::ssdi::push_ssdi;
use guidegen_core::{ContentNode, Section, SectionKind, local_ref};

/// Renders one section. Unknown sections produce an empty string.
pub fn render_section(section: &Section) -> String {
    let mut out = MarkdownBuilder::new();
    push_section(&mut out, section);
    out.finish()
}

pub(crate) fn push_section<'a>(out: &mut MarkdownBuilder<'a>, section: &'a Section) {
    match section {
        Section::Known(SectionKind::H2(s)) => push_heading(out, 2, &s.node),
        Section::Known(SectionKind::H3(s)) => push_heading(out, 3, &s.node),
        Section::Known(SectionKind::H4(s)) => push_heading(out, 4, &s.node),
        Section::Known(SectionKind::P(s)) => push_body(out, &s.node),
        Section::Known(SectionKind::Langtabs(s)) => push_langtabs(out, &s.langtabs),
        Section::Unknown(value) => {
            log::warn!("unhandled section type {:?}: {}", section.kind(), value);
        }
    }
}

/// Heading text for a node: the label for CLI reference nodes, otherwise the
/// title with an explicit `{#anchor}`.
pub fn heading_text(node: &ContentNode) -> String {
    if node.is_cli_reference() {
        node.label().to_string()
    } else {
        format!(
            "{} {{#{}}}",
            node.title(),
            local_ref(&node.id, node.label())
        )
    }
}

fn push_heading<'a>(out: &mut MarkdownBuilder<'a>, depth: usize, node: &'a ContentNode) {
    out.push_block(format!("{} {}", "#".repeat(depth), heading_text(node)));
    push_body(out, node);
}

fn push_body<'a>(out: &mut MarkdownBuilder<'a>, node: &'a ContentNode) {
    push_ssdi(out, node.ssdi());
    out.push_block(node.markdown_content());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn section(value: serde_json::Value) -> Section {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn h2_with_anchor() {
        let out = render_section(&section(json!({
            "type": "h2",
            "node": {
                "id": "go/start-workflow",
                "title": "How to start a Workflow",
                "label": "Start a Workflow",
                "markdown_content": "Use the client.",
                "ssdi": []
            }
        })));
        assert_eq!(
            out,
            "## How to start a Workflow {#go-start-workflow-start-a-workflow}\n\nUse the client.\n\n"
        );
    }

    #[test]
    fn heading_depths() {
        for (kind, hashes) in [("h2", "## "), ("h3", "### "), ("h4", "#### ")] {
            let out = render_section(&section(json!({
                "type": kind,
                "node": { "id": "n", "title": "T", "label": "L", "markdown_content": "x" }
            })));
            assert!(out.starts_with(&format!("{hashes}T {{#n-l}}\n\n")), "{out}");
        }
    }

    #[test]
    fn cli_reference_uses_label_without_anchor() {
        let out = render_section(&section(json!({
            "type": "h3",
            "node": {
                "id": "tctl/workflow/list",
                "title": "How to list Workflows",
                "label": "tctl workflow list",
                "markdown_content": "Lists Workflows.",
                "tags": ["tctl", "cli reference"]
            }
        })));
        assert_eq!(out, "### tctl workflow list\n\nLists Workflows.\n\n");
        assert!(!out.contains("{#"));
    }

    #[test]
    fn heading_with_ssdi() {
        let out = render_section(&section(json!({
            "type": "h4",
            "node": {
                "id": "n",
                "title": "Title",
                "label": "Label",
                "markdown_content": "Body",
                "ssdi": ["Alpha"]
            }
        })));
        insta::assert_snapshot!(out.trim_end(), @r"
        #### Title {#n-label}

        :::tip Support, stability, and dependency info
        - Alpha

        :::

        Body
        ");
    }

    #[test]
    fn paragraph_has_no_heading() {
        let out = render_section(&section(json!({
            "type": "p",
            "node": { "id": "n", "title": "Ignored", "markdown_content": "Just text." }
        })));
        assert_eq!(out, "Just text.\n\n");
    }

    #[test]
    fn unknown_type_renders_nothing() {
        let out = render_section(&section(json!({ "type": "video", "url": "x" })));
        assert_eq!(out, "");
    }

    #[test]
    fn langtabs_delegates() {
        let out = render_section(&section(json!({
            "type": "langtabs",
            "langtabs": [{ "lang": "go", "id": "none" }]
        })));
        assert!(out.starts_with("<Tabs\n"));
        assert!(out.contains("<TabItem value=\"go\">"));
    }
}
