//! Per-language `<Tabs>` blocks.

use crate::builder::MarkdownBuilder;
use crate::ssdi::push_ssdi;
use guidegen_core::{LangTab, TabContent};

/// Body of a tab whose content is planned but not written.
pub const PLANNED_TEXT: &str = "Content is planned but not yet available.";
/// Body of a tab that does not apply to its SDK.
pub const NOT_APPLICABLE_TEXT: &str = "Not applicable to this SDK.";
/// Query-string parameter synchronising the selected tab across the site.
pub const LANG_QUERY_STRING: &str = "lang";

/// The fixed tab menu as `(label, value)`; the first entry is the default.
pub const LANG_MENU: [(&str, &str); 5] = [
    ("Go", "go"),
    ("Java", "java"),
    ("PHP", "php"),
    ("Python", "python"),
    ("TypeScript", "typescript"),
];

/// Renders a tab block.
///
/// The menu always lists all five languages in fixed order; tab items follow
/// the input order.
pub fn render_langtabs(tabs: &[LangTab]) -> String {
    let mut out = MarkdownBuilder::new();
    push_langtabs(&mut out, tabs);
    out.finish()
}

pub(crate) fn push_langtabs<'a>(out: &mut MarkdownBuilder<'a>, tabs: &'a [LangTab]) {
    out.push_line("<Tabs")
        .push_line(format!("defaultValue=\"{}\"", LANG_MENU[0].1))
        .push_line(format!("queryString=\"{LANG_QUERY_STRING}\""))
        .push_block(menu_values());

    for tab in tabs {
        out.push_block(format!("<TabItem value=\"{}\">", tab.lang));
        match tab.content() {
            TabContent::Planned => {
                out.push_block(PLANNED_TEXT);
            }
            TabContent::NotApplicable => {
                out.push_block(NOT_APPLICABLE_TEXT);
            }
            TabContent::Written(node) => {
                push_ssdi(out, node.ssdi());
                out.push_block(node.markdown_content());
            }
            TabContent::Missing => {
                log::warn!(
                    "lang tab {} ({}) references content that is not attached",
                    tab.lang,
                    tab.id
                );
                out.push("\n\n");
            }
        }
        out.push_line("</TabItem>");
    }
    out.push_block("</Tabs>");
}

fn menu_values() -> String {
    let entries: String = LANG_MENU
        .iter()
        .map(|(label, value)| format!("{{label: '{label}', value: '{value}'}},"))
        .collect();
    format!("values={{[{entries}]}}>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tabs(value: serde_json::Value) -> Vec<LangTab> {
        serde_json::from_value(value).unwrap()
    }

    fn tab_body<'a>(out: &'a str, lang: &str) -> &'a str {
        let open = format!("<TabItem value=\"{lang}\">");
        let start = out.find(&open).expect("tab item present") + open.len();
        let end = start + out[start..].find("</TabItem>").expect("tab item closed");
        &out[start..end]
    }

    #[test]
    fn menu_line() {
        assert_eq!(
            menu_values(),
            "values={[{label: 'Go', value: 'go'},{label: 'Java', value: 'java'},{label: 'PHP', value: 'php'},{label: 'Python', value: 'python'},{label: 'TypeScript', value: 'typescript'},]}>"
        );
    }

    #[test]
    fn sentinels_and_content() {
        let out = render_langtabs(&tabs(json!([
            { "lang": "go", "id": "none" },
            { "lang": "python", "id": "na" },
            { "lang": "typescript", "id": "x", "node": { "id": "x", "markdown_content": "Hi" } }
        ])));

        assert!(out.starts_with("<Tabs\ndefaultValue=\"go\"\nqueryString=\"lang\"\n"));
        assert!(out.contains(&menu_values()));
        assert!(tab_body(&out, "go").contains(PLANNED_TEXT));
        assert!(tab_body(&out, "python").contains("Not applicable"));
        assert_eq!(tab_body(&out, "typescript"), "\n\nHi\n\n");
        assert!(out.ends_with("</TabItem>\n</Tabs>\n\n"));
    }

    #[test]
    fn menu_is_fixed_regardless_of_input() {
        let out = render_langtabs(&tabs(json!([{ "lang": "php", "id": "na" }])));
        for (label, value) in LANG_MENU {
            assert!(out.contains(&format!("{{label: '{label}', value: '{value}'}}")));
        }
        assert_eq!(out.matches("<TabItem").count(), 1);
    }

    #[test]
    fn items_follow_input_order() {
        let out = render_langtabs(&tabs(json!([
            { "lang": "typescript", "id": "none" },
            { "lang": "go", "id": "none" }
        ])));
        let ts = out.find("<TabItem value=\"typescript\">").unwrap();
        let go = out.find("<TabItem value=\"go\">").unwrap();
        assert!(ts < go);
    }

    #[test]
    fn written_tab_includes_ssdi() {
        let out = render_langtabs(&tabs(json!([
            { "lang": "java", "id": "j", "node": { "id": "j", "markdown_content": "Body", "ssdi": ["Beta"] } }
        ])));
        insta::assert_snapshot!(tab_body(&out, "java").trim(), @r"
        :::tip Support, stability, and dependency info
        - Beta

        :::

        Body
        ");
    }
}
