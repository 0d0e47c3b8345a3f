//! Guide-set data model.
//!
//! Every struct keeps the fields it does not know about in a flattened `extra`
//! map so that rewriting the guide set after a run only adds `markdown_content`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A field that may be absent (`None`), explicitly `null` (`Some(None)`), or
/// set. Absent fields stay absent and nulls stay null when written back.
pub type Nullable<T> = Option<Option<T>>;

mod nullable {
    use super::*;

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }

    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(Some(inner)) => inner.serialize(serializer),
            Some(None) | None => serializer.serialize_none(),
        }
    }
}

/// Tag that switches headings to the node's label without an anchor.
pub const CLI_REFERENCE_TAG: &str = "cli reference";
/// Lang tab id meaning the content is planned but not yet written.
pub const PLANNED_TAB_ID: &str = "none";
/// Lang tab id meaning the content does not apply to that SDK.
pub const NOT_APPLICABLE_TAB_ID: &str = "na";

/// The intermediate guide-set document: `{ "cfgs": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuideSet {
    /// Guide configurations, in generation order.
    pub cfgs: Vec<GuideConfig>,
    /// Fields not used by the generator.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GuideSet {
    /// Looks up a guide by id.
    pub fn find(&self, id: &str) -> Option<&GuideConfig> {
        self.cfgs.iter().find(|cfg| cfg.id == id)
    }
}

/// One documentation page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Document id, used in frontmatter and as the scope of tag slugs.
    pub id: String,
    /// Page title.
    pub title: String,
    /// Label shown in the sidebar.
    pub sidebar_label: String,
    /// Explicit sidebar ordering.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "nullable")]
    pub sidebar_position: Nullable<serde_json::Number>,
    /// Page description.
    pub description: String,
    /// Custom URL slug.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "nullable")]
    pub slug: Nullable<String>,
    /// Deepest heading level listed in the table of contents.
    pub toc_max_heading_level: u8,
    /// Whether the page imports the Tabs components.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "nullable")]
    pub add_tabs_support: Nullable<bool>,
    /// Whether the description is repeated as the first paragraph.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "nullable")]
    pub use_description: Nullable<bool>,
    /// Directory below the content root, or `/` for the root itself.
    pub file_dir: String,
    /// Output file name.
    pub file_name: String,
    /// Ordered page sections.
    pub sections: Vec<Section>,
    /// Rendered document, filled in by generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_content: Option<String>,
    /// Fields not used by the generator.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GuideConfig {
    /// Explicit sidebar ordering, if set.
    pub fn sidebar_position(&self) -> Option<&serde_json::Number> {
        self.sidebar_position.as_ref().and_then(Option::as_ref)
    }

    /// Custom URL slug, if set.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_ref().and_then(|v| v.as_deref())
    }

    /// Whether the page imports the Tabs components; absent or null is off.
    pub fn add_tabs_support(&self) -> bool {
        self.add_tabs_support.flatten().unwrap_or(false)
    }

    /// Whether the description is repeated as the first paragraph; absent or
    /// null is off.
    pub fn use_description(&self) -> bool {
        self.use_description.flatten().unwrap_or(false)
    }
}

/// A page section.
///
/// Sections whose `type` is not recognised, or whose payload does not match
/// their type, are kept verbatim as [`Section::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section {
    /// A section the renderer understands.
    Known(SectionKind),
    /// Anything else.
    Unknown(Value),
}

/// Recognised section kinds, keyed by the JSON `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SectionKind {
    /// `##` heading followed by the node body.
    H2(NodeSection),
    /// `###` heading followed by the node body.
    H3(NodeSection),
    /// `####` heading followed by the node body.
    H4(NodeSection),
    /// Node body without a heading.
    P(NodeSection),
    /// Per-language tabbed content.
    Langtabs(LangTabsSection),
}

/// Payload of heading and paragraph sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSection {
    /// Content rendered by the section.
    pub node: ContentNode,
    /// Fields not used by the generator.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `langtabs` sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LangTabsSection {
    /// Tabs in input order.
    pub langtabs: Vec<LangTab>,
    /// Fields not used by the generator.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SectionKind {
    /// The JSON `type` string of this section.
    pub fn type_name(&self) -> &'static str {
        match self {
            SectionKind::H2(_) => "h2",
            SectionKind::H3(_) => "h3",
            SectionKind::H4(_) => "h4",
            SectionKind::P(_) => "p",
            SectionKind::Langtabs(_) => "langtabs",
        }
    }
}

impl Section {
    /// The section's `type`, for diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            Section::Known(kind) => kind.type_name(),
            Section::Unknown(value) => value
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("<missing>"),
        }
    }

    /// The single content node of a heading or paragraph section.
    pub fn node(&self) -> Option<&ContentNode> {
        match self {
            Section::Known(
                SectionKind::H2(section)
                | SectionKind::H3(section)
                | SectionKind::H4(section)
                | SectionKind::P(section),
            ) => Some(&section.node),
            Section::Known(SectionKind::Langtabs(_)) | Section::Unknown(_) => None,
        }
    }
}

/// A unit of raw content referenced by a section or a lang tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentNode {
    /// Node id, part of the heading anchor.
    pub id: String,
    /// Heading title.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "nullable")]
    pub title: Nullable<String>,
    /// Short label, part of the heading anchor.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "nullable")]
    pub label: Nullable<String>,
    /// Raw Markdown body.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "nullable")]
    pub markdown_content: Nullable<String>,
    /// Support, stability, and dependency info bullets.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "nullable")]
    pub ssdi: Nullable<Vec<String>>,
    /// Tags collected into the page frontmatter.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "nullable")]
    pub tags: Nullable<Vec<String>>,
    /// Source file the node was read from.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "nullable")]
    pub file_path: Nullable<String>,
    /// Fields not used by the generator.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentNode {
    /// Title, or empty.
    pub fn title(&self) -> &str {
        self.title.as_ref().and_then(|v| v.as_deref()).unwrap_or_default()
    }

    /// Label, or empty.
    pub fn label(&self) -> &str {
        self.label.as_ref().and_then(|v| v.as_deref()).unwrap_or_default()
    }

    /// Markdown body, or empty.
    pub fn markdown_content(&self) -> &str {
        self.markdown_content
            .as_ref()
            .and_then(|v| v.as_deref())
            .unwrap_or_default()
    }

    /// SSDI bullets, in input order.
    pub fn ssdi(&self) -> &[String] {
        self.ssdi.as_ref().and_then(|v| v.as_deref()).unwrap_or_default()
    }

    /// Tags, in input order.
    pub fn tags(&self) -> &[String] {
        self.tags.as_ref().and_then(|v| v.as_deref()).unwrap_or_default()
    }

    /// Source file the node was read from, when known.
    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_ref().and_then(|v| v.as_deref())
    }

    /// Whether the node documents a CLI command.
    pub fn is_cli_reference(&self) -> bool {
        self.tags().iter().any(|tag| tag == CLI_REFERENCE_TAG)
    }
}

/// One language variant of a tabbed block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LangTab {
    /// Language identifier (go, java, php, python, typescript).
    pub lang: String,
    /// Content reference, or one of the `none`/`na` sentinels.
    pub id: String,
    /// Content when `id` is a real reference.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "nullable")]
    pub node: Nullable<ContentNode>,
    /// Fields not used by the generator.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What a lang tab renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TabContent<'a> {
    /// Content is planned but not written yet.
    Planned,
    /// Content does not apply to this SDK.
    NotApplicable,
    /// Real content.
    Written(&'a ContentNode),
    /// A real reference without an attached node.
    Missing,
}

impl LangTab {
    /// Classifies the tab by its id.
    pub fn content(&self) -> TabContent<'_> {
        match (self.id.as_str(), &self.node) {
            (PLANNED_TAB_ID, _) => TabContent::Planned,
            (NOT_APPLICABLE_TAB_ID, _) => TabContent::NotApplicable,
            (_, Some(Some(node))) => TabContent::Written(node),
            (_, Some(None) | None) => TabContent::Missing,
        }
    }
}
