#![deny(missing_docs)]
//! guidegen core: guide-set model, run configuration, slugs, and file storage.

/// Run configuration.
pub mod config;
/// Core error types.
pub mod error;
/// Guide-set data model.
pub mod model;
/// Local reference (anchor) generation.
pub mod slug;
/// Guide-set loading/saving and guide file output.
pub mod store;

pub use config::{DEBUG_HELPERS_ENV, GlobalConfig, debug_helpers_enabled};
pub use error::{GuidegenError, Result};
pub use model::{
    CLI_REFERENCE_TAG, ContentNode, GuideConfig, GuideSet, LangTab, LangTabsSection,
    NOT_APPLICABLE_TAB_ID, NodeSection, Nullable, PLANNED_TAB_ID, Section, SectionKind, TabContent,
};
pub use slug::local_ref;
pub use store::{ROOT_FILE_DIR, guide_output_path, load_guide_set, save_guide_set, write_guide};
