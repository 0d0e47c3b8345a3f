/// Builds the local reference for `label` within `scope`.
///
/// Used for heading anchors (`{#...}`, scoped by the node id) and for
/// frontmatter tag keys (scoped by the guide id). Both halves are slugged
/// independently and joined with a hyphen; an empty half is dropped.
///
/// # Examples
///
/// ```
/// use guidegen_core::slug::local_ref;
///
/// assert_eq!(local_ref("concepts/what-is-a-workflow", "Workflow"), "concepts-what-is-a-workflow-workflow");
/// assert_eq!(local_ref("intro", "cli reference"), "intro-cli-reference");
/// assert_eq!(local_ref("intro", ""), "intro");
/// ```
pub fn local_ref(scope: &str, label: &str) -> String {
    let scope = slugify(scope);
    let label = slugify(label);
    match (scope.is_empty(), label.is_empty()) {
        (false, false) => format!("{scope}-{label}"),
        (true, _) => label,
        (false, true) => scope,
    }
}

/// Slugify a single piece of text.
///
/// 1. Lowercase
/// 2. Keep alphanumerics (Unicode included), `_` and `-`
/// 3. Whitespace and path-like separators (`/`, `.`, `:`, `#`) become hyphens
/// 4. Drop everything else, then collapse and trim hyphens
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            slug.push(ch.to_ascii_lowercase());
        } else if !ch.is_ascii() && ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else if ch == '-' || ch.is_whitespace() || matches!(ch, '/' | '.' | ':' | '#') {
            if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        // Other punctuation is dropped
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
