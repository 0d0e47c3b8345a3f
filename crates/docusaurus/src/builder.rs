//! Fragment accumulation for generated Markdown.

use std::borrow::Cow;

/// Collects Markdown fragments and joins them once in [`MarkdownBuilder::finish`].
///
/// Fragments are concatenated verbatim; every fragment carries its own
/// trailing newlines.
#[derive(Debug, Default)]
pub struct MarkdownBuilder<'a> {
    fragments: Vec<Cow<'a, str>>,
}

impl<'a> MarkdownBuilder<'a> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment as-is.
    pub fn push(&mut self, fragment: impl Into<Cow<'a, str>>) -> &mut Self {
        let fragment = fragment.into();
        if !fragment.is_empty() {
            self.fragments.push(fragment);
        }
        self
    }

    /// Appends a fragment followed by a newline.
    pub fn push_line(&mut self, line: impl Into<Cow<'a, str>>) -> &mut Self {
        self.push(line).push("\n")
    }

    /// Appends a fragment followed by a blank line.
    pub fn push_block(&mut self, block: impl Into<Cow<'a, str>>) -> &mut Self {
        self.push(block).push("\n\n")
    }

    /// Appends everything collected by another builder.
    pub fn append(&mut self, other: MarkdownBuilder<'a>) -> &mut Self {
        self.fragments.extend(other.fragments);
        self
    }

    /// Whether nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Joins all fragments into one string.
    pub fn finish(self) -> String {
        let len = self.fragments.iter().map(|f| f.len()).sum();
        let mut out = String::with_capacity(len);
        for fragment in &self.fragments {
            out.push_str(fragment);
        }
        out
    }
}
