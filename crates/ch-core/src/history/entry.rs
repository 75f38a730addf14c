use std::fmt;

use serde::{Deserialize, Serialize};

/// A single clipboard snippet tracked in history.
///
/// Entries are identified by their exact text; two entries with the same
/// text never coexist in a [`HistoryState`](super::HistoryState).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(String);

impl Entry {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn into_text(self) -> String {
        self.0
    }

    /// Returns `true` when the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// First line of the entry, cut to at most `max_chars` characters.
    ///
    /// A trailing `…` marks truncation, either of the line itself or of the
    /// remaining lines of a multi-line entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use ch_core::Entry;
    ///
    /// let entry = Entry::new("first line\nsecond line");
    /// assert_eq!(entry.preview(5), "first…");
    /// assert_eq!(entry.preview(80), "first line…");
    /// ```
    pub fn preview(&self, max_chars: usize) -> String {
        let mut lines = self.0.lines();
        let first = lines.next().unwrap_or("");
        let multi_line = lines.next().is_some();

        let mut preview: String = first.chars().take(max_chars).collect();
        if first.chars().count() > max_chars || multi_line {
            preview.push('…');
        }
        preview
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl AsRef<str> for Entry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_short_single_line_untouched() {
        assert_eq!(Entry::new("hello").preview(10), "hello");
    }

    #[test]
    fn preview_truncates_on_char_boundaries() {
        let entry = Entry::new("héllo wörld");
        assert_eq!(entry.preview(4), "héll…");
    }

    #[test]
    fn preview_of_empty_entry_is_empty() {
        assert_eq!(Entry::new("").preview(10), "");
    }

    #[test]
    fn blank_detection_ignores_surrounding_whitespace() {
        assert!(Entry::new(" \n\t ").is_blank());
        assert!(!Entry::new("  x ").is_blank());
    }
}
