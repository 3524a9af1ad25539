//! Tag collection attached to an in-progress story submission.
//!
//! [`TagSet`] keeps an ordered list of distinct, trimmed, non-empty labels
//! capped at [`MAX_TAGS`]. Rejected input is a silent no-op through
//! [`TagSet::add`]; callers that want the reason use [`TagSet::try_add`].
//!
//! [`TagInput`] layers the keyboard contract of the tag field on top: Enter
//! commits the text buffer, Backspace on an empty buffer pops the last tag.

use serde::{Deserialize, Serialize};

/// Maximum number of tags a single story may carry.
pub const MAX_TAGS: usize = 8;

/// Why a tag was not added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TagRejection {
    #[error("tag is empty")]
    Empty,
    #[error("tag is already present")]
    Duplicate,
    #[error("a story can carry at most 8 tags")]
    Full,
}

/// Ordered set of distinct tags. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw labels, applying the same rules as [`TagSet::add`].
    ///
    /// Labels past the cap, duplicates, and blanks are dropped.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for label in labels {
            set.add(label.as_ref());
        }
        set
    }

    /// Trim `raw` and append it, reporting why it was rejected if it was.
    pub fn try_add(&mut self, raw: &str) -> Result<(), TagRejection> {
        let tag = raw.trim();
        if tag.is_empty() {
            return Err(TagRejection::Empty);
        }
        if self.contains(tag) {
            return Err(TagRejection::Duplicate);
        }
        if self.0.len() >= MAX_TAGS {
            return Err(TagRejection::Full);
        }
        self.0.push(tag.to_string());
        Ok(())
    }

    /// Trim `raw` and append it. Returns whether the set changed.
    pub fn add(&mut self, raw: &str) -> bool {
        self.try_add(raw).is_ok()
    }

    /// Remove the first exact match. Returns whether a tag was removed.
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.0.iter().position(|t| t == tag) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove and return the most recently added tag.
    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_TAGS
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// Keyboard-driven input
// ---------------------------------------------------------------------------

/// Keys the tag field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKey {
    Enter,
    Backspace,
}

/// Text buffer plus the committed tags of a tag input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInput {
    buffer: String,
    tags: TagSet,
}

impl TagInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from already committed tags with an empty buffer.
    pub fn with_tags(tags: TagSet) -> Self {
        Self {
            buffer: String::new(),
            tags,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut TagSet {
        &mut self.tags
    }

    /// Apply a key press.
    ///
    /// `Enter` commits the buffer (silently ignoring rejected input) and
    /// always clears it. `Backspace` only touches the tags when the buffer
    /// is empty; editing a non-empty buffer is left to the text widget.
    pub fn handle_key(&mut self, key: TagKey) {
        match key {
            TagKey::Enter => {
                let raw = std::mem::take(&mut self.buffer);
                self.tags.add(&raw);
            }
            TagKey::Backspace => {
                if self.buffer.is_empty() {
                    self.tags.pop();
                }
            }
        }
    }

    /// Clear both the buffer and the committed tags.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.tags.clear();
    }
}
