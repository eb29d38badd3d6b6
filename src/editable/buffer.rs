//! Grapheme-indexed text views and edit proposals.
//!
//! Offsets everywhere in the engine are counted in extended grapheme clusters.
//! [`Graphemes`] segments a string once and then answers positional queries in
//! O(1), so scans never re-walk the string to rebuild an index.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// A string segmented into extended grapheme clusters.
#[derive(Debug, Clone)]
pub struct Graphemes<'a> {
    source: &'a str,
    /// Byte offset where each cluster starts, followed by `source.len()`
    bounds: Vec<usize>,
}

impl<'a> Graphemes<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut bounds: Vec<usize> = source.grapheme_indices(true).map(|(i, _)| i).collect();
        bounds.push(source.len());
        Self { source, bounds }
    }

    /// Number of clusters
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_str(&self) -> &'a str {
        self.source
    }

    /// Cluster at `index`, None if out of bounds
    pub fn get(&self, index: usize) -> Option<&'a str> {
        if index >= self.len() {
            return None;
        }
        Some(&self.source[self.bounds[index]..self.bounds[index + 1]])
    }

    pub fn last(&self) -> Option<&'a str> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Byte offset of the cluster boundary at `index` (clamped to the end)
    pub fn byte_offset(&self, index: usize) -> usize {
        self.bounds[index.min(self.len())]
    }

    /// Slice by cluster indices; the range is clamped to the string
    pub fn slice(&self, range: Range<usize>) -> &'a str {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        &self.source[self.bounds[start]..self.bounds[end]]
    }

    /// First `count` clusters
    pub fn prefix(&self, count: usize) -> &'a str {
        self.slice(0..count)
    }

    /// Everything from cluster `start` onwards
    pub fn suffix_from(&self, start: usize) -> &'a str {
        self.slice(start..self.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

/// Count extended grapheme clusters in `text`
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// A range of the current buffer, in cluster offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditRange {
    pub location: usize,
    pub length: usize,
}

impl EditRange {
    pub fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// Empty range at `location` (an insertion point)
    pub fn caret(location: usize) -> Self {
        Self::new(location, 0)
    }

    pub fn end(&self) -> usize {
        self.location.saturating_add(self.length)
    }

    /// Clamp into `[0, len]`. Ranges may be stale by the time they are
    /// evaluated, so out-of-bounds values are never an error.
    pub fn clamp(&self, len: usize) -> Range<usize> {
        let start = self.location.min(len);
        let end = self.end().min(len);
        start..end
    }
}

impl From<Range<usize>> for EditRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end.saturating_sub(range.start))
    }
}

/// A pending change to the buffer: replace `range` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditProposal {
    pub range: EditRange,
    pub replacement: String,
}

impl EditProposal {
    pub fn new(range: EditRange, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    /// Insert `text` at cluster offset `at`
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::new(EditRange::caret(at), text)
    }

    /// Remove the clusters in `range`
    pub fn delete(range: impl Into<EditRange>) -> Self {
        Self::new(range.into(), String::new())
    }

    pub fn replace(range: impl Into<EditRange>, text: impl Into<String>) -> Self {
        Self::new(range.into(), text)
    }

    /// Same range, different replacement
    pub fn with_replacement(&self, text: impl Into<String>) -> Self {
        Self::new(self.range, text)
    }

    /// Pure removal (nothing inserted)
    pub fn is_deletion(&self) -> bool {
        self.replacement.is_empty()
    }
}

/// Read-only view of the authoritative buffer at decision time.
#[derive(Debug, Clone)]
pub struct BufferSnapshot<'a> {
    graphemes: Graphemes<'a>,
}

impl<'a> BufferSnapshot<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            graphemes: Graphemes::new(text),
        }
    }

    pub fn text(&self) -> &'a str {
        self.graphemes.as_str()
    }

    pub fn graphemes(&self) -> &Graphemes<'a> {
        &self.graphemes
    }

    /// Length in clusters
    pub fn len(&self) -> usize {
        self.graphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }

    /// Trailing cluster of the buffer
    pub fn last_character(&self) -> Option<&'a str> {
        self.graphemes.last()
    }

    /// Cluster immediately before `offset` (clamped)
    pub fn char_before(&self, offset: usize) -> Option<&'a str> {
        let offset = offset.min(self.len());
        offset.checked_sub(1).and_then(|i| self.graphemes.get(i))
    }

    /// Text with `proposal` applied, and the cluster offset just past the inserted text.
    pub fn apply(&self, proposal: &EditProposal) -> (String, usize) {
        self.splice(proposal.range, &proposal.replacement)
    }

    /// Replace `range` (clamped) with `replacement`.
    pub fn splice(&self, range: EditRange, replacement: &str) -> (String, usize) {
        let range = range.clamp(self.len());
        let start = self.graphemes.byte_offset(range.start);
        let end = self.graphemes.byte_offset(range.end);
        let text = self.text();

        let mut out = String::with_capacity(text.len() - (end - start) + replacement.len());
        out.push_str(&text[..start]);
        out.push_str(replacement);
        out.push_str(&text[end..]);

        // Clusters can merge across the seam (e.g. a combining mark), so the
        // cursor is measured on the result rather than by adding lengths.
        let cursor = grapheme_len(&out[..start + replacement.len()]);
        (out, cursor)
    }

    /// The buffer with `range` removed
    pub fn without(&self, range: EditRange) -> String {
        self.splice(range, "").0
    }
}
