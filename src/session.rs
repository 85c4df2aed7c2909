use crate::diff::{
    self, DiffEntry, DiffStats, MergeError, SplitRow, changed_rows, changes_only, pair_rows,
};
use tracing::debug;
use xxhash_rust::xxh64::xxh64;

/// Owns the two texts being compared and the edit script between them.
///
/// The script is recomputed in full whenever either text actually
/// changes; an xxh64 key of both inputs skips recomputation when a
/// setter is fed the content it already holds. Accepting a change
/// rewrites the original text and recomputes, so entry indices from
/// before an accept are stale.
pub struct DiffSession {
    original: String,
    modified: String,
    content_key: u64,
    entries: Vec<DiffEntry>,
}

fn content_key(original: &str, modified: &str) -> u64 {
    // Seed the second hash with the first so swapping the two texts
    // never collides to the same key.
    let original_hash = xxh64(original.as_bytes(), 0);
    original_hash ^ xxh64(modified.as_bytes(), original_hash)
}

impl DiffSession {
    pub fn new(original: impl Into<String>, modified: impl Into<String>) -> Self {
        let original = original.into();
        let modified = modified.into();
        let entries = diff::compute_diff(&original, &modified);
        let content_key = content_key(&original, &modified);
        Self {
            original,
            modified,
            content_key,
            entries,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn modified(&self) -> &str {
        &self.modified
    }

    /// The current edit script, in document order.
    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    pub fn set_original(&mut self, text: impl Into<String>) {
        self.original = text.into();
        self.recompute_if_changed();
    }

    pub fn set_modified(&mut self, text: impl Into<String>) {
        self.modified = text.into();
        self.recompute_if_changed();
    }

    /// Accept the Insert or Delete entry at `index` into the original
    /// text, then recompute the script against the unchanged modified
    /// text.
    pub fn accept(&mut self, index: usize) -> Result<(), MergeError> {
        self.original = diff::apply_merge(&self.original, &self.entries, index)?;
        debug!(index, "accepted diff entry into original");
        self.recompute_if_changed();
        Ok(())
    }

    pub fn split_rows(&self) -> Vec<SplitRow> {
        pair_rows(&self.entries)
    }

    pub fn changes(&self) -> Vec<&DiffEntry> {
        changes_only(&self.entries)
    }

    pub fn changed_split_rows(&self) -> Vec<SplitRow> {
        let rows = self.split_rows();
        changed_rows(&rows).into_iter().cloned().collect()
    }

    pub fn line_stats(&self) -> DiffStats {
        diff::line_stats(&self.entries)
    }

    pub fn is_settled(&self) -> bool {
        self.entries.is_empty()
    }

    fn recompute_if_changed(&mut self) {
        let key = content_key(&self.original, &self.modified);
        if key == self.content_key {
            return;
        }
        self.content_key = key;
        self.entries = diff::compute_diff(&self.original, &self.modified);
        debug!(entries = self.entries.len(), "recomputed session diff");
    }
}
