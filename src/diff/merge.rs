use super::types::{DiffEntry, DiffKind};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MergeError {
    #[error("diff entry index {0} is out of range (sequence has {1} entries)")]
    IndexOutOfRange(usize, usize),

    #[error("diff entry {0} is Equal; only Insert or Delete entries can be merged")]
    EqualEntry(usize),
}

/// Apply one accepted edit back into the original text.
///
/// `seq` must be the script `original` was diffed against; the entry
/// at `target_index` must be an Insert or a Delete. The returned text
/// invalidates every `index` in `seq` — the caller re-runs
/// [`compute_diff`](crate::diff::compute_diff) against the unchanged
/// modified text and works from the fresh sequence.
pub fn apply_merge(
    original: &str,
    seq: &[DiffEntry],
    target_index: usize,
) -> Result<String, MergeError> {
    let entry = seq
        .get(target_index)
        .ok_or(MergeError::IndexOutOfRange(target_index, seq.len()))?;

    let mut lines: Vec<&str> = original.split('\n').collect();

    match entry.kind {
        DiffKind::Equal => return Err(MergeError::EqualEntry(target_index)),
        DiffKind::Insert => {
            // Entries before the target that are not deletes map 1:1 to
            // lines present in the evolving original; their count is the
            // insertion offset.
            let insert_at = seq[..target_index]
                .iter()
                .filter(|e| e.kind != DiffKind::Delete)
                .count();
            lines.insert(insert_at.min(lines.len()), &entry.content);
            debug!(target_index, insert_at, "merged insert into original");
        }
        DiffKind::Delete => {
            // Out-of-bounds positions are a no-op, not an error; a
            // malformed old_line of 0 counts as out of bounds too.
            if let Some(position) = entry.old_line.and_then(|old_line| old_line.checked_sub(1))
                && position < lines.len()
            {
                lines.remove(position);
                debug!(target_index, position, "merged delete into original");
            }
        }
    }

    Ok(lines.join("\n"))
}
