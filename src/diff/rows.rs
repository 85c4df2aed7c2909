use super::types::{DiffEntry, DiffKind, SplitRow};

/// Pair a flat edit script into rows for side-by-side display.
///
/// The pairing is greedy and local: an Equal entry fills both sides, a
/// Delete directly followed by an Insert becomes one replace row, and
/// everything else gets a row of its own. Runs of several deletes or
/// inserts are never cross-paired beyond immediate neighbors.
pub fn pair_rows(seq: &[DiffEntry]) -> Vec<SplitRow> {
    let mut rows = Vec::new();
    let mut i = 0usize;

    while i < seq.len() {
        match seq[i].kind {
            DiffKind::Equal => {
                rows.push(SplitRow::Both(seq[i].clone(), seq[i].clone()));
                i += 1;
            }
            DiffKind::Delete => {
                if seq.get(i + 1).is_some_and(|next| next.kind == DiffKind::Insert) {
                    rows.push(SplitRow::Both(seq[i].clone(), seq[i + 1].clone()));
                    i += 2;
                } else {
                    rows.push(SplitRow::Left(seq[i].clone()));
                    i += 1;
                }
            }
            // Only reached when no Delete consumed this entry already.
            DiffKind::Insert => {
                rows.push(SplitRow::Right(seq[i].clone()));
                i += 1;
            }
        }
    }

    rows
}

/// Unified view filtered down to Insert/Delete entries only.
pub fn changes_only(seq: &[DiffEntry]) -> Vec<&DiffEntry> {
    seq.iter().filter(|entry| entry.is_change()).collect()
}

/// Split view filtered down to rows that carry a change.
pub fn changed_rows(rows: &[SplitRow]) -> Vec<&SplitRow> {
    rows.iter().filter(|row| row.is_change()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::engine::compute_diff;

    #[test]
    fn equal_entries_fill_both_sides() {
        let seq = compute_diff("a\nb", "a\nb\nc");
        let rows = pair_rows(&seq);
        assert_eq!(rows.len(), 3);
        match &rows[0] {
            SplitRow::Both(left, right) => {
                assert_eq!(left.content, "a");
                assert_eq!(right.content, "a");
            }
            other => panic!("expected Both, got {other:?}"),
        }
        assert!(matches!(&rows[2], SplitRow::Right(e) if e.content == "c"));
    }

    #[test]
    fn line_replacement_pairs_into_a_replace_row() {
        // A replaced line diffs to an adjacent Delete+Insert, which the
        // pairer merges into a single two-sided row.
        let seq = compute_diff("a\nold\nc", "a\nnew\nc");
        assert_eq!(seq[1].kind, DiffKind::Delete);
        assert_eq!(seq[2].kind, DiffKind::Insert);

        let rows = pair_rows(&seq);
        assert_eq!(rows.len(), 3);
        match &rows[1] {
            SplitRow::Both(left, right) => {
                assert_eq!(left.content, "old");
                assert_eq!(right.content, "new");
            }
            other => panic!("expected replace row, got {other:?}"),
        }
    }

    #[test]
    fn adjacent_delete_insert_pairs_into_one_row() {
        // Build the Delete+Insert adjacency by hand so the replace-row
        // branch is exercised independently of the engine.
        let mut seq = compute_diff("keep\ndrop", "keep");
        let delete_index = seq.len() - 1;
        assert_eq!(seq[delete_index].kind, DiffKind::Delete);
        seq.push(DiffEntry {
            kind: DiffKind::Insert,
            content: "added".to_string(),
            old_line: None,
            new_line: Some(2),
            index: seq.len(),
        });

        let rows = pair_rows(&seq);
        assert_eq!(rows.len(), 2);
        match &rows[1] {
            SplitRow::Both(left, right) => {
                assert_eq!(left.content, "drop");
                assert_eq!(right.content, "added");
            }
            other => panic!("expected replace row, got {other:?}"),
        }
    }

    #[test]
    fn lone_delete_gets_left_only_row() {
        let seq = compute_diff("a\nb\nc", "a\nc");
        let rows = pair_rows(&seq);
        assert_eq!(rows.len(), 3);
        assert!(matches!(&rows[1], SplitRow::Left(e) if e.content == "b"));
    }

    #[test]
    fn flattened_rows_reconstruct_sequence_order() {
        let seq = compute_diff("a\nb\nc\nd", "a\nx\nc\ny\nd\nz");
        let rows = pair_rows(&seq);

        let mut flattened: Vec<usize> = Vec::new();
        for row in &rows {
            match row {
                SplitRow::Both(left, right) => {
                    flattened.push(left.index);
                    if right.index != left.index {
                        flattened.push(right.index);
                    }
                }
                SplitRow::Left(entry) | SplitRow::Right(entry) => flattened.push(entry.index),
            }
        }
        let expected: Vec<usize> = (0..seq.len()).collect();
        assert_eq!(flattened, expected);
    }

    #[test]
    fn changes_only_drops_equal_entries() {
        let seq = compute_diff("a\nb", "a\nx\nb");
        let changes = changes_only(&seq);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, DiffKind::Insert);
        assert_eq!(changes[0].content, "x");
    }

    #[test]
    fn changed_rows_keeps_only_rows_with_changes() {
        let seq = compute_diff("a\nb\nc", "a\nc");
        let rows = pair_rows(&seq);
        let changed = changed_rows(&rows);
        assert_eq!(changed.len(), 1);
        assert!(matches!(changed[0], SplitRow::Left(e) if e.content == "b"));
    }
}
