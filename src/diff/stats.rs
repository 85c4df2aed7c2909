use super::types::{DiffEntry, DiffKind, DiffStats, SplitRow};
use similar::{ChangeTag, TextDiff};

/// Count added and removed lines in an edit script.
pub fn line_stats(seq: &[DiffEntry]) -> DiffStats {
    let mut stats = DiffStats::default();
    for entry in seq {
        match entry.kind {
            DiffKind::Insert => stats.added_count += 1,
            DiffKind::Delete => stats.removed_count += 1,
            DiffKind::Equal => {}
        }
    }
    stats
}

/// Character-level added/removed counts across the changed rows.
///
/// Replace rows diff their two sides against each other; one-sided rows
/// count their whole content. Equal rows contribute nothing.
pub fn char_stats(rows: &[SplitRow]) -> DiffStats {
    let mut stats = DiffStats::default();

    for row in rows {
        match row {
            SplitRow::Both(left, right) => {
                if !left.is_change() {
                    continue;
                }
                let diff = TextDiff::from_chars(left.content.as_str(), right.content.as_str());
                for change in diff.iter_all_changes() {
                    match change.tag() {
                        ChangeTag::Insert => stats.added_count += change.value().chars().count(),
                        ChangeTag::Delete => stats.removed_count += change.value().chars().count(),
                        ChangeTag::Equal => {}
                    }
                }
            }
            SplitRow::Left(entry) => stats.removed_count += entry.content.chars().count(),
            SplitRow::Right(entry) => stats.added_count += entry.content.chars().count(),
        }
    }

    stats
}
