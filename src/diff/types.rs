use serde::{Deserialize, Serialize};

/// The three edit-script operations a diff can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffKind {
    Equal,
    Insert,
    Delete,
}

/// One entry of the edit script produced by [`compute_diff`](crate::diff::compute_diff).
///
/// `old_line` is the 1-based position in the old text (Equal and Delete),
/// `new_line` the 1-based position in the new text (Equal and Insert).
/// `index` is the entry's stable position within its sequence and is the
/// handle [`apply_merge`](crate::diff::apply_merge) addresses entries by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub kind: DiffKind,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub old_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub new_line: Option<usize>,
    pub index: usize,
}

impl DiffEntry {
    pub fn is_change(&self) -> bool {
        self.kind != DiffKind::Equal
    }
}

/// One row of the side-by-side view.
///
/// A row always has at least one side; the missing-both state is
/// unrepresentable on purpose. `Both` carries either an Equal entry on
/// both sides or a Delete paired with the Insert that directly follows
/// it (a replace row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitRow {
    Both(DiffEntry, DiffEntry),
    Left(DiffEntry),
    Right(DiffEntry),
}

impl SplitRow {
    pub fn left(&self) -> Option<&DiffEntry> {
        match self {
            SplitRow::Both(left, _) | SplitRow::Left(left) => Some(left),
            SplitRow::Right(_) => None,
        }
    }

    pub fn right(&self) -> Option<&DiffEntry> {
        match self {
            SplitRow::Both(_, right) | SplitRow::Right(right) => Some(right),
            SplitRow::Left(_) => None,
        }
    }

    /// True unless both visible sides are Equal entries.
    pub fn is_change(&self) -> bool {
        match self {
            SplitRow::Both(left, right) => left.is_change() || right.is_change(),
            SplitRow::Left(_) | SplitRow::Right(_) => true,
        }
    }
}

/// Added/removed counts shown alongside a diff.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added_count: usize,
    pub removed_count: usize,
}
