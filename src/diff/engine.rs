use super::types::{DiffEntry, DiffKind};
use tracing::debug;

/// Compute the line-based edit script between old and new text.
///
/// Identical inputs return an empty script (a fast path, not an
/// all-Equal sequence). Texts are split on `'\n'`, so an empty string
/// is a single empty line and a trailing newline contributes an empty
/// final line.
///
/// The table is the classic LCS-length DP, O(m·n) in time and space;
/// large inputs pay the quadratic cost, there is no guardrail.
pub fn compute_diff(old: &str, new: &str) -> Vec<DiffEntry> {
    if old == new {
        return Vec::new();
    }

    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();
    let m = old_lines.len();
    let n = new_lines.len();

    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if old_lines[i - 1] == new_lines[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    // Backtrack from (m, n), emitting entries end-to-start. On a tie
    // between the two neighbor cells the Insert branch wins; after the
    // reverse below that puts the Delete before the Insert in the final
    // script, and callers depend on that shape.
    let mut diffs = Vec::new();
    let mut i = m;
    let mut j = n;
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old_lines[i - 1] == new_lines[j - 1] {
            diffs.push(DiffEntry {
                kind: DiffKind::Equal,
                content: old_lines[i - 1].to_string(),
                old_line: Some(i),
                new_line: Some(j),
                index: 0,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table[i][j - 1] >= table[i - 1][j]) {
            diffs.push(DiffEntry {
                kind: DiffKind::Insert,
                content: new_lines[j - 1].to_string(),
                old_line: None,
                new_line: Some(j),
                index: 0,
            });
            j -= 1;
        } else {
            diffs.push(DiffEntry {
                kind: DiffKind::Delete,
                content: old_lines[i - 1].to_string(),
                old_line: Some(i),
                new_line: None,
                index: 0,
            });
            i -= 1;
        }
    }

    diffs.reverse();
    for (index, entry) in diffs.iter_mut().enumerate() {
        entry.index = index;
    }

    debug!(
        old_lines = m,
        new_lines = n,
        entries = diffs.len(),
        "computed line diff"
    );
    diffs
}
