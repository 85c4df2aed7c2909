mod engine;
mod merge;
mod rows;
mod stats;
mod types;

pub use engine::compute_diff;
pub use merge::{MergeError, apply_merge};
pub use rows::{changed_rows, changes_only, pair_rows};
pub use stats::{char_stats, line_stats};
pub use types::{DiffEntry, DiffKind, DiffStats, SplitRow};
