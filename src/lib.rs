//! diffcheck library
//!
//! Line-level text diffing: an LCS edit script, unified and
//! side-by-side views derived from it, and single-change merge-back
//! into the original text. The UI that renders the views lives
//! elsewhere; this crate is the pure core it calls into.

pub mod diff;
pub mod session;

pub use diff::{DiffEntry, DiffKind, DiffStats, MergeError, SplitRow};
pub use session::DiffSession;
