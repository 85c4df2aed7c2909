//! Example walking through the diff engine, both views, and merge-back
//!
//! Run with: cargo run --example diff_demo

use diffcheck::diff::{DiffKind, SplitRow};
use diffcheck::session::DiffSession;

fn marker(kind: DiffKind) -> char {
    match kind {
        DiffKind::Equal => ' ',
        DiffKind::Insert => '+',
        DiffKind::Delete => '-',
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let original = "<h1>Welcome</h1>\n<p>First paragraph.</p>\n<p>Stale note.</p>";
    let modified = "<h1>Welcome back</h1>\n<p>First paragraph.</p>\n<p>Fresh note.</p>\n<p>And one more.</p>";

    let mut session = DiffSession::new(original, modified);
    let stats = session.line_stats();
    println!(
        "=== Unified view ({} additions, {} deletions) ===",
        stats.added_count, stats.removed_count
    );
    for entry in session.entries() {
        println!("{} {}", marker(entry.kind), entry.content);
    }

    println!("\n=== Split view ===");
    for row in session.split_rows() {
        let (left, right) = match &row {
            SplitRow::Both(left, right) => (left.content.as_str(), right.content.as_str()),
            SplitRow::Left(entry) => (entry.content.as_str(), ""),
            SplitRow::Right(entry) => ("", entry.content.as_str()),
        };
        println!("{left:<40} | {right}");
    }

    println!("\n=== Accepting every change ===");
    while let Some(index) = session.changes().first().map(|e| e.index) {
        session.accept(index)?;
        println!("accepted entry {index}; {} entries remain", session.entries().len());
    }

    println!("\nOriginal now matches modified: {}", session.is_settled());
    Ok(())
}
