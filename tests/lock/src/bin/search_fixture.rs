//! Binary that runs every strategy on the documented 3×3 start and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: key=value lines (see `lock_tests::fixture_report`).

fn main() {
    let report = lock_tests::fixture_report().expect("fixture run failed");
    print!("{report}");
}
