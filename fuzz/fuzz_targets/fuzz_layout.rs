#![no_main]

//! Board file fuzzer.
//!
//! Arbitrary bytes fed to the layout loader must either be rejected with an
//! error or produce a consistent board.

use banneret::game::{BoardLayout, check_invariants};
use banneret::{Board, GameConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(layout) = BoardLayout::from_json(text) else {
        return;
    };
    let Ok(mut board) = Board::from_config(&GameConfig::default()) else {
        return;
    };
    if board.load_state(&layout).is_ok() {
        let violations = check_invariants(&board);
        assert!(violations.is_empty(), "Invariant violations: {violations:?}");
    } else {
        assert!(board.pieces().is_empty());
    }
});
