//! ASCII rendering of a board.
//!
//! Each square shows the owner's seat number and an arrow for the facing,
//! e.g. `1^` or `2v`. Bases show `#` since they never turn.

use std::fmt::Write;

use crate::game::{Board, Direction, Position};

/// Arrow for the eight step directions.
fn arrow(facing: Direction) -> char {
    let step = facing.to_unit_step();
    match (step.dx, step.dy) {
        (1, 0) => '>',
        (-1, 0) => '<',
        (0, 1) => '^',
        (0, -1) => 'v',
        (1, 1) | (-1, -1) => '/',
        (1, -1) | (-1, 1) => '\\',
        _ => '?',
    }
}

/// Render the board with row 0 at the bottom, as seen from the first seat.
#[must_use]
pub fn render_ascii(board: &Board) -> String {
    let bounds = board.bounds();
    let width = i32::from(bounds.width);
    let height = i32::from(bounds.height);
    let mut out = String::new();

    for row in (0..height).rev() {
        let _ = write!(out, "{row:>2} ");
        for col in 0..width {
            let pos = Position::from_file(col, row, bounds);
            match board.pieces().piece_at(pos) {
                Some(piece) => {
                    let mark = if piece.kind().can_rotate() {
                        arrow(piece.facing())
                    } else {
                        '#'
                    };
                    let _ = write!(out, " {}{mark}", piece.owner());
                }
                None => out.push_str("  ."),
            }
        }
        out.push('\n');
    }

    out.push_str("   ");
    for col in 0..width {
        let _ = write!(out, "{col:>3}");
    }
    out.push('\n');
    out
}
