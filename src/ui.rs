#![cfg(feature = "std")]

//! Terminal rendering of boards and turn results.

use std::fmt::Write as _;

use crate::core::{AttackResult, CellView, Shot};
use crate::protocol::BoardFrame;

const LETTERED_COLUMNS: usize = 26;

/// Header label for column `x`: a letter while the alphabet lasts, the
/// one-based column number after that.
pub fn column_label(x: usize) -> String {
    if x < LETTERED_COLUMNS {
        char::from(b'A' + x as u8).to_string()
    } else {
        (x + 1).to_string()
    }
}

/// Grid notation for a cell, e.g. `(2, 4)` is `C5`. Cells past column `Z`
/// are written as the zero-based pair `x,y` accepted at the prompt.
pub fn coord_to_string(x: usize, y: usize) -> String {
    if x < LETTERED_COLUMNS {
        format!("{}{}", column_label(x), y + 1)
    } else {
        format!("{},{}", x, y)
    }
}

fn digits(n: usize) -> usize {
    n.to_string().len()
}

fn symbol(view: CellView) -> char {
    match view {
        CellView::Hit => 'X',
        CellView::Miss => 'o',
        CellView::Ship => 'S',
        CellView::Empty => '.',
    }
}

/// Draw a `size`×`size` grid of render tags inside a box, columns labelled
/// with [`column_label`] and rows numbered from 1.
///
/// Cells missing from `cells` are drawn as water.
pub fn render_grid(cells: &[CellView], size: usize) -> String {
    let col_w = if size > LETTERED_COLUMNS { digits(size) } else { 1 };
    let row_w = digits(size).max(2);
    let inner = 2 + row_w + (col_w + 1) * size;
    let bar = "═".repeat(inner);
    let mut out = String::new();
    let _ = writeln!(out, "    ╔{}╗", bar);
    let _ = write!(out, "    ║{}", " ".repeat(row_w + 1));
    for x in 0..size {
        let _ = write!(out, " {:>w$}", column_label(x), w = col_w);
    }
    let _ = writeln!(out, " ║");
    let _ = writeln!(out, "    ╠{}╣", bar);
    for y in 0..size {
        let _ = write!(out, "    ║ {:>w$}", y + 1, w = row_w);
        for x in 0..size {
            let view = cells.get(y * size + x).copied().unwrap_or(CellView::Empty);
            let _ = write!(out, " {:>w$}", symbol(view), w = col_w);
        }
        let _ = writeln!(out, " ║");
    }
    let _ = writeln!(out, "    ╚{}╝", bar);
    out
}

/// Display the opponent board (top) and the player's own board (bottom).
pub fn print_frame(frame: &BoardFrame) {
    println!("Opponent board ({} ship(s) afloat):", frame.enemy_ships_afloat);
    print!("{}", render_grid(&frame.target, frame.size));
    println!("    Legend: X=Hit  o=Miss  .=Unknown");
    println!("\nYour board ({} ship(s) afloat):", frame.ships_afloat);
    print!("{}", render_grid(&frame.own, frame.size));
    println!("    Legend: S=Ship  X=Hit  o=Miss  .=Water");
}

/// One line describing a resolved shot.
pub fn describe_shot(player: &str, shot: &Shot) -> String {
    let at = coord_to_string(shot.x, shot.y);
    match shot.result {
        AttackResult::Hit => format!("🎯 {} fires at {}: HIT!", player, at),
        AttackResult::Sunk(_) => format!("💥 {} fires at {}: ship SUNK!", player, at),
        AttackResult::Miss => format!("💧 {} fires at {}: miss.", player, at),
    }
}

pub fn print_targeting_help(size: usize) {
    let last = size.saturating_sub(1);
    let last_col = column_label(last);
    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║                  TARGETING HELP                        ║");
    println!("╠════════════════════════════════════════════════════════╣");
    println!("║ Enter a target as two numbers or as a grid cell:       ║");
    println!("║   3 4    - column 3, row 4 (both counted from 0)       ║");
    println!("║   3,4    - same as above                               ║");
    println!("║   D5     - column D, row 5 (same cell again)           ║");
    println!("║                                                        ║");
    println!("║ Type 'quit' to resign the match.                       ║");
    println!("╚════════════════════════════════════════════════════════╝");
    println!("Valid columns: A-{} (0-{}), valid rows: 1-{} (0-{})\n", last_col, last, size, last);
}
