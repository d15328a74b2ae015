//! Plain-text rendering of a settled board.

use std::fmt::Write;

use crate::adapters::Card;
use crate::layout::Board;

/// Render the board's columns and style as text, one block per column.
pub fn render_board(board: &Board<Card>) -> String {
    let mut out = String::new();

    match board.plan() {
        Some(plan) => {
            let _ = writeln!(
                out,
                "{} columns x {}px, {} images",
                plan.column_count,
                plan.column_width,
                board.history().len()
            );
        }
        None => out.push_str("no layout applied\n"),
    }

    let columns = board.columns();
    for (index, column) in columns.columns().iter().enumerate() {
        let _ = writeln!(out, "\ncolumn {} ({}px)", index + 1, column.height());
        for card in column.items() {
            let _ = writeln!(
                out,
                "  [{}x{}] {} <{}>",
                card.image.width,
                card.image.height,
                card.thread.title,
                card.link_url()
            );
        }
    }

    if let Some(sheet) = board.style() {
        let _ = write!(out, "\n{}", sheet.text());
    }
    out
}
