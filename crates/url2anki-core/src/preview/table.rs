use std::io::{self, Write};

use crate::card::Flashcard;

const BORDER: &str = "+-----------------------------+-----------------------------+";
const HEADER: &str = "|           Question           |           Answer            |";

/// Render `cards` as a two-column table.
///
/// Cells are left-aligned and padded to 27 characters. Longer text is not
/// wrapped or cut and pushes the column border out.
pub fn render_table<W: Write + ?Sized>(cards: &[Flashcard], out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BORDER)?;
    writeln!(out, "{}", HEADER)?;
    writeln!(out, "{}", BORDER)?;
    for card in cards {
        writeln!(out, "| {:<27} | {:<27} |", card.question(), card.answer())?;
    }
    writeln!(out, "{}", BORDER)
}
