use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stderr, Write};

use connect4_engine::{board::*, HEIGHT, WIDTH};

/// Draws the board on stderr, human pieces in red and the engine's in yellow
pub fn draw(board: &Board) -> Result<()> {
    let mut stderr = stderr();

    for row in 0..HEIGHT {
        stderr.queue(PrintStyledContent(style("| ")))?;
        for column in 0..WIDTH {
            let (symbol, color) = match board.get(column, row) {
                Cell::Human => ("Y", Color::Red),
                Cell::Engine => ("M", Color::Yellow),
                Cell::Empty => (".", Color::DarkBlue),
            };
            stderr
                .queue(PrintStyledContent(
                    style(symbol).attribute(Attribute::Bold).with(color),
                ))?
                .queue(PrintStyledContent(style(" ")))?;
        }
        stderr.queue(PrintStyledContent(style("|\n")))?;
    }

    let border = format!("+-{}+\n", "-".repeat(WIDTH * 2));
    let labels: String = (0..WIDTH).map(|column| format!("{} ", column)).collect();
    stderr
        .queue(PrintStyledContent(style(border)))?
        .queue(PrintStyledContent(style(format!("| {}|\n", labels))))?;
    stderr.flush()?;
    Ok(())
}
