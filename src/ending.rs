//! Detection of finished games

use crate::{board::*, CONNECT, HEIGHT, WIDTH};

/// The state of the game as seen by one side
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Ending {
    Continue,
    Tie,
    Win,
}

/// Checks whether `side` has four in a row, or whether the board has filled up
///
/// The board is scanned once, top row first and left to right within a row. Each
/// of `side`'s cells is tested as the start of a line in every direction of
/// [`DIRECTIONS`], and the scan stops at the first complete line.
pub fn ending(board: &Board, side: Side) -> Ending {
    let player = Cell::from(side);
    let mut empty_cells = 0;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let cell = board.get(column, row);
            if cell.is_empty() {
                empty_cells += 1;
            }
            if cell != player {
                continue;
            }
            let connected = DIRECTIONS.iter().any(|&direction| {
                (1..CONNECT as isize).all(|step| board.cell_at(column, row, direction, step) == Some(player))
            });
            if connected {
                return Ending::Win;
            }
        }
    }

    if empty_cells == 0 {
        Ending::Tie
    } else {
        Ending::Continue
    }
}
