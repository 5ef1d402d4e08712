use anyhow::{anyhow, Result};

use std::fmt;

use crate::{ending::*, HEIGHT, WIDTH};

/// The four directions a line is scanned in, as `(dx, dy)` with `y` growing downwards:
/// right, down-right, down and down-left
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (1, 1), (0, 1), (-1, 1)];

/// One of the two players
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    Human,
    Engine,
}

impl Side {
    /// The opposing player
    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Engine,
            Side::Engine => Side::Human,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Human,
    Engine,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Human => Cell::Human,
            Side::Engine => Cell::Engine,
        }
    }
}

/// A 7x6 Connect 4 grid
///
/// Row 0 is the top of the board, pieces fall towards row `HEIGHT - 1`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, top-to-bottom
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
        }
    }

    /// Creates a board by playing a string of 0-indexed column digits,
    /// starting with the human and alternating
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut side = Side::Human;
        let mut game_over = false;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column < WIDTH => {
                    // only the final move of the string may end the game
                    if game_over {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    if !board.place(column, side) {
                        return Err(anyhow!("Invalid move, column {} full", column));
                    }
                    game_over = ending(&board, side) == Ending::Win;
                    side = side.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Returns the contents of a cell
    pub fn get(&self, column: usize, row: usize) -> Cell {
        debug_assert!(column < WIDTH && row < HEIGHT, "cell ({}, {}) is off the board", column, row);
        self.cells[row * WIDTH + column]
    }

    /// Returns the cell `steps` tiles away from `(column, row)` along `(dx, dy)`,
    /// or `None` if that falls off the board
    pub fn cell_at(&self, column: usize, row: usize, (dx, dy): (isize, isize), steps: isize) -> Option<Cell> {
        let x = column as isize + dx * steps;
        let y = row as isize + dy * steps;
        if x < 0 || x >= WIDTH as isize || y < 0 || y >= HEIGHT as isize {
            return None;
        }
        Some(self.get(x as usize, y as usize))
    }

    fn put(&mut self, column: usize, row: usize, cell: Cell) {
        self.cells[row * WIDTH + column] = cell;
    }

    /// Whether a piece can still be dropped into `column`
    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.get(column, 0).is_empty()
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.playable(column))
    }

    /// Drops a piece for `side` into `column`
    ///
    /// Returns `false` without touching the board if the column is full
    /// or out of range.
    pub fn place(&mut self, column: usize, side: Side) -> bool {
        if !self.playable(column) {
            return false;
        }
        // the lowest empty cell sits directly above the first occupied one
        let row = (0..HEIGHT)
            .take_while(|&row| self.get(column, row).is_empty())
            .last()
            .unwrap_or(0);
        self.put(column, row, side.into());
        true
    }

    /// Removes the top piece of `column`
    ///
    /// # Panics
    /// Panics if the column is empty or out of range. Every `lift` must undo an
    /// earlier `place`, so either means the board no longer matches the move history.
    pub fn lift(&mut self, column: usize) {
        assert!(column < WIDTH, "invalid lift of column {}", column);
        match (0..HEIGHT).find(|&row| !self.get(column, row).is_empty()) {
            Some(row) => self.put(column, row, Cell::Empty),
            None => panic!("invalid lift of empty column {}", column),
        }
    }

    /// Returns the board reflected left-to-right
    pub fn mirror(&self) -> Self {
        let mut mirrored = Self::new();
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                mirrored.put(WIDTH - 1 - column, row, self.get(column, row));
            }
        }
        mirrored
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                let symbol = match self.get(column, row) {
                    Cell::Empty => '.',
                    Cell::Human => 'Y',
                    Cell::Engine => 'M',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
