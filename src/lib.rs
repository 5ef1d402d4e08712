//! A lookahead agent for playing the board game 'Connect 4'
//!
//! The agent searches every line of play up to a fixed depth and falls back to
//! a static evaluation of piece runs when the depth runs out.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{board::{Board, Side}, search::Searcher};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the engine has three in a row along the bottom, column 4 completes it
//! let mut board = Board::from_moves("010263")?;
//! let (best_move, _value) = Searcher::new(&mut board).pick_move(Side::Engine, 2);
//!
//! assert_eq!(best_move, Some(4));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod ending;

pub mod heuristic;

pub mod search;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of tiles in a row needed to win
pub const CONNECT: usize = 4;

/// How many plies the engine looks ahead unless told otherwise
pub const DEFAULT_LOOKAHEAD: usize = 6;

// a winning line has to fit on the board in every direction that is scanned
const_assert!(CONNECT <= WIDTH && CONNECT <= HEIGHT);
// column indices are typed in as a single digit
const_assert!(WIDTH <= 10);
