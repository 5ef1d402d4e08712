//! A depth limited game tree search

use log::{debug, trace};

use crate::{board::*, ending::*, heuristic, WIDTH};

use std::ops::{Deref, DerefMut};

/// The value of a move that wins on the spot, larger than any heuristic score
pub const WIN_SCORE: i32 = 1_000_000;

/// The value given to a full column, below any reachable value so it is never picked
pub const FULL_COLUMN: i32 = -2 * WIN_SCORE;

/// A hypothetical move, taken back when the guard is dropped
///
/// Holding the placement in a guard keeps every `place` paired with a `lift`
/// on every path out of a search node, early returns included.
struct Placement<'a> {
    board: &'a mut Board,
    column: usize,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, column: usize, side: Side) -> Option<Self> {
        if board.place(column, side) {
            Some(Self { board, column })
        } else {
            None
        }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.lift(self.column);
    }
}

/// An agent choosing moves by looking a fixed number of plies ahead
///
/// # Position Scoring
/// Values are from the point of view of the side to move. An immediate win is
/// worth [`WIN_SCORE`] and a filled board 0. Below that, each column is worth the
/// negation of the opponent's best reply, and at the depth limit the difference
/// between the two sides' [`heuristic::score`]s after the move.
pub struct Searcher<'a> {
    board: &'a mut Board,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl<'a> Searcher<'a> {
    /// Creates a new `Searcher` working on `board`
    ///
    /// The board is left exactly as it was found after every search.
    pub fn new(board: &'a mut Board) -> Self {
        Self {
            board,
            node_count: 0,
        }
    }

    /// Finds the best column for `side`, searching `depth` plies past its move
    ///
    /// Returns the column and its value, or `None` and [`FULL_COLUMN`] when no
    /// column is playable.
    pub fn pick_move(&mut self, side: Side, depth: usize) -> (Option<usize>, i32) {
        let nodes_before = self.node_count;
        let (column, value) = negamax(self.board, side, depth, &mut self.node_count);
        debug!(
            "{:?} search to depth {}: column {:?} valued {} after {} nodes",
            side,
            depth,
            column,
            value,
            self.node_count - nodes_before
        );
        (column, value)
    }
}

/// Scores every column for `side` and returns the best one
fn negamax(board: &mut Board, side: Side, depth: usize, node_count: &mut usize) -> (Option<usize>, i32) {
    *node_count += 1;

    let mut values = [FULL_COLUMN; WIDTH];
    for (column, value) in values.iter_mut().enumerate() {
        let mut next = match Placement::new(board, column, side) {
            Some(placement) => placement,
            None => continue,
        };

        *value = match ending(&next, side) {
            // the placement guard lifts the piece on the way out
            Ending::Win => return (Some(column), WIN_SCORE),
            Ending::Tie => 0,
            Ending::Continue if depth > 0 => -negamax(&mut next, side.other(), depth - 1, node_count).1,
            // the opponent would see this position as worth the negation of this
            Ending::Continue => heuristic::score(&next, side) - heuristic::score(&next, side.other()),
        };
    }

    // first column wins ties
    let mut best = (None, FULL_COLUMN);
    for (column, &value) in values.iter().enumerate() {
        if value > best.1 {
            best = (Some(column), value);
        }
    }
    trace!("{:?} at depth {}: {:?}", side, depth, values);
    best
}
