//! Static evaluation of positions the search could not finish

use crate::{board::*, CONNECT, HEIGHT, WIDTH};

/// Score for a run of each length, indexed by run length
pub const RUN_WEIGHTS: [i32; CONNECT + 1] = [0, 1, 10, 100, 1000];

/// Scores the runs of `side`'s pieces on the board
///
/// # Scoring
/// Every line of consecutive pieces in one of the four [`DIRECTIONS`] is counted
/// once, from its first cell, and is worth [`RUN_WEIGHTS`] of its length (capped
/// at [`CONNECT`]). A run of two or three that still has an empty cell at either
/// end is scored as if it were one piece longer. The opponent's pieces are not
/// counted.
pub fn score(board: &Board, side: Side) -> i32 {
    let player = Cell::from(side);
    let mut score = 0;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            if board.get(column, row) != player {
                continue;
            }
            for &direction in DIRECTIONS.iter() {
                // the run was already counted from an earlier cell
                if board.cell_at(column, row, direction, -1) == Some(player) {
                    continue;
                }
                score += RUN_WEIGHTS[run_length(board, column, row, direction, player)];
            }
        }
    }
    score
}

/// Length of the run starting at `(column, row)`, including the open end bonus
fn run_length(board: &Board, column: usize, row: usize, direction: (isize, isize), player: Cell) -> usize {
    let mut run = 1;
    while run < CONNECT && board.cell_at(column, row, direction, run as isize) == Some(player) {
        run += 1;
    }

    if run < 2 || run >= CONNECT {
        return run;
    }
    let open_after = board.cell_at(column, row, direction, run as isize) == Some(Cell::Empty);
    let open_before = board.cell_at(column, row, direction, -1) == Some(Cell::Empty);
    if open_after || open_before {
        run + 1
    } else {
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(score(&board, Side::Human), 0);
        assert_eq!(score(&board, Side::Engine), 0);
    }

    #[test]
    fn single_piece_scores_one_per_direction() {
        for column in 0..WIDTH {
            let mut board = Board::new();
            board.place(column, Side::Engine);
            assert_eq!(score(&board, Side::Engine), 4);
            assert_eq!(score(&board, Side::Human), 0);
        }
    }

    #[test]
    fn open_pair_scores_as_three() {
        let mut board = Board::new();
        board.place(2, Side::Engine);
        board.place(3, Side::Engine);

        // horizontal pair 100, plus three single-piece directions for each piece
        assert_eq!(score(&board, Side::Engine), 100 + 6);
    }

    #[test]
    fn closed_pair_has_no_bonus() {
        let mut board = Board::new();
        board.place(0, Side::Engine);
        board.place(1, Side::Engine);
        board.place(2, Side::Human);

        assert_eq!(score(&board, Side::Engine), 10 + 6);
    }

    #[test]
    fn open_three_never_outscores_four() {
        let mut open_three = Board::new();
        for column in 1..4 {
            open_three.place(column, Side::Engine);
        }
        let mut four = Board::new();
        for column in 0..4 {
            four.place(column, Side::Engine);
        }

        let three_run = score(&open_three, Side::Engine) - 3 * 3;
        let four_run = score(&four, Side::Engine) - 4 * 3;
        assert_eq!(three_run, RUN_WEIGHTS[CONNECT]);
        assert_eq!(four_run, RUN_WEIGHTS[CONNECT]);
    }

    #[test]
    fn long_lines_are_counted_once() {
        let mut board = Board::new();
        for column in 0..6 {
            board.place(column, Side::Engine);
        }

        assert_eq!(score(&board, Side::Engine), 1000 + 6 * 3);
    }

    #[test]
    fn score_is_mirror_symmetric() -> Result<()> {
        for moves in ["3323", "0123456", "33221156", "2345234566"].iter() {
            let board = Board::from_moves(moves)?;
            let mirrored = board.mirror();
            assert_eq!(score(&board, Side::Human), score(&mirrored, Side::Human));
            assert_eq!(score(&board, Side::Engine), score(&mirrored, Side::Engine));
        }
        Ok(())
    }
}
