//! Win detection for five-in-a-row
//!
//! A stone wins when the run of same-colored stones through it reaches
//! [`WIN_LENGTH`] along any of the four axes. Runs longer than five
//! (overlines) also win.
//!
//! Only the just-placed stone is examined: each axis is scanned at most
//! [`SCAN_REACH`] cells in both directions, stopping at the board edge or the
//! first cell that is empty or holds the other color.

use crate::board::{Board, Pos, Stone};
use crate::config::{SCAN_REACH, WIN_LENGTH};

/// Direction vectors for line checking (4 axes)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count same-colored stones walking away from `pos` along `(dr, dc)`.
#[inline]
fn count_direction(board: &Board, pos: Pos, color: Stone, dr: i32, dc: i32) -> usize {
    (1..=SCAN_REACH)
        .map_while(|dist| pos.offset(dr, dc, dist))
        .take_while(|&p| board.get(p) == Some(color))
        .count()
}

/// Check whether the stone at `pos` completes a winning run.
///
/// Returns `false` when `pos` is empty.
pub fn check_win(board: &Board, pos: Pos) -> bool {
    let Some(color) = board.get(pos) else {
        return false;
    };

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = count_direction(board, pos, color, dr, dc);
        let backward = count_direction(board, pos, color, -dr, -dc);
        1 + forward + backward >= WIN_LENGTH
    })
}

/// Find the winning run through `pos`, ordered from one end to the other.
///
/// The run is bounded by the same scan window as [`check_win`], so an
/// overline may be reported partially.
pub fn find_winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let color = board.get(pos)?;

    for &(dr, dc) in &DIRECTIONS {
        let backward = count_direction(board, pos, color, -dr, -dc) as i32;
        let forward = count_direction(board, pos, color, dr, dc) as i32;

        if (1 + forward + backward) as usize >= WIN_LENGTH {
            let line = (-backward..=forward)
                .filter_map(|dist| pos.offset(dr, dc, dist))
                .collect();
            return Some(line);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn place_all(board: &mut Board, cells: &[(i32, i32)], stone: Stone) {
        for &(row, col) in cells {
            board.place(row, col, stone).unwrap();
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], Stone::Black);
        assert!(check_win(&board, Pos::new(0, 2)));
        assert!(check_win(&board, Pos::new(0, 0)));
        assert!(check_win(&board, Pos::new(0, 4)));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(i, 9, Stone::White).unwrap();
        }
        assert!(check_win(&board, Pos::new(2, 9)));
    }

    #[test]
    fn test_five_in_row_diagonals() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(i, i, Stone::White).unwrap();
        }
        assert!(check_win(&board, Pos::new(4, 4)));

        let mut board = Board::new();
        for i in 0..5 {
            board.place(10 + i, 8 - i, Stone::Black).unwrap();
        }
        assert!(check_win(&board, Pos::new(12, 6)));
    }

    #[test]
    fn test_four_with_gap_not_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 5)], Stone::Black);
        assert!(!check_win(&board, Pos::new(0, 2)));
        assert!(!check_win(&board, Pos::new(0, 5)));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(9, 0), (9, 1), (9, 2), (9, 3)], Stone::Black);
        assert!(!check_win(&board, Pos::new(9, 3)));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place(9, i, Stone::Black).unwrap();
        }
        for i in 0..6 {
            assert!(check_win(&board, Pos::new(9, i as u8)));
        }
    }

    #[test]
    fn test_opponent_stone_breaks_run() {
        let mut board = Board::new();
        place_all(&mut board, &[(5, 5), (5, 6), (5, 8), (5, 9)], Stone::Black);
        board.place(5, 7, Stone::White).unwrap();
        assert!(!check_win(&board, Pos::new(5, 6)));
        assert!(!check_win(&board, Pos::new(5, 7)));
    }

    #[test]
    fn test_no_wraparound_at_edge() {
        let mut board = Board::new();
        // Three at the end of row 0, two at the start of row 1
        place_all(&mut board, &[(0, 16), (0, 17), (0, 18), (1, 0), (1, 1)], Stone::Black);
        assert!(!check_win(&board, Pos::new(0, 18)));
        assert!(!check_win(&board, Pos::new(1, 0)));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert!(!check_win(&board, Pos::new(9, 9)));
        assert_eq!(find_winning_line(&board, Pos::new(9, 9)), None);
    }

    #[test]
    fn test_find_winning_line_order() {
        let mut board = Board::new();
        place_all(&mut board, &[(3, 3), (4, 4), (5, 5), (6, 6), (7, 7)], Stone::White);
        let line = find_winning_line(&board, Pos::new(5, 5)).unwrap();
        assert_eq!(
            line,
            vec![
                Pos::new(3, 3),
                Pos::new(4, 4),
                Pos::new(5, 5),
                Pos::new(6, 6),
                Pos::new(7, 7),
            ]
        );
    }

    #[test]
    fn test_find_winning_line_none_for_four() {
        let mut board = Board::new();
        place_all(&mut board, &[(3, 3), (4, 4), (5, 5), (6, 6)], Stone::White);
        assert_eq!(find_winning_line(&board, Pos::new(6, 6)), None);
    }
}
