use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(9, 9); // Center
    assert_eq!(pos.to_index(), 180);

    let pos2 = Pos::from_index(180);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(18, 18));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(19, 0));
    assert!(!Pos::is_valid(0, 19));
    assert_eq!(Pos::try_new(3, 4), Some(Pos::new(3, 4)));
    assert_eq!(Pos::try_new(3, 19), None);
}

#[test]
fn test_pos_offset_stops_at_edge() {
    let corner = Pos::new(0, 18);
    assert_eq!(corner.offset(0, -1, 4), Some(Pos::new(0, 14)));
    assert_eq!(corner.offset(0, 1, 1), None);
    assert_eq!(corner.offset(-1, -1, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 19);
    assert_eq!(TOTAL_CELLS, 361);
}

#[test]
fn test_place_every_cell_once() {
    let mut board = Board::new();
    for row in 0..BOARD_SIZE as i32 {
        for col in 0..BOARD_SIZE as i32 {
            let stone = if (row + col) % 2 == 0 { Stone::Black } else { Stone::White };
            let pos = board.place(row, col, stone).unwrap();
            assert_eq!(board.get(pos), Some(stone));
            assert!(!board.is_empty(row, col));
            assert_eq!(
                board.place(row, col, stone.opponent()),
                Err(BoardError::CellOccupied(pos))
            );
            assert_eq!(board.get(pos), Some(stone));
        }
    }
    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());
}

#[test]
fn test_place_out_of_bounds() {
    let mut board = Board::new();
    board.place(4, 4, Stone::White).unwrap();
    let before = board.clone();

    for (row, col) in [(-1, 0), (0, -1), (19, 0), (0, 19), (19, 19), (-5, 40), (i32::MAX, 0)] {
        assert_eq!(
            board.place(row, col, Stone::Black),
            Err(BoardError::InvalidPosition { row, col })
        );
        assert!(!board.is_empty(row, col));
    }
    assert_eq!(board, before);
}

#[test]
fn test_empty_cells_tracks_placements() {
    let mut board = Board::new();
    assert_eq!(board.empty_cells().len(), TOTAL_CELLS);
    assert!(board.is_board_empty());

    board.place(0, 0, Stone::Black).unwrap();
    board.place(18, 18, Stone::White).unwrap();

    let empty = board.empty_cells();
    assert_eq!(empty.len(), TOTAL_CELLS - 2);
    assert!(!empty.contains(&Pos::new(0, 0)));
    assert!(!empty.contains(&Pos::new(18, 18)));
    assert!(empty.contains(&Pos::new(9, 9)));
    assert_eq!(board.stone_count(), 2);
}

#[test]
fn test_stones_iterator() {
    let mut board = Board::new();
    board.place(2, 3, Stone::White).unwrap();
    board.place(1, 7, Stone::Black).unwrap();

    let stones: Vec<_> = board.stones().collect();
    assert_eq!(
        stones,
        vec![(Pos::new(1, 7), Stone::Black), (Pos::new(2, 3), Stone::White)]
    );
}

#[test]
fn test_reset_clears_board() {
    let mut board = Board::new();
    board.place(9, 9, Stone::Black).unwrap();
    board.place(9, 10, Stone::White).unwrap();

    board.reset();
    assert_eq!(board, Board::new());
    assert!(board.is_empty(9, 9));
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        BoardError::InvalidPosition { row: -1, col: 3 }.to_string(),
        "position (-1, 3) is off the board"
    );
    assert_eq!(
        BoardError::CellOccupied(Pos::new(2, 5)).to_string(),
        "cell (2, 5) is already occupied"
    );
}
