use super::*;
use crate::error::MoveError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_chars() {
    for stone in [Stone::Empty, Stone::White, Stone::Black] {
        assert_eq!(Stone::from_char(stone.to_char()), Some(stone));
    }
    assert_eq!(Stone::from_char('X'), None);
}

#[test]
fn test_pos_conversion() {
    let pos = CENTER;
    assert_eq!(pos.to_index(), 180);
    assert_eq!(Pos::from_index(180), Pos::new(9, 9));
}

#[test]
fn test_pos_try_new() {
    assert_eq!(Pos::try_new(18, 0), Ok(Pos::new(18, 0)));
    assert_eq!(
        Pos::try_new(19, 3),
        Err(MoveError::OutOfBounds { row: 19, col: 3 })
    );
    assert_eq!(
        Pos::try_new(0, -1),
        Err(MoveError::OutOfBounds { row: 0, col: -1 })
    );
}

#[test]
fn test_pos_label() {
    assert_eq!(CENTER.to_string(), "J10");
    assert_eq!(Pos::new(0, 0).to_string(), "A19");
    assert_eq!(Pos::new(18, 18).to_string(), "S1");
}

#[test]
fn test_at_distance() {
    let pos = Pos::new(2, 2);
    assert_eq!(pos.at_distance(1, Direction::RightDiagUp), Some(Pos::new(1, 3)));
    assert_eq!(pos.at_distance(2, Direction::LeftDiagUp), Some(Pos::new(0, 0)));
    assert_eq!(pos.at_distance(3, Direction::LeftDiagUp), None);
    assert_eq!(pos.at_distance(3, Direction::VerticalDown), Some(Pos::new(5, 2)));
    assert_eq!(Pos::new(18, 17).at_distance(2, Direction::HorizontalRight), None);
}

#[test]
fn test_directions_have_opposites() {
    for dir in Direction::ALL {
        let (dr, dc) = dir.delta();
        let (or, oc) = dir.opposite().delta();
        assert_eq!((dr + or, dc + oc), (0, 0));
        assert_ne!((dr, dc), (0, 0));
        assert_eq!(dir.opposite().opposite(), dir);
    }
}

#[test]
fn test_axis_directions_are_opposite() {
    for axis in Axis::ALL {
        let (a, b) = axis.directions();
        assert_eq!(a.opposite(), b);
    }
}

#[test]
fn test_place_piece_rules() {
    let mut board = Board::new();
    let pos = Pos::new(4, 4);

    assert_eq!(board.place_piece(pos, Stone::Empty), Err(MoveError::InvalidColour));
    assert_eq!(board.place_piece(pos, Stone::White), Ok(()));
    assert_eq!(board.get(pos), Stone::White);
    assert_eq!(board.place_piece(pos, Stone::Black), Err(MoveError::OccupiedCell(pos)));
    assert_eq!(board.place_piece(pos, Stone::White), Err(MoveError::OccupiedCell(pos)));
    assert_eq!(board.get(pos), Stone::White);
}

#[test]
fn test_place_then_remove_restores_empty() {
    let mut board = Board::new();
    for (i, pos) in [Pos::new(0, 0), CENTER, Pos::new(18, 18)].into_iter().enumerate() {
        let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
        board.place_piece(pos, stone).unwrap();
        assert_eq!(board.remove_piece(pos), Ok(stone));
        assert!(board.is_empty(pos));
    }
    assert!(board.is_board_empty());
}

#[test]
fn test_remove_empty_cell_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.remove_piece(CENTER),
        Err(MoveError::EmptyCellExpected(CENTER))
    );
}

#[test]
fn test_counts_always_cover_board() {
    let mut board = Board::new();
    let check = |board: &Board| {
        assert_eq!(
            board.count(Stone::White) + board.count(Stone::Black) + board.count(Stone::Empty),
            TOTAL_CELLS
        );
    };
    check(&board);
    for i in 0..40u8 {
        let stone = if i % 3 == 0 { Stone::White } else { Stone::Black };
        board.place_piece(Pos::from_index(i as usize * 7), stone).unwrap();
        check(&board);
    }
    assert_eq!(board.count(Stone::White), 14);
    assert_eq!(board.count(Stone::Black), 26);
    board.remove_piece(Pos::from_index(7)).unwrap();
    check(&board);
    board.reset();
    assert_eq!(board.count(Stone::Empty), TOTAL_CELLS);
}

#[test]
fn test_second_move_zone() {
    let mut board = Board::new();
    board.place_piece(CENTER, Stone::White).unwrap();

    // Corners of the forbidden block
    for (r, c) in [(6, 6), (6, 12), (12, 6), (12, 12), (9, 10)] {
        assert!(!board.is_second_move_legal(Pos::new(r, c)), "({r},{c})");
    }
    // Just outside it
    for (r, c) in [(5, 9), (13, 9), (9, 5), (9, 13), (0, 0), (6, 13)] {
        assert!(board.is_second_move_legal(Pos::new(r, c)), "({r},{c})");
    }

    board.place_piece(Pos::new(5, 9), Stone::Black).unwrap();
    assert!(!board.is_second_move_legal(Pos::new(5, 9)));
}

#[test]
fn test_pieces_row_major() {
    let mut board = Board::new();
    board.place_piece(Pos::new(10, 1), Stone::Black).unwrap();
    board.place_piece(Pos::new(2, 17), Stone::Black).unwrap();
    board.place_piece(Pos::new(2, 3), Stone::White).unwrap();
    let black: Vec<Pos> = board.pieces(Stone::Black).collect();
    assert_eq!(black, vec![Pos::new(2, 17), Pos::new(10, 1)]);
    assert_eq!(board.pieces(Stone::Empty).count(), 0);
}

#[test]
fn test_to_rows() {
    let mut board = Board::new();
    board.place_piece(Pos::new(0, 1), Stone::White).unwrap();
    board.place_piece(Pos::new(0, 2), Stone::Black).unwrap();
    let rows = board.to_rows();
    assert_eq!(rows.len(), BOARD_SIZE);
    assert!(rows[0].starts_with("OWBO"));
    assert!(rows.iter().all(|r| r.len() == BOARD_SIZE));
}

#[test]
fn test_off_board_position_rejected() {
    let mut board = Board::new();
    for pos in [Pos { row: 19, col: 0 }, Pos { row: 0, col: 25 }, Pos { row: 200, col: 3 }] {
        assert!(!pos.in_bounds());
        assert_eq!(
            board.place_piece(pos, Stone::White),
            Err(MoveError::OutOfBounds {
                row: pos.row as i32,
                col: pos.col as i32
            })
        );
        assert!(matches!(board.remove_piece(pos), Err(MoveError::OutOfBounds { .. })));
        assert_eq!(board.get(pos), Stone::Empty);
        assert!(!board.is_second_move_legal(pos));
    }
    assert_eq!(board.count(Stone::White), 0);
    assert_eq!(board.count(Stone::Empty), TOTAL_CELLS);
}
