//! Board tests - grid bounds, placement rule, line clearing.

use blockfall::core::{spawn_shape, Board};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, skip: Option<i8>) {
    for x in 0..BOARD_WIDTH as i8 {
        if Some(x) != skip {
            board.set(x, y, Some(PieceKind::J));
        }
    }
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_get_and_set_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(PieceKind::T)));
}

#[test]
fn test_fits_horizontal_bounds_and_floor() {
    let board = Board::new();
    let i_piece = spawn_shape(PieceKind::I);

    assert!(board.fits(&i_piece, 0, 0));
    assert!(board.fits(&i_piece, 6, 0));
    assert!(!board.fits(&i_piece, -1, 0));
    assert!(!board.fits(&i_piece, 7, 0));

    assert!(board.fits(&i_piece, 0, BOARD_HEIGHT as i8 - 1));
    assert!(!board.fits(&i_piece, 0, BOARD_HEIGHT as i8));
}

#[test]
fn test_fits_ignores_content_above_grid() {
    let mut board = Board::new();
    // Occupied top row does not collide with shape cells at negative rows.
    fill_row(&mut board, 0, None);
    let square = spawn_shape(PieceKind::O);
    assert!(board.fits(&square, 4, -2));
    assert!(!board.fits(&square, 4, -1));
}

#[test]
fn test_merge_writes_kind_at_rows_gte_zero() {
    let mut board = Board::new();
    let square = spawn_shape(PieceKind::O);
    board.merge(&square, 0, -1, PieceKind::O);

    assert_eq!(board.get(0, 0), Some(Some(PieceKind::O)));
    assert_eq!(board.get(1, 0), Some(Some(PieceKind::O)));
    // The row above the grid was dropped, not wrapped anywhere.
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
}

#[test]
fn test_row_count_is_invariant_under_clears() {
    let mut board = Board::new();
    fill_row(&mut board, BOARD_HEIGHT as i8 - 1, None);
    fill_row(&mut board, BOARD_HEIGHT as i8 - 2, None);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);
    assert_eq!(
        board.cells().len(),
        (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize)
    );
    for x in 0..BOARD_WIDTH as i8 {
        assert_eq!(board.get(x, 0), Some(None));
        assert_eq!(board.get(x, 1), Some(None));
    }
}

#[test]
fn test_clear_shifts_rows_down_and_inserts_empty_top_row() {
    let mut board = Board::new();
    let bottom = BOARD_HEIGHT as i8 - 1;
    fill_row(&mut board, bottom, None);
    board.set(3, bottom - 1, Some(PieceKind::S));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 1);
    assert_eq!(board.get(3, bottom), Some(Some(PieceKind::S)));
    assert_eq!(board.get(3, bottom - 1), Some(None));
}

#[test]
fn test_partial_row_is_not_cleared() {
    let mut board = Board::new();
    fill_row(&mut board, BOARD_HEIGHT as i8 - 1, Some(7));

    assert!(!board.is_row_full(BOARD_HEIGHT as usize - 1));
    assert!(board.clear_full_rows().is_empty());
    assert!(board.is_occupied(0, BOARD_HEIGHT as i8 - 1));
}

#[test]
fn test_non_adjacent_full_rows_clear_in_one_pass() {
    let mut board = Board::new();
    // Full rows at 19, 17, and 14 with markers between them.
    fill_row(&mut board, 19, None);
    fill_row(&mut board, 17, None);
    fill_row(&mut board, 14, None);
    board.set(2, 18, Some(PieceKind::S));
    board.set(5, 16, Some(PieceKind::T));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 3);

    // Marker at 18 had one full row below: shifts to 19.
    assert_eq!(board.get(2, 19), Some(Some(PieceKind::S)));
    // Marker at 16 had two full rows below: shifts to 18.
    assert_eq!(board.get(5, 18), Some(Some(PieceKind::T)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
}

#[test]
fn test_four_adjacent_full_rows_clear_together() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, None);
    }
    board.set(9, 15, Some(PieceKind::I));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 4);
    assert_eq!(board.get(9, 19), Some(Some(PieceKind::I)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
}
