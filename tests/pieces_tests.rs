//! Pieces tests - canonical shape matrices and transpose rotation.

use blockfall::core::spawn_shape;
use blockfall::types::PieceKind;

#[test]
fn test_spawn_matrix_dimensions() {
    let dims = |k: PieceKind| {
        let s = spawn_shape(k);
        (s.width(), s.height())
    };
    assert_eq!(dims(PieceKind::I), (4, 1));
    assert_eq!(dims(PieceKind::O), (2, 2));
    assert_eq!(dims(PieceKind::T), (3, 2));
    assert_eq!(dims(PieceKind::S), (3, 2));
    assert_eq!(dims(PieceKind::Z), (3, 2));
    assert_eq!(dims(PieceKind::L), (3, 2));
    assert_eq!(dims(PieceKind::J), (3, 2));
}

#[test]
fn test_spawn_matrix_cells() {
    let t = spawn_shape(PieceKind::T);
    assert_eq!(t.minos(), [(1, 0), (0, 1), (1, 1), (2, 1)]);

    let s = spawn_shape(PieceKind::S);
    assert_eq!(s.minos(), [(0, 0), (1, 0), (1, 1), (2, 1)]);

    let z = spawn_shape(PieceKind::Z);
    assert_eq!(z.minos(), [(1, 0), (2, 0), (0, 1), (1, 1)]);

    let l = spawn_shape(PieceKind::L);
    assert_eq!(l.minos(), [(0, 0), (1, 0), (2, 0), (0, 1)]);

    let j = spawn_shape(PieceKind::J);
    assert_eq!(j.minos(), [(0, 0), (1, 0), (2, 0), (2, 1)]);
}

#[test]
fn test_rotation_is_a_transpose() {
    for kind in PieceKind::ALL {
        let shape = spawn_shape(kind);
        let rotated = shape.rotated_cw();
        assert_eq!(rotated.width(), shape.height());
        assert_eq!(rotated.height(), shape.width());
        // rotated[x][h-1-y] == shape[y][x]
        for y in 0..shape.height() {
            for x in 0..shape.width() {
                assert_eq!(
                    rotated.filled(shape.height() - 1 - y, x),
                    shape.filled(x, y),
                    "{kind:?} cell ({x},{y})"
                );
            }
        }
    }
}

#[test]
fn test_o_rotation_noop_and_i_rotation_toggle() {
    let o = spawn_shape(PieceKind::O);
    assert_eq!(o.rotated_cw(), o);

    let i = spawn_shape(PieceKind::I);
    let vertical = i.rotated_cw();
    assert_eq!((vertical.width(), vertical.height()), (1, 4));
    assert_eq!(vertical.rotated_cw(), i);
}
