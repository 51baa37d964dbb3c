use ratatui::style::Color;

use crate::constants::COLS;

/// Rectangular occupancy grid for a piece in its local frame. Rotation
/// builds a new matrix; shapes are never mutated in place.
pub type ShapeMatrix = Vec<Vec<bool>>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceType {
    I, O, T, S, Z, J, L
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::I, PieceType::O, PieceType::T,
        PieceType::S, PieceType::Z, PieceType::J, PieceType::L,
    ];

    /// Base (unrotated) shape, as a tight bounding box.
    pub fn base_shape(self) -> ShapeMatrix {
        match self {
            PieceType::I => vec![
                vec![true, true, true, true],
            ],
            PieceType::O => vec![
                vec![true, true],
                vec![true, true],
            ],
            PieceType::T => vec![
                vec![false, true, false],
                vec![true, true, true],
            ],
            PieceType::S => vec![
                vec![false, true, true],
                vec![true, true, false],
            ],
            PieceType::Z => vec![
                vec![true, true, false],
                vec![false, true, true],
            ],
            PieceType::J => vec![
                vec![true, false, false],
                vec![true, true, true],
            ],
            PieceType::L => vec![
                vec![false, false, true],
                vec![true, true, true],
            ],
        }
    }

    pub fn color(self) -> Color {
        match self {
            PieceType::I => Color::Cyan,
            PieceType::O => Color::Yellow,
            PieceType::T => Color::Magenta,
            PieceType::S => Color::Green,
            PieceType::Z => Color::Red,
            PieceType::J => Color::Blue,
            PieceType::L => Color::LightYellow,
        }
    }
}

/// 90° clockwise rotation: row i of the output is column i of the input,
/// read bottom to top. An R×C matrix becomes C×R.
pub fn rotate_cw(shape: &ShapeMatrix) -> ShapeMatrix {
    let rows = shape.len();
    let cols = shape[0].len();
    let mut rotated = vec![vec![false; rows]; cols];

    for (i, row) in shape.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            rotated[j][rows - 1 - i] = cell;
        }
    }

    rotated
}

#[derive(Clone, Debug)]
pub struct Piece {
    pub piece_type: PieceType,
    pub shape: ShapeMatrix,
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Piece {
    /// Spawns the piece in its base orientation, horizontally centered at
    /// the top of the field.
    pub fn new(piece_type: PieceType) -> Self {
        let shape = piece_type.base_shape();
        let width = shape[0].len() as i32;
        Self {
            piece_type,
            shape,
            x: COLS as i32 / 2 - width / 2,
            y: 0,
            color: piece_type.color(),
        }
    }

    /// Occupied cells in board coordinates.
    pub fn blocks(&self) -> Vec<(i32, i32)> {
        let mut blocks = Vec::new();
        for (i, row) in self.shape.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell {
                    blocks.push((self.x + j as i32, self.y + i as i32));
                }
            }
        }
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_transposes_dimensions() {
        let i_shape = PieceType::I.base_shape();
        assert_eq!(i_shape.len(), 1);
        assert_eq!(i_shape[0].len(), 4);

        let rotated = rotate_cw(&i_shape);
        assert_eq!(rotated.len(), 4);
        assert_eq!(rotated[0].len(), 1);
        assert!(rotated.iter().all(|row| row[0]));
    }

    #[test]
    fn rotate_turns_t_shape_clockwise() {
        let rotated = rotate_cw(&PieceType::T.base_shape());
        // T pointing up becomes T pointing right
        assert_eq!(rotated, vec![
            vec![true, false],
            vec![true, true],
            vec![true, false],
        ]);
    }

    #[test]
    fn four_rotations_restore_every_shape() {
        for piece_type in PieceType::ALL {
            let base = piece_type.base_shape();
            let mut shape = base.clone();
            for _ in 0..4 {
                shape = rotate_cw(&shape);
            }
            assert_eq!(shape, base, "{:?} did not close under rotation", piece_type);
        }
    }

    #[test]
    fn spawn_centers_the_shape() {
        // O is 2 wide: 10/2 - 2/2 = 4
        assert_eq!(Piece::new(PieceType::O).x, 4);
        // I is 4 wide: 10/2 - 4/2 = 3
        assert_eq!(Piece::new(PieceType::I).x, 3);
        // T is 3 wide: 10/2 - 3/2 = 4
        assert_eq!(Piece::new(PieceType::T).x, 4);
        for piece_type in PieceType::ALL {
            assert_eq!(Piece::new(piece_type).y, 0);
        }
    }

    #[test]
    fn blocks_offset_by_piece_position() {
        let mut piece = Piece::new(PieceType::O);
        piece.x = 2;
        piece.y = 7;
        assert_eq!(piece.blocks(), vec![(2, 7), (3, 7), (2, 8), (3, 8)]);
    }

    #[test]
    fn every_type_has_four_blocks() {
        for piece_type in PieceType::ALL {
            assert_eq!(Piece::new(piece_type).blocks().len(), 4);
        }
    }
}
