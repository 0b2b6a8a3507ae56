//! Piece shapes as static rotation tables
//!
//! Each rotation is a set of (row, col) offsets from the anchor cell.
//! The tables are translated from the original absolute-index encoding
//! (offset = row * width + col). `T` is the 5-cell "magic" piece whose
//! landing can dissolve; every other piece has 4 cells.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Cell offset from the piece anchor: (row delta, column delta)
pub type Offset = (i8, i8);

/// The eight piece kinds. `Li`/`Si` are the mirrored variants of `L`/`S`;
/// `M` is a tripod-shaped piece; `T` is the magic piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    L,
    Li,
    S,
    Si,
    M,
    O,
    I,
    T,
}

const L_ROTATIONS: [&[Offset]; 4] = [
    &[(-2, 0), (-1, 0), (0, 0), (0, 1)],
    &[(-1, 1), (-1, -1), (-1, 0), (0, -1)],
    &[(-2, -1), (-2, 0), (-1, 0), (0, 0)],
    &[(-1, 1), (-1, -1), (-1, 0), (-2, 1)],
];

const LI_ROTATIONS: [&[Offset]; 4] = [
    &[(-2, 1), (-1, 1), (0, 0), (0, 1)],
    &[(-2, -1), (-1, -1), (-1, 0), (-1, 1)],
    &[(-2, 0), (-2, 1), (-1, 0), (0, 0)],
    &[(-1, -1), (-1, 0), (-1, 1), (0, 1)],
];

const S_ROTATIONS: [&[Offset]; 4] = [
    &[(-2, 0), (-1, 0), (-1, 1), (0, 1)],
    &[(-2, 1), (-2, 0), (-1, -1), (-1, 0)],
    &[(-2, 0), (-1, 0), (-1, 1), (0, 1)],
    &[(-2, 1), (-2, 0), (-1, -1), (-1, 0)],
];

const SI_ROTATIONS: [&[Offset]; 4] = [
    &[(-2, 1), (-1, 1), (-1, 0), (0, 0)],
    &[(-1, -1), (-1, 0), (0, 0), (0, 1)],
    &[(-2, 1), (-1, 1), (-1, 0), (0, 0)],
    &[(-1, -1), (-1, 0), (0, 0), (0, 1)],
];

const M_ROTATIONS: [&[Offset]; 4] = [
    &[(-2, 0), (-1, 0), (-1, 1), (0, 0)],
    &[(-1, 0), (-1, -1), (-1, 1), (0, 0)],
    &[(-2, 0), (-1, -1), (-1, 0), (0, 0)],
    &[(-2, 0), (-1, -1), (-1, 0), (-1, 1)],
];

const O_ROTATIONS: [&[Offset]; 4] = [
    &[(-1, 0), (-1, 1), (0, 0), (0, 1)],
    &[(-1, 0), (-1, 1), (0, 0), (0, 1)],
    &[(-1, 0), (-1, 1), (0, 0), (0, 1)],
    &[(-1, 0), (-1, 1), (0, 0), (0, 1)],
];

const I_ROTATIONS: [&[Offset]; 4] = [
    &[(-2, 0), (-1, 0), (0, 0), (1, 0)],
    &[(0, -1), (0, 0), (0, 1), (0, 2)],
    &[(-2, 0), (-1, 0), (0, 0), (1, 0)],
    &[(0, -1), (0, 0), (0, 1), (0, 2)],
];

const T_ROTATIONS: [&[Offset]; 4] = [
    &[(-2, -1), (0, -1), (0, 0), (0, 1), (1, 0)],
    &[(-2, 0), (-2, 2), (-1, -1), (-1, 0), (0, 0)],
    &[(-2, 0), (-1, -1), (-1, 0), (-1, 1), (1, 1)],
    &[(-2, 1), (-1, 1), (-1, 2), (0, 1), (0, -1)],
];

impl PieceKind {
    /// All piece kinds, in spawn-bag order
    pub const ALL: [PieceKind; 8] = [
        PieceKind::L,
        PieceKind::Li,
        PieceKind::S,
        PieceKind::Si,
        PieceKind::M,
        PieceKind::O,
        PieceKind::I,
        PieceKind::T,
    ];

    /// The four rotation variants of this piece
    pub fn rotations(self) -> &'static [&'static [Offset]; 4] {
        match self {
            PieceKind::L => &L_ROTATIONS,
            PieceKind::Li => &LI_ROTATIONS,
            PieceKind::S => &S_ROTATIONS,
            PieceKind::Si => &SI_ROTATIONS,
            PieceKind::M => &M_ROTATIONS,
            PieceKind::O => &O_ROTATIONS,
            PieceKind::I => &I_ROTATIONS,
            PieceKind::T => &T_ROTATIONS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::L => "L",
            PieceKind::Li => "Li",
            PieceKind::S => "S",
            PieceKind::Si => "Si",
            PieceKind::M => "M",
            PieceKind::O => "O",
            PieceKind::I => "I",
            PieceKind::T => "T",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PieceKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" => Ok(PieceKind::L),
            "li" => Ok(PieceKind::Li),
            "s" => Ok(PieceKind::S),
            "si" => Ok(PieceKind::Si),
            "m" => Ok(PieceKind::M),
            "o" => Ok(PieceKind::O),
            "i" => Ok(PieceKind::I),
            "t" => Ok(PieceKind::T),
            _ => Err(crate::Error::ParsePieceKind {
                input: s.to_string(),
                expected: "L, Li, S, Si, M, O, I, T".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_counts() {
        for kind in PieceKind::ALL {
            for rotation in kind.rotations() {
                let expected = if kind == PieceKind::T { 5 } else { 4 };
                assert_eq!(rotation.len(), expected, "{kind} rotation size");
            }
        }
    }

    #[test]
    fn test_offsets_stay_small() {
        for kind in PieceKind::ALL {
            for rotation in kind.rotations() {
                for &(dr, dc) in *rotation {
                    assert!((-2..=1).contains(&dr), "{kind} row offset {dr}");
                    assert!((-1..=2).contains(&dc), "{kind} col offset {dc}");
                }
            }
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.name().parse::<PieceKind>().unwrap(), kind);
        }
        assert!("Q".parse::<PieceKind>().is_err());
    }
}
