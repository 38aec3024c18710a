//! Stone colors, moves and placement verdicts.

use crate::{Board, ConfigError};
use std::fmt;
use std::str::FromStr;

/// Stone color, also used as the role an agent plays.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Get the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            other => Err(ConfigError::InvalidRole(other.to_string())),
        }
    }
}

/// Outcome of asking a board to place a stone.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Placement {
    Legal,
    /// The color is not the side to move.
    WrongTurn,
    OutOfBounds,
    Occupied,
    /// The stone would remove the last liberty of an opposing group.
    Capture,
    /// The stone's own group would have no liberties.
    Suicide,
}

impl Placement {
    pub fn is_legal(self) -> bool {
        self == Placement::Legal
    }
}

/// A stone placement: a cell index and the color placing there.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    pub cell: usize,
    pub color: Color,
}

impl Move {
    pub fn new(cell: usize, color: Color) -> Self {
        Self { cell, color }
    }

    /// Applies this move to `board`. See [`Board::place`].
    pub fn apply<B: Board>(self, board: &mut B) -> Placement {
        board.place(self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.color, self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts each cell once, regardless of color or turn.
    #[derive(Clone)]
    struct Strip {
        taken: Vec<bool>,
    }

    impl Board for Strip {
        fn num_cells(&self) -> usize {
            self.taken.len()
        }

        fn place(&mut self, mv: Move) -> Placement {
            match self.taken.get(mv.cell) {
                None => Placement::OutOfBounds,
                Some(true) => Placement::Occupied,
                Some(false) => {
                    self.taken[mv.cell] = true;
                    Placement::Legal
                }
            }
        }
    }

    #[test]
    fn test_color_opponent() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
    }

    #[test]
    fn test_color_from_str() {
        assert_eq!("black".parse::<Color>(), Ok(Color::Black));
        assert_eq!("white".parse::<Color>(), Ok(Color::White));
        assert_eq!(
            "unknown".parse::<Color>(),
            Err(ConfigError::InvalidRole("unknown".to_string()))
        );
        assert!("Black".parse::<Color>().is_err());
    }

    #[test]
    fn test_move_apply() {
        let mut board = Strip {
            taken: vec![false; 3],
        };
        let mv = Move::new(1, Color::Black);

        assert_eq!(mv.apply(&mut board), Placement::Legal);
        assert_eq!(mv.apply(&mut board), Placement::Occupied);
        assert_eq!(
            Move::new(7, Color::White).apply(&mut board),
            Placement::OutOfBounds
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Move::new(12, Color::Black).to_string(), "black@12");
    }

    #[test]
    fn test_placement_is_legal() {
        assert!(Placement::Legal.is_legal());
        assert!(!Placement::Suicide.is_legal());
        assert!(!Placement::WrongTurn.is_legal());
    }
}
