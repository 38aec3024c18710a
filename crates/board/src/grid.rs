//! Grid storage and placement rules.

use nogo_core::{Board, Color, Move, Placement};
use std::fmt;

/// Default width and height of a NoGo board.
pub const DEFAULT_SIZE: usize = 9;

/// Column labels, skipping `I` as Go boards do.
const COLUMN_LABELS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// A NoGo position: stones on a grid plus the side to move.
///
/// Cells are indexed row-major from the top-left corner:
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct NoGoBoard {
    width: usize,
    height: usize,
    cells: Vec<Option<Color>>,
    to_move: Color,
}

impl NoGoBoard {
    /// Create an empty 9×9 board with black to move.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SIZE, DEFAULT_SIZE)
    }

    /// Create an empty board of the given dimensions with black to move.
    ///
    /// # Panics
    /// Panics if either dimension is zero or wider than the column labels.
    pub fn with_size(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        assert!(
            width <= COLUMN_LABELS.len(),
            "board wider than {} columns",
            COLUMN_LABELS.len()
        );
        Self {
            width,
            height,
            cells: vec![None; width * height],
            to_move: Color::Black,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The color whose turn it is.
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Get the stone on a cell, if any.
    pub fn get(&self, cell: usize) -> Option<Color> {
        self.cells.get(cell).copied().flatten()
    }

    /// Number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Human-readable coordinate for a cell, e.g. `C4`.
    pub fn cell_name(&self, cell: usize) -> String {
        let row = cell / self.width;
        let col = cell % self.width;
        format!("{}{}", COLUMN_LABELS[col] as char, row + 1)
    }

    /// Orthogonal neighbors of a cell.
    fn neighbors(&self, cell: usize) -> impl Iterator<Item = usize> {
        let (width, height) = (self.width, self.height);
        let row = cell / width;
        let col = cell % width;
        [
            (row > 0).then(|| cell - width),
            (row + 1 < height).then(|| cell + width),
            (col > 0).then(|| cell - 1),
            (col + 1 < width).then(|| cell + 1),
        ]
        .into_iter()
        .flatten()
    }

    /// Whether the group containing `cell` touches at least one empty cell.
    fn has_liberty(&self, cell: usize) -> bool {
        let Some(color) = self.cells[cell] else {
            return true;
        };

        let mut seen = vec![false; self.cells.len()];
        let mut stack = vec![cell];
        seen[cell] = true;

        while let Some(current) = stack.pop() {
            for next in self.neighbors(current) {
                match self.cells[next] {
                    None => return true,
                    Some(c) if c == color && !seen[next] => {
                        seen[next] = true;
                        stack.push(next);
                    }
                    _ => {}
                }
            }
        }
        false
    }
}

impl Default for NoGoBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for NoGoBoard {
    fn num_cells(&self) -> usize {
        self.cells.len()
    }

    fn place(&mut self, mv: Move) -> Placement {
        if mv.color != self.to_move {
            return Placement::WrongTurn;
        }
        match self.cells.get(mv.cell) {
            None => return Placement::OutOfBounds,
            Some(Some(_)) => return Placement::Occupied,
            Some(None) => {}
        }

        self.cells[mv.cell] = Some(mv.color);

        let opponent = mv.color.opponent();
        let captures = self
            .neighbors(mv.cell)
            .any(|n| self.cells[n] == Some(opponent) && !self.has_liberty(n));
        if captures {
            self.cells[mv.cell] = None;
            return Placement::Capture;
        }

        if !self.has_liberty(mv.cell) {
            self.cells[mv.cell] = None;
            return Placement::Suicide;
        }

        self.to_move = opponent;
        Placement::Legal
    }
}

impl fmt::Display for NoGoBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.width {
            write!(f, " {}", COLUMN_LABELS[col] as char)?;
        }
        writeln!(f)?;

        for row in 0..self.height {
            write!(f, "{:>3}", row + 1)?;
            for col in 0..self.width {
                let symbol = match self.cells[row * self.width + col] {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
