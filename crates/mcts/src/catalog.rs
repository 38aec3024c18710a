//! Candidate move enumeration.
//!
//! A [`MoveCatalog`] lists every cell of the board as a candidate move for
//! one color, in a shuffled order drawn from the agent's RNG. All legality
//! checks run against a disposable copy of the board, so callers' boards are
//! never touched.

use nogo_core::{Board, Color, Move};
use rand::seq::SliceRandom;
use rand::Rng;

/// Every cell of the board as a candidate move for one color.
#[derive(Clone, Debug)]
pub struct MoveCatalog {
    color: Color,
    moves: Vec<Move>,
}

impl MoveCatalog {
    /// Create a catalog in cell order.
    pub fn new(color: Color, num_cells: usize) -> Self {
        Self {
            color,
            moves: (0..num_cells).map(|cell| Move::new(cell, color)).collect(),
        }
    }

    /// Create a catalog in an order drawn from `rng`.
    pub fn shuffled<R: Rng + ?Sized>(color: Color, num_cells: usize, rng: &mut R) -> Self {
        let mut catalog = Self::new(color, num_cells);
        catalog.shuffle(rng);
        catalog
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.moves.shuffle(rng);
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// All candidates in catalog order, legal or not.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Legal moves in catalog order.
    pub fn legal_moves<B: Board>(&self, board: &B) -> Vec<Move> {
        self.moves
            .iter()
            .copied()
            .filter(|&mv| try_play(board, mv).is_some())
            .collect()
    }

    /// Whether any candidate is legal. Stops at the first legal one.
    pub fn has_any_legal_move<B: Board>(&self, board: &B) -> bool {
        self.first_legal_move(board).is_some()
    }

    /// First legal candidate in catalog order.
    pub fn first_legal_move<B: Board>(&self, board: &B) -> Option<Move> {
        self.first_legal_move_where(board, |_| true)
    }

    /// First legal candidate in catalog order that `accept` lets through.
    ///
    /// `accept` runs before the legality check, so cheap filters save board
    /// copies.
    pub fn first_legal_move_where<B, F>(&self, board: &B, mut accept: F) -> Option<Move>
    where
        B: Board,
        F: FnMut(&Move) -> bool,
    {
        self.moves
            .iter()
            .copied()
            .find(|mv| accept(mv) && try_play(board, *mv).is_some())
    }

    /// Reshuffle, then play the first legal candidate on a copy of `board`.
    ///
    /// The first legal entry of a uniformly shuffled list is uniformly
    /// distributed over the legal moves. Returns the move and the resulting
    /// board.
    pub fn random_legal_move<B, R>(&mut self, board: &B, rng: &mut R) -> Option<(Move, B)>
    where
        B: Board,
        R: Rng + ?Sized,
    {
        self.shuffle(rng);
        self.moves
            .iter()
            .find_map(|&mv| try_play(board, mv).map(|after| (mv, after)))
    }
}

/// Play `mv` on a copy of `board`, returning the copy if the move was legal.
pub fn try_play<B: Board>(board: &B, mv: Move) -> Option<B> {
    let mut after = board.clone();
    mv.apply(&mut after).is_legal().then_some(after)
}
