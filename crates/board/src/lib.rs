//! NoGo Board - the NoGo rules on a rectangular grid
//!
//! NoGo is played like Go, except that captures are forbidden: a stone may
//! not be placed where it would take the last liberty of an opposing group,
//! nor where its own group would be left without liberties. The player who
//! cannot place a stone on their turn loses.

mod grid;

pub use grid::{NoGoBoard, DEFAULT_SIZE};
