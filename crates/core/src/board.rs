use crate::{Move, Placement};

/// A fixed-size grid that NoGo agents play on.
///
/// The board owns the rules: it decides whether a placement is legal and
/// whose turn follows. Search code never inspects cells directly; it only
/// enumerates cell indices and asks the board to place stones, always on a
/// disposable copy when probing legality.
pub trait Board: Clone {
    /// Total number of cells. Cell indices run from `0` to `num_cells() - 1`.
    fn num_cells(&self) -> usize;

    /// Places a stone.
    ///
    /// On [`Placement::Legal`] the board is updated and the turn passes to
    /// the other color. Any other verdict leaves the board unchanged.
    fn place(&mut self, mv: Move) -> Placement;
}
