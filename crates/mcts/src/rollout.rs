//! Random playouts from a leaf position.

use crate::catalog::MoveCatalog;
use nogo_core::{Board, Color};
use rand::Rng;

/// Result of a simulation, from the searching agent's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Scalar value added to node statistics: 1 for a win, 0 for a loss.
    pub fn value(self) -> f32 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Loss => 0.0,
        }
    }
}

/// Plays uniformly random legal moves for both sides until one is stuck.
///
/// Holds its own scratch catalogs, reshuffled on every draw, so the search
/// catalogs keep their order.
#[derive(Clone, Debug)]
pub struct RolloutSimulator {
    agent: MoveCatalog,
    opponent: MoveCatalog,
}

impl RolloutSimulator {
    pub fn new(agent: Color, num_cells: usize) -> Self {
        Self {
            agent: MoveCatalog::new(agent, num_cells),
            opponent: MoveCatalog::new(agent.opponent(), num_cells),
        }
    }

    /// Play out `board`, which must have the opponent to move.
    ///
    /// The side that cannot move on its turn loses. Runs until that happens,
    /// so the board must not admit endless play.
    pub fn simulate<B, R>(&mut self, mut board: B, rng: &mut R) -> Outcome
    where
        B: Board,
        R: Rng + ?Sized,
    {
        loop {
            match self.opponent.random_legal_move(&board, rng) {
                Some((_, after)) => board = after,
                None => return Outcome::Win,
            }
            match self.agent.random_legal_move(&board, rng) {
                Some((_, after)) => board = after,
                None => return Outcome::Loss,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nogo_core::{Move, Placement};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Each side owns its own row of cells and may fill them in any order,
    /// alternating turns.
    #[derive(Clone)]
    struct Rows {
        black_left: usize,
        white_left: usize,
        to_move: Color,
    }

    impl Board for Rows {
        fn num_cells(&self) -> usize {
            8
        }

        fn place(&mut self, mv: Move) -> Placement {
            if mv.color != self.to_move {
                return Placement::WrongTurn;
            }
            let (left, owned) = match mv.color {
                Color::Black => (&mut self.black_left, mv.cell < 4),
                Color::White => (&mut self.white_left, mv.cell >= 4),
            };
            if !owned || *left == 0 {
                return Placement::Occupied;
            }
            *left -= 1;
            self.to_move = mv.color.opponent();
            Placement::Legal
        }
    }

    #[test]
    fn test_outcome_values() {
        assert_eq!(Outcome::Win.value(), 1.0);
        assert_eq!(Outcome::Loss.value(), 0.0);
    }

    #[test]
    fn test_opponent_stuck_is_a_win() {
        let board = Rows {
            black_left: 2,
            white_left: 0,
            to_move: Color::White,
        };
        let mut sim = RolloutSimulator::new(Color::Black, 8);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(sim.simulate(board, &mut rng), Outcome::Win);
    }

    #[test]
    fn test_agent_stuck_is_a_loss() {
        let board = Rows {
            black_left: 0,
            white_left: 1,
            to_move: Color::White,
        };
        let mut sim = RolloutSimulator::new(Color::Black, 8);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(sim.simulate(board, &mut rng), Outcome::Loss);
    }

    #[test]
    fn test_longer_supply_wins() {
        // White moves first; black runs out one move before white.
        for seed in 0..10 {
            let board = Rows {
                black_left: 2,
                white_left: 3,
                to_move: Color::White,
            };
            let mut sim = RolloutSimulator::new(Color::Black, 8);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            assert_eq!(sim.simulate(board, &mut rng), Outcome::Loss);
        }
    }

    #[test]
    fn test_simulation_is_seeded() {
        let run = |seed| {
            let board = rows_for_seed(seed);
            let mut sim = RolloutSimulator::new(Color::White, 8);
            sim.simulate(board, &mut ChaCha8Rng::seed_from_u64(seed))
        };
        for seed in 0..5 {
            assert_eq!(run(seed), run(seed));
        }
    }

    fn rows_for_seed(seed: u64) -> Rows {
        Rows {
            black_left: (seed % 4) as usize,
            white_left: 2,
            to_move: Color::Black,
        }
    }
}
