//! Agents that take turns on a board.

use crate::config::{AgentConfig, DEFAULT_SEED};
use crate::search::{Mcts, SearchResult};
use nogo_core::{Board, Color, Move, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// A player driven by an external game loop.
pub trait Agent<B: Board> {
    fn name(&self) -> &str;

    /// The color this agent plays.
    fn role(&self) -> Color;

    /// Called before the first move of a game.
    fn open_episode(&mut self, flag: &str) {
        debug!(agent = self.name(), flag, "episode opened");
    }

    /// Called after the last move of a game.
    fn close_episode(&mut self, flag: &str) {
        debug!(agent = self.name(), flag, "episode closed");
    }

    /// Choose a legal move for [`role`](Agent::role), or `None` to pass when
    /// there is none.
    fn take_action(&mut self, board: &B) -> Option<Move>;
}

/// An agent that picks moves with Monte Carlo Tree Search.
///
/// With neither `N` nor `T` configured it plays the first legal move in a
/// random order, which makes it a plain random player.
pub struct MctsPlayer<R: Rng = ChaCha8Rng> {
    config: AgentConfig,
    mcts: Mcts<R>,
}

impl MctsPlayer<ChaCha8Rng> {
    /// Create a player seeded from its configuration.
    pub fn new(config: AgentConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed.unwrap_or(DEFAULT_SEED));
        Self::with_rng(config, rng)
    }

    /// Create a player from a `key=value` argument string.
    ///
    /// # Errors
    /// Returns a `ConfigError` for an invalid name, role or numeric option.
    pub fn from_args(args: &str) -> Result<Self> {
        Ok(Self::new(args.parse()?))
    }
}

impl<R: Rng> MctsPlayer<R> {
    /// Create a player with an explicit random number generator.
    pub fn with_rng(config: AgentConfig, rng: R) -> Self {
        let mcts = Mcts::new(config.search_config(), rng);
        Self { config, mcts }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Update one `key=value` option between moves.
    ///
    /// The seed only takes effect at construction.
    pub fn notify(&mut self, message: &str) -> Result<()> {
        self.config.notify(message)?;
        self.mcts.set_config(self.config.search_config());
        Ok(())
    }

    /// Search `board` for this player's color, returning full statistics.
    pub fn search<B: Board>(&mut self, board: &B) -> SearchResult {
        self.mcts.search(board, self.config.role)
    }
}

impl<B: Board, R: Rng> Agent<B> for MctsPlayer<R> {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn role(&self) -> Color {
        self.config.role
    }

    fn take_action(&mut self, board: &B) -> Option<Move> {
        self.search(board).best_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Budget;
    use nogo_board::NoGoBoard;
    use nogo_core::ConfigError;
    use std::time::Duration;

    #[test]
    fn test_from_args() {
        let player = MctsPlayer::from_args("name=tester role=white N=20").unwrap();
        assert_eq!(Agent::<NoGoBoard>::name(&player), "tester");
        assert_eq!(Agent::<NoGoBoard>::role(&player), Color::White);
        assert_eq!(player.mcts.config().budget, Budget::Iterations(20));
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            MctsPlayer::from_args("name=bad:name role=black"),
            Err(ConfigError::InvalidName(_))
        ));
        assert!(matches!(
            MctsPlayer::from_args("name=ok"),
            Err(ConfigError::InvalidRole(_))
        ));
    }

    #[test]
    fn test_take_action_plays_own_color() {
        let mut board = NoGoBoard::with_size(3, 3);
        board.place(Move::new(4, Color::Black));

        let mut player = MctsPlayer::from_args("role=white N=30 seed=3").unwrap();
        let mv = player.take_action(&board).unwrap();
        assert_eq!(mv.color, Color::White);
        assert!(board.clone().place(mv).is_legal());
    }

    #[test]
    fn test_notify_switches_budget() {
        let mut player = MctsPlayer::from_args("role=black N=10").unwrap();
        player.notify("T=5").unwrap();
        assert_eq!(
            player.mcts.config().budget,
            Budget::Deadline(Duration::from_millis(5))
        );

        assert!(player.notify("role=purple").is_err());
        assert_eq!(player.config().role, Color::Black);
    }

    #[test]
    fn test_episode_hooks_are_callable() {
        let mut player = MctsPlayer::from_args("role=black").unwrap();
        Agent::<NoGoBoard>::open_episode(&mut player, "~:~");
        Agent::<NoGoBoard>::close_episode(&mut player, "done");
    }
}
