//! Monte Carlo Tree Search agent for NoGo.
//!
//! This crate chooses moves for one side of a NoGo game under a per-decision
//! budget. It works with any board implementing [`nogo_core::Board`].
//!
//! # Features
//!
//! - **UCB1 Selection**: unvisited children first, then
//!   `value / visits + C * sqrt(2 * ln(N) / visits)`
//! - **Lazy Expansion**: at most one new child per visit
//! - **Random Rollouts**: uniformly random legal moves until one side is stuck
//! - **Budgets**: a fixed cycle count, a wall-clock deadline, or no search
//! - **Robust Child**: the most visited root child is played
//!
//! # Example
//!
//! ```
//! use nogo_core::Color;
//! use nogo_mcts::{Mcts, SearchConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! # #[derive(Clone)]
//! # struct Strip(Vec<bool>);
//! # impl nogo_core::Board for Strip {
//! #     fn num_cells(&self) -> usize { self.0.len() }
//! #     fn place(&mut self, mv: nogo_core::Move) -> nogo_core::Placement {
//! #         if self.0[mv.cell] { return nogo_core::Placement::Occupied; }
//! #         self.0[mv.cell] = true;
//! #         nogo_core::Placement::Legal
//! #     }
//! # }
//! # let board = Strip(vec![false; 6]);
//!
//! let config = SearchConfig::with_iterations(100);
//! let rng = ChaCha8Rng::seed_from_u64(42);
//! let mut mcts = Mcts::new(config, rng);
//!
//! let result = mcts.search(&board, Color::Black);
//! println!("Best move: {:?}", result.best_move);
//! println!("Cycles run: {}", result.cycles);
//! ```

pub mod agent;
mod backprop;
mod budget;
pub mod catalog;
pub mod config;
mod expansion;
mod node;
pub mod rollout;
pub mod search;
mod selection;
mod tree;

pub use agent::{Agent, MctsPlayer};
pub use catalog::MoveCatalog;
pub use config::{AgentConfig, Budget, SearchConfig};
pub use rollout::{Outcome, RolloutSimulator};
pub use search::{Mcts, SearchResult};
