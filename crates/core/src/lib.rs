//! NoGo Core - board abstractions and common types
//!
//! This crate provides the pieces every NoGo agent agrees on: stone colors,
//! moves, the [`Board`] trait the search plays against, and the errors raised
//! while configuring an agent.
//!
//! # Types
//!
//! - [`Board`] - Trait for a mutable grid that accepts or rejects placements
//! - [`Move`] - A cell index paired with the color placing there
//! - [`Placement`] - The board's verdict on a placement

mod board;
mod error;
mod types;

pub use board::Board;
pub use error::{ConfigError, Result};
pub use types::{Color, Move, Placement};
