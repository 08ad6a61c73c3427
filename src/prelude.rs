//! Commonly used types and utilities for ease of import.

pub use crate::core::{
    play_game, play_turn, Coord, FleetConfig, Game, GameError, GridConfig, Player, Ship,
    StrategyKind, TargetingStrategy,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, run_evaluation, SimConfig};
