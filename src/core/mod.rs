//! Core simulation engine (no_std compatible)
//!
//! Grid, ships, players, targeting strategies and the turn driver. Needs only
//! `alloc`, `rand`, `log` and `libm`, so it builds without the `std` feature.

pub mod board;
pub mod common;
pub mod config;
pub mod dataset;
pub mod density;
pub mod game;
pub mod grid;
pub mod player;
pub mod ship;
pub mod stats;
pub mod strategy;
pub mod turn;

// Re-export commonly used types
pub use board::{CellState, ShotRecord};
pub use common::{GameError, PlacementError, Shot};
pub use config::*;
pub use dataset::{generate_records, split_record, training_record};
pub use density::DensityPredictor;
pub use game::Game;
pub use grid::{Coord, GridConfig};
pub use player::Player;
pub use ship::{Orientation, Ship};
pub use stats::{histogram, Summary};
pub use strategy::{
    Predictor, Random, RandomSeek, Seek, SmartSeek, StrategyKind, TargetingStrategy,
};
pub use turn::{play_game, play_turn, rank_targets, GameOutcome, TurnReport};
