#![cfg(feature = "std")]

//! Batch evaluation of a targeting strategy over many independent games.
//!
//! Games share nothing, so they are split across blocking tokio workers and
//! only the per-player outcomes are joined.

use anyhow::ensure;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::core::{
    histogram, play_game, FleetConfig, Game, GameError, GameOutcome, GridConfig, StrategyKind,
    Summary,
};

/// Number of histogram buckets in a [`Report`].
pub const HISTOGRAM_BINS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub grid: GridConfig,
    pub fleet: FleetConfig,
    pub strategy: StrategyKind,
    pub games: usize,
    pub players_per_game: usize,
    /// Game `i` is seeded with `seed + i`.
    pub seed: u64,
    pub workers: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            fleet: FleetConfig::default(),
            strategy: StrategyKind::default(),
            games: 100,
            players_per_game: 1,
            seed: 0,
            workers: 4,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.games > 0, "at least one game is required");
        ensure!(self.players_per_game > 0, "at least one player per game is required");
        ensure!(self.workers > 0, "at least one worker is required");
        ensure!(!self.fleet.lengths.is_empty(), "fleet has no ships");
        Ok(())
    }
}

/// Aggregated results of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub strategy: StrategyKind,
    pub games: usize,
    pub players: usize,
    /// Shots fired by every player, grouped by game.
    pub shots: Vec<usize>,
    pub summary: Option<Summary>,
    pub histogram: Vec<usize>,
    /// Players stopped by the shot cap with ships still afloat.
    pub anomalies: usize,
}

impl Report {
    fn from_outcomes(config: &SimConfig, outcomes: &[GameOutcome]) -> Self {
        let shots: Vec<usize> = outcomes.iter().map(|o| o.shots_fired).collect();
        Self {
            strategy: config.strategy,
            games: config.games,
            players: outcomes.len(),
            summary: Summary::from_samples(&shots),
            histogram: histogram(&shots, HISTOGRAM_BINS),
            anomalies: outcomes.iter().filter(|o| !o.won).count(),
            shots,
        }
    }
}

/// Play a single seeded game.
pub fn run_single(config: &SimConfig, index: usize) -> Result<Vec<GameOutcome>, GameError> {
    let mut rng = SmallRng::seed_from_u64(config.seed.wrapping_add(index as u64));
    let strategy = config.strategy.build(config.grid, &config.fleet);
    let mut game = Game::new(config.grid, &config.fleet, config.players_per_game, &mut rng)?;
    play_game(&mut game, strategy.as_ref(), &mut rng)
}

fn run_chunk(
    config: &SimConfig,
    indices: std::ops::Range<usize>,
) -> Result<Vec<GameOutcome>, GameError> {
    let mut outcomes = Vec::new();
    for i in indices {
        outcomes.extend(run_single(config, i)?);
    }
    Ok(outcomes)
}

/// Run the configured batch and aggregate the outcomes.
///
/// Results are independent of `workers`: each game has its own seed and the
/// chunks are joined in game order.
pub async fn run_evaluation(config: SimConfig) -> anyhow::Result<Report> {
    config.validate()?;
    let workers = config.workers.min(config.games);
    let chunk = config.games.div_ceil(workers);
    log::info!(
        "evaluating {:?} over {} games ({} players each) on {} workers",
        config.strategy,
        config.games,
        config.players_per_game,
        workers
    );

    let mut handles = Vec::with_capacity(workers);
    for w in 0..workers {
        let start = w * chunk;
        let end = (start + chunk).min(config.games);
        if start >= end {
            break;
        }
        let cfg = config.clone();
        handles.push(tokio::task::spawn_blocking(move || run_chunk(&cfg, start..end)));
    }

    let mut outcomes = Vec::with_capacity(config.games * config.players_per_game);
    for handle in handles {
        outcomes.extend(handle.await??);
    }

    let report = Report::from_outcomes(&config, &outcomes);
    if report.anomalies > 0 {
        log::warn!(
            "{} players stopped at the shot cap without sinking their fleet",
            report.anomalies
        );
    }
    Ok(report)
}
