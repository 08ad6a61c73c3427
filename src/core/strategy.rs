//! Targeting strategies: map a shot record to a per-cell desirability score.
//!
//! Scores are row-major, one per grid cell, and only ever compared with each
//! other. Randomness comes exclusively from the `rng` handed to
//! [`TargetingStrategy::score`], so a seeded generator reproduces a game.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::board::{CellState, ShotRecord};
use crate::core::common::GameError;
use crate::core::config::FleetConfig;
use crate::core::density::DensityPredictor;
use crate::core::grid::GridConfig;

/// Interface implemented by every targeting strategy.
pub trait TargetingStrategy {
    /// Score every cell of `shots`; higher means more worth shooting.
    fn score(&self, shots: &ShotRecord, rng: &mut SmallRng) -> Result<Vec<f64>, GameError>;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str;
}

/// External score source consulted by [`SmartSeek`] when no hit has open
/// neighbours.
///
/// Input is the flattened signed shot record (`-1` miss, `0` unshot, `1` hit);
/// the output must have the same length.
pub trait Predictor {
    fn predict(&self, shots: &[i8]) -> Vec<f64>;
}

impl<F> Predictor for F
where
    F: Fn(&[i8]) -> Vec<f64>,
{
    fn predict(&self, shots: &[i8]) -> Vec<f64> {
        self(shots)
    }
}

/// Uniform random scores with no spatial logic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Random;

impl TargetingStrategy for Random {
    fn score(&self, shots: &ShotRecord, rng: &mut SmallRng) -> Result<Vec<f64>, GameError> {
        Ok((0..shots.cells().len()).map(|_| rng.random::<f64>()).collect())
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Hunt around confirmed hits: every unshot orthogonal neighbour of a hit
/// scores 1, everything else 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Seek;

impl Seek {
    pub fn targets(&self, shots: &ShotRecord) -> Vec<f64> {
        let grid = shots.grid();
        let mut scores = vec![0.0; grid.cell_count()];
        for hit in shots.hits() {
            for n in grid.neighbors(hit) {
                if let Ok(i) = grid.index_of(n) {
                    if shots.cells()[i] == CellState::Unshot {
                        scores[i] = 1.0;
                    }
                }
            }
        }
        scores
    }

    /// No hit has an open neighbour left.
    fn exhausted(scores: &[f64]) -> bool {
        scores.iter().sum::<f64>() <= 0.0
    }
}

impl TargetingStrategy for Seek {
    fn score(&self, shots: &ShotRecord, _rng: &mut SmallRng) -> Result<Vec<f64>, GameError> {
        Ok(self.targets(shots))
    }

    fn name(&self) -> &'static str {
        "seek"
    }
}

/// [`Seek`] with uniform random scores once seeking has nothing to offer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSeek {
    pub seek: Seek,
    pub fallback: Random,
}

impl RandomSeek {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TargetingStrategy for RandomSeek {
    fn score(&self, shots: &ShotRecord, rng: &mut SmallRng) -> Result<Vec<f64>, GameError> {
        let scores = self.seek.targets(shots);
        if Seek::exhausted(&scores) {
            return self.fallback.score(shots, rng);
        }
        Ok(scores)
    }

    fn name(&self) -> &'static str {
        "random-seek"
    }
}

/// [`Seek`] backed by a [`Predictor`] once seeking has nothing to offer.
#[derive(Debug, Clone)]
pub struct SmartSeek<P> {
    pub seek: Seek,
    pub delegate: P,
}

impl<P: Predictor> SmartSeek<P> {
    pub fn new(delegate: P) -> Self {
        Self {
            seek: Seek,
            delegate,
        }
    }
}

impl<P: Predictor> TargetingStrategy for SmartSeek<P> {
    fn score(&self, shots: &ShotRecord, _rng: &mut SmallRng) -> Result<Vec<f64>, GameError> {
        let scores = self.seek.targets(shots);
        if !Seek::exhausted(&scores) {
            return Ok(scores);
        }
        let predicted = self.delegate.predict(&shots.to_signed());
        let expected = shots.cells().len();
        if predicted.len() != expected {
            return Err(GameError::DelegateShape {
                expected,
                actual: predicted.len(),
            });
        }
        Ok(predicted)
    }

    fn name(&self) -> &'static str {
        "smart-seek"
    }
}

/// Strategy selector used by the simulation runner and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "std",
    derive(clap::ValueEnum, serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum StrategyKind {
    Random,
    Seek,
    #[default]
    RandomSeek,
    SmartSeek,
}

impl StrategyKind {
    /// Build a fresh strategy. `SmartSeek` is backed by a [`DensityPredictor`]
    /// for `fleet`.
    pub fn build(self, grid: GridConfig, fleet: &FleetConfig) -> Box<dyn TargetingStrategy + Send> {
        match self {
            StrategyKind::Random => Box::new(Random),
            StrategyKind::Seek => Box::new(Seek),
            StrategyKind::RandomSeek => Box::new(RandomSeek::new()),
            StrategyKind::SmartSeek => Box::new(SmartSeek::new(DensityPredictor::new(
                grid,
                fleet.lengths.clone(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Coord;
    use rand::SeedableRng;

    #[test]
    fn seek_skips_shot_neighbors() {
        let grid = GridConfig::new(3, 1).unwrap();
        let mut shots = ShotRecord::new(grid);
        shots.set(Coord::new(1, 0), CellState::Hit).unwrap();
        shots.set(Coord::new(0, 0), CellState::Miss).unwrap();
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(Seek.score(&shots, &mut rng).unwrap(), vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn random_scores_are_unit_interval() {
        let shots = ShotRecord::new(GridConfig::default());
        let mut rng = SmallRng::seed_from_u64(3);
        let scores = Random.score(&shots, &mut rng).unwrap();
        assert_eq!(scores.len(), 100);
        assert!(scores.iter().all(|s| (0.0..1.0).contains(s)));
    }
}
