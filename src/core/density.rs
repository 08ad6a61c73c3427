// Placement-density guessing used as the built-in predictive delegate.

use alloc::vec;
use alloc::vec::Vec;

use crate::core::grid::{Coord, GridConfig};
use crate::core::ship::Orientation;
use crate::core::strategy::Predictor;

/// Placements covering `n` known hits weigh `HIT_BIAS^n`, so cells next to
/// confirmed hits stand out.
const HIT_BIAS: f64 = 10.0;

/// Scores each unshot cell by how many fleet placements consistent with the
/// observed misses would cover it.
#[derive(Debug, Clone)]
pub struct DensityPredictor {
    grid: GridConfig,
    lengths: Vec<usize>,
}

impl DensityPredictor {
    pub fn new(grid: GridConfig, lengths: Vec<usize>) -> Self {
        Self { grid, lengths }
    }

    /// Relative placement density over all cells of the grid. Values sum to 1;
    /// shot cells are 0.
    pub fn density(&self, shots: &[i8]) -> Vec<f64> {
        let grid = &self.grid;
        let at = |c: Coord| -> i8 {
            grid.index_of(c)
                .ok()
                .and_then(|i| shots.get(i).copied())
                .unwrap_or(0)
        };
        let mut matrix = vec![0.0f64; grid.cell_count()];

        for &len in self.lengths.iter() {
            if len == 0 {
                continue;
            }
            for orient in [Orientation::Horizontal, Orientation::Vertical] {
                let (max_x, max_y) = match orient {
                    Orientation::Horizontal if len <= grid.width() => {
                        (grid.width() - len + 1, grid.height())
                    }
                    Orientation::Vertical if len <= grid.height() => {
                        (grid.width(), grid.height() - len + 1)
                    }
                    _ => continue,
                };
                for y in 0..max_y {
                    for x in 0..max_x {
                        let run = (0..len).map(|k| match orient {
                            Orientation::Horizontal => Coord::new(x + k, y),
                            Orientation::Vertical => Coord::new(x, y + k),
                        });
                        if run.clone().any(|c| at(c) < 0) {
                            continue;
                        }
                        let n_hits = run.clone().filter(|c| at(*c) > 0).count();
                        let weight = libm::pow(HIT_BIAS, n_hits as f64);
                        for c in run {
                            if at(c) == 0 {
                                if let Ok(i) = grid.index_of(c) {
                                    matrix[i] += weight;
                                }
                            }
                        }
                    }
                }
            }
        }

        normalize(matrix, shots)
    }
}

fn normalize(mut matrix: Vec<f64>, shots: &[i8]) -> Vec<f64> {
    let total: f64 = matrix.iter().sum();
    if total == 0.0 {
        // nothing fits any more; spread evenly over what is left
        let open = |i: usize| shots.get(i).copied().unwrap_or(0) == 0;
        let count = (0..matrix.len()).filter(|&i| open(i)).count();
        if count == 0 {
            return matrix;
        }
        let uniform = 1.0 / count as f64;
        for (i, v) in matrix.iter_mut().enumerate() {
            *v = if open(i) { uniform } else { 0.0 };
        }
        return matrix;
    }
    for v in matrix.iter_mut() {
        *v /= total;
    }
    matrix
}

impl Predictor for DensityPredictor {
    fn predict(&self, shots: &[i8]) -> Vec<f64> {
        self.density(shots)
    }
}
