use alloc::vec;
use alloc::vec::Vec;

/// Aggregate of shots-to-finish samples.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: usize,
    pub max: usize,
}

impl Summary {
    /// `None` for an empty sample.
    pub fn from_samples(samples: &[usize]) -> Option<Self> {
        let count = samples.len();
        let min = *samples.iter().min()?;
        let max = *samples.iter().max()?;
        let n = count as f64;
        let mean = samples.iter().map(|&s| s as f64).sum::<f64>() / n;
        let var = samples
            .iter()
            .map(|&s| {
                let d = s as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        Some(Self {
            count,
            mean,
            std_dev: libm::sqrt(var),
            min,
            max,
        })
    }
}

/// Equal-width histogram over `[min, max]` with `bins` buckets.
pub fn histogram(samples: &[usize], bins: usize) -> Vec<usize> {
    let mut counts = vec![0usize; bins];
    let (Some(&min), Some(&max)) = (samples.iter().min(), samples.iter().max()) else {
        return counts;
    };
    if bins == 0 {
        return counts;
    }
    let span = (max - min + 1) as f64;
    for &s in samples {
        let b = (((s - min) as f64 / span) * bins as f64) as usize;
        counts[b.min(bins - 1)] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_known_sample() {
        let s = Summary::from_samples(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert_eq!(s.mean, 5.0);
        assert_eq!(s.std_dev, 2.0);
        assert_eq!((s.min, s.max, s.count), (2, 9, 8));
        assert!(Summary::from_samples(&[]).is_none());
    }

    #[test]
    fn histogram_counts_every_sample() {
        let h = histogram(&[1, 2, 3, 4, 10], 3);
        assert_eq!(h.iter().sum::<usize>(), 5);
        assert_eq!(h[2], 1);
    }
}
