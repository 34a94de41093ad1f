//! Classification and regression views over prediction outputs.

// =============================================================================
// BinaryPrediction
// =============================================================================

/// A probability of the positive outcome, read as a two-class prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryPrediction(f64);

impl BinaryPrediction {
    #[inline]
    pub fn new(probability: f64) -> Self {
        Self(probability)
    }

    /// Probability of category 1.
    #[inline]
    pub fn probability(self) -> f64 {
        self.0
    }

    /// The more likely category: 0 below 0.5, 1 otherwise.
    #[inline]
    pub fn category(self) -> usize {
        if self.0 < 0.5 {
            0
        } else {
            1
        }
    }

    /// Probability of `category`. Categories other than 0 and 1 have none.
    #[inline]
    pub fn prob(self, category: usize) -> f64 {
        match category {
            0 => 1.0 - self.0,
            1 => self.0,
            _ => 0.0,
        }
    }
}

// =============================================================================
// ClassificationStats
// =============================================================================

/// Per-class observation weights of a classification tree node.
///
/// `stats[c]` is the total weight of examples of class `c` that reached the
/// node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationStats<'a> {
    weights: &'a [f64],
    total: f64,
}

impl<'a> ClassificationStats<'a> {
    pub fn from_stats(stats: &'a [f64]) -> Self {
        Self {
            weights: stats,
            total: stats.iter().sum(),
        }
    }

    /// Total observed weight.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.total
    }

    /// The class with the highest weight; the first one wins a tie.
    ///
    /// `None` if nothing was observed.
    pub fn category(&self) -> Option<usize> {
        if self.total <= 0.0 {
            return None;
        }
        let mut best: Option<(usize, f64)> = None;
        for (index, &w) in self.weights.iter().enumerate() {
            if best.map_or(true, |(_, b)| w > b) {
                best = Some((index, w));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Share of the total weight belonging to `category`.
    pub fn prob(&self, category: usize) -> f64 {
        if self.total <= 0.0 {
            return 0.0;
        }
        self.weights.get(category).copied().unwrap_or(0.0) / self.total
    }
}

// =============================================================================
// RegressionStats
// =============================================================================

/// Running moments of the target at a regression tree node.
///
/// Layout of the statistics vector: `[weight, sum, sum_of_squares]`, all
/// weighted. Missing entries read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegressionStats {
    pub weight: f64,
    pub sum: f64,
    pub sum_squares: f64,
}

impl RegressionStats {
    pub fn from_stats(stats: &[f64]) -> Self {
        let at = |i: usize| stats.get(i).copied().unwrap_or(0.0);
        Self {
            weight: at(0),
            sum: at(1),
            sum_squares: at(2),
        }
    }

    /// Weighted mean; NaN if nothing was observed.
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.weight <= 0.0 {
            return f64::NAN;
        }
        self.sum / self.weight
    }

    /// Sample variance; NaN for a total weight of 1 or less.
    #[inline]
    pub fn variance(&self) -> f64 {
        if self.weight <= 1.0 {
            return f64::NAN;
        }
        (self.sum_squares - self.sum * self.sum / self.weight) / (self.weight - 1.0)
    }

    /// Sample standard deviation.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}
