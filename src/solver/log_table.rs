//! Precomputed base-2 logarithms
//!
//! `entry(n) = log2(n / max)` for `n` in `1..=max`. Since
//! `entry(count) - entry(total) = log2(count / total)`, entropy terms for any
//! bucket of a candidate set no larger than `max` become two array reads.

/// Lookup table of `log2(n / max)`
#[derive(Debug, Clone)]
pub struct LogTable {
    entries: Vec<f64>,
}

impl LogTable {
    /// Fill the table for counts up to `max_count`
    #[must_use]
    pub fn precompute(max_count: usize) -> Self {
        let max = max_count as f64;
        let entries = (0..=max_count)
            .map(|n| if n == 0 { f64::NEG_INFINITY } else { (n as f64 / max).log2() })
            .collect();
        Self { entries }
    }

    /// Largest count the table covers
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.entries.len() - 1
    }

    /// `log2(n / max)`, or `None` outside `1..=max`
    #[inline]
    #[must_use]
    pub fn entry(&self, n: usize) -> Option<f64> {
        if n == 0 {
            return None;
        }
        self.entries.get(n).copied()
    }

    /// `log2(count / total)` for `0 < count <= total`
    ///
    /// Falls back to computing the logarithm when `total` exceeds the table.
    ///
    /// # Examples
    /// ```
    /// use wordle_lookahead::solver::LogTable;
    ///
    /// let logs = LogTable::precompute(16);
    /// assert!((logs.log2_ratio(2, 8) - (-2.0)).abs() < 1e-12);
    /// assert!((logs.log2_ratio(3, 100) - (0.03_f64).log2()).abs() < 1e-12);
    /// ```
    #[inline]
    #[must_use]
    pub fn log2_ratio(&self, count: usize, total: usize) -> f64 {
        match (self.entry(count), self.entry(total)) {
            (Some(part), Some(whole)) => part - whole,
            _ => (count as f64 / total as f64).log2(),
        }
    }
}
