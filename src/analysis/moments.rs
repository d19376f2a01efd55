// Running mean (Welford's update) and two-pass sample spread
//
// A run of identical values keeps the running mean bit-exact, so every
// deviation from it is exactly zero. Any value that differs from the mean
// contributes a non-zero deviation to the second pass.

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RunningMoments {
    count: usize,
    mean: f64,
}

impl RunningMoments {
    pub(crate) fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut moments = Self::default();
        for x in values {
            moments.update(x);
        }
        moments
    }

    pub(crate) fn update(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
    }

    /// Arithmetic mean, 0.0 when nothing was recorded
    pub(crate) fn mean(&self) -> f64 {
        self.mean
    }
}

/// Sample standard deviation (n - 1) of `values` about `mean`
///
/// Deviations are scaled by the largest one before squaring so tiny
/// differences do not underflow to zero and huge ones do not overflow.
/// Returns 0.0 below two values.
pub(crate) fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let scale = values
        .iter()
        .map(|x| (x - mean).abs())
        .fold(0.0, f64::max);
    if scale == 0.0 {
        return 0.0;
    }

    let scaled_sum: f64 = values
        .iter()
        .map(|x| {
            let d = (x - mean) / scale;
            d * d
        })
        .sum();

    scale * (scaled_sum / (values.len() - 1) as f64).sqrt()
}
