//! Trailing-window statistics.

/// Relative tolerance under which a window's spread counts as zero.
const ZERO_SPREAD: f64 = 1e-12;

/// Rolling mean and sample standard deviation (n - 1 denominator).
///
/// The window at position `i` covers `values[i + 1 - window..=i]`, so the
/// first `window - 1` positions are `None`.
pub fn rolling_mean_std(values: &[f64], window: usize) -> Vec<Option<(f64, f64)>> {
    if window < 2 {
        return vec![None; values.len()];
    }

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }
            let slice = &values[i + 1 - window..=i];
            let n = window as f64;
            let mean = slice.iter().sum::<f64>() / n;
            let var = slice.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
            Some((mean, var.sqrt()))
        })
        .collect()
}

/// Rolling z-score of each point against its own trailing window.
///
/// `None` where the window is incomplete, the spread is zero, or the
/// result is not finite.
pub fn rolling_zscores(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling_mean_std(values, window)
        .into_iter()
        .zip(values)
        .map(|(stats, &x)| {
            let (mean, std) = stats?;
            if !std.is_finite() || std <= ZERO_SPREAD * (1.0 + mean.abs()) {
                return None;
            }
            let z = (x - mean) / std;
            z.is_finite().then_some(z)
        })
        .collect()
}
