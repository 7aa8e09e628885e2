//! Order statistics for distribution summaries.
//!
//! Quantiles use linear interpolation between closest ranks, the convention box
//! plots are usually drawn with.

/// Sort a copy of `values` ascending. NaNs sort last.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.total_cmp(b));
    out
}

/// Quantile `q` in `[0, 1]` of an ascending slice. `None` if empty.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantiles_interpolate() {
        let v = sorted(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(v, vec![1.0, 2.0, 3.0, 4.0]);
        assert!((quantile_sorted(&v, 0.0).unwrap() - 1.0).abs() < 1e-12);
        assert!((quantile_sorted(&v, 0.5).unwrap() - 2.5).abs() < 1e-12);
        assert!((quantile_sorted(&v, 0.25).unwrap() - 1.75).abs() < 1e-12);
        assert!((quantile_sorted(&v, 1.0).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_has_no_statistics() {
        assert_eq!(quantile_sorted(&[], 0.5), None);
        assert_eq!(mean(&[]), None);
    }
}
