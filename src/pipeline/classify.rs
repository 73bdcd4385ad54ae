//! Bold classification: a page-relative density threshold.
//!
//! ## Why relative, not absolute?
//!
//! A fixed ink-density cutoff is brittle across scan resolutions and fonts;
//! what counts as "heavy" ink on a 300 DPI book page is ordinary on a fax.
//! Computing `mean + k·stddev` from the page's own density distribution
//! adapts the cutoff to each document's ink statistics, so only words that
//! stand out from *their* page are marked bold.

/// Compute the bold threshold for one page's accepted densities.
///
/// `threshold = mean + multiplier × population standard deviation`,
/// computed once per page. Callers skip classification entirely for pages
/// with no accepted words; an empty slice returns `0.0` defensively.
pub fn bold_threshold(densities: &[f64], multiplier: f64) -> f64 {
    if densities.is_empty() {
        return 0.0;
    }

    let n = densities.len() as f64;
    let mean = densities.iter().sum::<f64>() / n;
    // Population variance (divide by N): the page's densities are the whole
    // population of interest, not a sample from something larger.
    let variance = densities.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n;

    mean + multiplier * variance.sqrt()
}

/// A word is bold only when its density *strictly* exceeds the threshold.
///
/// On a perfectly uniform page the threshold equals the mean, so no word is
/// marked bold.
pub fn is_bold(density: f64, threshold: f64) -> bool {
    density > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exactly_mean_plus_scaled_stddev() {
        // Exactly representable inputs: mean 0.25, deviations ±0.125,
        // variance 0.015625, stddev 0.125 — all powers of two, so the
        // formula holds with no rounding slack at all.
        let densities = [0.125, 0.375];
        assert_eq!(bold_threshold(&densities, 0.5), 0.25 + 0.5 * 0.125);
        assert_eq!(bold_threshold(&densities, 2.0), 0.25 + 2.0 * 0.125);
    }

    #[test]
    fn threshold_is_reproducible_bit_for_bit() {
        let densities = [0.123456, 0.654321, 0.333333];
        let a = bold_threshold(&densities, 0.5);
        let b = bold_threshold(&densities, 0.5);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn uniform_densities_mark_nothing_bold() {
        let densities = [0.5; 7];
        let t = bold_threshold(&densities, 0.5);
        assert_eq!(t, 0.5);
        assert!(densities.iter().all(|&d| !is_bold(d, t)));
    }

    #[test]
    fn single_density_is_never_bold() {
        let t = bold_threshold(&[0.9], 0.5);
        assert_eq!(t, 0.9);
        assert!(!is_bold(0.9, t));
    }

    #[test]
    fn threshold_lies_between_min_and_max_for_small_multipliers() {
        let densities = [0.1, 0.5, 0.9];
        let t = bold_threshold(&densities, 0.5);
        assert!(t > 0.1 && t < 0.9, "got {t}");
    }

    #[test]
    fn higher_multiplier_requires_stronger_deviation() {
        let densities = [0.1, 0.2, 0.8];
        let relaxed = bold_threshold(&densities, 0.25);
        let strict = bold_threshold(&densities, 1.5);
        assert!(strict > relaxed);
        assert!(is_bold(0.8, relaxed));
        assert!(!is_bold(0.8, strict));
    }

    #[test]
    fn comparison_is_strict() {
        assert!(!is_bold(0.5, 0.5));
        assert!(is_bold(0.5 + f64::EPSILON, 0.5));
    }

    #[test]
    fn empty_slice_is_handled() {
        assert_eq!(bold_threshold(&[], 0.5), 0.0);
    }
}
