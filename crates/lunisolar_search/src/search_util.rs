//! Shared numeric helpers for the event searches.

use crate::error::SearchError;

/// Normalize an angle to `(-180, 180]` degrees.
pub(crate) fn normalize_to_pm180(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Bisect a sign change of `f_at` between `t_lo` (where `f < 0`) and `t_hi`.
///
/// Keeps the half whose endpoints still straddle the sign change. Stops
/// after `max_iter` halvings or once the bracket is narrower than
/// `convergence_days`, and returns the bracket midpoint.
pub(crate) fn bisect_zero<F>(
    mut t_lo: f64,
    mut f_lo: f64,
    mut t_hi: f64,
    max_iter: u32,
    convergence_days: f64,
    f_at: &F,
) -> Result<f64, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    for _ in 0..max_iter {
        let t_mid = 0.5 * (t_lo + t_hi);
        let f_mid = f_at(t_mid)?;

        if (f_lo < 0.0) == (f_mid < 0.0) {
            t_lo = t_mid;
            f_lo = f_mid;
        } else {
            t_hi = t_mid;
        }

        if t_hi - t_lo < convergence_days {
            break;
        }
    }

    Ok(0.5 * (t_lo + t_hi))
}
