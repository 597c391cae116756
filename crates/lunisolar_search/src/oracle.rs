//! The longitude oracle seam.

use serde::Serialize;

use lunisolar_time::UnixTime;

use crate::error::SearchError;

/// Bodies the calendar needs positions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Body {
    Sun,
    Moon,
}

/// A source of apparent geocentric ecliptic longitude.
///
/// Implementations return degrees in `[0, 360)` (other finite values are
/// normalized by the caller). Precise ephemerides, cached tables and the
/// built-in [`AnalyticOracle`](crate::AnalyticOracle) all fit here.
pub trait LongitudeOracle {
    fn longitude(&self, body: Body, t: UnixTime) -> Result<f64, SearchError>;
}

/// Plain closures are infallible oracles.
impl<F> LongitudeOracle for F
where
    F: Fn(Body, UnixTime) -> f64,
{
    fn longitude(&self, body: Body, t: UnixTime) -> Result<f64, SearchError> {
        Ok(self(body, t))
    }
}

/// Query the oracle and reject non-finite output.
pub(crate) fn checked_longitude<O>(oracle: &O, body: Body, t: UnixTime) -> Result<f64, SearchError>
where
    O: LongitudeOracle + ?Sized,
{
    let lon = oracle.longitude(body, t)?;
    if !lon.is_finite() {
        return Err(SearchError::Oracle(format!(
            "non-finite {body:?} longitude at {t}"
        )));
    }
    Ok(lon.rem_euclid(360.0))
}
