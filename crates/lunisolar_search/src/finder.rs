//! New-moon and solar-term search.
//!
//! Both searches walk a fixed grid from Jan 1 of the first year to Jan 1 of
//! the year after the last, looking for a bracket where the tracked quantity
//! crosses its target, then bisect inside the bracket.
//!
//! - New moon: Moon−Sun elongation in (−180°, 180°] goes from negative to non-negative.
//! - Solar term: `floor(sun_longitude / 15) mod 24` changes; the crossing is at `sector·15°`.

use tracing::{debug, trace};

use lunisolar_time::{J1970_JD, UnixTime, days_from_civil};

use crate::error::SearchError;
use crate::finder_types::{EventWindow, SearchConfig, SolarTermEvent};
use crate::oracle::{Body, LongitudeOracle, checked_longitude};
use crate::search_util::{bisect_zero, normalize_to_pm180};
use crate::solar_term::ALL_SOLAR_TERMS;

/// Moon−Sun elongation in degrees, normalized to (−180, 180].
pub fn elongation_at<O>(oracle: &O, t: UnixTime) -> Result<f64, SearchError>
where
    O: LongitudeOracle + ?Sized,
{
    let moon = checked_longitude(oracle, Body::Moon, t)?;
    let sun = checked_longitude(oracle, Body::Sun, t)?;
    Ok(normalize_to_pm180(moon - sun))
}

/// Julian Date of Jan 1 00:00 UTC.
fn year_start_jd(year: i32) -> f64 {
    days_from_civil(year, 1, 1) as f64 + J1970_JD
}

/// Common checks, returning the scan span in JD.
fn scan_span(
    start_year: i32,
    end_year: i32,
    config: &SearchConfig,
) -> Result<(f64, f64), SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if start_year > end_year {
        return Err(SearchError::InvalidYearRange {
            start: start_year,
            end: end_year,
        });
    }
    Ok((year_start_jd(start_year), year_start_jd(end_year + 1)))
}

fn sector_of(sun_lon: f64) -> u8 {
    ((sun_lon / 15.0).floor() as i64).rem_euclid(24) as u8
}

// ---------------------------------------------------------------------------
// New moons
// ---------------------------------------------------------------------------

/// All new moons from Jan 1 of `start_year` to Jan 1 of `end_year + 1` (UTC).
///
/// Errors with `CapacityExceeded` rather than truncating when more than
/// `config.max_new_moons` are found.
pub fn find_new_moons<O>(
    oracle: &O,
    start_year: i32,
    end_year: i32,
    config: &SearchConfig,
) -> Result<Vec<UnixTime>, SearchError>
where
    O: LongitudeOracle + ?Sized,
{
    let (jd_start, jd_end) = scan_span(start_year, end_year, config)?;
    let elong_at = |jd: f64| elongation_at(oracle, UnixTime::from_jd(jd));

    let mut out = Vec::new();
    let mut t_prev = jd_start;
    let mut f_prev = elong_at(t_prev)?;

    while t_prev < jd_end {
        let t_curr = (t_prev + config.step_days).min(jd_end);
        let f_curr = elong_at(t_curr)?;

        if f_prev < 0.0 && f_curr >= 0.0 {
            if out.len() == config.max_new_moons {
                return Err(SearchError::CapacityExceeded {
                    kind: "new moons",
                    capacity: config.max_new_moons,
                });
            }
            let jd = bisect_zero(
                t_prev,
                f_prev,
                t_curr,
                config.max_iterations,
                config.convergence_days,
                &elong_at,
            )?;
            let t = UnixTime::from_jd(jd);
            trace!(%t, "new moon");
            out.push(t);
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    debug!(start_year, end_year, count = out.len(), "new moon search complete");
    Ok(out)
}

// ---------------------------------------------------------------------------
// Solar terms
// ---------------------------------------------------------------------------

/// All solar-term crossings from Jan 1 of `start_year` to Jan 1 of `end_year + 1` (UTC).
pub fn find_solar_terms<O>(
    oracle: &O,
    start_year: i32,
    end_year: i32,
    config: &SearchConfig,
) -> Result<Vec<SolarTermEvent>, SearchError>
where
    O: LongitudeOracle + ?Sized,
{
    let (jd_start, jd_end) = scan_span(start_year, end_year, config)?;
    let sun_at = |jd: f64| checked_longitude(oracle, Body::Sun, UnixTime::from_jd(jd));

    let mut out = Vec::new();
    let mut t_prev = jd_start;
    let mut sector_prev = sector_of(sun_at(t_prev)?);

    while t_prev < jd_end {
        let t_curr = (t_prev + config.step_days).min(jd_end);
        let sector_curr = sector_of(sun_at(t_curr)?);

        if sector_curr != sector_prev {
            if out.len() == config.max_solar_terms {
                return Err(SearchError::CapacityExceeded {
                    kind: "solar terms",
                    capacity: config.max_solar_terms,
                });
            }
            let target = f64::from(sector_curr) * 15.0;
            let offset_at = |jd: f64| -> Result<f64, SearchError> {
                Ok(normalize_to_pm180(sun_at(jd)? - target))
            };
            let f_prev = offset_at(t_prev)?;
            let jd = bisect_zero(
                t_prev,
                f_prev,
                t_curr,
                config.max_iterations,
                config.convergence_days,
                &offset_at,
            )?;
            let term = ALL_SOLAR_TERMS[sector_curr as usize];
            let event = SolarTermEvent::new(UnixTime::from_jd(jd), term);
            trace!(t = %event.time, term = %event.term, "solar term");
            out.push(event);
        }

        t_prev = t_curr;
        sector_prev = sector_curr;
    }

    debug!(start_year, end_year, count = out.len(), "solar term search complete");
    Ok(out)
}

/// Run both searches over `start_year..=end_year`.
pub fn compute_window<O>(
    oracle: &O,
    start_year: i32,
    end_year: i32,
    config: &SearchConfig,
) -> Result<EventWindow, SearchError>
where
    O: LongitudeOracle + ?Sized,
{
    let new_moons = find_new_moons(oracle, start_year, end_year, config)?;
    let solar_terms = find_solar_terms(oracle, start_year, end_year, config)?;
    Ok(EventWindow {
        start_year,
        end_year,
        new_moons,
        solar_terms,
    })
}
