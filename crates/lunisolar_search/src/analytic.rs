//! Low-precision analytic Sun and Moon longitudes.
//!
//! Sun: mean longitude plus equation of centre, aberration and nutation in
//! longitude. Moon: mean longitude plus the 35 largest periodic terms of the
//! standard lunar series and three additive planetary terms.
//!
//! Accuracy is roughly 0.01° for the Sun and 0.05° for the Moon over
//! 1800-2200, which places new moons and solar terms within a few minutes.
//! ΔT is held fixed at 69 s.

use lunisolar_time::UnixTime;

use crate::error::SearchError;
use crate::oracle::{Body, LongitudeOracle};

const J2000_JD: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;
const DELTA_T_SECONDS: f64 = 69.0;

/// Self-contained Sun/Moon model; no data files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticOracle;

impl AnalyticOracle {
    pub fn new() -> Self {
        Self
    }
}

impl LongitudeOracle for AnalyticOracle {
    fn longitude(&self, body: Body, t: UnixTime) -> Result<f64, SearchError> {
        Ok(match body {
            Body::Sun => sun_longitude_deg(t),
            Body::Moon => moon_longitude_deg(t),
        })
    }
}

/// Julian centuries of TT since J2000.0.
fn tt_centuries(t: UnixTime) -> f64 {
    let jd_tt = t.to_jd() + DELTA_T_SECONDS / 86_400.0;
    (jd_tt - J2000_JD) / DAYS_PER_CENTURY
}

/// Longitude of the Moon's ascending node (low precision), degrees.
fn node_deg(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Apparent geocentric ecliptic longitude of the Sun in degrees `[0, 360)`.
pub fn sun_longitude_deg(t: UnixTime) -> f64 {
    let t = tt_centuries(t);
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = node_deg(t).to_radians();
    (l0 + c - 0.005_69 - 0.004_78 * omega.sin()).rem_euclid(360.0)
}

/// Periodic terms for the Moon's longitude.
#[rustfmt::skip]
static MOON_TERMS: [[f64; 5]; 35] = [
    //  D     M     M'    F     coefficient (1e-6 deg)
    [ 0.0,  0.0,  1.0,  0.0,  6_288_774.0],
    [ 2.0,  0.0, -1.0,  0.0,  1_274_027.0],
    [ 2.0,  0.0,  0.0,  0.0,    658_314.0],
    [ 0.0,  0.0,  2.0,  0.0,    213_618.0],
    [ 0.0,  1.0,  0.0,  0.0,   -185_116.0],
    [ 0.0,  0.0,  0.0,  2.0,   -114_332.0],
    [ 2.0,  0.0, -2.0,  0.0,     58_793.0],
    [ 2.0, -1.0, -1.0,  0.0,     57_066.0],
    [ 2.0,  0.0,  1.0,  0.0,     53_322.0],
    [ 2.0, -1.0,  0.0,  0.0,     45_758.0],
    [ 0.0,  1.0, -1.0,  0.0,    -40_923.0],
    [ 1.0,  0.0,  0.0,  0.0,    -34_720.0],
    [ 0.0,  1.0,  1.0,  0.0,    -30_383.0],
    [ 2.0,  0.0,  0.0, -2.0,     15_327.0],
    [ 0.0,  0.0,  1.0,  2.0,    -12_528.0],
    [ 0.0,  0.0,  1.0, -2.0,     10_980.0],
    [ 4.0,  0.0, -1.0,  0.0,     10_675.0],
    [ 0.0,  0.0,  3.0,  0.0,     10_034.0],
    [ 4.0,  0.0, -2.0,  0.0,      8_548.0],
    [ 2.0,  1.0, -1.0,  0.0,     -7_888.0],
    [ 2.0,  1.0,  0.0,  0.0,     -6_766.0],
    [ 1.0,  0.0, -1.0,  0.0,     -5_163.0],
    [ 1.0,  1.0,  0.0,  0.0,      4_987.0],
    [ 2.0, -1.0,  1.0,  0.0,      4_036.0],
    [ 2.0,  0.0,  2.0,  0.0,      3_994.0],
    [ 4.0,  0.0,  0.0,  0.0,      3_861.0],
    [ 2.0,  0.0, -3.0,  0.0,      3_665.0],
    [ 0.0,  1.0, -2.0,  0.0,     -2_689.0],
    [ 2.0,  0.0, -1.0,  2.0,     -2_602.0],
    [ 2.0, -1.0, -2.0,  0.0,      2_390.0],
    [ 1.0,  0.0,  1.0,  0.0,     -2_348.0],
    [ 2.0, -2.0,  0.0,  0.0,      2_236.0],
    [ 0.0,  1.0,  2.0,  0.0,     -2_120.0],
    [ 0.0,  2.0,  0.0,  0.0,     -2_069.0],
    [ 2.0, -2.0, -1.0,  0.0,      2_048.0],
];

/// Apparent geocentric ecliptic longitude of the Moon in degrees `[0, 360)`.
pub fn moon_longitude_deg(t: UnixTime) -> f64 {
    let t = tt_centuries(t);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    // Eccentricity of Earth's orbit scales terms containing M.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let mut sum = 0.0;
    for term in &MOON_TERMS {
        let arg = (term[0] * d + term[1] * m + term[2] * mp + term[3] * f).to_radians();
        let scale = e.powi(term[1].abs() as i32);
        sum += term[4] * scale * arg.sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum += 3958.0 * a1.sin() + 1962.0 * (lp - f).to_radians().sin() + 318.0 * a2.sin();

    let omega = node_deg(t).to_radians();
    (lp + sum / 1e6 - 0.004_78 * omega.sin()).rem_euclid(360.0)
}
