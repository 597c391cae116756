//! Types for new-moon and solar-term search.

use serde::Serialize;

use lunisolar_time::UnixTime;

use crate::solar_term::SolarTerm;

/// A solar-term crossing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTermEvent {
    /// Crossing instant (UTC).
    pub time: UnixTime,
    /// Which term was entered.
    pub term: SolarTerm,
}

impl SolarTermEvent {
    pub fn new(time: UnixTime, term: SolarTerm) -> Self {
        Self { time, term }
    }
}

/// Configuration for the grid-scan + bisection searches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchConfig {
    /// Coarse scan step in days (default 1).
    pub step_days: f64,
    /// Maximum bisection iterations (default 50).
    pub max_iterations: u32,
    /// Bracket width at which bisection stops, in days (default 1e-8, ~0.86 ms).
    pub convergence_days: f64,
    /// Upper bound on new moons returned from one search (default 64).
    pub max_new_moons: usize,
    /// Upper bound on solar terms returned from one search (default 96).
    pub max_solar_terms: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            step_days: 1.0,
            max_iterations: 50,
            convergence_days: 1e-8,
            max_new_moons: 64,
            max_solar_terms: 96,
        }
    }
}

impl SearchConfig {
    /// Raise the capacities, if needed, to hold a span of `years` calendar years.
    pub fn sized_for_years(self, years: u32) -> Self {
        let years = years.max(1) as usize;
        Self {
            max_new_moons: self.max_new_moons.max(years * 13 + 2),
            max_solar_terms: self.max_solar_terms.max(years * 24 + 2),
            ..self
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        // A step must stay inside one 15° solar sector.
        if !self.step_days.is_finite() || self.step_days <= 0.0 || self.step_days > 10.0 {
            return Err("step_days must be in (0, 10]");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        if self.max_new_moons < 2 {
            return Err("max_new_moons must be >= 2");
        }
        if self.max_solar_terms == 0 {
            return Err("max_solar_terms must be > 0");
        }
        Ok(())
    }
}

/// New moons and solar terms precomputed for a span of Gregorian years.
///
/// Computing a window is the expensive step; resolving any number of dates
/// inside it afterwards is cheap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventWindow {
    /// First year covered (from Jan 1 00:00 UTC).
    pub start_year: i32,
    /// Last year covered (through Dec 31 24:00 UTC).
    pub end_year: i32,
    /// New-moon instants, ascending.
    pub new_moons: Vec<UnixTime>,
    /// Solar-term crossings, ascending.
    pub solar_terms: Vec<SolarTermEvent>,
}

impl EventWindow {
    /// Whether `year` lies inside the window.
    pub fn covers_year(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }

    /// Principal-term crossings only.
    pub fn principal_terms(&self) -> impl Iterator<Item = &SolarTermEvent> {
        self.solar_terms.iter().filter(|e| e.term.is_principal())
    }

    /// Terms entered during one UTC calendar year.
    pub fn terms_in_year(&self, year: i32) -> impl Iterator<Item = &SolarTermEvent> {
        self.solar_terms
            .iter()
            .filter(move |e| e.time.utc_year() == year)
    }

    /// New moons falling in one UTC calendar year.
    pub fn new_moons_in_year(&self, year: i32) -> impl Iterator<Item = UnixTime> + '_ {
        self.new_moons
            .iter()
            .copied()
            .filter(move |t| t.utc_year() == year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let c = SearchConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.max_iterations, 50);
        assert_eq!(c.max_new_moons, 64);
        assert_eq!(c.max_solar_terms, 96);
    }

    #[test]
    fn invalid_configs() {
        let bad_step = SearchConfig {
            step_days: 0.0,
            ..SearchConfig::default()
        };
        assert!(bad_step.validate().is_err());
        let huge_step = SearchConfig {
            step_days: 20.0,
            ..SearchConfig::default()
        };
        assert!(huge_step.validate().is_err());
        let no_iter = SearchConfig {
            max_iterations: 0,
            ..SearchConfig::default()
        };
        assert!(no_iter.validate().is_err());
        let nan_tol = SearchConfig {
            convergence_days: f64::NAN,
            ..SearchConfig::default()
        };
        assert!(nan_tol.validate().is_err());
        let tiny_cap = SearchConfig {
            max_new_moons: 1,
            ..SearchConfig::default()
        };
        assert!(tiny_cap.validate().is_err());
    }

    #[test]
    fn capacities_scale_with_years() {
        let c = SearchConfig::default().sized_for_years(20);
        assert_eq!(c.max_new_moons, 262);
        assert_eq!(c.max_solar_terms, 482);
        assert_eq!(c.max_iterations, 50);
        assert_eq!(SearchConfig::default().sized_for_years(3), SearchConfig::default());
    }
}
