//! Simulated time acceleration
//!
//! The host selects one of a fixed set of speed multipliers; animation
//! rates scale linearly with the selected factor. Rates for axial rotation
//! and orbital revolution come from the same formula.

use std::f64::consts::PI;
use std::fmt;

use crate::motion::orbit_angular_speed;

/// Discrete simulated-time acceleration factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedMultiplier {
    /// Simulated time tracks real time
    RealTime,
    /// One hour of simulated time per real second
    HourPerSecond,
    /// One day per real second
    DayPerSecond,
    /// Ten days per real second
    TenDaysPerSecond,
    /// Thirty days per real second
    ThirtyDaysPerSecond,
    /// One year per real second
    YearPerSecond,
}

impl SpeedMultiplier {
    /// All steps, slowest to fastest
    pub const ALL: [SpeedMultiplier; 6] = [
        SpeedMultiplier::RealTime,
        SpeedMultiplier::HourPerSecond,
        SpeedMultiplier::DayPerSecond,
        SpeedMultiplier::TenDaysPerSecond,
        SpeedMultiplier::ThirtyDaysPerSecond,
        SpeedMultiplier::YearPerSecond,
    ];

    /// Simulated seconds elapsing per real second
    pub fn factor(self) -> f64 {
        match self {
            SpeedMultiplier::RealTime => 1.0,
            SpeedMultiplier::HourPerSecond => 3_600.0,
            SpeedMultiplier::DayPerSecond => 86_400.0,
            SpeedMultiplier::TenDaysPerSecond => 864_000.0,
            SpeedMultiplier::ThirtyDaysPerSecond => 2_592_000.0,
            SpeedMultiplier::YearPerSecond => 31_536_000.0,
        }
    }

    /// Next faster step; the fastest step returns itself
    pub fn faster(self) -> Self {
        let i = self as usize;
        Self::ALL[(i + 1).min(Self::ALL.len() - 1)]
    }

    /// Next slower step; real time returns itself
    pub fn slower(self) -> Self {
        let i = self as usize;
        Self::ALL[i.saturating_sub(1)]
    }
}

impl fmt::Display for SpeedMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpeedMultiplier::RealTime => "real time",
            SpeedMultiplier::HourPerSecond => "1 hour/s",
            SpeedMultiplier::DayPerSecond => "1 day/s",
            SpeedMultiplier::TenDaysPerSecond => "10 days/s",
            SpeedMultiplier::ThirtyDaysPerSecond => "30 days/s",
            SpeedMultiplier::YearPerSecond => "1 year/s",
        };
        write!(f, "{label}")
    }
}

/// Animation angular rate in radians per second for a body with the given
/// period under the selected multiplier.
///
/// Used identically for axial rotation and orbital revolution; a negative
/// (retrograde) period gives a negative rate, a zero period gives zero.
pub fn angular_speed_for(period_days: f64, multiplier: SpeedMultiplier) -> f64 {
    orbit_angular_speed(period_days) / 180.0 * PI * multiplier.factor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn factors_match_the_fixed_set() {
        let factors: Vec<f64> = SpeedMultiplier::ALL.iter().map(|m| m.factor()).collect();
        assert_eq!(
            factors,
            [1.0, 3_600.0, 86_400.0, 864_000.0, 2_592_000.0, 31_536_000.0]
        );
    }

    #[test]
    fn stepping_clamps_at_both_ends() {
        assert_eq!(
            SpeedMultiplier::RealTime.slower(),
            SpeedMultiplier::RealTime
        );
        assert_eq!(
            SpeedMultiplier::YearPerSecond.faster(),
            SpeedMultiplier::YearPerSecond
        );
        assert_eq!(
            SpeedMultiplier::RealTime.faster(),
            SpeedMultiplier::HourPerSecond
        );
        assert_eq!(
            SpeedMultiplier::DayPerSecond.slower(),
            SpeedMultiplier::HourPerSecond
        );
    }

    #[test]
    fn stepping_walks_the_whole_set() {
        let mut m = SpeedMultiplier::RealTime;
        for expected in SpeedMultiplier::ALL {
            assert_eq!(m, expected);
            m = m.faster();
        }
    }

    #[test]
    fn day_period_at_day_per_second_is_one_turn_per_second() {
        let rate = angular_speed_for(1.0, SpeedMultiplier::DayPerSecond);
        assert_relative_eq!(rate, 2.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn real_time_rate_matches_mean_motion() {
        let rate = angular_speed_for(365.0, SpeedMultiplier::RealTime);
        assert_relative_eq!(
            rate,
            2.0 * PI / (365.0 * 86_400.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn retrograde_period_gives_negative_rate() {
        assert!(angular_speed_for(-243.02, SpeedMultiplier::DayPerSecond) < 0.0);
    }

    #[test]
    fn zero_period_gives_zero_rate() {
        assert_eq!(angular_speed_for(0.0, SpeedMultiplier::YearPerSecond), 0.0);
    }
}
