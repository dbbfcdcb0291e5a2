//! Orbital motion: mean angular speeds and instantaneous orbit angles
//!
//! Bodies move at constant mean rates: 360 degrees per sidereal period.
//! Angles are propagated linearly from the epoch base angles and
//! canonicalized to `[0, 2π)`. Zero-period bodies do not move.

use chrono::{DateTime, Utc};

use crate::angle::degrees_to_radians;
use crate::catalog::{Catalog, BODY_COUNT};

/// Seconds in one day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Mean orbital angular speed in degrees per second.
///
/// A zero period marks a non-orbiting body and yields zero speed; the
/// division is never taken for it.
pub fn orbit_angular_speed(period_days: f64) -> f64 {
    if period_days == 0.0 {
        0.0
    } else {
        360.0 / (period_days * SECONDS_PER_DAY)
    }
}

/// Instantaneous orbit angle of one body, radians in `[0, 2π)`.
///
/// `elapsed_seconds` is signed time since the epoch; querying before the
/// epoch is allowed and wraps the same way.
pub fn orbit_angle(base_angle_deg: f64, period_days: f64, elapsed_seconds: f64) -> f64 {
    degrees_to_radians(base_angle_deg + orbit_angular_speed(period_days) * elapsed_seconds)
}

/// Orbit angles for a full body table at `query`, radians in `[0, 2π)`,
/// emitted in catalog order.
pub fn compute_orbit_angles(
    query: DateTime<Utc>,
    epoch: DateTime<Utc>,
    base_angles_deg: &[f64; BODY_COUNT],
    periods_days: &[f64; BODY_COUNT],
) -> [f64; BODY_COUNT] {
    let elapsed = seconds_between(epoch, query);
    std::array::from_fn(|i| orbit_angle(base_angles_deg[i], periods_days[i], elapsed))
}

impl Catalog {
    /// Orbit angles for every body at `time`, radians in `[0, 2π)`,
    /// catalog order.
    pub fn orbit_angles_at(&self, time: DateTime<Utc>) -> [f64; BODY_COUNT] {
        compute_orbit_angles(
            time,
            self.epoch(),
            &self.base_angles_deg(),
            &self.orbit_periods_days(),
        )
    }
}

/// Signed elapsed seconds from `from` to `to`, millisecond precision.
fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    to.signed_duration_since(from).num_milliseconds() as f64 / 1e3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::FULL_TURN_RAD;
    use crate::catalog::BodyId;
    use approx::assert_relative_eq;
    use chrono::Duration;
    use rstest::rstest;
    use std::f64::consts::PI;

    fn epoch() -> DateTime<Utc> {
        Catalog::builtin().epoch()
    }

    #[test]
    fn quarter_day_quarter_turn() {
        // base 0 deg, 1-day period, 6 hours elapsed: a quarter turn
        let angle = orbit_angle(0.0, 1.0, 21_600.0);
        assert_relative_eq!(angle, PI / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_period_body_never_moves() {
        for elapsed in [-1e9, 0.0, 1.0, 3.6e6, 4.2e12] {
            assert_eq!(orbit_angle(0.0, 0.0, elapsed), 0.0);
        }
        assert_eq!(orbit_angular_speed(0.0), 0.0);
    }

    #[test]
    fn angles_at_epoch_match_base_angles() {
        let catalog = Catalog::builtin();
        let angles = catalog.orbit_angles_at(catalog.epoch());
        for (body, angle) in BodyId::ALL.iter().zip(angles) {
            assert_relative_eq!(
                angle,
                degrees_to_radians(catalog.body(*body).base_angle_deg),
                epsilon = 1e-12
            );
        }
    }

    #[rstest]
    #[case(BodyId::Mercury)]
    #[case(BodyId::Earth)]
    #[case(BodyId::Neptune)]
    fn full_periods_return_to_base(#[case] body: BodyId) {
        let catalog = Catalog::builtin();
        let at_epoch = catalog.orbit_angles_at(catalog.epoch());
        for k in [1_i64, 3, 10] {
            let period_s = catalog.body(body).orbit_period_days * SECONDS_PER_DAY;
            let query = catalog.epoch() + Duration::milliseconds((period_s * 1e3) as i64 * k);
            let angles = catalog.orbit_angles_at(query);
            let diff = (angles[body.index()] - at_epoch[body.index()]).abs();
            // compare on the circle: 2π-ε and ε are the same angle
            let wrapped = diff.min(FULL_TURN_RAD - diff);
            assert!(wrapped < 1e-5, "{body} after {k} periods: {wrapped}");
        }
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let catalog = Catalog::builtin();
        let query = catalog.epoch() + Duration::days(1_234);
        let first = catalog.orbit_angles_at(query);
        let second = catalog.orbit_angles_at(query);
        assert_eq!(first, second);
    }

    #[test]
    fn all_angles_canonical_over_long_spans() {
        let catalog = Catalog::builtin();
        for days in [-100_000, -1, 0, 1, 365, 100_000, 4_000_000] {
            let angles = catalog.orbit_angles_at(epoch() + Duration::days(days));
            for angle in angles {
                assert!(
                    (0.0..FULL_TURN_RAD).contains(&angle),
                    "day offset {days}: {angle}"
                );
            }
        }
    }
}
