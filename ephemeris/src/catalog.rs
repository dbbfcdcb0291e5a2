//! Fixed ten-body solar system catalog
//!
//! The catalog is an immutable reference table: ten bodies in fixed order
//! plus the epoch their base angles are defined against. It is constructed
//! once, from built-in constants or a validated configuration, and passed
//! explicitly to every calculation. Per-query state (current angle, world
//! position) is derived elsewhere and never stored here.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of bodies in the catalog
pub const BODY_COUNT: usize = 10;

/// Reference epoch of the built-in base angle table, as Unix seconds
/// (2018-06-01).
pub const BUILTIN_EPOCH_UNIX: i64 = 1_527_782_400;

// Built-in tables, catalog order: sun, mercury, venus, earth, moon,
// mars, jupiter, saturn, uranus, neptune.

/// Physical radii in kilometers
pub const REAL_RADII_KM: [f64; BODY_COUNT] = [
    695_500.0, 2_440.0, 6_051.9, 6_378.1, 1_738.14, 3_398.0, 71_492.0, 60_268.0, 25_559.0,
    24_788.0,
];

/// Angular position of each body at the epoch, degrees
pub const BASE_ANGLES_DEG: [f64; BODY_COUNT] = [
    0.0, 40.9, 157.7, 250.2, 128.5, 270.4, 229.0, 274.5, 29.1, 344.4,
];

/// Sidereal orbital periods in days; 0 marks the non-orbiting Sun
pub const ORBIT_PERIODS_DAYS: [f64; BODY_COUNT] = [
    0.0, 87.7, 224.701, 365.0, 27.32, 686.98, 4_328.9, 10_799.2384, 30_778.014, 60_191.914_56,
];

/// Axial rotation periods in days; negative means retrograde spin
pub const ROTATION_PERIODS_DAYS: [f64; BODY_COUNT] = [
    25.05, 58.6535, -243.02, 0.9973, 27.32, 1.026, 0.41007, 0.4394, 0.7183, 0.6653,
];

/// Artistic orbit radii for scene layout; 0 for the Sun and for the Moon,
/// which rides an Earth-centered pivot
pub const DISPLAY_ORBIT_RADII: [f64; BODY_COUNT] =
    [0.0, 0.4, 0.6, 0.8, 0.0, 1.0, 1.4, 1.68, 1.95, 2.14];

/// Identifier for each catalog body, in fixed catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl BodyId {
    /// All bodies in catalog order
    pub const ALL: [BodyId; BODY_COUNT] = [
        BodyId::Sun,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Moon,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    /// Position of this body in the catalog tables
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase body name
    pub fn name(self) -> &'static str {
        match self {
            BodyId::Sun => "sun",
            BodyId::Mercury => "mercury",
            BodyId::Venus => "venus",
            BodyId::Earth => "earth",
            BodyId::Moon => "moon",
            BodyId::Mars => "mars",
            BodyId::Jupiter => "jupiter",
            BodyId::Saturn => "saturn",
            BodyId::Uranus => "uranus",
            BodyId::Neptune => "neptune",
        }
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Orbital and physical parameters for a single body.
///
/// Angles are defined at the catalog epoch. Periods are sidereal and in
/// days; a negative rotation period encodes retrograde spin (Venus).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    pub id: BodyId,
    /// Physical radius in kilometers
    pub real_radius_km: f64,
    /// Angular position at the catalog epoch, degrees
    pub base_angle_deg: f64,
    /// Sidereal orbital period in days; 0 only for the Sun
    pub orbit_period_days: f64,
    /// Axial rotation period in days; negative means retrograde
    pub rotation_period_days: f64,
    /// Orbit radius used for scene layout; 0 for bodies placed at their
    /// parent pivot
    pub display_orbit_radius: f64,
}

/// Catalog configuration validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("{field} has {actual} entries, expected {expected}")]
    TableLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{field} for {body} is not finite")]
    NonFinite { field: &'static str, body: BodyId },
    #[error("zero orbit period for {0}; only the sun is non-orbiting")]
    ZeroOrbitPeriod(BodyId),
    #[error("non-positive radius for {0}")]
    NonPositiveRadius(BodyId),
    #[error("epoch timestamp {0} is out of range")]
    EpochOutOfRange(i64),
}

/// External catalog configuration.
///
/// Every table must carry exactly [`BODY_COUNT`] entries in catalog order;
/// [`Catalog::from_config`] validates the tables before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Reference epoch as Unix seconds
    pub epoch_timestamp: i64,
    /// Angular position of each body at the epoch, degrees
    pub base_angles: Vec<f64>,
    /// Sidereal orbital periods, days; 0 only for the Sun
    pub orbit_periods: Vec<f64>,
    /// Axial rotation periods, days; negative means retrograde
    pub rotation_periods: Vec<f64>,
    /// Physical radii, kilometers
    pub real_radii: Vec<f64>,
    /// Orbit radii for scene layout; 0 for pivot-parented bodies
    pub display_orbit_radii: Vec<f64>,
}

impl CatalogConfig {
    /// Configuration holding the built-in constant tables
    pub fn builtin() -> Self {
        Self {
            epoch_timestamp: BUILTIN_EPOCH_UNIX,
            base_angles: BASE_ANGLES_DEG.to_vec(),
            orbit_periods: ORBIT_PERIODS_DAYS.to_vec(),
            rotation_periods: ROTATION_PERIODS_DAYS.to_vec(),
            real_radii: REAL_RADII_KM.to_vec(),
            display_orbit_radii: DISPLAY_ORBIT_RADII.to_vec(),
        }
    }
}

/// Immutable ten-body reference catalog plus its epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    epoch: DateTime<Utc>,
    bodies: [CelestialBody; BODY_COUNT],
}

impl Catalog {
    /// Catalog built from the constant tables above.
    pub fn builtin() -> Self {
        Self::from_config(&CatalogConfig::builtin())
            .expect("built-in catalog constants are valid")
    }

    /// Validate a configuration and build the catalog from it.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        check_len("base_angles", &config.base_angles)?;
        check_len("orbit_periods", &config.orbit_periods)?;
        check_len("rotation_periods", &config.rotation_periods)?;
        check_len("real_radii", &config.real_radii)?;
        check_len("display_orbit_radii", &config.display_orbit_radii)?;

        let epoch = DateTime::from_timestamp(config.epoch_timestamp, 0)
            .ok_or(CatalogError::EpochOutOfRange(config.epoch_timestamp))?;

        for body in BodyId::ALL {
            let i = body.index();
            check_finite("base_angles", body, config.base_angles[i])?;
            check_finite("orbit_periods", body, config.orbit_periods[i])?;
            check_finite("rotation_periods", body, config.rotation_periods[i])?;
            check_finite("real_radii", body, config.real_radii[i])?;
            check_finite("display_orbit_radii", body, config.display_orbit_radii[i])?;

            if config.orbit_periods[i] == 0.0 && body != BodyId::Sun {
                return Err(CatalogError::ZeroOrbitPeriod(body));
            }
            if config.real_radii[i] <= 0.0 {
                return Err(CatalogError::NonPositiveRadius(body));
            }
        }

        let bodies = std::array::from_fn(|i| CelestialBody {
            id: BodyId::ALL[i],
            real_radius_km: config.real_radii[i],
            base_angle_deg: config.base_angles[i],
            orbit_period_days: config.orbit_periods[i],
            rotation_period_days: config.rotation_periods[i],
            display_orbit_radius: config.display_orbit_radii[i],
        });

        debug!("catalog validated: {BODY_COUNT} bodies, epoch {epoch}");
        Ok(Self { epoch, bodies })
    }

    /// Reference epoch the base angles are defined against
    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    /// All bodies in catalog order
    pub fn bodies(&self) -> &[CelestialBody; BODY_COUNT] {
        &self.bodies
    }

    /// Parameters for one body
    pub fn body(&self, id: BodyId) -> &CelestialBody {
        &self.bodies[id.index()]
    }

    /// Base angle table in degrees, catalog order
    pub fn base_angles_deg(&self) -> [f64; BODY_COUNT] {
        self.bodies.map(|b| b.base_angle_deg)
    }

    /// Orbital period table in days, catalog order
    pub fn orbit_periods_days(&self) -> [f64; BODY_COUNT] {
        self.bodies.map(|b| b.orbit_period_days)
    }

    /// Rotation period table in days, catalog order
    pub fn rotation_periods_days(&self) -> [f64; BODY_COUNT] {
        self.bodies.map(|b| b.rotation_period_days)
    }

    /// Physical radius table in kilometers, catalog order
    pub fn real_radii_km(&self) -> [f64; BODY_COUNT] {
        self.bodies.map(|b| b.real_radius_km)
    }
}

fn check_len(field: &'static str, table: &[f64]) -> Result<(), CatalogError> {
    if table.len() != BODY_COUNT {
        return Err(CatalogError::TableLength {
            field,
            expected: BODY_COUNT,
            actual: table.len(),
        });
    }
    Ok(())
}

fn check_finite(field: &'static str, body: BodyId, value: f64) -> Result<(), CatalogError> {
    if !value.is_finite() {
        return Err(CatalogError::NonFinite { field, body });
    }
    Ok(())
}
