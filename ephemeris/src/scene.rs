//! Scene snapshots for an external rendering host
//!
//! Combines the catalog, a world-space anchor, and a display mode, and
//! derives the per-body state a renderer applies each frame: orbit angle,
//! position, display radius, and animation rates.

use chrono::{DateTime, Utc};
use log::debug;
use nalgebra::Vector3;

use crate::catalog::{BodyId, Catalog, BODY_COUNT};
use crate::display::{DisplayMode, DisplayTables};
use crate::position::compute_world_position;
use crate::timescale::{angular_speed_for, SpeedMultiplier};

/// Derived state for one body at a single instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub body: BodyId,
    /// Orbit angle, radians in `[0, 2π)`
    pub orbit_angle_rad: f64,
    /// World-space position in the orbit plane
    pub position: Vector3<f64>,
    /// Display radius under the scene's sizing mode
    pub display_radius: f64,
    /// Animation rate of orbital revolution, radians per second
    pub orbit_rate_rad_s: f64,
    /// Animation rate of axial rotation, radians per second; negative
    /// means retrograde
    pub spin_rate_rad_s: f64,
}

/// A placed solar system: catalog, anchor position, and sizing mode.
#[derive(Debug, Clone)]
pub struct SolarScene {
    catalog: Catalog,
    origin: Vector3<f64>,
    mode: DisplayMode,
    display: DisplayTables,
}

impl SolarScene {
    /// Anchor a scene at `origin` with the given sizing mode.
    pub fn new(catalog: Catalog, origin: Vector3<f64>, mode: DisplayMode) -> Self {
        let display = DisplayTables::for_catalog(&catalog);
        debug!(
            "solar scene anchored at ({:.3}, {:.3}, {:.3})",
            origin.x, origin.y, origin.z
        );
        Self {
            catalog,
            origin,
            mode,
            display,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn origin(&self) -> Vector3<f64> {
        self.origin
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Derived state for every body at `time` under `multiplier`, in
    /// catalog order.
    pub fn snapshot(
        &self,
        time: DateTime<Utc>,
        multiplier: SpeedMultiplier,
    ) -> [BodyState; BODY_COUNT] {
        let angles = self.catalog.orbit_angles_at(time);
        std::array::from_fn(|i| {
            let body = &self.catalog.bodies()[i];
            BodyState {
                body: body.id,
                orbit_angle_rad: angles[i],
                position: compute_world_position(self.origin, angles[i], body.display_orbit_radius),
                display_radius: self.display.radius(body.id, self.mode),
                orbit_rate_rad_s: angular_speed_for(body.orbit_period_days, multiplier),
                spin_rate_rad_s: angular_speed_for(body.rotation_period_days, multiplier),
            }
        })
    }
}
