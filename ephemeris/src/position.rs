//! World-space placement of orbiting bodies
//!
//! Orbits are planar in the horizontal (XZ) plane with +Y up; the orbit
//! angle sweeps from +X toward -Z.

use nalgebra::Vector3;

/// Position of a body on its orbit, translated by `origin`.
///
/// A zero orbit radius yields the origin itself: the Sun, or a body whose
/// motion comes from a rotating parent pivot.
pub fn compute_world_position(
    origin: Vector3<f64>,
    angle_rad: f64,
    orbit_radius: f64,
) -> Vector3<f64> {
    let x = orbit_radius * angle_rad.cos();
    let z = -orbit_radius * angle_rad.sin();
    origin + Vector3::new(x, 0.0, z)
}
