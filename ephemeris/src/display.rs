//! Display-space body sizing
//!
//! Two fixed radius tables: an artistic set tuned for legibility, and a
//! physically-scaled set derived from real radii. Both are precomputed at
//! construction; the mode is a pure configuration choice, not mutable
//! state.

use crate::catalog::{BodyId, Catalog, BODY_COUNT};

/// Artistic display radii, catalog order
pub const ARTISTIC_RADII: [f64; BODY_COUNT] =
    [0.25, 0.02, 0.04, 0.05, 0.01, 0.03, 0.15, 0.12, 0.09, 0.08];

/// Body sizing scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Hand-tuned radii for legible scenes
    Artistic,
    /// Radii proportional to physical size
    Physical,
}

/// Precomputed display radius tables for one catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTables {
    artistic: [f64; BODY_COUNT],
    physical: [f64; BODY_COUNT],
}

impl DisplayTables {
    /// Build both tables for `catalog`.
    ///
    /// The physical table scales every radius by twice the largest real
    /// radius, so the Sun lands at exactly 0.5.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let real = catalog.real_radii_km();
        let largest = real.iter().fold(f64::MIN, |a, &b| a.max(b));
        let scale = 2.0 * largest;
        Self {
            artistic: ARTISTIC_RADII,
            physical: std::array::from_fn(|i| real[i] / scale),
        }
    }

    /// Radius table for `mode`, catalog order
    pub fn radii(&self, mode: DisplayMode) -> &[f64; BODY_COUNT] {
        match mode {
            DisplayMode::Artistic => &self.artistic,
            DisplayMode::Physical => &self.physical,
        }
    }

    /// Radius of one body under `mode`
    pub fn radius(&self, body: BodyId, mode: DisplayMode) -> f64 {
        self.radii(mode)[body.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn artistic_table_is_the_fixed_set() {
        let tables = DisplayTables::for_catalog(&Catalog::builtin());
        assert_eq!(tables.radii(DisplayMode::Artistic), &ARTISTIC_RADII);
        assert_eq!(tables.radius(BodyId::Sun, DisplayMode::Artistic), 0.25);
        assert_eq!(tables.radius(BodyId::Moon, DisplayMode::Artistic), 0.01);
    }

    #[test]
    fn physical_sun_is_half() {
        let tables = DisplayTables::for_catalog(&Catalog::builtin());
        assert_relative_eq!(
            tables.radius(BodyId::Sun, DisplayMode::Physical),
            0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn physical_table_preserves_size_ordering() {
        let catalog = Catalog::builtin();
        let tables = DisplayTables::for_catalog(&catalog);
        let physical = tables.radii(DisplayMode::Physical);
        let real = catalog.real_radii_km();
        for a in 0..BODY_COUNT {
            for b in 0..BODY_COUNT {
                assert_eq!(real[a] < real[b], physical[a] < physical[b]);
            }
        }
    }

    #[test]
    fn physical_radii_are_positive_fractions() {
        let tables = DisplayTables::for_catalog(&Catalog::builtin());
        for radius in tables.radii(DisplayMode::Physical) {
            assert!(*radius > 0.0 && *radius <= 0.5);
        }
    }
}
