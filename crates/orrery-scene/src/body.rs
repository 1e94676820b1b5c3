//! Fixed catalog of solar-system bodies and Saturn's ring.
//!
//! Bodies are immutable records; positions are derived from elapsed time in
//! [`crate::transform`]. The moon is the only parented body, expressed as a
//! flat-list parent index rather than a general scene graph — one level of
//! nesting is all this scene ever needs.

/// Grey used for all orbit path circles.
pub const ORBIT_PATH_COLOR: [f32; 3] = [0.6, 0.6, 0.6];

/// A single celestial body: a sphere orbiting the origin (or a parent body)
/// on a circular path with uniform angular speed.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    /// Display name.
    pub name: &'static str,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Radius of the circular orbit. 0 keeps the body at the origin.
    pub orbital_distance: f32,
    /// Flat RGB color in [0, 1].
    pub color: [f32; 3],
    /// Radians of orbital angle per second of elapsed time.
    pub angular_speed: f32,
    /// Index of the parent body in the catalog, for parent-relative orbits.
    pub parent: Option<usize>,
}

/// A flat ring attached to one body, rendered as a triangle strip.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    /// Inner edge radius, relative to the body center.
    pub inner_radius: f32,
    /// Outer edge radius, relative to the body center.
    pub outer_radius: f32,
    /// Flat RGB color in [0, 1].
    pub color: [f32; 3],
    /// Index of the carrying body in the catalog.
    pub body: usize,
}

/// Catalog index of Earth in [`solar_system`].
pub const EARTH: usize = 3;

/// Catalog index of Saturn in [`solar_system`].
pub const SATURN: usize = 6;

/// Catalog index of the Moon in [`solar_system`].
pub const MOON: usize = 9;

/// The fixed scene catalog: nine solar-system bodies plus the Moon.
///
/// The Moon is listed last and parented to Earth; its `orbital_distance` is
/// relative to Earth's position.
pub fn solar_system() -> Vec<CelestialBody> {
    vec![
        CelestialBody {
            name: "Sun",
            radius: 2.0,
            orbital_distance: 0.0,
            color: [1.0, 0.9, 0.0],
            angular_speed: 0.0,
            parent: None,
        },
        CelestialBody {
            name: "Mercury",
            radius: 0.2,
            orbital_distance: 3.0,
            color: [0.5, 0.5, 0.5],
            angular_speed: 0.4,
            parent: None,
        },
        CelestialBody {
            name: "Venus",
            radius: 0.5,
            orbital_distance: 5.0,
            color: [1.0, 0.8, 0.4],
            angular_speed: 0.3,
            parent: None,
        },
        CelestialBody {
            name: "Earth",
            radius: 0.5,
            orbital_distance: 7.0,
            color: [0.0, 0.5, 1.0],
            angular_speed: 0.25,
            parent: None,
        },
        CelestialBody {
            name: "Mars",
            radius: 0.3,
            orbital_distance: 9.0,
            color: [1.0, 0.2, 0.2],
            angular_speed: 0.2,
            parent: None,
        },
        CelestialBody {
            name: "Jupiter",
            radius: 1.0,
            orbital_distance: 12.0,
            color: [1.0, 0.6, 0.3],
            angular_speed: 0.15,
            parent: None,
        },
        CelestialBody {
            name: "Saturn",
            radius: 0.9,
            orbital_distance: 15.0,
            color: [1.0, 0.9, 0.6],
            angular_speed: 0.1,
            parent: None,
        },
        CelestialBody {
            name: "Uranus",
            radius: 0.7,
            orbital_distance: 18.0,
            color: [0.5, 1.0, 1.0],
            angular_speed: 0.08,
            parent: None,
        },
        CelestialBody {
            name: "Neptune",
            radius: 0.7,
            orbital_distance: 21.0,
            color: [0.3, 0.3, 1.0],
            angular_speed: 0.07,
            parent: None,
        },
        CelestialBody {
            name: "Moon",
            radius: 0.1,
            orbital_distance: 1.0,
            color: [0.8, 0.8, 0.8],
            angular_speed: 0.5,
            parent: Some(EARTH),
        },
    ]
}

/// Saturn's ring: inner radius 1.2, outer 2.2, sandy color.
pub fn saturn_ring() -> Ring {
    Ring {
        inner_radius: 1.2,
        outer_radius: 2.2,
        color: [0.9, 0.7, 0.5],
        body: SATURN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_bodies() {
        let bodies = solar_system();
        assert_eq!(bodies.len(), 10);
    }

    #[test]
    fn test_sun_stays_at_origin() {
        let bodies = solar_system();
        assert_eq!(bodies[0].name, "Sun");
        assert_eq!(bodies[0].orbital_distance, 0.0);
        assert_eq!(bodies[0].angular_speed, 0.0);
    }

    #[test]
    fn test_only_moon_has_parent() {
        let bodies = solar_system();
        for (i, body) in bodies.iter().enumerate() {
            if i == MOON {
                assert_eq!(body.parent, Some(EARTH));
            } else {
                assert_eq!(body.parent, None, "{} should not be parented", body.name);
            }
        }
    }

    #[test]
    fn test_index_constants_match_catalog() {
        let bodies = solar_system();
        assert_eq!(bodies[EARTH].name, "Earth");
        assert_eq!(bodies[SATURN].name, "Saturn");
        assert_eq!(bodies[MOON].name, "Moon");
    }

    #[test]
    fn test_orbital_distances_increase_outward() {
        let bodies = solar_system();
        // Planets (indices 1..=8) are listed from innermost to outermost.
        for pair in bodies[1..=8].windows(2) {
            assert!(pair[0].orbital_distance < pair[1].orbital_distance);
        }
    }

    #[test]
    fn test_saturn_ring_attaches_to_saturn() {
        let ring = saturn_ring();
        let bodies = solar_system();
        assert_eq!(bodies[ring.body].name, "Saturn");
        assert!(ring.inner_radius < ring.outer_radius);
        assert!(ring.inner_radius > bodies[ring.body].radius);
    }
}
