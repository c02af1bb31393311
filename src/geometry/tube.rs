use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};
use crate::math::{Aabb, Point3, Vector3, TOLERANCE};

use super::{grid, share_samples, Solid};

/// A cylinder or cylindrical shell along the z axis, full in azimuth.
#[derive(Debug, Clone, PartialEq)]
pub struct TubeShape {
    r_min: f64,
    r_max: f64,
    half_z: f64,
}

impl TubeShape {
    /// Creates a new tube.
    ///
    /// # Arguments
    ///
    /// * `r_min` - Inner radius (zero for a full cylinder)
    /// * `r_max` - Outer radius (must exceed `r_min`)
    /// * `half_z` - Half length along z
    ///
    /// # Errors
    ///
    /// Returns an error if the radii are inverted, the length is degenerate,
    /// or any dimension is not finite.
    pub fn new(name: &str, r_min: f64, r_max: f64, half_z: f64) -> Result<Self> {
        if !(r_min >= 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "r_min",
                value: r_min,
                min: 0.0,
                max: r_max,
            }
            .into());
        }
        if !(r_max - r_min > TOLERANCE && r_max.is_finite()) {
            return Err(GeometryError::Degenerate {
                name: name.to_owned(),
                reason: format!("outer radius {r_max} must exceed inner radius {r_min}"),
            }
            .into());
        }
        if !(half_z > TOLERANCE && half_z.is_finite()) {
            return Err(GeometryError::Degenerate {
                name: name.to_owned(),
                reason: format!("half length {half_z} must be positive"),
            }
            .into());
        }
        Ok(Self {
            r_min,
            r_max,
            half_z,
        })
    }

    /// Returns the inner radius.
    #[must_use]
    pub fn r_min(&self) -> f64 {
        self.r_min
    }

    /// Returns the outer radius.
    #[must_use]
    pub fn r_max(&self) -> f64 {
        self.r_max
    }

    /// Returns the half length along z.
    #[must_use]
    pub fn half_z(&self) -> f64 {
        self.half_z
    }
}

impl Solid for TubeShape {
    fn safety(&self, point: &Point3) -> f64 {
        let r = point.x.hypot(point.y);
        let radial = if self.r_min > 0.0 {
            (r - self.r_max).max(self.r_min - r)
        } else {
            r - self.r_max
        };
        radial.max(point.z.abs() - self.half_z)
    }

    fn extent(&self) -> Aabb {
        Aabb::symmetric(Vector3::new(self.r_max, self.r_max, self.half_z))
    }

    fn cubic_volume(&self) -> f64 {
        PI * (self.r_max * self.r_max - self.r_min * self.r_min) * 2.0 * self.half_z
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn surface_points(&self, count: usize) -> Vec<Point3> {
        let cap = PI * (self.r_max * self.r_max - self.r_min * self.r_min);
        let outer = TAU * self.r_max * 2.0 * self.half_z;
        let inner = TAU * self.r_min * 2.0 * self.half_z;
        let shares = share_samples(count, &[2.0 * cap, outer, inner]);
        let mut points = Vec::with_capacity(count + 3);

        // End caps: rings of equal-area annuli.
        let rings = ((shares[0] as f64 / 2.0).sqrt().ceil() as usize).max(1);
        for z in [-self.half_z, self.half_z] {
            for i in 0..rings {
                let t = (i as f64 + 0.5) / rings as f64;
                let r = (self.r_min * self.r_min
                    + t * (self.r_max * self.r_max - self.r_min * self.r_min))
                    .sqrt();
                let around = rings.max(3);
                for j in 0..around {
                    let phi = TAU * j as f64 / around as f64;
                    points.push(Point3::new(r * phi.cos(), r * phi.sin(), z));
                }
            }
        }

        for (radius, samples) in [(self.r_max, shares[1]), (self.r_min, shares[2])] {
            if radius <= 0.0 {
                continue;
            }
            let cells = (samples as f64).sqrt().ceil() as usize;
            for z in grid(cells, self.half_z) {
                for j in 0..cells {
                    let phi = TAU * j as f64 / cells as f64;
                    points.push(Point3::new(radius * phi.cos(), radius * phi.sin(), z));
                }
            }
        }
        points
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Containment;

    #[test]
    fn hollow_tube_containment() {
        let t = TubeShape::new("pipe", 1.0, 2.0, 5.0).unwrap();
        assert_eq!(t.inside(&Point3::origin()), Containment::Outside);
        assert_eq!(t.inside(&Point3::new(1.5, 0.0, 0.0)), Containment::Inside);
        assert_eq!(t.inside(&Point3::new(0.0, 2.0, 1.0)), Containment::Surface);
        assert_eq!(t.inside(&Point3::new(1.5, 0.0, 6.0)), Containment::Outside);
    }

    #[test]
    fn volume() {
        let t = TubeShape::new("rod", 0.0, 1.0, 0.5).unwrap();
        assert!((t.cubic_volume() - PI).abs() < 1e-12);
    }

    #[test]
    fn surface_points_lie_on_surface() {
        let t = TubeShape::new("pipe", 1.0, 2.0, 5.0).unwrap();
        let points = t.surface_points(500);
        assert!(!points.is_empty());
        for p in &points {
            assert!(t.safety(p).abs() < 1e-9, "{p:?}");
        }
    }

    #[test]
    fn inverted_radii() {
        assert!(TubeShape::new("bad", 2.0, 1.0, 1.0).is_err());
        assert!(TubeShape::new("bad", -1.0, 1.0, 1.0).is_err());
        assert!(TubeShape::new("bad", 0.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn degenerate_tube() {
        for (r_min, r_max, half_z) in [
            (0.0, f64::NAN, 1.0),
            (f64::NAN, 2.0, 1.0),
            (0.0, 1.0, f64::NAN),
            (0.0, f64::INFINITY, 1.0),
            (0.0, 1.0, f64::INFINITY),
            (f64::INFINITY, f64::INFINITY, 1.0),
        ] {
            assert!(
                TubeShape::new("bad", r_min, r_max, half_z).is_err(),
                "{r_min} {r_max} {half_z}"
            );
        }
    }

    #[test]
    fn solid_rod_has_no_bore() {
        let t = TubeShape::new("rod", 0.0, 1.0, 0.5).unwrap();
        assert!(t.r_min().abs() < f64::EPSILON);
        assert_eq!(t.inside(&Point3::origin()), Containment::Inside);
    }
}
