use crate::error::{GeometryError, Result};
use crate::math::{Aabb, Point3, Vector3, TOLERANCE};

use super::{grid, share_samples, Solid};

/// A rectangular box centred on the origin.
///
/// Defined by its half extents along the three axes. A box with full
/// sizes `(dx, dy, dz)` is created with half extents `(dx/2, dy/2, dz/2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    half: Vector3,
}

impl BoxShape {
    /// Creates a new box from its half extents.
    ///
    /// # Errors
    ///
    /// Returns an error if any half extent is not larger than the geometric
    /// tolerance.
    pub fn new(name: &str, half_x: f64, half_y: f64, half_z: f64) -> Result<Self> {
        for (axis, value) in [("x", half_x), ("y", half_y), ("z", half_z)] {
            if !(value > TOLERANCE && value.is_finite()) {
                return Err(GeometryError::Degenerate {
                    name: name.to_owned(),
                    reason: format!("half extent along {axis} is {value}"),
                }
                .into());
            }
        }
        Ok(Self {
            half: Vector3::new(half_x, half_y, half_z),
        })
    }

    /// Returns the half extents.
    #[must_use]
    pub fn half_extents(&self) -> &Vector3 {
        &self.half
    }

    /// Returns the full sizes along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.half * 2.0
    }
}

impl Solid for BoxShape {
    fn safety(&self, point: &Point3) -> f64 {
        let d = point.coords.abs() - self.half;
        d.max()
    }

    fn extent(&self) -> Aabb {
        Aabb::symmetric(self.half)
    }

    fn cubic_volume(&self) -> f64 {
        8.0 * self.half.x * self.half.y * self.half.z
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn surface_points(&self, count: usize) -> Vec<Point3> {
        let h = self.half;
        // (normal axis, u axis, v axis)
        let faces = [(2, 0, 1), (0, 1, 2), (1, 2, 0)];
        let areas: Vec<f64> = faces.iter().map(|&(_, u, v)| h[u] * h[v]).collect();
        let per_face = share_samples(count / 2, &areas);

        let mut points = Vec::with_capacity(count + 6);
        for (&(n, u, v), &samples) in faces.iter().zip(&per_face) {
            let cells = (samples as f64).sqrt().ceil() as usize;
            for side in [-1.0, 1.0] {
                for a in grid(cells, h[u]) {
                    for b in grid(cells, h[v]) {
                        let mut p = Point3::origin();
                        p[n] = side * h[n];
                        p[u] = a;
                        p[v] = b;
                        points.push(p);
                    }
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

    fn unit_box() -> BoxShape {
        BoxShape::new("box", 1.0, 2.0, 3.0).unwrap()
    }

    #[test]
    fn volume() {
        assert!((unit_box().cubic_volume() - 48.0).abs() < TOLERANCE);
    }

    #[test]
    fn containment() {
        let b = unit_box();
        assert_eq!(b.inside(&Point3::origin()), Containment::Inside);
        assert_eq!(b.inside(&Point3::new(1.0, 0.0, 0.0)), Containment::Surface);
        assert_eq!(b.inside(&Point3::new(0.0, 0.0, 3.5)), Containment::Outside);
    }

    #[test]
    fn surface_points_lie_on_surface() {
        let b = unit_box();
        let points = b.surface_points(1000);
        assert!(points.len() >= 600);
        assert!(points
            .iter()
            .all(|p| b.inside(p) == Containment::Surface));
    }

    #[test]
    fn degenerate_box() {
        assert!(BoxShape::new("flat", 1.0, 1.0, 0.0).is_err());
        assert!(BoxShape::new("neg", -1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn extent_matches_size() {
        let b = unit_box();
        assert_eq!(b.extent().size(), b.size());
    }
}
