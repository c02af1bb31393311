mod box_shape;
mod tube;

pub use box_shape::BoxShape;
pub use tube::TubeShape;

use crate::math::{Aabb, Point3, TOLERANCE};

/// Where a point lies relative to a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    Inside,
    Surface,
    Outside,
}

/// Trait for solid shapes defined in their own local frame.
///
/// Shapes carry dimensions only; material and position belong to the
/// logical and physical volumes built on top of them.
pub trait Solid {
    /// Returns an estimate of the signed distance from `point` to the
    /// surface: negative inside, positive outside. The magnitude never
    /// exceeds the true distance.
    fn safety(&self, point: &Point3) -> f64;

    /// Returns the local-frame bounding box.
    fn extent(&self) -> Aabb;

    /// Returns the enclosed volume.
    fn cubic_volume(&self) -> f64;

    /// Returns roughly `count` points spread deterministically over the surface.
    fn surface_points(&self, count: usize) -> Vec<Point3>;

    /// Classifies `point` against the solid, with a half-tolerance band
    /// counting as surface.
    fn inside(&self, point: &Point3) -> Containment {
        let d = self.safety(point);
        if d > 0.5 * TOLERANCE {
            Containment::Outside
        } else if d < -0.5 * TOLERANCE {
            Containment::Inside
        } else {
            Containment::Surface
        }
    }
}

/// The concrete shape of a solid.
#[derive(Debug, Clone, PartialEq)]
pub enum SolidShape {
    /// A rectangular box.
    Box(BoxShape),
    /// A hollow or full cylinder.
    Tube(TubeShape),
}

impl SolidShape {
    fn as_solid(&self) -> &dyn Solid {
        match self {
            Self::Box(b) => b,
            Self::Tube(t) => t,
        }
    }
}

impl Solid for SolidShape {
    fn safety(&self, point: &Point3) -> f64 {
        self.as_solid().safety(point)
    }

    fn extent(&self) -> Aabb {
        self.as_solid().extent()
    }

    fn cubic_volume(&self) -> f64 {
        self.as_solid().cubic_volume()
    }

    fn surface_points(&self, count: usize) -> Vec<Point3> {
        self.as_solid().surface_points(count)
    }
}

/// Splits `count` samples over weighted patches, at least one per patch.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub(crate) fn share_samples(count: usize, weights: &[f64]) -> Vec<usize> {
    let total: f64 = weights.iter().sum();
    weights
        .iter()
        .map(|w| ((count as f64 * w / total).round() as usize).max(1))
        .collect()
}

/// Returns `n` evenly spaced cell-centre parameters in `[-half, half]`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn grid(n: usize, half: f64) -> impl Iterator<Item = f64> {
    let step = 2.0 * half / n as f64;
    (0..n).map(move |i| -half + (i as f64 + 0.5) * step)
}
