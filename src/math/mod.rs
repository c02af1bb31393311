/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Rotation of a placed volume relative to its mother.
pub type Rotation3 = nalgebra::Rotation3<f64>;

/// Rigid local-to-mother transform (rotation then translation).
pub type Transform3 = nalgebra::IsometryMatrix3<f64>;

/// Builds a transform from a rotation and a translation.
#[must_use]
pub fn transform(rotation: Rotation3, translation: Vector3) -> Transform3 {
    Transform3::from_parts(nalgebra::Translation3::from(translation), rotation)
}

/// Global geometric tolerance for floating-point comparisons, in millimetres.
pub const TOLERANCE: f64 = 1e-9;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a box centred on the origin with the given half extents.
    #[must_use]
    pub fn symmetric(half: Vector3) -> Self {
        Self {
            min: Point3::from(-half),
            max: Point3::from(half),
        }
    }

    /// Returns the full extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Returns the smallest box enclosing all `points`, or `None` if empty.
    #[must_use]
    pub fn from_points<I: IntoIterator<Item = Point3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self { min: first, max: first }, |acc, p| Self {
            min: acc.min.inf(&p),
            max: acc.max.sup(&p),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_box_size() {
        let b = Aabb::symmetric(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(b.size(), Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn from_points_encloses_all() {
        let b = Aabb::from_points([
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(-2.0, 3.0, 5.0),
        ])
        .unwrap_or_else(|| Aabb::symmetric(Vector3::zeros()));
        assert_eq!(b.min, Point3::new(-2.0, -1.0, 0.0));
        assert_eq!(b.max, Point3::new(1.0, 3.0, 5.0));
    }

    #[test]
    fn from_no_points() {
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }
}
