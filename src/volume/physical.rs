use super::logical::LogicalVolumeId;
use crate::math::{Point3, Rotation3, Transform3, Vector3};

slotmap::new_key_type! {
    /// Unique identifier for a physical volume in the volume store.
    pub struct PhysicalVolumeId;
}

/// A placed instance of a logical volume.
///
/// The transform maps points from the volume's local frame into the frame
/// of its mother. The world volume has no mother.
#[derive(Debug, Clone)]
pub struct PhysicalVolumeData {
    /// Registry name.
    pub name: String,
    /// The placed logical volume.
    pub logical: LogicalVolumeId,
    /// The logical volume this placement lives in, `None` for the world.
    pub mother: Option<LogicalVolumeId>,
    /// Local-to-mother transform.
    pub transform: Transform3,
    /// Instance index among placements sharing a name.
    pub copy_number: u32,
}

impl PhysicalVolumeData {
    /// Returns the offset of the volume's origin in the mother frame.
    #[must_use]
    pub fn translation(&self) -> Vector3 {
        self.transform.translation.vector
    }

    /// Returns the rotation relative to the mother frame.
    #[must_use]
    pub fn rotation(&self) -> &Rotation3 {
        &self.transform.rotation
    }

    /// Maps a local point into the mother frame.
    #[must_use]
    pub fn to_mother(&self, point: &Point3) -> Point3 {
        self.transform.transform_point(point)
    }

    /// Maps a mother-frame point into the local frame.
    #[must_use]
    pub fn to_local(&self, point: &Point3) -> Point3 {
        self.transform.inverse_transform_point(point)
    }
}
