use crate::error::Result;
use crate::geometry::Solid;
use crate::math::{Aabb, Point3};
use crate::volume::{PhysicalVolumeId, VolumeStore};

/// Computes the axis-aligned bounding box of a placed volume in its
/// mother's frame.
pub struct BoundingBox {
    volume: PhysicalVolumeId,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(volume: PhysicalVolumeId) -> Self {
        Self { volume }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if the volume or its solid is not in the store.
    pub fn execute(&self, store: &VolumeStore) -> Result<Aabb> {
        let pv = store.physical_volume(self.volume)?;
        let local = store
            .solid(store.logical_volume(pv.logical)?.solid)?
            .shape
            .extent();
        let corners = (0..8).map(|i| {
            let pick = |bit: usize, lo: f64, hi: f64| if i & bit == 0 { lo } else { hi };
            pv.to_mother(&Point3::new(
                pick(1, local.min.x, local.max.x),
                pick(2, local.min.y, local.max.y),
                pick(4, local.min.z, local.max.z),
            ))
        });
        Ok(Aabb::from_points(corners).unwrap_or(local))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::material::{MaterialRepository, MaterialTable};
    use crate::math::{Rotation3, Vector3};
    use crate::operations::creation::{MakeBox, MakeLogicalVolume};
    use crate::operations::placement::PlaceVolume;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn rotated_and_shifted_box() {
        let mut materials = MaterialTable::new();
        let vacuum = materials.find_or_build_material("G4_Galactic").unwrap();
        let mut store = VolumeStore::new();
        let world_solid = MakeBox::new("World", 100.0, 100.0, 100.0)
            .execute(&mut store)
            .unwrap();
        let world = MakeLogicalVolume::new(world_solid, vacuum, "World")
            .execute(&mut store, &materials)
            .unwrap();
        PlaceVolume::new(world, "World").execute(&mut store).unwrap();

        let solid = MakeBox::new("Bar", 1.0, 2.0, 3.0).execute(&mut store).unwrap();
        let bar = MakeLogicalVolume::new(solid, vacuum, "Bar")
            .execute(&mut store, &materials)
            .unwrap();
        let pv = PlaceVolume::new(bar, "Bar")
            .inside(world)
            .at(Vector3::new(10.0, 0.0, 0.0))
            .rotated(Rotation3::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2))
            .execute(&mut store)
            .unwrap();

        let aabb = BoundingBox::new(pv).execute(&store).unwrap();
        assert_relative_eq!(aabb.min.x, 8.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.max.x, 12.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.max.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.max.z, 3.0, epsilon = 1e-12);
    }
}
