use tracing::debug;

use crate::error::Result;
use crate::material::{MaterialId, MaterialRepository};
use crate::volume::{LogicalVolumeData, LogicalVolumeId, SolidId, VolumeStore};

/// Binds a solid to a registered material.
pub struct MakeLogicalVolume {
    solid: SolidId,
    material: MaterialId,
    name: String,
}

impl MakeLogicalVolume {
    /// Creates a new `MakeLogicalVolume` operation.
    #[must_use]
    pub fn new(solid: SolidId, material: MaterialId, name: impl Into<String>) -> Self {
        Self {
            solid,
            material,
            name: name.into(),
        }
    }

    /// Executes the operation, creating the logical volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store or the material is
    /// not registered.
    pub fn execute<R: MaterialRepository + ?Sized>(
        &self,
        store: &mut VolumeStore,
        materials: &R,
    ) -> Result<LogicalVolumeId> {
        store.solid(self.solid)?;
        let material = materials.material(self.material)?;
        debug!(volume = %self.name, material = %material.name, "created logical volume");
        Ok(store.add_logical_volume(LogicalVolumeData {
            name: self.name.clone(),
            solid: self.solid,
            material: self.material,
            daughters: Vec::new(),
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::material::MaterialTable;
    use crate::operations::creation::MakeBox;

    #[test]
    fn binds_solid_and_material() {
        let mut materials = MaterialTable::new();
        let vacuum = materials.find_or_build_material("G4_Galactic").unwrap();
        let mut store = VolumeStore::new();
        let solid = MakeBox::new("World", 1.0, 1.0, 1.0).execute(&mut store).unwrap();
        let lv = MakeLogicalVolume::new(solid, vacuum, "World")
            .execute(&mut store, &materials)
            .unwrap();
        let data = store.logical_volume(lv).unwrap();
        assert_eq!(data.solid, solid);
        assert_eq!(data.material, vacuum);
        assert!(data.daughters.is_empty());
    }

    #[test]
    fn unknown_material_is_rejected() {
        let mut materials = MaterialTable::new();
        let vacuum = materials.find_or_build_material("G4_Galactic").unwrap();
        let mut store = VolumeStore::new();
        let solid = MakeBox::new("World", 1.0, 1.0, 1.0).execute(&mut store).unwrap();
        let other = MaterialTable::new();
        assert!(MakeLogicalVolume::new(solid, vacuum, "World")
            .execute(&mut store, &other)
            .is_err());
        assert_eq!(store.logical_volume_count(), 0);
    }
}
