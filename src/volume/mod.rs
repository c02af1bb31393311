pub mod logical;
pub mod physical;
pub mod solid;

pub use logical::{LogicalVolumeData, LogicalVolumeId};
pub use physical::{PhysicalVolumeData, PhysicalVolumeId};
pub use solid::{SolidData, SolidId};

use crate::error::{GeometryError, PlacementError};
use slotmap::SlotMap;

/// Central arena that owns the solids and volumes of one geometry tree.
///
/// Entities reference each other via typed IDs. Names need not be unique;
/// the store tracks the single root placement (the world).
#[derive(Debug, Default)]
pub struct VolumeStore {
    solids: SlotMap<SolidId, SolidData>,
    logical_volumes: SlotMap<LogicalVolumeId, LogicalVolumeData>,
    physical_volumes: SlotMap<PhysicalVolumeId, PhysicalVolumeData>,
    world: Option<PhysicalVolumeId>,
}

impl VolumeStore {
    /// Creates a new, empty volume store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the root placement, if one has been made.
    #[must_use]
    pub fn world(&self) -> Option<PhysicalVolumeId> {
        self.world
    }

    // --- Solid operations ---

    /// Inserts a solid and returns its ID.
    pub fn add_solid(&mut self, data: SolidData) -> SolidId {
        self.solids.insert(data)
    }

    /// Returns a reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, GeometryError> {
        self.solids
            .get(id)
            .ok_or(GeometryError::EntityNotFound("solid"))
    }

    /// Returns the number of solids.
    #[must_use]
    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }

    // --- Logical volume operations ---

    /// Inserts a logical volume and returns its ID.
    pub fn add_logical_volume(&mut self, data: LogicalVolumeData) -> LogicalVolumeId {
        self.logical_volumes.insert(data)
    }

    /// Returns a reference to the logical volume, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn logical_volume(&self, id: LogicalVolumeId) -> Result<&LogicalVolumeData, PlacementError> {
        self.logical_volumes
            .get(id)
            .ok_or(PlacementError::EntityNotFound("logical volume"))
    }

    /// Finds the first logical volume with the given name.
    #[must_use]
    pub fn find_logical_volume(&self, name: &str) -> Option<LogicalVolumeId> {
        self.logical_volumes
            .iter()
            .find(|(_, lv)| lv.name == name)
            .map(|(id, _)| id)
    }

    /// Returns the number of logical volumes.
    #[must_use]
    pub fn logical_volume_count(&self) -> usize {
        self.logical_volumes.len()
    }

    // --- Physical volume operations ---

    /// Inserts a placement, linking it into its mother's daughter list and
    /// recording it as the world when it has no mother.
    ///
    /// Validity (mother exists, single world) is checked by
    /// [`PlaceVolume`](crate::operations::placement::PlaceVolume).
    pub(crate) fn add_physical_volume(&mut self, data: PhysicalVolumeData) -> PhysicalVolumeId {
        let mother = data.mother;
        let id = self.physical_volumes.insert(data);
        match mother {
            Some(m) => {
                if let Some(lv) = self.logical_volumes.get_mut(m) {
                    lv.daughters.push(id);
                }
            }
            None => self.world = Some(id),
        }
        id
    }

    /// Returns a reference to the physical volume, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn physical_volume(
        &self,
        id: PhysicalVolumeId,
    ) -> Result<&PhysicalVolumeData, PlacementError> {
        self.physical_volumes
            .get(id)
            .ok_or(PlacementError::EntityNotFound("physical volume"))
    }

    /// Finds the first physical volume with the given name.
    #[must_use]
    pub fn find_physical_volume(&self, name: &str) -> Option<PhysicalVolumeId> {
        self.physical_volumes
            .iter()
            .find(|(_, pv)| pv.name == name)
            .map(|(id, _)| id)
    }

    /// Returns the number of physical volumes.
    #[must_use]
    pub fn physical_volume_count(&self) -> usize {
        self.physical_volumes.len()
    }
}
