use tracing::debug;

use super::check_overlaps::{check_placement, DEFAULT_RESOLUTION};
use crate::error::{PlacementError, Result};
use crate::math::{transform, Rotation3, Vector3};
use crate::operations::query::Daughters;
use crate::volume::{LogicalVolumeId, PhysicalVolumeData, PhysicalVolumeId, VolumeStore};

/// Places a logical volume inside a mother volume, or as the world.
///
/// Defaults: at the origin, no rotation, copy number 0, no overlap check.
pub struct PlaceVolume {
    logical: LogicalVolumeId,
    name: String,
    mother: Option<LogicalVolumeId>,
    rotation: Rotation3,
    translation: Vector3,
    copy_number: u32,
    check_overlaps: bool,
}

impl PlaceVolume {
    /// Creates a new `PlaceVolume` operation.
    #[must_use]
    pub fn new(logical: LogicalVolumeId, name: impl Into<String>) -> Self {
        Self {
            logical,
            name: name.into(),
            mother: None,
            rotation: Rotation3::identity(),
            translation: Vector3::zeros(),
            copy_number: 0,
            check_overlaps: false,
        }
    }

    /// Places the volume inside `mother` instead of as the world.
    #[must_use]
    pub fn inside(mut self, mother: LogicalVolumeId) -> Self {
        self.mother = Some(mother);
        self
    }

    /// Offsets the volume's origin in the mother frame.
    #[must_use]
    pub fn at(mut self, translation: Vector3) -> Self {
        self.translation = translation;
        self
    }

    /// Rotates the volume relative to the mother frame.
    #[must_use]
    pub fn rotated(mut self, rotation: Rotation3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the copy number.
    #[must_use]
    pub fn with_copy_number(mut self, copy_number: u32) -> Self {
        self.copy_number = copy_number;
        self
    }

    /// Enables or disables the overlap check before insertion.
    #[must_use]
    pub fn with_overlap_check(mut self, check: bool) -> Self {
        self.check_overlaps = check;
        self
    }

    /// Executes the placement.
    ///
    /// Nothing is inserted when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced volume is unknown, a second world is
    /// placed, a volume is placed inside itself, or the enabled overlap check
    /// fails.
    pub fn execute(&self, store: &mut VolumeStore) -> Result<PhysicalVolumeId> {
        store.logical_volume(self.logical)?;
        match self.mother {
            None => {
                if let Some(world) = store.world() {
                    return Err(PlacementError::SecondWorld {
                        existing: store.physical_volume(world)?.name.clone(),
                        name: self.name.clone(),
                    }
                    .into());
                }
            }
            Some(mother) => {
                let data = store.logical_volume(mother)?;
                if mother == self.logical || self.contains(store, mother)? {
                    return Err(PlacementError::SelfContained(data.name.clone()).into());
                }
            }
        }

        let data = PhysicalVolumeData {
            name: self.name.clone(),
            logical: self.logical,
            mother: self.mother,
            transform: transform(self.rotation, self.translation),
            copy_number: self.copy_number,
        };
        if self.check_overlaps {
            debug!(volume = %self.name, "checking overlaps");
            check_placement(store, &data, None, DEFAULT_RESOLUTION, 0.0)?;
        }
        debug!(volume = %self.name, copy = self.copy_number, "placed volume");
        Ok(store.add_physical_volume(data))
    }

    // Whether `mother` already sits somewhere below the volume being placed.
    fn contains(&self, store: &VolumeStore, mother: LogicalVolumeId) -> Result<bool> {
        for pv in Daughters::new(self.logical).recursive().execute(store)? {
            if store.physical_volume(pv)?.logical == mother {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
