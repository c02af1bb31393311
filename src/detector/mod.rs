pub mod constants;
mod target;

pub use target::{build_geometry, TargetConfig, TargetDetector};

use crate::error::Result;
use crate::material::MaterialRepository;
use crate::volume::{LogicalVolumeId, PhysicalVolumeId, VolumeStore};

/// A complete geometry: the volume store and its root placement.
#[derive(Debug)]
pub struct GeometryTree {
    volumes: VolumeStore,
    world: PhysicalVolumeId,
    scoring_volume: Option<LogicalVolumeId>,
}

impl GeometryTree {
    /// Wraps a store whose root placement is `world`.
    #[must_use]
    pub fn new(volumes: VolumeStore, world: PhysicalVolumeId) -> Self {
        Self {
            volumes,
            world,
            scoring_volume: None,
        }
    }

    /// Designates the volume whose deposits the host records.
    #[must_use]
    pub fn with_scoring_volume(mut self, volume: LogicalVolumeId) -> Self {
        self.scoring_volume = Some(volume);
        self
    }

    /// Returns the root placement.
    #[must_use]
    pub fn world(&self) -> PhysicalVolumeId {
        self.world
    }

    /// Returns the designated scoring volume.
    #[must_use]
    pub fn scoring_volume(&self) -> Option<LogicalVolumeId> {
        self.scoring_volume
    }

    /// Returns the volume store.
    #[must_use]
    pub fn volumes(&self) -> &VolumeStore {
        &self.volumes
    }
}

/// A detector description that the host builds once per geometry setup.
///
/// The host calls [`construct`](Self::construct) and afterwards reads
/// [`scoring_volume`](Self::scoring_volume). Every call returns a fresh,
/// independent tree; materials are shared through the repository.
pub trait DetectorConstruction {
    /// Builds the geometry tree.
    ///
    /// # Errors
    ///
    /// Any error is fatal for the host: a missing catalogue material, a
    /// degenerate solid or an overlap.
    fn construct(&mut self, materials: &mut dyn MaterialRepository) -> Result<GeometryTree>;

    /// Returns the scoring volume of the last successful construction.
    fn scoring_volume(&self) -> Option<LogicalVolumeId>;
}
