use crate::error::Result;
use crate::geometry::Solid;
use crate::material::MaterialRepository;
use crate::volume::{LogicalVolumeId, VolumeStore};

/// Computes the mass of a logical volume including everything placed in it.
///
/// The volume of each daughter is removed from the mother's material and
/// replaced by the daughter's own mass, recursively.
pub struct Mass {
    volume: LogicalVolumeId,
}

impl Mass {
    /// Creates a new `Mass` query.
    #[must_use]
    pub fn new(volume: LogicalVolumeId) -> Self {
        Self { volume }
    }

    /// Executes the query, returning the mass in base units (grams).
    ///
    /// # Errors
    ///
    /// Returns an error if a volume, solid or material cannot be resolved.
    pub fn execute<R: MaterialRepository + ?Sized>(
        &self,
        store: &VolumeStore,
        materials: &R,
    ) -> Result<f64> {
        mass_of(self.volume, store, materials)
    }
}

fn mass_of<R: MaterialRepository + ?Sized>(
    id: LogicalVolumeId,
    store: &VolumeStore,
    materials: &R,
) -> Result<f64> {
    let lv = store.logical_volume(id)?;
    let density = materials.material(lv.material)?.density;
    let mut volume = store.solid(lv.solid)?.shape.cubic_volume();
    let mut daughters_mass = 0.0;
    for &pv_id in &lv.daughters {
        let daughter = store.physical_volume(pv_id)?.logical;
        volume -= store
            .solid(store.logical_volume(daughter)?.solid)?
            .shape
            .cubic_volume();
        daughters_mass += mass_of(daughter, store, materials)?;
    }
    Ok(density * volume + daughters_mass)
}
