use tracing::debug;

use crate::error::Result;
use crate::geometry::{SolidShape, TubeShape};
use crate::volume::{SolidData, SolidId, VolumeStore};

/// Creates a named tube solid along the z axis.
pub struct MakeTube {
    name: String,
    r_min: f64,
    r_max: f64,
    half_z: f64,
}

impl MakeTube {
    /// Creates a new `MakeTube` operation.
    #[must_use]
    pub fn new(name: impl Into<String>, r_min: f64, r_max: f64, half_z: f64) -> Self {
        Self {
            name: name.into(),
            r_min,
            r_max,
            half_z,
        }
    }

    /// Executes the operation, creating the tube in the volume store.
    ///
    /// # Errors
    ///
    /// Returns an error if the radii or the length are degenerate.
    pub fn execute(&self, store: &mut VolumeStore) -> Result<SolidId> {
        let shape = TubeShape::new(&self.name, self.r_min, self.r_max, self.half_z)?;
        debug!(solid = %self.name, "created tube");
        Ok(store.add_solid(SolidData {
            name: self.name.clone(),
            shape: SolidShape::Tube(shape),
        }))
    }
}
