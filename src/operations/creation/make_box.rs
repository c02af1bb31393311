use tracing::debug;

use crate::error::Result;
use crate::geometry::{BoxShape, SolidShape};
use crate::volume::{SolidData, SolidId, VolumeStore};

/// Creates a named box solid from its half extents.
pub struct MakeBox {
    name: String,
    half_x: f64,
    half_y: f64,
    half_z: f64,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(name: impl Into<String>, half_x: f64, half_y: f64, half_z: f64) -> Self {
        Self {
            name: name.into(),
            half_x,
            half_y,
            half_z,
        }
    }

    /// Executes the operation, creating the box in the volume store.
    ///
    /// # Errors
    ///
    /// Returns an error if any half extent is degenerate.
    pub fn execute(&self, store: &mut VolumeStore) -> Result<SolidId> {
        let shape = BoxShape::new(&self.name, self.half_x, self.half_y, self.half_z)?;
        debug!(solid = %self.name, half = ?shape.half_extents(), "created box");
        Ok(store.add_solid(SolidData {
            name: self.name.clone(),
            shape: SolidShape::Box(shape),
        }))
    }
}
