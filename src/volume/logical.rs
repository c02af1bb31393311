use super::physical::PhysicalVolumeId;
use super::solid::SolidId;
use crate::material::MaterialId;

slotmap::new_key_type! {
    /// Unique identifier for a logical volume in the volume store.
    pub struct LogicalVolumeId;
}

/// A solid bound to a material, without a position.
///
/// The same logical volume can be placed several times; each placement
/// that uses it as mother is recorded in `daughters`.
#[derive(Debug, Clone)]
pub struct LogicalVolumeData {
    /// Registry name.
    pub name: String,
    /// The shape of the volume.
    pub solid: SolidId,
    /// The material filling the volume.
    pub material: MaterialId,
    /// Placements inside this volume, in placement order.
    pub daughters: Vec<PhysicalVolumeId>,
}
