use crate::geometry::SolidShape;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the volume store.
    pub struct SolidId;
}

/// A named solid shape.
#[derive(Debug, Clone)]
pub struct SolidData {
    /// Registry name.
    pub name: String,
    /// Dimensions of the shape.
    pub shape: SolidShape,
}
