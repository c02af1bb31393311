use super::isotope::IsotopeId;

slotmap::new_key_type! {
    /// Unique identifier for an element in the material table.
    pub struct ElementId;
}

/// Data associated with a chemical element.
///
/// An element is a mixture of isotopes sharing one atomic number. Elements
/// are created through [`MakeElement`](crate::operations::creation::MakeElement),
/// which validates the composition and derives the effective molar mass.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Registry name.
    pub name: String,
    /// Chemical symbol.
    pub symbol: String,
    /// Atomic number shared by all isotopes.
    pub z: u32,
    /// Abundance-weighted molar mass, in base units.
    pub molar_mass: f64,
    /// Isotopes and their relative abundances (summing to 1).
    pub isotopes: Vec<(IsotopeId, f64)>,
}
