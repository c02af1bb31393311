use super::element::ElementId;
use crate::units::MG_PER_CM3;

slotmap::new_key_type! {
    /// Unique identifier for a material in the material table.
    pub struct MaterialId;
}

/// Densities above this threshold default to the solid state.
pub const GAS_DENSITY_THRESHOLD: f64 = 10.0 * MG_PER_CM3;

/// Physical state of a bulk material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialState {
    Solid,
    Liquid,
    Gas,
}

impl MaterialState {
    /// Chooses the state from the density when none was given.
    #[must_use]
    pub fn from_density(density: f64) -> Self {
        if density > GAS_DENSITY_THRESHOLD {
            Self::Solid
        } else {
            Self::Gas
        }
    }
}

/// One element of a material's composition.
#[derive(Debug, Clone, Copy)]
pub struct MaterialComponent {
    /// The element.
    pub element: ElementId,
    /// Fraction of the material's mass carried by this element.
    pub mass_fraction: f64,
    /// Fraction of the material's atoms belonging to this element.
    pub atom_fraction: f64,
    /// Number of atoms of this element per unit volume.
    pub atoms_per_volume: f64,
}

/// Data associated with a bulk material.
///
/// Created through [`MakeMaterial`](crate::operations::creation::MakeMaterial)
/// or resolved from the standard catalogue.
#[derive(Debug, Clone)]
pub struct MaterialData {
    /// Registry name.
    pub name: String,
    /// Density, in base units (`g/mm3`).
    pub density: f64,
    /// Physical state.
    pub state: MaterialState,
    /// Temperature, in kelvin.
    pub temperature: f64,
    /// Pressure, in pascal.
    pub pressure: f64,
    /// Element composition; mass fractions sum to 1.
    pub components: Vec<MaterialComponent>,
    /// Electrons per unit volume.
    pub electron_density: f64,
}

impl MaterialData {
    /// Returns the total number of atoms per unit volume.
    #[must_use]
    pub fn atoms_per_volume(&self) -> f64 {
        self.components.iter().map(|c| c.atoms_per_volume).sum()
    }
}
