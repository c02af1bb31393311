use tracing::debug;

use super::make_element::FRACTION_TOLERANCE;
use crate::error::{MaterialError, Result};
use crate::material::{
    ElementId, MaterialComponent, MaterialData, MaterialId, MaterialRepository, MaterialState,
};
use crate::units::{AVOGADRO, STP_PRESSURE, STP_TEMPERATURE};

#[derive(Debug, Clone, Copy)]
enum Share {
    Atoms(u32),
    MassFraction(f64),
}

/// Creates a bulk material from a fixed number of elements.
///
/// Components are given either all by atom count (a chemical formula) or
/// all by mass fraction. The declared component count must match the
/// number added before the material can be registered.
pub struct MakeMaterial {
    name: String,
    density: f64,
    declared: usize,
    components: Vec<(ElementId, Share)>,
    state: Option<MaterialState>,
    temperature: f64,
    pressure: f64,
}

impl MakeMaterial {
    /// Creates a new `MakeMaterial` operation at standard temperature and
    /// pressure.
    #[must_use]
    pub fn new(name: impl Into<String>, density: f64, n_components: usize) -> Self {
        Self {
            name: name.into(),
            density,
            declared: n_components,
            components: Vec::with_capacity(n_components),
            state: None,
            temperature: STP_TEMPERATURE,
            pressure: STP_PRESSURE,
        }
    }

    /// Adds an element by number of atoms per molecule.
    #[must_use]
    pub fn add_element_atoms(mut self, element: ElementId, atoms: u32) -> Self {
        self.components.push((element, Share::Atoms(atoms)));
        self
    }

    /// Adds an element by mass fraction.
    #[must_use]
    pub fn add_element_fraction(mut self, element: ElementId, fraction: f64) -> Self {
        self.components.push((element, Share::MassFraction(fraction)));
        self
    }

    /// Sets the physical state explicitly.
    #[must_use]
    pub fn with_state(mut self, state: MaterialState) -> Self {
        self.state = Some(state);
        self
    }

    /// Sets the temperature.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the pressure.
    #[must_use]
    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = pressure;
        self
    }

    /// Executes the operation, registering the material.
    ///
    /// # Errors
    ///
    /// Returns an error if the density is not positive, the composition is
    /// incomplete or mixed, the mass fractions do not sum to 1, an element is
    /// unknown, or the name is already registered.
    pub fn execute<R: MaterialRepository + ?Sized>(&self, repo: &mut R) -> Result<MaterialId> {
        if !(self.density > 0.0 && self.density.is_finite()) {
            return Err(MaterialError::InvalidDensity {
                name: self.name.clone(),
                density: self.density,
            }
            .into());
        }
        if self.components.is_empty() || self.components.len() != self.declared {
            return Err(MaterialError::ComponentCount {
                kind: "material",
                name: self.name.clone(),
                declared: self.declared,
                added: self.components.len(),
            }
            .into());
        }

        let by_atoms = matches!(self.components[0].1, Share::Atoms(_));
        let mut weights = Vec::with_capacity(self.components.len());
        for &(element, share) in &self.components {
            let el = repo.element(element)?;
            let weight = match (share, by_atoms) {
                (Share::Atoms(n), true) => f64::from(n) * el.molar_mass,
                (Share::MassFraction(w), false) => w,
                _ => {
                    return Err(MaterialError::MixedComposition {
                        name: self.name.clone(),
                    }
                    .into())
                }
            };
            weights.push((element, weight, el.molar_mass, el.z));
        }

        let sum: f64 = weights.iter().map(|w| w.1).sum();
        let fractions_ok = if by_atoms {
            sum > 0.0
        } else {
            (sum - 1.0).abs() <= FRACTION_TOLERANCE && weights.iter().all(|w| w.1 > 0.0)
        };
        if !fractions_ok {
            return Err(MaterialError::FractionSum {
                kind: "material",
                name: self.name.clone(),
                sum,
            }
            .into());
        }

        let mut components: Vec<MaterialComponent> = weights
            .iter()
            .map(|&(element, weight, molar_mass, _)| {
                let mass_fraction = weight / sum;
                MaterialComponent {
                    element,
                    mass_fraction,
                    atom_fraction: 0.0,
                    atoms_per_volume: AVOGADRO * self.density * mass_fraction / molar_mass,
                }
            })
            .collect();
        let total_atoms: f64 = components.iter().map(|c| c.atoms_per_volume).sum();
        for c in &mut components {
            c.atom_fraction = c.atoms_per_volume / total_atoms;
        }
        let electron_density = components
            .iter()
            .zip(&weights)
            .map(|(c, w)| c.atoms_per_volume * f64::from(w.3))
            .sum();

        let data = MaterialData {
            name: self.name.clone(),
            density: self.density,
            state: self
                .state
                .unwrap_or_else(|| MaterialState::from_density(self.density)),
            temperature: self.temperature,
            pressure: self.pressure,
            components,
            electron_density,
        };
        debug!(material = %data.name, density = data.density, "defined material");
        Ok(repo.register_material(data)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::material::MaterialTable;
    use crate::units::{CM3, G_PER_CM3};
    use crate::LaminaError;
    use approx::assert_relative_eq;

    #[test]
    fn water_by_atoms() {
        let mut table = MaterialTable::new();
        table.find_or_build_material("G4_WATER").unwrap();
        let h = table.find_element("H").unwrap();
        let o = table.find_element("O").unwrap();
        let id = MakeMaterial::new("Water", 1.0 * G_PER_CM3, 2)
            .add_element_atoms(h, 2)
            .add_element_atoms(o, 1)
            .with_state(MaterialState::Liquid)
            .execute(&mut table)
            .unwrap();
        let m = table.material(id).unwrap();
        assert_relative_eq!(m.components[0].mass_fraction, 0.1119, epsilon = 1e-3);
        assert_relative_eq!(m.components[0].atom_fraction, 2.0 / 3.0, epsilon = 1e-12);
        // 10 electrons per molecule, ~18.015 g/mole
        assert_relative_eq!(
            m.electron_density * CM3,
            10.0 * AVOGADRO / 18.015,
            max_relative = 1e-3
        );
    }

    #[test]
    fn state_follows_density() {
        let mut table = MaterialTable::new();
        table.find_or_build_material("G4_Pb").unwrap();
        let pb = table.find_element("Pb").unwrap();
        let dense = MakeMaterial::new("lead", 11.35 * G_PER_CM3, 1)
            .add_element_atoms(pb, 1)
            .execute(&mut table)
            .unwrap();
        let vapour = MakeMaterial::new("lead vapour", 1e-6 * G_PER_CM3, 1)
            .add_element_atoms(pb, 1)
            .execute(&mut table)
            .unwrap();
        assert_eq!(table.material(dense).unwrap().state, MaterialState::Solid);
        assert_eq!(table.material(vapour).unwrap().state, MaterialState::Gas);
    }

    #[test]
    fn mixed_composition_rejected() {
        let mut table = MaterialTable::new();
        table.find_or_build_material("G4_WATER").unwrap();
        let h = table.find_element("H").unwrap();
        let o = table.find_element("O").unwrap();
        let err = MakeMaterial::new("bad", 1.0, 2)
            .add_element_atoms(h, 2)
            .add_element_fraction(o, 0.5)
            .execute(&mut table)
            .unwrap_err();
        assert!(matches!(
            err,
            LaminaError::Material(MaterialError::MixedComposition { .. })
        ));
    }

    #[test]
    fn incomplete_material_rejected() {
        let mut table = MaterialTable::new();
        table.find_or_build_material("G4_WATER").unwrap();
        let h = table.find_element("H").unwrap();
        let err = MakeMaterial::new("half water", 1.0, 2)
            .add_element_atoms(h, 2)
            .execute(&mut table)
            .unwrap_err();
        assert!(matches!(
            err,
            LaminaError::Material(MaterialError::ComponentCount { .. })
        ));
        assert!(table.find_material("half water").is_none());
    }

    #[test]
    fn non_positive_density_rejected() {
        let mut table = MaterialTable::new();
        table.find_or_build_material("G4_WATER").unwrap();
        let h = table.find_element("H").unwrap();
        assert!(MakeMaterial::new("void", 0.0, 1)
            .add_element_atoms(h, 1)
            .execute(&mut table)
            .is_err());
    }

    #[test]
    fn fractions_must_sum_to_one() {
        let mut table = MaterialTable::new();
        table.find_or_build_material("G4_WATER").unwrap();
        let h = table.find_element("H").unwrap();
        let o = table.find_element("O").unwrap();
        let err = MakeMaterial::new("short", 1.0, 2)
            .add_element_fraction(h, 0.1)
            .add_element_fraction(o, 0.8)
            .execute(&mut table)
            .unwrap_err();
        assert!(matches!(
            err,
            LaminaError::Material(MaterialError::FractionSum { .. })
        ));
    }
}
