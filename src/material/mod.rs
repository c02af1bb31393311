pub mod element;
pub mod isotope;
#[allow(clippy::module_inception)]
pub mod material;
pub mod nist;

pub use element::{ElementData, ElementId};
pub use isotope::{IsotopeData, IsotopeId};
pub use material::{MaterialComponent, MaterialData, MaterialId, MaterialState};
pub use nist::{ElementRecipe, MaterialRecipe, NistCatalogue};

use std::collections::HashMap;
use std::fmt;

use slotmap::SlotMap;
use tracing::{debug, error};

use crate::error::{MaterialError, Result};
use crate::operations::creation::{MakeElement, MakeMaterial};
use crate::units::{ATMOSPHERE, G_PER_CM3, G_PER_MOLE, KELVIN, PERCENT};

/// Name-keyed registry of isotopes, elements and materials.
///
/// Geometry construction depends on this trait rather than on a concrete
/// table, so a host can supply its own registry. The `Display` output is
/// the operator-facing dump of every registered material.
pub trait MaterialRepository: fmt::Display {
    /// Returns the isotope data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not registered.
    fn isotope(&self, id: IsotopeId) -> std::result::Result<&IsotopeData, MaterialError>;

    /// Returns the element data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not registered.
    fn element(&self, id: ElementId) -> std::result::Result<&ElementData, MaterialError>;

    /// Returns the material data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not registered.
    fn material(&self, id: MaterialId) -> std::result::Result<&MaterialData, MaterialError>;

    /// Finds a registered isotope by name.
    fn find_isotope(&self, name: &str) -> Option<IsotopeId>;

    /// Finds a registered element by name.
    fn find_element(&self, name: &str) -> Option<ElementId>;

    /// Finds a registered material by name.
    fn find_material(&self, name: &str) -> Option<MaterialId>;

    /// Registers an isotope under its name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already taken.
    fn register_isotope(&mut self, data: IsotopeData)
        -> std::result::Result<IsotopeId, MaterialError>;

    /// Registers an element under its name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already taken.
    fn register_element(&mut self, data: ElementData)
        -> std::result::Result<ElementId, MaterialError>;

    /// Registers a material under its name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already taken.
    fn register_material(
        &mut self,
        data: MaterialData,
    ) -> std::result::Result<MaterialId, MaterialError>;

    /// Returns a registered material, building it from the standard
    /// catalogue on first use.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::NotFound`] if the name is neither registered
    /// nor in the catalogue. Callers treat this as fatal.
    fn find_or_build_material(&mut self, name: &str) -> Result<MaterialId>;
}

/// The default [`MaterialRepository`], backed by slotmap arenas.
#[derive(Debug, Default)]
pub struct MaterialTable {
    isotopes: SlotMap<IsotopeId, IsotopeData>,
    elements: SlotMap<ElementId, ElementData>,
    materials: SlotMap<MaterialId, MaterialData>,
    isotope_names: HashMap<String, IsotopeId>,
    element_names: HashMap<String, ElementId>,
    material_names: HashMap<String, MaterialId>,
    /// Registration order, for reporting.
    material_order: Vec<MaterialId>,
    catalogue: NistCatalogue,
}

impl MaterialTable {
    /// Creates an empty table backed by the standard catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table backed by the given catalogue.
    #[must_use]
    pub fn with_catalogue(catalogue: NistCatalogue) -> Self {
        Self {
            catalogue,
            ..Self::default()
        }
    }

    /// Returns the number of registered materials.
    #[must_use]
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Iterates over registered materials in registration order.
    pub fn materials(&self) -> impl Iterator<Item = (MaterialId, &MaterialData)> {
        self.material_order
            .iter()
            .filter_map(|&id| self.materials.get(id).map(|m| (id, m)))
    }

    fn find_or_build_element(&mut self, symbol: &str) -> Result<ElementId> {
        if let Some(id) = self.find_element(symbol) {
            return Ok(id);
        }
        let Some(recipe) = self.catalogue.element(symbol) else {
            error!(element = symbol, "element not found in catalogue");
            return Err(MaterialError::NotFound(symbol.to_owned()).into());
        };

        let mut op = MakeElement::new(recipe.symbol, recipe.symbol, recipe.isotopes.len());
        for &(n, molar_mass, abundance) in recipe.isotopes {
            let name = format!("{}{n}", recipe.symbol);
            let iso = match self.find_isotope(&name) {
                Some(id) => id,
                None => self.register_isotope(IsotopeData::new(
                    name,
                    recipe.z,
                    n,
                    molar_mass * G_PER_MOLE,
                )?)?,
            };
            op = op.add_isotope(iso, abundance);
        }
        op.execute(self)
    }
}

impl MaterialRepository for MaterialTable {
    fn isotope(&self, id: IsotopeId) -> std::result::Result<&IsotopeData, MaterialError> {
        self.isotopes
            .get(id)
            .ok_or(MaterialError::EntityNotFound("isotope"))
    }

    fn element(&self, id: ElementId) -> std::result::Result<&ElementData, MaterialError> {
        self.elements
            .get(id)
            .ok_or(MaterialError::EntityNotFound("element"))
    }

    fn material(&self, id: MaterialId) -> std::result::Result<&MaterialData, MaterialError> {
        self.materials
            .get(id)
            .ok_or(MaterialError::EntityNotFound("material"))
    }

    fn find_isotope(&self, name: &str) -> Option<IsotopeId> {
        self.isotope_names.get(name).copied()
    }

    fn find_element(&self, name: &str) -> Option<ElementId> {
        self.element_names.get(name).copied()
    }

    fn find_material(&self, name: &str) -> Option<MaterialId> {
        self.material_names.get(name).copied()
    }

    fn register_isotope(
        &mut self,
        data: IsotopeData,
    ) -> std::result::Result<IsotopeId, MaterialError> {
        if self.isotope_names.contains_key(data.name()) {
            return Err(MaterialError::DuplicateName {
                kind: "isotope",
                name: data.name().to_owned(),
            });
        }
        let name = data.name().to_owned();
        debug!(isotope = %name, z = data.z(), n = data.n(), "registered isotope");
        let id = self.isotopes.insert(data);
        self.isotope_names.insert(name, id);
        Ok(id)
    }

    fn register_element(
        &mut self,
        data: ElementData,
    ) -> std::result::Result<ElementId, MaterialError> {
        if self.element_names.contains_key(&data.name) {
            return Err(MaterialError::DuplicateName {
                kind: "element",
                name: data.name,
            });
        }
        let name = data.name.clone();
        debug!(element = %name, z = data.z, "registered element");
        let id = self.elements.insert(data);
        self.element_names.insert(name, id);
        Ok(id)
    }

    fn register_material(
        &mut self,
        data: MaterialData,
    ) -> std::result::Result<MaterialId, MaterialError> {
        if self.material_names.contains_key(&data.name) {
            return Err(MaterialError::DuplicateName {
                kind: "material",
                name: data.name,
            });
        }
        let name = data.name.clone();
        debug!(material = %name, "registered material");
        let id = self.materials.insert(data);
        self.material_names.insert(name, id);
        self.material_order.push(id);
        Ok(id)
    }

    fn find_or_build_material(&mut self, name: &str) -> Result<MaterialId> {
        if let Some(id) = self.find_material(name) {
            return Ok(id);
        }
        let Some(recipe) = self.catalogue.material(name) else {
            error!(material = name, "material not found in catalogue");
            return Err(MaterialError::NotFound(name.to_owned()).into());
        };

        let mut op = MakeMaterial::new(recipe.name, recipe.density, recipe.components.len())
            .with_temperature(recipe.temperature)
            .with_pressure(recipe.pressure);
        if let Some(state) = recipe.state {
            op = op.with_state(state);
        }
        for &(symbol, fraction) in recipe.components {
            let element = self.find_or_build_element(symbol)?;
            op = op.add_element_fraction(element, fraction);
        }
        op.execute(self)
    }
}

impl fmt::Display for MaterialTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "***** Table : Nb of materials = {} *****",
            self.materials.len()
        )?;
        for (_, m) in self.materials() {
            writeln!(f)?;
            writeln!(
                f,
                " Material: {:>12}    density: {:>9.4e} g/cm3   state: {:?}   temp: {:.2} K   pressure: {:.4e} atm",
                m.name,
                m.density / G_PER_CM3,
                m.state,
                m.temperature / KELVIN,
                m.pressure / ATMOSPHERE,
            )?;
            for c in &m.components {
                let Some(el) = self.elements.get(c.element) else {
                    continue;
                };
                writeln!(
                    f,
                    "  ---> Element: {} ({})   Z = {:4.1}   A = {:8.4} g/mole",
                    el.name,
                    el.symbol,
                    f64::from(el.z),
                    el.molar_mass / G_PER_MOLE,
                )?;
                for &(iso_id, abundance) in &el.isotopes {
                    if let Some(iso) = self.isotopes.get(iso_id) {
                        writeln!(
                            f,
                            "         ---> Isotope: {:>6}   Z = {:2}   N = {:3}   A = {:8.4} g/mole   abundance: {:7.3} %",
                            iso.name(),
                            iso.z(),
                            iso.n(),
                            iso.molar_mass_g_per_mole(),
                            abundance / PERCENT,
                        )?;
                    }
                }
                writeln!(
                    f,
                    "          ElmMassFraction: {:6.2} %  ElmAbundance {:6.2} %",
                    c.mass_fraction / PERCENT,
                    c.atom_fraction / PERCENT,
                )?;
            }
        }
        Ok(())
    }
}
