//! Built-in catalogue of standard elements and materials.
//!
//! Element compositions use natural isotopic abundances; material densities
//! and mass fractions follow the NIST compilation.

use super::material::MaterialState;
use crate::units::{ATMOSPHERE, G_PER_CM3, KELVIN, PASCAL, STP_PRESSURE, STP_TEMPERATURE};

/// Natural isotopic composition of an element.
#[derive(Debug, Clone, Copy)]
pub struct ElementRecipe {
    /// Chemical symbol, also used as the element's registry name.
    pub symbol: &'static str,
    /// Atomic number.
    pub z: u32,
    /// `(nucleons, molar mass in g/mole, abundance)` per isotope.
    pub isotopes: &'static [(u32, f64, f64)],
}

/// Recipe for a standard material, composed by element mass fraction.
#[derive(Debug, Clone, Copy)]
pub struct MaterialRecipe {
    /// Catalogue name, e.g. `"G4_Galactic"`.
    pub name: &'static str,
    /// Density, in base units.
    pub density: f64,
    /// Explicit state, or `None` to derive it from the density.
    pub state: Option<MaterialState>,
    /// Temperature, in kelvin.
    pub temperature: f64,
    /// Pressure, in pascal.
    pub pressure: f64,
    /// `(element symbol, mass fraction)` pairs.
    pub components: &'static [(&'static str, f64)],
}

const ELEMENTS: &[ElementRecipe] = &[
    ElementRecipe {
        symbol: "H",
        z: 1,
        isotopes: &[(1, 1.007_825_03, 0.999_885), (2, 2.014_101_78, 0.000_115)],
    },
    ElementRecipe {
        symbol: "C",
        z: 6,
        isotopes: &[(12, 12.0, 0.9893), (13, 13.003_354_84, 0.0107)],
    },
    ElementRecipe {
        symbol: "N",
        z: 7,
        isotopes: &[(14, 14.003_074_01, 0.996_36), (15, 15.000_108_9, 0.003_64)],
    },
    ElementRecipe {
        symbol: "O",
        z: 8,
        isotopes: &[
            (16, 15.994_914_62, 0.997_57),
            (17, 16.999_131_7, 0.000_38),
            (18, 17.999_161, 0.002_05),
        ],
    },
    ElementRecipe {
        symbol: "Al",
        z: 13,
        isotopes: &[(27, 26.981_538_53, 1.0)],
    },
    ElementRecipe {
        symbol: "Si",
        z: 14,
        isotopes: &[
            (28, 27.976_926_53, 0.922_23),
            (29, 28.976_494_7, 0.046_85),
            (30, 29.973_770_17, 0.030_92),
        ],
    },
    ElementRecipe {
        symbol: "Ar",
        z: 18,
        isotopes: &[
            (36, 35.967_545_11, 0.003_365),
            (38, 37.962_732_4, 0.000_632),
            (40, 39.962_383_12, 0.996_003),
        ],
    },
    ElementRecipe {
        symbol: "Fe",
        z: 26,
        isotopes: &[
            (54, 53.939_609_0, 0.058_45),
            (56, 55.934_936_3, 0.917_54),
            (57, 56.935_392_8, 0.021_19),
            (58, 57.933_274_4, 0.002_82),
        ],
    },
    ElementRecipe {
        symbol: "Ni",
        z: 28,
        isotopes: &[
            (58, 57.935_342_9, 0.680_77),
            (60, 59.930_786_4, 0.262_23),
            (61, 60.931_056_0, 0.011_399),
            (62, 61.928_345_1, 0.036_346),
            (64, 63.927_966_0, 0.009_255),
        ],
    },
    ElementRecipe {
        symbol: "Cu",
        z: 29,
        isotopes: &[(63, 62.929_597_5, 0.6915), (65, 64.927_789_5, 0.3085)],
    },
    ElementRecipe {
        symbol: "Pb",
        z: 82,
        isotopes: &[
            (204, 203.973_043_6, 0.014),
            (206, 205.974_465_3, 0.241),
            (207, 206.975_896_9, 0.221),
            (208, 207.976_652_1, 0.524),
        ],
    },
];

const fn stp(
    name: &'static str,
    density: f64,
    state: Option<MaterialState>,
    components: &'static [(&'static str, f64)],
) -> MaterialRecipe {
    MaterialRecipe {
        name,
        density,
        state,
        temperature: STP_TEMPERATURE,
        pressure: STP_PRESSURE,
        components,
    }
}

const MATERIALS: &[MaterialRecipe] = &[
    MaterialRecipe {
        name: "G4_Galactic",
        density: 1e-25 * G_PER_CM3,
        state: Some(MaterialState::Gas),
        temperature: 2.73 * KELVIN,
        pressure: 3e-18 * PASCAL,
        components: &[("H", 1.0)],
    },
    MaterialRecipe {
        name: "G4_AIR",
        density: 0.001_204_79 * G_PER_CM3,
        state: Some(MaterialState::Gas),
        temperature: 293.15 * KELVIN,
        pressure: ATMOSPHERE,
        components: &[
            ("C", 0.000_124),
            ("N", 0.755_268),
            ("O", 0.231_781),
            ("Ar", 0.012_827),
        ],
    },
    stp(
        "G4_WATER",
        1.0 * G_PER_CM3,
        Some(MaterialState::Liquid),
        &[("H", 0.111_894), ("O", 0.888_106)],
    ),
    stp("G4_Al", 2.699 * G_PER_CM3, None, &[("Al", 1.0)]),
    stp("G4_Si", 2.33 * G_PER_CM3, None, &[("Si", 1.0)]),
    stp("G4_Fe", 7.874 * G_PER_CM3, None, &[("Fe", 1.0)]),
    stp("G4_Ni", 8.902 * G_PER_CM3, None, &[("Ni", 1.0)]),
    stp("G4_Cu", 8.96 * G_PER_CM3, None, &[("Cu", 1.0)]),
    stp("G4_Pb", 11.35 * G_PER_CM3, None, &[("Pb", 1.0)]),
];

/// Lookup service for standard elements and materials.
#[derive(Debug, Clone, Copy)]
pub struct NistCatalogue {
    elements: &'static [ElementRecipe],
    materials: &'static [MaterialRecipe],
}

impl Default for NistCatalogue {
    fn default() -> Self {
        Self::standard()
    }
}

impl NistCatalogue {
    /// The built-in catalogue.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            elements: ELEMENTS,
            materials: MATERIALS,
        }
    }

    /// A catalogue with no entries; every lookup fails.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            elements: &[],
            materials: &[],
        }
    }

    /// Finds an element recipe by chemical symbol.
    #[must_use]
    pub fn element(&self, symbol: &str) -> Option<&'static ElementRecipe> {
        self.elements.iter().find(|e| e.symbol == symbol)
    }

    /// Finds a material recipe by catalogue name.
    #[must_use]
    pub fn material(&self, name: &str) -> Option<&'static MaterialRecipe> {
        self.materials.iter().find(|m| m.name == name)
    }

    /// Iterates over the names of all catalogue materials.
    pub fn material_names(&self) -> impl Iterator<Item = &'static str> {
        self.materials.iter().map(|m| m.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abundances_are_normalised() {
        for e in ELEMENTS {
            let sum: f64 = e.isotopes.iter().map(|i| i.2).sum();
            assert!((sum - 1.0).abs() < 1e-6, "{} sums to {sum}", e.symbol);
        }
    }

    #[test]
    fn mass_fractions_are_normalised() {
        for m in MATERIALS {
            let sum: f64 = m.components.iter().map(|c| c.1).sum();
            assert!((sum - 1.0).abs() < 1e-6, "{} sums to {sum}", m.name);
        }
    }

    #[test]
    fn every_component_has_an_element() {
        let cat = NistCatalogue::standard();
        for m in MATERIALS {
            for (symbol, _) in m.components {
                assert!(cat.element(symbol).is_some(), "{symbol} missing");
            }
        }
    }

    #[test]
    fn galactic_is_listed() {
        let cat = NistCatalogue::standard();
        assert!(cat.material_names().any(|n| n == "G4_Galactic"));
        assert!(NistCatalogue::empty().material("G4_Galactic").is_none());
    }
}
