use crate::error::{MaterialError, Result};
use crate::material::{ElementData, ElementId, IsotopeId, MaterialRepository};

/// Abundances and mass fractions must sum to 1 within this tolerance.
pub(crate) const FRACTION_TOLERANCE: f64 = 1e-6;

/// Creates an element from a fixed number of isotopes.
///
/// The declared isotope count must match the number of isotopes added, and
/// the relative abundances must sum to 1.
pub struct MakeElement {
    name: String,
    symbol: String,
    declared: usize,
    isotopes: Vec<(IsotopeId, f64)>,
}

impl MakeElement {
    /// Creates a new `MakeElement` operation.
    #[must_use]
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, n_isotopes: usize) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            declared: n_isotopes,
            isotopes: Vec::with_capacity(n_isotopes),
        }
    }

    /// Adds an isotope with its relative abundance (a fraction, so
    /// `100.0 * PERCENT` for a pure element).
    #[must_use]
    pub fn add_isotope(mut self, isotope: IsotopeId, abundance: f64) -> Self {
        self.isotopes.push((isotope, abundance));
        self
    }

    /// Executes the operation, registering the element.
    ///
    /// # Errors
    ///
    /// Returns an error if the composition is incomplete, the abundances do
    /// not sum to 1, the isotopes disagree on the atomic number, an isotope
    /// is unknown, or the name is already registered.
    pub fn execute<R: MaterialRepository + ?Sized>(&self, repo: &mut R) -> Result<ElementId> {
        if self.isotopes.is_empty() || self.isotopes.len() != self.declared {
            return Err(MaterialError::ComponentCount {
                kind: "element",
                name: self.name.clone(),
                declared: self.declared,
                added: self.isotopes.len(),
            }
            .into());
        }

        let sum: f64 = self.isotopes.iter().map(|&(_, a)| a).sum();
        if (sum - 1.0).abs() > FRACTION_TOLERANCE || self.isotopes.iter().any(|&(_, a)| a <= 0.0)
        {
            return Err(MaterialError::FractionSum {
                kind: "element",
                name: self.name.clone(),
                sum,
            }
            .into());
        }

        let mut z = None;
        let mut molar_mass = 0.0;
        for &(id, abundance) in &self.isotopes {
            let iso = repo.isotope(id)?;
            match z {
                None => z = Some(iso.z()),
                Some(z) if z != iso.z() => {
                    return Err(MaterialError::MixedAtomicNumber {
                        name: self.name.clone(),
                    }
                    .into());
                }
                Some(_) => {}
            }
            molar_mass += abundance / sum * iso.molar_mass();
        }

        let data = ElementData {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            z: z.unwrap_or_default(),
            molar_mass,
            isotopes: self
                .isotopes
                .iter()
                .map(|&(id, a)| (id, a / sum))
                .collect(),
        };
        Ok(repo.register_element(data)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::material::{IsotopeData, MaterialTable};
    use crate::units::{G_PER_MOLE, PERCENT};
    use crate::LaminaError;
    use approx::assert_relative_eq;

    fn table_with(isotopes: &[(&str, u32, u32, f64)]) -> (MaterialTable, Vec<IsotopeId>) {
        let mut table = MaterialTable::new();
        let ids = isotopes
            .iter()
            .map(|&(name, z, n, a)| {
                table
                    .register_isotope(IsotopeData::new(name, z, n, a * G_PER_MOLE).unwrap())
                    .unwrap()
            })
            .collect();
        (table, ids)
    }

    #[test]
    fn single_isotope_element() {
        let (mut table, ids) = table_with(&[("Ni64", 28, 64, 63.927_966)]);
        let el = MakeElement::new("Ni64", "Ni64", 1)
            .add_isotope(ids[0], 100.0 * PERCENT)
            .execute(&mut table)
            .unwrap();
        let data = table.element(el).unwrap();
        assert_eq!(data.z, 28);
        assert_relative_eq!(data.molar_mass / G_PER_MOLE, 63.927_966, max_relative = 1e-12);
    }

    #[test]
    fn weighted_molar_mass() {
        let (mut table, ids) = table_with(&[("U235", 92, 235, 235.01), ("U238", 92, 238, 238.03)]);
        let el = MakeElement::new("enriched U", "U", 2)
            .add_isotope(ids[0], 90.0 * PERCENT)
            .add_isotope(ids[1], 10.0 * PERCENT)
            .execute(&mut table)
            .unwrap();
        let expected = 0.9 * 235.01 + 0.1 * 238.03;
        assert_relative_eq!(
            table.element(el).unwrap().molar_mass / G_PER_MOLE,
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn abundances_must_sum_to_one() {
        let (mut table, ids) = table_with(&[("Ni64", 28, 64, 63.93)]);
        let err = MakeElement::new("Ni64", "Ni64", 1)
            .add_isotope(ids[0], 50.0 * PERCENT)
            .execute(&mut table)
            .unwrap_err();
        assert!(matches!(
            err,
            LaminaError::Material(MaterialError::FractionSum { .. })
        ));
    }

    #[test]
    fn declared_count_must_match() {
        let (mut table, ids) = table_with(&[("Ni64", 28, 64, 63.93)]);
        let err = MakeElement::new("Ni64", "Ni64", 2)
            .add_isotope(ids[0], 1.0)
            .execute(&mut table)
            .unwrap_err();
        assert!(matches!(
            err,
            LaminaError::Material(MaterialError::ComponentCount { declared: 2, added: 1, .. })
        ));
    }

    #[test]
    fn isotopes_must_share_atomic_number() {
        let (mut table, ids) = table_with(&[("Ni64", 28, 64, 63.93), ("Cu63", 29, 63, 62.93)]);
        let err = MakeElement::new("NiCu", "X", 2)
            .add_isotope(ids[0], 0.5)
            .add_isotope(ids[1], 0.5)
            .execute(&mut table)
            .unwrap_err();
        assert!(matches!(
            err,
            LaminaError::Material(MaterialError::MixedAtomicNumber { .. })
        ));
    }
}
