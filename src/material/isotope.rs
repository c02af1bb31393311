use crate::error::{MaterialError, Result};
use crate::units::G_PER_MOLE;

slotmap::new_key_type! {
    /// Unique identifier for an isotope in the material table.
    pub struct IsotopeId;
}

/// A nuclide: atomic number, nucleon number and molar mass.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotopeData {
    name: String,
    z: u32,
    n: u32,
    molar_mass: f64,
}

impl IsotopeData {
    /// Creates a new isotope.
    ///
    /// # Arguments
    ///
    /// * `name` - Registry name, e.g. `"Ni64"`
    /// * `z` - Atomic number (at least 1)
    /// * `n` - Number of nucleons (at least `z`)
    /// * `molar_mass` - Mass per mole, in base units (`g/mole`)
    ///
    /// # Errors
    ///
    /// Returns an error if the nucleon counts are inconsistent or the molar
    /// mass is not positive.
    pub fn new(name: impl Into<String>, z: u32, n: u32, molar_mass: f64) -> Result<Self> {
        let name = name.into();
        let reason = if z == 0 {
            Some("atomic number must be at least 1".to_owned())
        } else if n < z {
            Some(format!("nucleon number {n} is smaller than atomic number {z}"))
        } else if !(molar_mass > 0.0 && molar_mass.is_finite()) {
            Some(format!("molar mass {molar_mass} must be positive"))
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(MaterialError::InvalidIsotope { name, reason }.into());
        }
        Ok(Self {
            name,
            z,
            n,
            molar_mass,
        })
    }

    /// Returns the registry name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the atomic number.
    #[must_use]
    pub fn z(&self) -> u32 {
        self.z
    }

    /// Returns the number of nucleons.
    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Returns the molar mass in base units.
    #[must_use]
    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    /// Returns the molar mass in `g/mole`.
    #[must_use]
    pub fn molar_mass_g_per_mole(&self) -> f64 {
        self.molar_mass / G_PER_MOLE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn nickel_64() {
        let iso = IsotopeData::new("Ni64", 28, 64, 63.927_966 * G_PER_MOLE).unwrap();
        assert_eq!(iso.name(), "Ni64");
        assert_eq!((iso.z(), iso.n()), (28, 64));
        assert!((iso.molar_mass_g_per_mole() - 63.927_966).abs() < 1e-12);
    }

    #[test]
    fn zero_atomic_number() {
        assert!(IsotopeData::new("X", 0, 1, 1.0).is_err());
    }

    #[test]
    fn fewer_nucleons_than_protons() {
        assert!(IsotopeData::new("X", 28, 20, 20.0).is_err());
    }

    #[test]
    fn non_positive_mass() {
        assert!(IsotopeData::new("X", 1, 1, 0.0).is_err());
        assert!(IsotopeData::new("X", 1, 1, f64::NAN).is_err());
    }
}
