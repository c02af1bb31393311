//! Unit constants and unit-symbol lookup.
//!
//! Base units are millimetre, gram, mole, kelvin and pascal. A quantity is
//! stored as `value * UNIT` and read back as `quantity / UNIT`.

// Length
pub const NANOMETER: f64 = 1e-6;
pub const MICROMETER: f64 = 1e-3;
pub const MILLIMETER: f64 = 1.0;
pub const CENTIMETER: f64 = 10.0;
pub const METER: f64 = 1000.0;
pub const KILOMETER: f64 = 1e6;

pub const UM: f64 = MICROMETER;
pub const MM: f64 = MILLIMETER;
pub const CM: f64 = CENTIMETER;
pub const M: f64 = METER;

pub const CM3: f64 = CM * CM * CM;
pub const MM3: f64 = MM * MM * MM;

// Mass
pub const MILLIGRAM: f64 = 1e-3;
pub const GRAM: f64 = 1.0;
pub const KILOGRAM: f64 = 1000.0;

// Amount of substance
pub const MOLE: f64 = 1.0;

/// Avogadro constant, per mole.
pub const AVOGADRO: f64 = 6.022_140_76e23 / MOLE;

// Density
pub const G_PER_CM3: f64 = GRAM / CM3;
pub const MG_PER_CM3: f64 = MILLIGRAM / CM3;
pub const KG_PER_M3: f64 = KILOGRAM / (M * M * M);

// Molar mass
pub const G_PER_MOLE: f64 = GRAM / MOLE;

// Temperature and pressure
pub const KELVIN: f64 = 1.0;
pub const PASCAL: f64 = 1.0;
pub const BAR: f64 = 1e5 * PASCAL;
pub const ATMOSPHERE: f64 = 101_325.0 * PASCAL;

pub const STP_TEMPERATURE: f64 = 273.15 * KELVIN;
pub const STP_PRESSURE: f64 = ATMOSPHERE;

// Dimensionless
pub const PERCENT: f64 = 0.01;

/// Physical dimension of a unit symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    Length,
    Mass,
    Density,
    Temperature,
    Pressure,
}

impl UnitCategory {
    /// Human-readable category name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Mass => "mass",
            Self::Density => "density",
            Self::Temperature => "temperature",
            Self::Pressure => "pressure",
        }
    }
}

const UNIT_TABLE: &[(&str, f64, UnitCategory)] = &[
    ("nm", NANOMETER, UnitCategory::Length),
    ("um", MICROMETER, UnitCategory::Length),
    ("mm", MILLIMETER, UnitCategory::Length),
    ("cm", CENTIMETER, UnitCategory::Length),
    ("m", METER, UnitCategory::Length),
    ("km", KILOMETER, UnitCategory::Length),
    ("mg", MILLIGRAM, UnitCategory::Mass),
    ("g", GRAM, UnitCategory::Mass),
    ("kg", KILOGRAM, UnitCategory::Mass),
    ("g/cm3", G_PER_CM3, UnitCategory::Density),
    ("mg/cm3", MG_PER_CM3, UnitCategory::Density),
    ("kg/m3", KG_PER_M3, UnitCategory::Density),
    ("K", KELVIN, UnitCategory::Temperature),
    ("Pa", PASCAL, UnitCategory::Pressure),
    ("bar", BAR, UnitCategory::Pressure),
    ("atm", ATMOSPHERE, UnitCategory::Pressure),
];

/// Looks up a unit symbol, returning its value in base units and its category.
#[must_use]
pub fn parse_unit(symbol: &str) -> Option<(f64, UnitCategory)> {
    UNIT_TABLE
        .iter()
        .find(|(name, _, _)| *name == symbol)
        .map(|&(_, value, category)| (value, category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn density_conversion() {
        assert_relative_eq!(8.907 * G_PER_CM3 / KG_PER_M3, 8907.0, max_relative = 1e-12);
    }

    #[test]
    fn known_units() {
        assert_eq!(parse_unit("cm"), Some((10.0, UnitCategory::Length)));
        assert_eq!(parse_unit("um").map(|u| u.1), Some(UnitCategory::Length));
        assert_eq!(parse_unit("g/cm3").map(|u| u.1), Some(UnitCategory::Density));
    }

    #[test]
    fn unknown_unit() {
        assert!(parse_unit("furlong").is_none());
    }
}
