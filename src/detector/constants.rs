//! Fixed dimensions and material data of the thin-target setup.

use crate::units::{CM, G_PER_CM3, G_PER_MOLE};

/// Full transverse size of the envelope.
pub const ENVELOPE_SIZE_XY: f64 = 20.0 * CM;

/// Full length of the envelope along the beam axis.
pub const ENVELOPE_SIZE_Z: f64 = 30.0 * CM;

/// World size as a multiple of the envelope size.
pub const WORLD_FACTOR: f64 = 1.2;

/// Full transverse size of the target.
pub const TARGET_SIZE_XY: f64 = 1.0 * CM;

/// Catalogue name of the world material.
pub const WORLD_MATERIAL: &str = "G4_Galactic";

/// Name shared by the target isotope, element and material.
pub const TARGET_MATERIAL: &str = "Ni64";

/// Atomic number of the target nuclide.
pub const TARGET_Z: u32 = 28;

/// Nucleon number of the target nuclide.
pub const TARGET_N: u32 = 64;

/// Molar mass of the target nuclide.
pub const TARGET_MOLAR_MASS: f64 = 63.927_966 * G_PER_MOLE;

/// Density of the enriched target.
pub const TARGET_DENSITY: f64 = 8.907 * G_PER_CM3;

pub const WORLD_NAME: &str = "World";
pub const TARGET_NAME: &str = "Target";

/// Command directory of the target parameters.
pub const COMMAND_DIRECTORY: &str = "/target/";
