use tracing::info;

use super::constants::{
    COMMAND_DIRECTORY, ENVELOPE_SIZE_XY, ENVELOPE_SIZE_Z, TARGET_DENSITY, TARGET_MATERIAL,
    TARGET_MOLAR_MASS, TARGET_N, TARGET_NAME, TARGET_SIZE_XY, TARGET_Z, WORLD_FACTOR,
    WORLD_MATERIAL, WORLD_NAME,
};
use super::{DetectorConstruction, GeometryTree};
use crate::error::{CommandError, Result};
use crate::material::{IsotopeData, MaterialId, MaterialRepository};
use crate::messenger::Messenger;
use crate::operations::creation::{MakeBox, MakeElement, MakeLogicalVolume, MakeMaterial};
use crate::operations::placement::PlaceVolume;
use crate::units::{parse_unit, UnitCategory, MM, PERCENT};
use crate::volume::{LogicalVolumeId, VolumeStore};

/// Settings read by [`build_geometry`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetConfig {
    /// Full thickness of the target along z.
    pub target_thickness: f64,
}

impl TargetConfig {
    /// The diagnostic line reporting the thickness in millimetres.
    #[must_use]
    pub fn thickness_report(&self) -> String {
        format!(" == > Target thickness = {}mm", self.target_thickness / MM)
    }
}

/// The thin-target setup: a Ni-64 foil in a galactic-vacuum world.
///
/// The target thickness is set through the `/target/thickness` command.
pub struct TargetDetector {
    config: TargetConfig,
    messenger: Messenger<TargetConfig>,
    scoring_volume: Option<LogicalVolumeId>,
}

impl TargetDetector {
    /// Creates the detector with `/target/thickness` registered in
    /// millimetres and a thickness of zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter cannot be registered.
    pub fn new() -> Result<Self> {
        let mut detector = Self {
            config: TargetConfig::default(),
            messenger: Messenger::new(COMMAND_DIRECTORY),
            scoring_volume: None,
        };
        detector.register_thickness_parameter("mm", 0.0)?;
        Ok(detector)
    }

    /// Exposes the target thickness as `thickness` in the command directory
    /// and sets it to `default` (expressed in `unit`).
    ///
    /// Nothing is registered when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit is not a known length unit, the default
    /// is not finite, or the parameter is already registered.
    pub fn register_thickness_parameter(&mut self, unit: &str, default: f64) -> Result<()> {
        let path = format!("{}thickness", self.messenger.directory());
        let (unit_value, category) =
            parse_unit(unit).ok_or_else(|| CommandError::UnknownUnit(unit.to_owned()))?;
        if category != UnitCategory::Length {
            return Err(CommandError::UnitCategory {
                unit: unit.to_owned(),
                expected: UnitCategory::Length.name(),
            }
            .into());
        }
        if !default.is_finite() {
            return Err(CommandError::InvalidValue {
                command: path,
                value: default.to_string(),
            }
            .into());
        }
        self.messenger.declare_property_with_unit(
            "thickness",
            unit,
            |c, v| c.target_thickness = v,
            |c| c.target_thickness,
            "Full thickness of the target along the beam axis.",
        )?;
        self.config.target_thickness = default * unit_value;
        info!(command = %path, default, unit, "registered parameter");
        Ok(())
    }

    /// Returns the current settings.
    #[must_use]
    pub fn config(&self) -> &TargetConfig {
        &self.config
    }

    /// Returns the command directory.
    #[must_use]
    pub fn messenger(&self) -> &Messenger<TargetConfig> {
        &self.messenger
    }

    /// Applies one command, e.g. `/target/thickness 0.1 mm`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is malformed.
    pub fn apply_command(&mut self, line: &str) -> Result<()> {
        self.messenger.apply(&mut self.config, line)
    }

    /// Applies a macro of commands, one per line.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing command.
    pub fn apply_macro(&mut self, text: &str) -> Result<()> {
        self.messenger.apply_macro(&mut self.config, text)
    }
}

impl DetectorConstruction for TargetDetector {
    fn construct(&mut self, materials: &mut dyn MaterialRepository) -> Result<GeometryTree> {
        let tree = build_geometry(&self.config, materials)?;
        self.scoring_volume = tree.scoring_volume();
        Ok(tree)
    }

    fn scoring_volume(&self) -> Option<LogicalVolumeId> {
        self.scoring_volume
    }
}

/// Finds the enriched target material, defining it on first use.
fn define_target_material(materials: &mut dyn MaterialRepository) -> Result<MaterialId> {
    if let Some(id) = materials.find_material(TARGET_MATERIAL) {
        return Ok(id);
    }
    let isotope = match materials.find_isotope(TARGET_MATERIAL) {
        Some(id) => id,
        None => materials.register_isotope(IsotopeData::new(
            TARGET_MATERIAL,
            TARGET_Z,
            TARGET_N,
            TARGET_MOLAR_MASS,
        )?)?,
    };
    let element = match materials.find_element(TARGET_MATERIAL) {
        Some(id) => id,
        None => MakeElement::new(TARGET_MATERIAL, TARGET_MATERIAL, 1)
            .add_isotope(isotope, 100.0 * PERCENT)
            .execute(&mut *materials)?,
    };
    MakeMaterial::new(TARGET_MATERIAL, TARGET_DENSITY, 1)
        .add_element_atoms(element, 1)
        .execute(&mut *materials)
}

/// Builds the world and the target placed at its centre.
///
/// The world is `WORLD_FACTOR` times the envelope; the target has a fixed
/// cross-section and the configured thickness. The target's logical volume
/// is the scoring volume of the returned tree.
///
/// # Errors
///
/// Returns an error if the world material is not in the catalogue, the
/// thickness is not positive, or the placement overlaps.
pub fn build_geometry(
    config: &TargetConfig,
    materials: &mut dyn MaterialRepository,
) -> Result<GeometryTree> {
    let target_material = define_target_material(materials)?;
    let world_material = materials.find_or_build_material(WORLD_MATERIAL)?;

    let world_size_xy = WORLD_FACTOR * ENVELOPE_SIZE_XY;
    let world_size_z = WORLD_FACTOR * ENVELOPE_SIZE_Z;

    let mut volumes = VolumeStore::new();
    let solid_world = MakeBox::new(
        WORLD_NAME,
        0.5 * world_size_xy,
        0.5 * world_size_xy,
        0.5 * world_size_z,
    )
    .execute(&mut volumes)?;
    let logic_world = MakeLogicalVolume::new(solid_world, world_material, WORLD_NAME)
        .execute(&mut volumes, &*materials)?;
    let phys_world = PlaceVolume::new(logic_world, WORLD_NAME)
        .with_overlap_check(true)
        .execute(&mut volumes)?;

    info!("{}", config.thickness_report());
    let solid_target = MakeBox::new(
        TARGET_NAME,
        0.5 * TARGET_SIZE_XY,
        0.5 * TARGET_SIZE_XY,
        0.5 * config.target_thickness,
    )
    .execute(&mut volumes)?;
    let logic_target = MakeLogicalVolume::new(solid_target, target_material, TARGET_NAME)
        .execute(&mut volumes, &*materials)?;
    PlaceVolume::new(logic_target, TARGET_NAME)
        .inside(logic_world)
        .with_overlap_check(true)
        .execute(&mut volumes)?;

    info!("\n{materials}");
    Ok(GeometryTree::new(volumes, phys_world).with_scoring_volume(logic_target))
}
