use tracing::error;

use crate::error::{PlacementError, Result};
use crate::geometry::Solid;
use crate::math::{Point3, TOLERANCE};
use crate::volume::{PhysicalVolumeData, PhysicalVolumeId, VolumeStore};

/// Number of surface points sampled per check unless overridden.
pub const DEFAULT_RESOLUTION: usize = 1000;

/// Checks a placed volume against its mother and its sisters.
///
/// Points sampled on the volume's surface must not lie outside the mother
/// or inside any sister, and no sister's surface point may lie inside the
/// volume. The first violation found is returned as an error.
pub struct CheckOverlaps {
    volume: PhysicalVolumeId,
    resolution: usize,
    tolerance: f64,
}

impl CheckOverlaps {
    /// Creates a new `CheckOverlaps` query with the default resolution and
    /// zero tolerance.
    #[must_use]
    pub fn new(volume: PhysicalVolumeId) -> Self {
        Self {
            volume,
            resolution: DEFAULT_RESOLUTION,
            tolerance: 0.0,
        }
    }

    /// Sets the number of sampled surface points.
    #[must_use]
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the overlap depth that is still accepted.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the check.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first overlap found, or if the volume
    /// is not in the store.
    pub fn execute(&self, store: &VolumeStore) -> Result<()> {
        let pv = store.physical_volume(self.volume)?;
        check_placement(store, pv, Some(self.volume), self.resolution, self.tolerance)
    }
}

fn coords(p: &Point3) -> [f64; 3] {
    [p.x, p.y, p.z]
}

/// Checks a placement that may not yet be in the store. `itself` is skipped
/// when iterating over the mother's daughters.
pub(crate) fn check_placement(
    store: &VolumeStore,
    pv: &PhysicalVolumeData,
    itself: Option<PhysicalVolumeId>,
    resolution: usize,
    tolerance: f64,
) -> Result<()> {
    let Some(mother_id) = pv.mother else {
        return Ok(());
    };
    let threshold = tolerance + 0.5 * TOLERANCE;
    let solid = &store.solid(store.logical_volume(pv.logical)?.solid)?.shape;
    let mother = store.logical_volume(mother_id)?;
    let mother_solid = &store.solid(mother.solid)?.shape;

    let points: Vec<(Point3, Point3)> = solid
        .surface_points(resolution)
        .into_iter()
        .map(|p| (p, pv.to_mother(&p)))
        .collect();

    if let Some((local, _)) = points
        .iter()
        .find(|(_, in_mother)| mother_solid.safety(in_mother) > threshold)
    {
        error!(volume = %pv.name, mother = %mother.name, "volume protrudes from its mother");
        return Err(PlacementError::ProtrudesMother {
            daughter: pv.name.clone(),
            mother: mother.name.clone(),
            point: coords(local),
        }
        .into());
    }

    for &sister_id in &mother.daughters {
        if Some(sister_id) == itself {
            continue;
        }
        let sister = store.physical_volume(sister_id)?;
        let sister_solid = &store.solid(store.logical_volume(sister.logical)?.solid)?.shape;

        let ours_in_sister = points
            .iter()
            .find(|(_, in_mother)| sister_solid.safety(&sister.to_local(in_mother)) < -threshold)
            .map(|(local, _)| *local);
        let theirs_in_ours = || {
            sister_solid
                .surface_points(resolution)
                .into_iter()
                .map(|q| pv.to_local(&sister.to_mother(&q)))
                .find(|q| solid.safety(q) < -threshold)
        };

        if let Some(local) = ours_in_sister.or_else(theirs_in_ours) {
            error!(volume = %pv.name, sister = %sister.name, "volume overlaps a sister");
            return Err(PlacementError::OverlapsSister {
                daughter: pv.name.clone(),
                sister: sister.name.clone(),
                point: coords(&local),
            }
            .into());
        }
    }
    Ok(())
}
