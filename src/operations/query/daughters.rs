use crate::error::Result;
use crate::volume::{LogicalVolumeId, PhysicalVolumeId, VolumeStore};

/// Lists the placements inside a logical volume, in placement order.
pub struct Daughters {
    volume: LogicalVolumeId,
    recursive: bool,
}

impl Daughters {
    /// Creates a new `Daughters` query for direct daughters only.
    #[must_use]
    pub fn new(volume: LogicalVolumeId) -> Self {
        Self {
            volume,
            recursive: false,
        }
    }

    /// Includes every descendant, depth first.
    #[must_use]
    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if a volume in the hierarchy is not in the store.
    pub fn execute(&self, store: &VolumeStore) -> Result<Vec<PhysicalVolumeId>> {
        let mut out = Vec::new();
        self.collect(self.volume, store, &mut out)?;
        Ok(out)
    }

    fn collect(
        &self,
        id: LogicalVolumeId,
        store: &VolumeStore,
        out: &mut Vec<PhysicalVolumeId>,
    ) -> Result<()> {
        for &pv in &store.logical_volume(id)?.daughters {
            out.push(pv);
            if self.recursive {
                self.collect(store.physical_volume(pv)?.logical, store, out)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::material::{MaterialRepository, MaterialTable};
    use crate::math::Vector3;
    use crate::operations::creation::{MakeBox, MakeLogicalVolume};
    use crate::operations::placement::PlaceVolume;
    use crate::operations::query::Mass;
    use crate::units::{CM3, G_PER_CM3};
    use approx::assert_relative_eq;

    struct Nested {
        store: VolumeStore,
        materials: MaterialTable,
        world: LogicalVolumeId,
        shell: PhysicalVolumeId,
        core: PhysicalVolumeId,
        side: PhysicalVolumeId,
    }

    // World 200 mm cube of vacuum, a 20 mm aluminium shell holding a 10 mm
    // iron core, and a second aluminium block beside the shell.
    fn nested() -> Nested {
        let mut materials = MaterialTable::new();
        let vacuum = materials.find_or_build_material("G4_Galactic").unwrap();
        let aluminium = materials.find_or_build_material("G4_Al").unwrap();
        let iron = materials.find_or_build_material("G4_Fe").unwrap();
        let mut store = VolumeStore::new();

        let solid = MakeBox::new("World", 100.0, 100.0, 100.0)
            .execute(&mut store)
            .unwrap();
        let world = MakeLogicalVolume::new(solid, vacuum, "World")
            .execute(&mut store, &materials)
            .unwrap();
        PlaceVolume::new(world, "World").execute(&mut store).unwrap();

        let solid = MakeBox::new("Shell", 10.0, 10.0, 10.0)
            .execute(&mut store)
            .unwrap();
        let shell_lv = MakeLogicalVolume::new(solid, aluminium, "Shell")
            .execute(&mut store, &materials)
            .unwrap();
        let shell = PlaceVolume::new(shell_lv, "Shell")
            .inside(world)
            .with_overlap_check(true)
            .execute(&mut store)
            .unwrap();
        let side = PlaceVolume::new(shell_lv, "Side")
            .inside(world)
            .at(Vector3::new(50.0, 0.0, 0.0))
            .with_copy_number(1)
            .with_overlap_check(true)
            .execute(&mut store)
            .unwrap();

        let solid = MakeBox::new("Core", 5.0, 5.0, 5.0)
            .execute(&mut store)
            .unwrap();
        let core_lv = MakeLogicalVolume::new(solid, iron, "Core")
            .execute(&mut store, &materials)
            .unwrap();
        let core = PlaceVolume::new(core_lv, "Core")
            .inside(shell_lv)
            .with_overlap_check(true)
            .execute(&mut store)
            .unwrap();

        Nested {
            store,
            materials,
            world,
            shell,
            core,
            side,
        }
    }

    #[test]
    fn direct_daughters_in_placement_order() {
        let n = nested();
        let daughters = Daughters::new(n.world).execute(&n.store).unwrap();
        assert_eq!(daughters, vec![n.shell, n.side]);
    }

    #[test]
    fn recursive_walks_depth_first() {
        let n = nested();
        let all = Daughters::new(n.world)
            .recursive()
            .execute(&n.store)
            .unwrap();
        // Both shell placements share one logical volume, so the core
        // appears under each of them.
        assert_eq!(all, vec![n.shell, n.core, n.side, n.core]);
    }

    #[test]
    fn mass_replaces_daughter_material() {
        let n = nested();
        let shell_lv = n.store.physical_volume(n.shell).unwrap().logical;
        let density = |name: &str| {
            let id = n.materials.find_material(name).unwrap();
            n.materials.material(id).unwrap().density
        };
        let aluminium = density("G4_Al");
        let iron = density("G4_Fe");

        let mass = Mass::new(shell_lv).execute(&n.store, &n.materials).unwrap();
        let expected = aluminium * (8.0 - 1.0) * CM3 + iron * 1.0 * CM3;
        assert_relative_eq!(mass, expected, max_relative = 1e-12);
        assert!(aluminium > 2.0 * G_PER_CM3);
    }
}
