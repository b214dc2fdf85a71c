use std::collections::HashMap;

use super::generator::PvGenerator;
use crate::uid::UID;

/// PV state of one surface.
#[derive(Debug, Clone, Default)]
pub struct SurfaceGenerators {
    /// True once a run has mounted generators on the surface.
    pub has_generator: bool,
    pub generators: Vec<PvGenerator>,
}

/// Generators associated with surfaces, keyed by surface `UID`.
///
/// Owned by the caller and updated by [`crate::pv::assign_pv_generators`].
/// Surfaces not present in the map carry no generator.
#[derive(Debug, Clone, Default)]
pub struct GeneratorMap {
    entries: HashMap<UID, SurfaceGenerators>,
}

impl GeneratorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, surface: &UID) -> Option<&SurfaceGenerators> {
        self.entries.get(surface)
    }

    pub fn has_generator(&self, surface: &UID) -> bool {
        self.entries
            .get(surface)
            .map(|s| s.has_generator)
            .unwrap_or(false)
    }

    /// Generators mounted on the surface (empty if none).
    pub fn generators(&self, surface: &UID) -> &[PvGenerator] {
        self.entries
            .get(surface)
            .map(|s| s.generators.as_slice())
            .unwrap_or(&[])
    }

    /// Marks the surface as carrying generators and clears its previous list.
    pub fn reset(&mut self, surface: &UID) -> &mut SurfaceGenerators {
        let entry = self.entries.entry(surface.clone()).or_default();
        entry.has_generator = true;
        entry.generators.clear();
        entry
    }

    /// Removes the surface from the map, returning its previous state.
    pub fn remove(&mut self, surface: &UID) -> Option<SurfaceGenerators> {
        self.entries.remove(surface)
    }

    /// Number of surfaces with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UID, &SurfaceGenerators)> {
        self.entries.iter()
    }

    /// All generators across surfaces, in no particular order.
    pub fn all_generators(&self) -> impl Iterator<Item = &PvGenerator> {
        self.entries.values().flat_map(|s| s.generators.iter())
    }
}
