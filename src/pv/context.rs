use crate::units::UnitSystem;

/// State of the host environment the generators are staged for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostStatus {
    Ready,
    /// The building-model host has not been loaded.
    NotLoaded,
    /// The host is loaded but too old or otherwise incompatible.
    Incompatible { reason: String },
}

/// Environment passed to an assignment run.
///
/// Replaces ambient lookups of the host registry and document settings.
#[derive(Debug, Clone)]
pub struct PvContext {
    pub host: HostStatus,
    pub unit_system: UnitSystem,
}

impl PvContext {
    /// Ready host with the given model units.
    pub fn new(unit_system: UnitSystem) -> Self {
        Self {
            host: HostStatus::Ready,
            unit_system,
        }
    }
}

impl Default for PvContext {
    fn default() -> Self {
        Self::new(UnitSystem::Meters)
    }
}
