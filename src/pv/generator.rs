use serde::Serialize;
use std::sync::Arc;

use super::inverter::Inverter;
use crate::uid::UID;

/// Heat transfer integration mode of a PV generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum IntegrationMode {
    #[default]
    Decoupled,
    DecoupledUllebergDynamic,
    IntegratedSurfaceOutsideFace,
    IntegratedTranspiredCollector,
    IntegratedExteriorVentedCavity,
    PhotovoltaicThermalSolarCollector,
}

impl IntegrationMode {
    /// Converts the 1-based mode index used by the host panel.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(IntegrationMode::Decoupled),
            2 => Some(IntegrationMode::DecoupledUllebergDynamic),
            3 => Some(IntegrationMode::IntegratedSurfaceOutsideFace),
            4 => Some(IntegrationMode::IntegratedTranspiredCollector),
            5 => Some(IntegrationMode::IntegratedExteriorVentedCavity),
            6 => Some(IntegrationMode::PhotovoltaicThermalSolarCollector),
            _ => None,
        }
    }
}

/// Performance model attached to a generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PvPerformance {
    /// Fixed efficiency over the active cell area.
    Simple {
        name: String,
        /// Fraction of the surface with active solar cells.
        active_fraction: f64,
        efficiency: f64,
    },
    /// Manufacturer module data (Sandia database entry).
    Sandia { name: String, dataset: String },
}

impl PvPerformance {
    pub fn name(&self) -> &str {
        match self {
            PvPerformance::Simple { name, .. } | PvPerformance::Sandia { name, .. } => name,
        }
    }
}

/// One PV generator mounted on one surface.
#[derive(Debug, Clone, Serialize)]
pub struct PvGenerator {
    pub name: String,
    pub surface: UID,
    pub surface_name: String,
    /// Number of series strings wired in parallel.
    pub modules_in_parallel: u32,
    /// Number of modules wired in series on each string.
    pub modules_in_series: u32,
    /// Rated power of one module in W.
    pub power_per_module: f64,
    /// Cell efficiency as a fraction [0.0, 1.0].
    pub cell_efficiency: f64,
    /// Estimated fraction of the surface covered by modules.
    pub coverage: f64,
    /// Cost of one module in US dollars.
    pub cost_per_module: f64,
    pub integration_mode: IntegrationMode,
    pub performance: PvPerformance,
    pub inverter: Arc<Inverter>,
}

impl PvGenerator {
    pub fn module_count(&self) -> u64 {
        u64::from(self.modules_in_parallel) * u64::from(self.modules_in_series)
    }

    /// Rated power of the whole generator in W.
    pub fn rated_power(&self) -> f64 {
        self.power_per_module * self.module_count() as f64
    }

    pub fn total_cost(&self) -> f64 {
        self.cost_per_module * self.module_count() as f64
    }
}

/// Fraction of a surface covered by modules of the given rated power.
///
/// Assumes 1000 W/m^2 rating irradiance, so `power / (1000 * efficiency)` is
/// the module area in m^2.
pub fn coverage_fraction(total_power: f64, surface_area: f64, efficiency: f64) -> f64 {
    total_power / (1000. * surface_area * efficiency)
}
