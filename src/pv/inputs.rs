use std::sync::Arc;

use super::generator::IntegrationMode;
use super::inverter::Inverter;

/// Per-surface parameters of an assignment run.
///
/// Each list is matched to the surfaces by index. A list shorter than the
/// surface list repeats its first value for the remaining surfaces, and no
/// list may be longer than the surface list.
#[derive(Debug, Clone, Default)]
pub struct PvInputs {
    /// Generator names. Missing names default to `PVgenerator{index}`.
    pub names: Vec<String>,
    /// Fraction of each surface covered by cells.
    ///
    /// Accepted for compatibility with the host panel. Coverage is derived
    /// from the power rating instead.
    pub cells_area_fraction: Vec<f64>,
    /// Cell efficiency as a fraction [0.0, 1.0].
    pub cell_efficiency: Vec<f64>,
    pub modules_in_parallel: Vec<u32>,
    pub modules_in_series: Vec<u32>,
    /// Cost per module in US dollars (default: 0).
    pub cost_per_module: Vec<f64>,
    /// Rated power per module in W.
    pub power_per_module: Vec<f64>,
    /// Heat transfer integration mode (default: decoupled).
    pub integration_modes: Vec<IntegrationMode>,
    /// Connected inverters. Exactly one is required.
    pub inverters: Vec<Arc<Inverter>>,
    /// Optional Sandia module dataset used instead of the simple performance model.
    pub sandia_dataset: Option<String>,
}

impl PvInputs {
    /// Inputs with the required parameters and a single inverter.
    pub fn new(
        inverter: Arc<Inverter>,
        cell_efficiency: Vec<f64>,
        modules_in_parallel: Vec<u32>,
        modules_in_series: Vec<u32>,
        power_per_module: Vec<f64>,
    ) -> Self {
        Self {
            cell_efficiency,
            modules_in_parallel,
            modules_in_series,
            power_per_module,
            inverters: vec![inverter],
            ..Default::default()
        }
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    pub fn with_cost_per_module(mut self, cost: Vec<f64>) -> Self {
        self.cost_per_module = cost;
        self
    }

    pub fn with_integration_modes(mut self, modes: Vec<IntegrationMode>) -> Self {
        self.integration_modes = modes;
        self
    }

    pub fn with_sandia_dataset(mut self, dataset: &str) -> Self {
        self.sandia_dataset = Some(dataset.to_string());
        self
    }
}
