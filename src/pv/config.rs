/// Plausibility thresholds used while assigning PV generators.
///
/// Coverage is the fraction of the mounting surface taken up by the modules,
/// estimated from the rated power assuming 1000 W/m^2 irradiance.
#[derive(Debug, Clone)]
pub struct PvConfig {
    /// Coverage at or above which the run is aborted (default: 1.0).
    pub max_coverage: f64,
    /// Coverage above which a warning is raised (default: 0.85).
    pub high_coverage_warning: f64,
    /// Coverage below which a warning is raised (default: 0.025).
    pub low_coverage_warning: f64,
    /// Tolerance on `normal.z == -1` for the downward-facing check.
    pub downward_tolerance: f64,
}

impl PvConfig {
    pub fn new() -> Self {
        Self {
            max_coverage: 1.0,
            high_coverage_warning: 0.85,
            low_coverage_warning: 0.025,
            downward_tolerance: 1e-6,
        }
    }
}

impl Default for PvConfig {
    fn default() -> Self {
        Self::new()
    }
}
