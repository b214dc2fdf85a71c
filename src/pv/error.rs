use std::fmt;
use thiserror::Error;

use super::diagnostics::{Diagnostic, Level};
use crate::uid::UID;

/// Per-surface list inputs of an assignment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Names,
    CellEfficiency,
    ModulesInParallel,
    ModulesInSeries,
    CostPerModule,
    PowerPerModule,
    IntegrationMode,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InputField::Names => "generator names",
            InputField::CellEfficiency => "cell efficiency",
            InputField::ModulesInParallel => "modules in parallel",
            InputField::ModulesInSeries => "modules in series",
            InputField::CostPerModule => "cost per module",
            InputField::PowerPerModule => "power output per module",
            InputField::IntegrationMode => "heat transfer integration mode",
        };
        f.write_str(s)
    }
}

/// Reasons an assignment run is rejected. No generator is committed when
/// any of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PvError {
    #[error("The building model host is not loaded. Load it before assigning PV generators.")]
    HostNotLoaded,
    #[error("The building model host is incompatible with this component: {reason}")]
    HostIncompatible { reason: String },
    #[error("Please connect an inverter. Every PV generator needs one to produce power.")]
    MissingInverter,
    #[error(
        "{0} inverters are connected. All PV generators of a run share one inverter, connect only one."
    )]
    MultipleInverters(usize),
    #[error("PV generators must be mounted on at least one surface, please connect a surface.")]
    NoSurfaces,
    #[error("The {0} input must contain at least one value.")]
    MissingInput(InputField),
    #[error("Cell efficiency #{index} is {value}. Efficiencies must be fractions between 0 and 1.")]
    EfficiencyOutOfRange { index: usize, value: f64 },
    #[error(
        "The surface {name} ({uid}) is input more than once. \
         Each surface can carry only one PV generator per run."
    )]
    DuplicateSurface {
        name: String,
        uid: UID,
        /// Input positions holding the repeated surface.
        indices: Vec<usize>,
    },
    #[error(
        "The {input} input has {len} values but only {surfaces} surfaces are connected. \
         An input list cannot be longer than the list of surfaces."
    )]
    LengthMismatch {
        input: InputField,
        len: usize,
        surfaces: usize,
    },
    #[error(
        "PV modules would cover {:.2}% of the surface {surface}. \
         Check the power rating, the number of modules and that the model is in meters.",
        .coverage * 100.
    )]
    CoverageExceeded {
        surface: String,
        coverage: f64,
        /// Advisories raised for earlier surfaces before the run was aborted.
        diagnostics: Vec<Diagnostic>,
    },
}

impl PvError {
    /// Severity the host should show this error with.
    pub fn level(&self) -> Level {
        match self {
            PvError::DuplicateSurface { .. } | PvError::CoverageExceeded { .. } => Level::Error,
            _ => Level::Warning,
        }
    }

    /// Input positions the host should highlight in its preview.
    pub fn highlight_indices(&self) -> &[usize] {
        match self {
            PvError::DuplicateSurface { indices, .. } => indices,
            _ => &[],
        }
    }
}
