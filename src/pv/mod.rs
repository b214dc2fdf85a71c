//! Photovoltaic generator assignment.
//!
//! Generators are never stored on surfaces. A run validates the inputs,
//! broadcasts the per-surface parameter lists against the surface list and
//! commits one generator per surface into a caller-owned [`GeneratorMap`].

pub mod assign;
pub mod assignments;
pub mod broadcast;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod generator;
pub mod inputs;
pub mod inverter;
pub mod validate;

pub use assign::{PvRun, assign_pv_generators};
pub use assignments::{GeneratorMap, SurfaceGenerators};
pub use config::PvConfig;
pub use context::{HostStatus, PvContext};
pub use diagnostics::{Diagnostic, Level};
pub use error::{InputField, PvError};
pub use generator::{IntegrationMode, PvGenerator, PvPerformance};
pub use inputs::PvInputs;
pub use inverter::Inverter;
