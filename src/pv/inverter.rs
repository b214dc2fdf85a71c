use serde::Serialize;

use crate::uid::UID;

/// DC to AC inverter shared by all PV generators of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inverter {
    pub uid: UID,
    pub name: String,
    /// Conversion efficiency as a fraction [0.0, 1.0].
    pub efficiency: f64,
    /// Cost of the inverter in US dollars.
    pub cost: f64,
}

impl Inverter {
    pub fn new(name: &str, efficiency: f64, cost: f64) -> Self {
        Self {
            uid: UID::new(),
            name: name.to_string(),
            efficiency,
            cost,
        }
    }
}
