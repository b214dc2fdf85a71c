use super::context::{HostStatus, PvContext};
use super::error::{InputField, PvError};
use super::inputs::PvInputs;
use crate::surface::Surface;

/// Checks that a run can start. Returns the first failure found.
///
/// List lengths are checked later, while broadcasting.
pub fn validate(ctx: &PvContext, surfaces: &[Surface], inputs: &PvInputs) -> Result<(), PvError> {
    match &ctx.host {
        HostStatus::Ready => {}
        HostStatus::NotLoaded => return Err(PvError::HostNotLoaded),
        HostStatus::Incompatible { reason } => {
            return Err(PvError::HostIncompatible {
                reason: reason.clone(),
            });
        }
    }

    match inputs.inverters.len() {
        0 => return Err(PvError::MissingInverter),
        1 => {}
        n => return Err(PvError::MultipleInverters(n)),
    }

    if surfaces.is_empty() {
        return Err(PvError::NoSurfaces);
    }

    if inputs.cell_efficiency.is_empty() {
        return Err(PvError::MissingInput(InputField::CellEfficiency));
    }
    if let Some((index, &value)) = inputs
        .cell_efficiency
        .iter()
        .enumerate()
        .find(|(_, e)| !(0.0..=1.0).contains(*e))
    {
        return Err(PvError::EfficiencyOutOfRange { index, value });
    }

    if inputs.power_per_module.is_empty() {
        return Err(PvError::MissingInput(InputField::PowerPerModule));
    }
    if inputs.modules_in_parallel.is_empty() {
        return Err(PvError::MissingInput(InputField::ModulesInParallel));
    }
    if inputs.modules_in_series.is_empty() {
        return Err(PvError::MissingInput(InputField::ModulesInSeries));
    }

    Ok(())
}
