use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::assignments::GeneratorMap;
use super::broadcast::{broadcast, check_len};
use super::config::PvConfig;
use super::context::PvContext;
use super::diagnostics::Diagnostic;
use super::error::{InputField, PvError};
use super::generator::{IntegrationMode, PvGenerator, PvPerformance, coverage_fraction};
use super::inputs::PvInputs;
use super::inverter::Inverter;
use super::validate::validate;
use crate::surface::Surface;
use crate::uid::UID;
use crate::units::UnitSystem;

/// Outcome of a successful assignment run.
#[derive(Debug, Clone, Default)]
pub struct PvRun {
    /// Surfaces that now carry a generator, in input order.
    pub surfaces: Vec<UID>,
    /// Human-readable description of each generator, keyed by generator index.
    pub messages: BTreeMap<usize, String>,
    /// Advisory messages. They never stop the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl PvRun {
    /// Logs the diagnostic right away and keeps it for the caller.
    fn report(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.diagnostics.push(diagnostic);
    }
}

/// Mounts one PV generator on each surface.
///
/// On success every input surface is reset in `map` and receives exactly one
/// generator referencing the single connected inverter. On error `map` is
/// left untouched.
pub fn assign_pv_generators(
    ctx: &PvContext,
    surfaces: &[Surface],
    inputs: &PvInputs,
    config: &PvConfig,
    map: &mut GeneratorMap,
) -> Result<PvRun, PvError> {
    let (generators, run) = match stage(ctx, surfaces, inputs, config) {
        Ok(staged) => staged,
        Err(e) => {
            log::error!("PV generators not assigned: {e}");
            return Err(e);
        }
    };

    for generator in generators {
        map.reset(&generator.surface).generators.push(generator);
    }
    log::info!("Mounted PV generators on {} surface(s)", run.surfaces.len());

    Ok(run)
}

/// Builds all generators without touching the association map.
fn stage(
    ctx: &PvContext,
    surfaces: &[Surface],
    inputs: &PvInputs,
    config: &PvConfig,
) -> Result<(Vec<PvGenerator>, PvRun), PvError> {
    validate(ctx, surfaces, inputs)?;
    check_duplicates(surfaces)?;

    let n = surfaces.len();
    check_len(InputField::Names, inputs.names.len(), n)?;
    let efficiency = broadcast(InputField::CellEfficiency, &inputs.cell_efficiency, n, None)?;
    let parallel = broadcast(
        InputField::ModulesInParallel,
        &inputs.modules_in_parallel,
        n,
        None,
    )?;
    let series = broadcast(InputField::ModulesInSeries, &inputs.modules_in_series, n, None)?;
    let power = broadcast(InputField::PowerPerModule, &inputs.power_per_module, n, None)?;
    let cost = broadcast(InputField::CostPerModule, &inputs.cost_per_module, n, Some(0.))?;
    let modes = broadcast(
        InputField::IntegrationMode,
        &inputs.integration_modes,
        n,
        Some(IntegrationMode::default()),
    )?;
    let inverter: Arc<Inverter> = inputs
        .inverters
        .first()
        .cloned()
        .ok_or(PvError::MissingInverter)?;

    let mut run = PvRun::default();
    if ctx.unit_system != UnitSystem::Meters {
        // Reported as an error but the run goes on
        run.report(Diagnostic::error(format!(
            "The model unit system is {} (1 unit = {} m). PV coverage assumes surface areas in \
             square meters, switch the model to meters.",
            ctx.unit_system,
            ctx.unit_system.meters_per_unit()
        )));
    }

    let mut generators = Vec::with_capacity(n);
    for (i, surface) in surfaces.iter().enumerate() {
        if surface.is_facing_down(config.downward_tolerance) {
            run.report(Diagnostic::warning(format!(
                "Are you sure you want to mount PV generators on {}? Its normal is facing down.",
                surface.name
            )));
        }
        if surface.surface_type.is_ground_contact() {
            run.report(Diagnostic::warning(format!(
                "{} is classified as {}. PV panels there are unlikely to be useful, \
                 the generator is added anyway.",
                surface.name, surface.surface_type
            )));
        }

        let given_name = inputs.names.get(i).cloned();
        let named = given_name.is_some();
        let name = given_name.unwrap_or_else(|| format!("PVgenerator{i}"));

        let total_power = power[i] * f64::from(parallel[i]) * f64::from(series[i]);
        let coverage = coverage_fraction(total_power, surface.area(), efficiency[i]);
        if coverage.is_nan() || coverage >= config.max_coverage {
            return Err(PvError::CoverageExceeded {
                surface: surface.name.clone(),
                coverage,
                diagnostics: std::mem::take(&mut run.diagnostics),
            });
        }
        if coverage > config.high_coverage_warning {
            run.report(Diagnostic::warning(format!(
                "PV modules cover {:.2}% of the surface {}, more than {}%. Check the power rating \
                 and the number of modules. The generator is still added.",
                coverage * 100.,
                surface.name,
                config.high_coverage_warning * 100.
            )));
        }
        if coverage < config.low_coverage_warning {
            run.report(Diagnostic::warning(format!(
                "PV modules cover only {:.2}% of the surface {}, less than {}%. Check the power \
                 rating and the number of modules.",
                coverage * 100.,
                surface.name,
                config.low_coverage_warning * 100.
            )));
        }

        let performance_name = format!("PVperformance{i} {}", surface.name);
        let performance = match &inputs.sandia_dataset {
            Some(dataset) => PvPerformance::Sandia {
                name: performance_name,
                dataset: dataset.clone(),
            },
            None => PvPerformance::Simple {
                name: performance_name,
                active_fraction: coverage,
                efficiency: efficiency[i],
            },
        };

        let generator = PvGenerator {
            name,
            surface: surface.uid.clone(),
            surface_name: surface.name.clone(),
            modules_in_parallel: parallel[i],
            modules_in_series: series[i],
            power_per_module: power[i],
            cell_efficiency: efficiency[i],
            coverage,
            cost_per_module: cost[i],
            integration_mode: modes[i],
            performance,
            inverter: Arc::clone(&inverter),
        };
        log::debug!(
            "Staged {} on {}: {} modules, {:.1} W, coverage {:.4}",
            generator.name,
            generator.surface_name,
            generator.module_count(),
            generator.rated_power(),
            generator.coverage
        );

        run.messages.insert(i, status_message(&generator, named));
        run.surfaces.push(surface.uid.clone());
        generators.push(generator);
    }

    Ok((generators, run))
}

/// Rejects runs where the same surface is input more than once.
fn check_duplicates(surfaces: &[Surface]) -> Result<(), PvError> {
    let mut positions: HashMap<&UID, Vec<usize>> = HashMap::new();
    for (i, s) in surfaces.iter().enumerate() {
        positions.entry(&s.uid).or_default().push(i);
    }
    // Report the first repeated surface in input order
    for s in surfaces {
        let indices = &positions[&s.uid];
        if indices.len() > 1 {
            return Err(PvError::DuplicateSurface {
                name: s.name.clone(),
                uid: s.uid.clone(),
                indices: indices.clone(),
            });
        }
    }
    Ok(())
}

fn status_message(g: &PvGenerator, named: bool) -> String {
    let mounted = if named {
        format!("{} is mounted on surface {}", g.name, g.surface_name)
    } else {
        format!(
            "No name was given for this generator so the default name {} has been assigned. \
             It is mounted on surface {}",
            g.name, g.surface_name
        )
    };
    [
        mounted,
        format!("{} has the following properties:", g.name),
        format!(
            "Its modules cover roughly {:.2}% of the surface area of this surface",
            g.coverage * 100.
        ),
        format!(
            "The number of PV modules in parallel is {}",
            g.modules_in_parallel
        ),
        format!("The number of PV modules in series is {}", g.modules_in_series),
        format!("So {} is made up of {} PV modules", g.name, g.module_count()),
        format!(
            "The power output per PV module is {} W, so the total power output of {} is {} W",
            g.power_per_module,
            g.name,
            g.rated_power()
        ),
        format!(
            "The cost per PV module is ${}, so {} costs ${}",
            g.cost_per_module,
            g.name,
            g.total_cost()
        ),
    ]
    .join("\n")
}
