use anyhow::Result;
use building3d_pv::pv::Level;
use building3d_pv::{
    GeneratorMap, Inverter, Polygon, PvConfig, PvContext, PvInputs, Surface, SurfaceType,
    UnitSystem, assign_pv_generators,
};
use std::sync::Arc;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let roof = Surface::new(
        "roof",
        SurfaceType::Roof,
        Polygon::horizontal_rectangle("roof", 10., 6., 3., true)?,
    );
    let facade = Surface::new(
        "south_facade",
        SurfaceType::Wall,
        Polygon::vertical_rectangle("south_facade", 10., 3.)?,
    );
    let surfaces = vec![roof, facade];

    let inverter = Arc::new(Inverter::new("main_inverter", 0.96, 1200.));
    let inputs = PvInputs::new(inverter, vec![0.18], vec![3, 2], vec![6, 4], vec![250.])
        .with_names(vec!["roof_array".to_string(), "facade_array".to_string()])
        .with_cost_per_module(vec![180.]);

    let mut map = GeneratorMap::new();
    let run = assign_pv_generators(
        &PvContext::new(UnitSystem::Meters),
        &surfaces,
        &inputs,
        &PvConfig::default(),
        &mut map,
    )?;

    for (i, message) in &run.messages {
        println!("Generator {i}:\n{message}\n");
    }
    for d in run.diagnostics.iter().filter(|d| d.level >= Level::Warning) {
        println!("{d}");
    }
    let total: f64 = map.all_generators().map(|g| g.rated_power()).sum();
    println!("Total rated power: {total:.0} W");

    Ok(())
}
