use building3d_pv::pv::{InputField, Level, PvRun};
use building3d_pv::{
    GeneratorMap, Inverter, Polygon, PvConfig, PvContext, PvError, PvInputs, Surface, SurfaceType,
    UID, assign_pv_generators,
};
use std::sync::Arc;

/// Flat roof of the given area (width x 1 m).
fn roof(name: &str, area: f64) -> Surface {
    let poly = Polygon::horizontal_rectangle(name, area, 1., 3., true).unwrap();
    Surface::new(name, SurfaceType::Roof, poly)
}

/// 200 W modules, 2 strings of 5, 20% efficient cells.
fn inputs(inverter: &Arc<Inverter>) -> PvInputs {
    PvInputs::new(Arc::clone(inverter), vec![0.2], vec![2], vec![5], vec![200.])
}

fn assign(
    surfaces: &[Surface],
    inputs: &PvInputs,
    map: &mut GeneratorMap,
) -> Result<PvRun, PvError> {
    assign_pv_generators(
        &PvContext::default(),
        surfaces,
        inputs,
        &PvConfig::default(),
        map,
    )
}

#[test]
fn test_half_covered_roof() {
    let inverter = Arc::new(Inverter::new("inverter", 0.96, 0.));
    let surfaces = vec![roof("roof", 20.)];
    let mut map = GeneratorMap::new();

    let run = assign(&surfaces, &inputs(&inverter), &mut map).unwrap();

    let gens = map.generators(&surfaces[0].uid);
    assert_eq!(gens.len(), 1);
    assert!((gens[0].coverage - 0.5).abs() < 1e-12);
    assert!(
        run.diagnostics.iter().all(|d| d.level != Level::Warning),
        "unexpected warnings: {:?}",
        run.diagnostics
    );
    assert_eq!(run.surfaces, vec![surfaces[0].uid.clone()]);
}

#[test]
fn test_overcovered_roof_aborts_without_mutation() {
    let inverter = Arc::new(Inverter::new("inverter", 0.96, 0.));
    let surfaces = vec![roof("big", 20.), roof("small", 2.)];
    let mut map = GeneratorMap::new();

    let err = assign(&surfaces, &inputs(&inverter), &mut map).unwrap_err();

    match &err {
        PvError::CoverageExceeded {
            surface, coverage, ..
        } => {
            assert_eq!(surface, "small");
            assert!((coverage - 5.0).abs() < 1e-12);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.level(), Level::Error);
    assert!(map.is_empty());
}

#[test]
fn test_every_generator_shares_the_inverter() {
    let inverter = Arc::new(Inverter::new("inverter", 0.96, 800.));
    let surfaces: Vec<Surface> = (0..4).map(|i| roof(&format!("roof{i}"), 20.)).collect();
    let mut map = GeneratorMap::new();

    assign(&surfaces, &inputs(&inverter), &mut map).unwrap();

    assert_eq!(map.all_generators().count(), 4);
    for g in map.all_generators() {
        assert!(Arc::ptr_eq(&g.inverter, &inverter));
    }
}

#[test]
fn test_rerun_does_not_accumulate() {
    let inverter = Arc::new(Inverter::new("inverter", 0.96, 0.));
    let surfaces = vec![roof("r0", 20.), roof("r1", 30.)];
    let inp = inputs(&inverter);
    let mut map = GeneratorMap::new();

    assign(&surfaces, &inp, &mut map).unwrap();
    let first: Vec<usize> = surfaces
        .iter()
        .map(|s| map.generators(&s.uid).len())
        .collect();
    assign(&surfaces, &inp, &mut map).unwrap();
    let second: Vec<usize> = surfaces
        .iter()
        .map(|s| map.generators(&s.uid).len())
        .collect();

    assert_eq!(first, vec![1, 1]);
    assert_eq!(first, second);
    assert_eq!(map.len(), 2);
}

#[test]
fn test_duplicate_surface_rejected_before_assignment() {
    let inverter = Arc::new(Inverter::new("inverter", 0.96, 0.));
    let poly = Polygon::horizontal_rectangle("roof", 20., 1., 3., true).unwrap();
    let a = Surface::with_uid(UID::from("srf-1"), "roof", SurfaceType::Roof, poly.clone());
    let b = Surface::with_uid(UID::from("srf-1"), "roof copy", SurfaceType::Roof, poly);
    let mut map = GeneratorMap::new();

    let err = assign(&[a, b], &inputs(&inverter), &mut map).unwrap_err();

    assert!(matches!(err, PvError::DuplicateSurface { .. }));
    assert_eq!(err.highlight_indices(), &[0, 1]);
    assert!(map.is_empty());
}

#[test]
fn test_cost_list_longer_than_surfaces() {
    let inverter = Arc::new(Inverter::new("inverter", 0.96, 0.));
    let surfaces = vec![roof("r0", 20.), roof("r1", 20.)];
    let inp = inputs(&inverter).with_cost_per_module(vec![100., 110., 120.]);
    let mut map = GeneratorMap::new();

    let err = assign(&surfaces, &inp, &mut map).unwrap_err();

    assert_eq!(
        err,
        PvError::LengthMismatch {
            input: InputField::CostPerModule,
            len: 3,
            surfaces: 2,
        }
    );
    assert_eq!(err.level(), Level::Warning);
    assert!(map.is_empty());
}

#[test]
fn test_efficiency_out_of_range_rejected() {
    let inverter = Arc::new(Inverter::new("inverter", 0.96, 0.));
    let surfaces = vec![roof("r0", 20.), roof("r1", 20.)];
    let mut map = GeneratorMap::new();

    let inp = PvInputs {
        cell_efficiency: vec![0.2, 1.5],
        ..inputs(&inverter)
    };
    let err = assign(&surfaces, &inp, &mut map).unwrap_err();
    assert!(matches!(
        err,
        PvError::EfficiencyOutOfRange { index: 1, .. }
    ));
    assert!(map.is_empty());

    let inp = PvInputs {
        cell_efficiency: vec![0.2, 0.25],
        ..inputs(&inverter)
    };
    assert!(assign(&surfaces, &inp, &mut map).is_ok());
}

#[test]
fn test_two_inverters_rejected() {
    let inverter = Arc::new(Inverter::new("inverter", 0.96, 0.));
    let mut inp = inputs(&inverter);
    inp.inverters.push(Arc::new(Inverter::new("spare", 0.9, 0.)));
    let mut map = GeneratorMap::new();

    let err = assign(&[roof("roof", 20.)], &inp, &mut map).unwrap_err();

    assert_eq!(err, PvError::MultipleInverters(2));
}
