pub mod geom;
pub mod pv;
pub mod surface;
pub mod uid;
pub mod units;

// Prelude
pub use geom::point::Point;
pub use geom::polygon::Polygon;
pub use geom::vector::Vector;
pub use pv::{
    GeneratorMap, Inverter, PvConfig, PvContext, PvError, PvInputs, PvRun, assign_pv_generators,
};
pub use surface::{Surface, SurfaceType};
pub use uid::UID;
pub use units::UnitSystem;
