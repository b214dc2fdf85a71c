//! Building-envelope surfaces that PV generators can be mounted on.

use anyhow::{Result, anyhow};
use std::fmt;

use crate::geom::point::Point;
use crate::geom::polygon::Polygon;
use crate::geom::vector::Vector;
use crate::uid::UID;

/// Surface classification using the numeric type codes of the building model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceType {
    Wall,
    UndergroundWall,
    Roof,
    UndergroundCeiling,
    Floor,
    UndergroundSlab,
    SlabOnGrade,
    ExposedFloor,
    Ceiling,
    AirWall,
    Window,
    Context,
}

impl SurfaceType {
    const CODES: [(f64, SurfaceType); 12] = [
        (0.0, SurfaceType::Wall),
        (0.5, SurfaceType::UndergroundWall),
        (1.0, SurfaceType::Roof),
        (1.5, SurfaceType::UndergroundCeiling),
        (2.0, SurfaceType::Floor),
        (2.25, SurfaceType::UndergroundSlab),
        (2.5, SurfaceType::SlabOnGrade),
        (2.75, SurfaceType::ExposedFloor),
        (3.0, SurfaceType::Ceiling),
        (4.0, SurfaceType::AirWall),
        (5.0, SurfaceType::Window),
        (6.0, SurfaceType::Context),
    ];

    pub fn from_code(code: f64) -> Result<Self> {
        Self::CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, t)| *t)
            .ok_or_else(|| anyhow!("Unknown surface type code: {code}"))
    }

    pub fn code(self) -> f64 {
        Self::CODES
            .iter()
            .find(|(_, t)| *t == self)
            .map(|(c, _)| *c)
            .unwrap_or(0.0)
    }

    /// Surfaces in contact with the ground, where PV makes no physical sense.
    pub fn is_ground_contact(self) -> bool {
        matches!(
            self,
            SurfaceType::UndergroundWall | SurfaceType::UndergroundSlab | SurfaceType::SlabOnGrade
        )
    }
}

impl fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SurfaceType::Wall => "wall",
            SurfaceType::UndergroundWall => "underground wall",
            SurfaceType::Roof => "roof",
            SurfaceType::UndergroundCeiling => "underground ceiling",
            SurfaceType::Floor => "floor",
            SurfaceType::UndergroundSlab => "underground slab",
            SurfaceType::SlabOnGrade => "on-ground slab",
            SurfaceType::ExposedFloor => "exposed floor",
            SurfaceType::Ceiling => "ceiling",
            SurfaceType::AirWall => "air wall",
            SurfaceType::Window => "window",
            SurfaceType::Context => "context surface",
        };
        f.write_str(s)
    }
}

/// A building or context surface.
///
/// Surfaces are owned by the caller. PV generators are associated with them
/// by UID, see [`crate::pv::GeneratorMap`].
#[derive(Debug, Clone)]
pub struct Surface {
    pub uid: UID,
    pub name: String,
    pub surface_type: SurfaceType,
    polygon: Polygon,
}

impl Surface {
    pub fn new(name: &str, surface_type: SurfaceType, polygon: Polygon) -> Self {
        Self::with_uid(UID::new(), name, surface_type, polygon)
    }

    pub fn with_uid(uid: UID, name: &str, surface_type: SurfaceType, polygon: Polygon) -> Self {
        Self {
            uid,
            name: name.to_string(),
            surface_type,
            polygon,
        }
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Area in squared model units.
    pub fn area(&self) -> f64 {
        self.polygon.area()
    }

    pub fn normal(&self) -> Vector {
        self.polygon.normal()
    }

    pub fn centroid(&self) -> Point {
        self.polygon.centroid()
    }

    /// True if the normal points straight down (within `tol` on the Z component).
    pub fn is_facing_down(&self, tol: f64) -> bool {
        (self.normal().dz + 1.).abs() <= tol
    }
}
