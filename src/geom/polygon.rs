use crate::geom::EPS;
use crate::geom::point::Point;
use crate::geom::vector::Vector;
use anyhow::{Result, anyhow};
use serde::Serialize;

/// Planar polygon with a cached unit normal and area.
///
/// Vertices are given counter-clockwise when looking against the normal,
/// i.e. the normal follows the right-hand rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    pub name: String,
    pts: Vec<Point>,
    vn: Vector,
    area: f64,
}

impl Polygon {
    pub fn new(name: &str, pts: Vec<Point>) -> Result<Self> {
        if pts.len() < 3 {
            return Err(anyhow!(
                "Polygon {name} needs at least 3 points, got {}",
                pts.len()
            ));
        }
        let twice_area = newell_vector(&pts);
        let area = twice_area.length() / 2.;
        let vn = twice_area
            .normalize()
            .ok_or_else(|| anyhow!("Polygon {name} is degenerate (collinear points)"))?;

        Ok(Self {
            name: name.to_string(),
            pts,
            vn,
            area,
        })
    }

    /// Axis-aligned rectangle lying in the XY plane at height `z`.
    ///
    /// With `facing_up` the normal is +Z, otherwise -Z.
    pub fn horizontal_rectangle(
        name: &str,
        width: f64,
        depth: f64,
        z: f64,
        facing_up: bool,
    ) -> Result<Self> {
        let mut pts = vec![
            Point::new(0., 0., z),
            Point::new(width, 0., z),
            Point::new(width, depth, z),
            Point::new(0., depth, z),
        ];
        if !facing_up {
            pts.reverse();
        }
        Self::new(name, pts)
    }

    /// Rectangle standing in the XZ plane with the normal pointing to -Y.
    pub fn vertical_rectangle(name: &str, width: f64, height: f64) -> Result<Self> {
        let pts = vec![
            Point::new(0., 0., 0.),
            Point::new(width, 0., 0.),
            Point::new(width, 0., height),
            Point::new(0., 0., height),
        ];
        Self::new(name, pts)
    }

    pub fn pts(&self) -> &[Point] {
        &self.pts
    }

    /// Unit normal vector.
    pub fn normal(&self) -> Vector {
        self.vn
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    /// Area-weighted centroid of a triangle fan anchored at the first vertex.
    pub fn centroid(&self) -> Point {
        let p0 = self.pts[0];
        let mut weighted = Vector::new(0., 0., 0.);
        let mut total = 0.;
        for w in self.pts[1..].windows(2) {
            let (p1, p2) = (w[0], w[1]);
            let signed_area = Vector::from_points(p0, p1)
                .cross(Vector::from_points(p0, p2))
                .dot(self.vn)
                / 2.;
            let center = Vector::new(
                (p0.x + p1.x + p2.x) / 3.,
                (p0.y + p1.y + p2.y) / 3.,
                (p0.z + p1.z + p2.z) / 3.,
            );
            weighted = weighted + center * signed_area;
            total += signed_area;
        }
        if total.abs() < EPS {
            return p0;
        }
        Point::new(0., 0., 0.) + weighted * (1. / total)
    }
}

/// Sum of edge cross products (Newell's method), equal to twice the vector area.
fn newell_vector(pts: &[Point]) -> Vector {
    let mut acc = Vector::new(0., 0., 0.);
    for (i, p) in pts.iter().enumerate() {
        let q = pts[(i + 1) % pts.len()];
        acc = acc
            + Vector::new(
                (p.y - q.y) * (p.z + q.z),
                (p.z - q.z) * (p.x + q.x),
                (p.x - q.x) * (p.y + q.y),
            );
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_area_and_normal() {
        let poly = Polygon::horizontal_rectangle("roof", 4., 5., 3., true).unwrap();
        assert!((poly.area() - 20.).abs() < EPS);
        assert!(poly.normal().is_close(&Vector::new(0., 0., 1.)));

        let poly = Polygon::horizontal_rectangle("floor", 4., 5., 0., false).unwrap();
        assert!((poly.area() - 20.).abs() < EPS);
        assert!(poly.normal().is_close(&Vector::new(0., 0., -1.)));
    }

    #[test]
    fn test_vertical_rectangle() {
        let poly = Polygon::vertical_rectangle("wall", 2., 3.).unwrap();
        assert!((poly.area() - 6.).abs() < EPS);
        assert!(poly.normal().is_close(&Vector::new(0., -1., 0.)));
    }

    #[test]
    fn test_non_convex_area() {
        // L-shape: 2x2 square with a 1x1 corner removed
        let pts = vec![
            Point::new(0., 0., 0.),
            Point::new(2., 0., 0.),
            Point::new(2., 1., 0.),
            Point::new(1., 1., 0.),
            Point::new(1., 2., 0.),
            Point::new(0., 2., 0.),
        ];
        let poly = Polygon::new("l_shape", pts).unwrap();
        assert!((poly.area() - 3.).abs() < EPS);
    }

    #[test]
    fn test_centroid() {
        let poly = Polygon::horizontal_rectangle("roof", 4., 2., 1., true).unwrap();
        assert!(poly.centroid().is_close(&Point::new(2., 1., 1.)));
    }

    #[test]
    fn test_degenerate() {
        let pts = vec![
            Point::new(0., 0., 0.),
            Point::new(1., 0., 0.),
            Point::new(2., 0., 0.),
        ];
        assert!(Polygon::new("line", pts).is_err());
        assert!(Polygon::new("two", vec![Point::new(0., 0., 0.); 2]).is_err());
    }
}
