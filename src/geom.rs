pub mod point;
pub mod polygon;
pub mod vector;

/// Geometric precision
pub const EPS: f64 = 1e-10;
