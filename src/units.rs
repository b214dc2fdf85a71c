use std::fmt;

/// Length unit system of the host model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    #[default]
    Meters,
    Millimeters,
    Centimeters,
    Feet,
    Inches,
}

impl UnitSystem {
    /// Length of one model unit in meters.
    pub fn meters_per_unit(self) -> f64 {
        match self {
            UnitSystem::Meters => 1.0,
            UnitSystem::Millimeters => 0.001,
            UnitSystem::Centimeters => 0.01,
            UnitSystem::Feet => 0.3048,
            UnitSystem::Inches => 0.0254,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnitSystem::Meters => "meters",
            UnitSystem::Millimeters => "millimeters",
            UnitSystem::Centimeters => "centimeters",
            UnitSystem::Feet => "feet",
            UnitSystem::Inches => "inches",
        };
        f.write_str(s)
    }
}
