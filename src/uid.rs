use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Stable identifier of a surface, inverter or other model object.
///
/// Objects copied between host components keep their UID, so two inputs
/// with equal UIDs refer to the same physical object.
#[derive(Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Clone, Serialize)]
pub struct UID(String);

impl From<&str> for UID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Default for UID {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl UID {
    /// Creates a random (v4) UID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_uids_differ() {
        assert_ne!(UID::new(), UID::new());
    }

    #[test]
    fn test_from_str_is_stable() {
        let a = UID::from("srf-1");
        let b: UID = "srf-1".to_string().into();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "srf-1");
    }
}
