//! Creation outcome type definitions

use avtopark_types::VehicleKind;
use serde::{Deserialize, Serialize};

/// Result of one vehicle creation attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreationOutcome {
    /// Requested type name, exactly as supplied
    pub requested: String,
    /// Matching kind, if the name is wired into the registry
    pub kind: Option<VehicleKind>,
}

impl CreationOutcome {
    pub fn created(&self) -> bool {
        self.kind.is_some()
    }

    /// Display label of the created vehicle, if any
    pub fn label(&self) -> Option<&'static str> {
        self.kind.map(|k| k.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let outcome = CreationOutcome {
            requested: "грузовой автомобиль".to_string(),
            kind: Some(VehicleKind::Truck),
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["requested"], "грузовой автомобиль");
        assert_eq!(value["kind"], "truck");

        let outcome = CreationOutcome {
            requested: "мотоцикл".to_string(),
            kind: None,
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert!(value["kind"].is_null());
    }
}
