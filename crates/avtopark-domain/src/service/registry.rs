//! Static vehicle type registry

use avtopark_types::VehicleKind;

use crate::model::CreationOutcome;

/// Wired kinds in dispatch priority order: Car, Suv, Van, Bus, Truck.
/// The labels are pairwise distinct, so the order never affects a lookup.
/// Motorcycle has a label but no entry here and always resolves to None.
pub const WIRED_KINDS: [VehicleKind; 5] = [
    VehicleKind::Car,
    VehicleKind::Suv,
    VehicleKind::Van,
    VehicleKind::Bus,
    VehicleKind::Truck,
];

/// Resolve a type name to its kind. Exact, case-sensitive match,
/// no trimming or normalization.
pub fn resolve(name: &str) -> Option<VehicleKind> {
    WIRED_KINDS.iter().copied().find(|kind| kind.label() == name)
}

/// Resolve a type name and record the outcome
pub fn create_vehicle(name: &str) -> CreationOutcome {
    CreationOutcome {
        requested: name.to_string(),
        kind: resolve(name),
    }
}

/// Wired kinds in priority order
pub fn known_types() -> impl Iterator<Item = VehicleKind> {
    WIRED_KINDS.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_wired_labels() {
        for kind in WIRED_KINDS {
            assert_eq!(resolve(kind.label()), Some(kind));
        }
    }

    #[test]
    fn test_motorcycle_not_wired() {
        assert_eq!(resolve("мотоцикл"), None);
        assert_eq!(resolve(VehicleKind::Motorcycle.label()), None);
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("самокат"), None);
    }

    #[test]
    fn test_resolve_exact_match_only() {
        // no case folding
        assert_eq!(resolve("Грузовой автомобиль"), None);
        // no trimming
        assert_eq!(resolve(" грузовой автомобиль"), None);
        assert_eq!(resolve("грузовой автомобиль\n"), None);
    }

    #[test]
    fn test_resolve_repeatable() {
        assert_eq!(resolve("автобус"), Some(VehicleKind::Bus));
        assert_eq!(resolve("автобус"), resolve("автобус"));
    }

    #[test]
    fn test_create_vehicle_records_request() {
        let outcome = create_vehicle("фургон");
        assert_eq!(outcome.requested, "фургон");
        assert_eq!(outcome.kind, Some(VehicleKind::Van));
        assert!(outcome.created());

        let outcome = create_vehicle("мотоцикл");
        assert_eq!(outcome.requested, "мотоцикл");
        assert!(outcome.kind.is_none());
        assert!(!outcome.created());
    }

    #[test]
    fn test_known_types_order() {
        let kinds: Vec<_> = known_types().collect();
        assert_eq!(kinds.len(), 5);
        assert_eq!(kinds[0], VehicleKind::Car);
        assert_eq!(kinds[4], VehicleKind::Truck);
        assert!(!kinds.contains(&VehicleKind::Motorcycle));
    }
}
