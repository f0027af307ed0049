//! Vehicle creation use case

use avtopark_domain::model::CreationOutcome;
use avtopark_domain::service::registry;

use crate::config::Config;

/// Create a vehicle from an explicit request, or from the configured
/// default type when no request is given
pub fn create_vehicle(requested: Option<&str>, config: &Config) -> CreationOutcome {
    let name = requested.unwrap_or(&config.default_vehicle_type);
    registry::create_vehicle(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use avtopark_types::VehicleKind;

    #[test]
    fn test_explicit_request_wins() {
        let config = Config::default();
        let outcome = create_vehicle(Some("автобус"), &config);
        assert_eq!(outcome.kind, Some(VehicleKind::Bus));
    }

    #[test]
    fn test_falls_back_to_configured_default() {
        let config = Config::default();
        let outcome = create_vehicle(None, &config);
        assert_eq!(outcome.requested, "грузовой автомобиль");
        assert_eq!(outcome.kind, Some(VehicleKind::Truck));
    }

    #[test]
    fn test_unknown_default_is_reported_not_fatal() {
        let mut config = Config::default();
        config.default_vehicle_type = "мотоцикл".to_string();
        let outcome = create_vehicle(None, &config);
        assert_eq!(outcome.requested, "мотоцикл");
        assert!(!outcome.created());
    }
}
