//! Vehicle kind tags and display labels

use serde::{Deserialize, Serialize};

/// Vehicle category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    /// легковой автомобиль
    Car,
    /// кроссовер
    Suv,
    /// фургон
    Van,
    /// автобус
    Bus,
    /// грузовой автомобиль
    Truck,
    /// мотоцикл (has a label but no registry entry)
    Motorcycle,
}

impl VehicleKind {
    /// Get display label in Russian
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car => "легковой автомобиль",
            VehicleKind::Suv => "кроссовер",
            VehicleKind::Van => "фургон",
            VehicleKind::Bus => "автобус",
            VehicleKind::Truck => "грузовой автомобиль",
            VehicleKind::Motorcycle => "мотоцикл",
        }
    }
}
