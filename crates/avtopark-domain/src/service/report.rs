//! Creation report formatting

use crate::model::CreationOutcome;
use crate::service::registry::known_types;

pub const MSG_SUCCESS: &str = "Создано транспортное средство типа: ";
pub const MSG_FAIL: &str = " - неизвестный тип транспортного средства";
// leading newline, no trailing one
pub const MSG_APP_EXIT: &str = "\nДля выхода из программы нажмите любую клавишу";

/// One-line report for a creation attempt: success prefix + label,
/// or the requested input + failure suffix
pub fn creation_line(outcome: &CreationOutcome) -> String {
    match outcome.label() {
        Some(label) => format!("{}{}", MSG_SUCCESS, label),
        None => format!("{}{}", outcome.requested, MSG_FAIL),
    }
}

/// Table of type names wired into the registry
pub fn registry_listing() -> String {
    let mut listing = String::new();
    listing.push_str("Типы транспортных средств / Vehicle Types\n");
    listing.push_str("==========================================\n");
    for kind in known_types() {
        listing.push_str(&format!("  {}\n", kind.label()));
    }
    listing
}
