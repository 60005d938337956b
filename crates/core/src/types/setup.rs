//! Setup-profile data model.
//!
//! A [`SetupProfile`] is the unit of persistence: one JSON document per
//! account, overwritten wholesale on every save. Field names follow the
//! wire format (`powerCategory`, `kwhPrice`, `monthlyBill`).

use serde::{Deserialize, Serialize};

use crate::tariff;

/// A single electrical device declared by the user.
///
/// `watt` and `hours` (hours per day) are kept as the raw strings the user
/// typed; unparseable values count as zero at calculation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Client-generated unique token identifying the device within its profile.
    pub id: String,
    /// Free-text device name.
    pub name: String,
    /// Power draw in watts, as entered.
    pub watt: String,
    /// Usage hours per day, as entered.
    pub hours: String,
}

impl Device {
    /// Convenience constructor for seeded/demo devices.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        watt: impl Into<String>,
        hours: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            watt: watt.into(),
            hours: hours.into(),
        }
    }
}

/// The user's declared tariff and device inventory.
///
/// Device ordering is insertion order and is meaningful only for display.
/// The storage layer accepts an empty device list; the UI seeds two
/// defaults so in normal operation the list is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupProfile {
    /// Tariff capacity label, e.g. `"2200 VA"`.
    pub power_category: String,
    /// Price per kWh as a decimal string, e.g. `"1444.70"`.
    pub kwh_price: String,
    /// The user's typical monthly bill in rupiah, as entered.
    pub monthly_bill: String,
    /// Declared devices, in insertion order.
    pub devices: Vec<Device>,
}

impl SetupProfile {
    /// A fresh profile pre-filled with the default tariff and two seed
    /// devices, matching what the setup screen presents to a new account.
    #[must_use]
    pub fn seeded() -> Self {
        let default = tariff::default_tariff();
        Self {
            power_category: default.capacity.to_owned(),
            kwh_price: default.price_string(),
            monthly_bill: "650000".to_owned(),
            devices: vec![
                Device::new("1", "AC", "750", "8"),
                Device::new("2", "TV", "150", "6"),
            ],
        }
    }
}

/// Contact/profile details attached to an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let profile = SetupProfile {
            power_category: "900 VA".to_owned(),
            kwh_price: "1352".to_owned(),
            monthly_bill: "350000".to_owned(),
            devices: vec![Device::new("1", "AC", "750", "8")],
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("powerCategory").is_some());
        assert!(json.get("kwhPrice").is_some());
        assert!(json.get("monthlyBill").is_some());
        assert_eq!(json["devices"][0]["watt"], "750");
    }

    #[test]
    fn test_seeded_profile_has_two_devices() {
        let profile = SetupProfile::seeded();
        assert_eq!(profile.devices.len(), 2);
        assert_eq!(profile.power_category, "2200 VA");
        assert_eq!(profile.kwh_price, "1444.7");
        assert_eq!(profile.monthly_bill, "650000");
    }

    #[test]
    fn test_roundtrip_preserves_device_order() {
        let profile = SetupProfile {
            power_category: "1300 VA".to_owned(),
            kwh_price: "1444.70".to_owned(),
            monthly_bill: "500000".to_owned(),
            devices: vec![
                Device::new("a", "Kulkas", "120", "24"),
                Device::new("b", "TV", "150", "6"),
                Device::new("c", "AC", "750", "8"),
            ],
        };

        let json = serde_json::to_string(&profile).unwrap();
        let back: SetupProfile = serde_json::from_str(&json).unwrap();
        let names: Vec<_> = back.devices.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Kulkas", "TV", "AC"]);
    }
}
