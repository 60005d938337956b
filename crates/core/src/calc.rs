//! Monthly consumption, bill, and carbon-footprint estimates.
//!
//! All functions here are deterministic and side-effect-free; this is the
//! only place business logic beyond CRUD exists in the system.
//!
//! Numeric inputs arrive as the strings the user typed. Parsing is
//! lenient on purpose: a value parses as its leading decimal prefix
//! (`"750w"` is 750, `"1,352"` is 1) and anything unparseable counts as
//! zero. Do not tighten this without flagging the behavior change -
//! malformed input is silently tolerated today.

use serde::Serialize;

use crate::types::{Device, SetupProfile};

/// Kilograms of CO₂ emitted per kWh consumed (grid average).
pub const CO2_KG_PER_KWH: f64 = 0.82;

/// Days assumed per month when projecting daily usage.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Price per kWh assumed when the stored price string is missing or
/// strips to nothing.
pub const FALLBACK_KWH_PRICE: f64 = 1444.0;

/// Parse the leading decimal prefix of a string, or zero.
///
/// Leading whitespace is skipped, an optional sign and one decimal point
/// are accepted, and parsing stops at the first character that cannot
/// extend the number.
#[must_use]
pub fn parse_or_zero(s: &str) -> f64 {
    let s = s.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => end = i + c.len_utf8(),
            '0'..='9' => {
                seen_digit = true;
                end = i + c.len_utf8();
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + c.len_utf8();
            }
            _ => break,
        }
    }

    if !seen_digit {
        return 0.0;
    }
    s.get(..end).and_then(|p| p.parse().ok()).unwrap_or(0.0)
}

/// Parse a stored price string.
///
/// Strips every character except digits and `.`, then parses the leading
/// prefix. An absent or empty-after-strip price falls back to
/// [`FALLBACK_KWH_PRICE`].
///
/// Known quirk, preserved intentionally: a comma-decimal price like
/// `"1.352,00"` strips to `"1.35200"` and parses as roughly 1.35 rather
/// than 1352. See DESIGN.md.
#[must_use]
pub fn sanitized_price(raw: Option<&str>) -> f64 {
    let stripped: String = raw
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if stripped.is_empty() {
        return FALLBACK_KWH_PRICE;
    }
    parse_or_zero(&stripped)
}

/// Monthly kWh for one device: watt × hours/day × 30 / 1000.
#[must_use]
pub fn device_monthly_kwh(device: &Device) -> f64 {
    let watt = parse_or_zero(&device.watt);
    let hours = parse_or_zero(&device.hours);
    watt * hours * DAYS_PER_MONTH / 1000.0
}

/// Total monthly kWh across all devices. Zero for an empty list.
#[must_use]
pub fn total_monthly_kwh(devices: &[Device]) -> f64 {
    devices.iter().map(device_monthly_kwh).sum()
}

/// Simulated carbon footprint in kg CO₂, rounded to a whole number.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn carbon_footprint_kg(total_kwh: f64) -> i64 {
    (total_kwh * CO2_KG_PER_KWH).round() as i64
}

/// Estimated monthly bill in rupiah, rounded to a whole number.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn bill_estimate(total_kwh: f64, kwh_price: Option<&str>) -> i64 {
    (total_kwh * sanitized_price(kwh_price)).round() as i64
}

/// One device's contribution to the monthly total, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceShare {
    /// Device name as entered.
    pub name: String,
    /// The device's own monthly kWh.
    pub kwh: f64,
    /// Integer percent of the total. All zeros when the total is zero.
    pub percent: u32,
}

/// Per-device share percentages of total consumption.
///
/// Never divides by zero: an all-zero device list yields zero-percent
/// shares rather than NaN.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn device_shares(devices: &[Device]) -> Vec<DeviceShare> {
    let total = total_monthly_kwh(devices);

    devices
        .iter()
        .map(|d| {
            let kwh = device_monthly_kwh(d);
            let percent = if total > 0.0 {
                (kwh / total * 100.0).round() as u32
            } else {
                0
            };
            DeviceShare {
                name: d.name.clone(),
                kwh,
                percent,
            }
        })
        .collect()
}

/// Everything the dashboard shows, derived in one pass from a profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// Total consumption across devices, in kWh.
    pub total_kwh: f64,
    /// Simulated carbon footprint in kg CO₂.
    pub carbon_kg: i64,
    /// Estimated bill in rupiah.
    pub bill: i64,
    /// Number of declared devices.
    pub device_count: usize,
    /// Per-device shares for the consumption chart.
    pub shares: Vec<DeviceShare>,
}

impl MonthlySummary {
    /// Derive the display metrics from a setup profile.
    #[must_use]
    pub fn from_profile(profile: &SetupProfile) -> Self {
        let total_kwh = total_monthly_kwh(&profile.devices);
        Self {
            total_kwh,
            carbon_kg: carbon_footprint_kg(total_kwh),
            bill: bill_estimate(total_kwh, Some(&profile.kwh_price)),
            device_count: profile.devices.len(),
            shares: device_shares(&profile.devices),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn device(watt: &str, hours: &str) -> Device {
        Device::new("1", "test", watt, hours)
    }

    #[test]
    fn test_device_monthly_kwh() {
        // 750 W for 8 h/day over 30 days is 180 kWh
        assert_eq!(device_monthly_kwh(&device("750", "8")), 180.0);
    }

    #[test]
    fn test_unparseable_counts_as_zero() {
        assert_eq!(device_monthly_kwh(&device("banyak", "8")), 0.0);
        assert_eq!(device_monthly_kwh(&device("750", "")), 0.0);
    }

    #[test]
    fn test_parse_or_zero_prefix_semantics() {
        assert_eq!(parse_or_zero("750"), 750.0);
        assert_eq!(parse_or_zero("  8.5 jam"), 8.5);
        assert_eq!(parse_or_zero("1,352.00"), 1.0);
        assert_eq!(parse_or_zero("-3"), -3.0);
        assert_eq!(parse_or_zero("."), 0.0);
        assert_eq!(parse_or_zero("watt"), 0.0);
        assert_eq!(parse_or_zero(""), 0.0);
    }

    #[test]
    fn test_empty_device_list_is_all_zero() {
        let devices: Vec<Device> = vec![];
        let total = total_monthly_kwh(&devices);
        assert_eq!(total, 0.0);
        assert_eq!(carbon_footprint_kg(total), 0);
        assert_eq!(bill_estimate(total, Some("1444.70")), 0);
        assert!(device_shares(&devices).is_empty());
    }

    #[test]
    fn test_zero_total_shares_do_not_divide_by_zero() {
        let devices = vec![device("0", "8"), device("abc", "6")];
        let shares = device_shares(&devices);
        assert_eq!(shares.len(), 2);
        assert!(shares.iter().all(|s| s.percent == 0));
    }

    #[test]
    fn test_price_formats_parse_alike() {
        // Thousands separators and currency prefixes strip away.
        assert_eq!(sanitized_price(Some("1,352.00")), 1352.0);
        assert_eq!(sanitized_price(Some("Rp 1352")), 1352.0);
        assert_eq!(sanitized_price(Some("1352")), 1352.0);
    }

    #[test]
    fn test_price_comma_decimal_quirk_preserved() {
        // Indonesian-format "1.352,00" mis-parses; this documents the
        // current behavior, it does not bless it.
        assert_eq!(sanitized_price(Some("1.352,00")), 1.352);
    }

    #[test]
    fn test_price_fallback() {
        assert_eq!(sanitized_price(None), FALLBACK_KWH_PRICE);
        assert_eq!(sanitized_price(Some("")), FALLBACK_KWH_PRICE);
        assert_eq!(sanitized_price(Some("Rp ")), FALLBACK_KWH_PRICE);
        // Strips to "." which is a prefix with no digits.
        assert_eq!(sanitized_price(Some(".")), 0.0);
    }

    #[test]
    fn test_carbon_footprint_rounds() {
        assert_eq!(carbon_footprint_kg(180.0), 148); // 147.6
        assert_eq!(carbon_footprint_kg(0.0), 0);
    }

    #[test]
    fn test_bill_estimate() {
        assert_eq!(bill_estimate(180.0, Some("1352")), 243_360);
    }

    #[test]
    fn test_shares_sum_roughly_to_hundred() {
        let devices = vec![
            Device::new("1", "AC", "750", "8"),
            Device::new("2", "TV", "150", "6"),
            Device::new("3", "Komputer", "300", "10"),
        ];
        let shares = device_shares(&devices);
        let sum: u32 = shares.iter().map(|s| s.percent).sum();
        // Integer rounding may drift a point either way.
        assert!((99..=101).contains(&sum), "shares summed to {sum}");
    }

    #[test]
    fn test_monthly_summary_from_demo_shaped_profile() {
        let profile = SetupProfile {
            power_category: "900 VA".to_owned(),
            kwh_price: "1352".to_owned(),
            monthly_bill: "350000".to_owned(),
            devices: vec![
                Device::new("1", "AC Ruang Tamu", "750", "8"),
                Device::new("2", "TV", "150", "6"),
                Device::new("3", "Komputer", "300", "10"),
                Device::new("4", "Lampu LED (Total)", "100", "12"),
            ],
        };

        let summary = MonthlySummary::from_profile(&profile);
        // 180 + 27 + 90 + 36
        assert_eq!(summary.total_kwh, 333.0);
        assert_eq!(summary.carbon_kg, 273); // 273.06
        assert_eq!(summary.bill, 450_216);
        assert_eq!(summary.device_count, 4);
    }
}
