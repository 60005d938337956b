//! Static PLN tariff table (2025, Triwulan IV period).
//!
//! Pure lookup data: each entry maps a capacity tier to a fixed price per
//! kWh. Labels are pre-rendered in both Indonesian and English for the
//! selector UI.

/// One row of the PLN tariff table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tariff {
    /// Tariff group, e.g. `"R-1/TR"`.
    pub tier: &'static str,
    /// Capacity label, e.g. `"2200 VA"`. This is what a `SetupProfile`
    /// stores in `power_category`.
    pub capacity: &'static str,
    /// Price per kWh in rupiah.
    pub price: f64,
    /// Display label, Indonesian locale.
    pub label_id: &'static str,
    /// Display label, English locale.
    pub label_en: &'static str,
}

impl Tariff {
    /// The price rendered the way the setup form stores it (trailing zeros
    /// trimmed, so `1352.00` becomes `"1352"` and `1444.70` `"1444.7"`).
    #[must_use]
    pub fn price_string(&self) -> String {
        let s = format!("{:.2}", self.price);
        let s = s.trim_end_matches('0').trim_end_matches('.');
        s.to_owned()
    }
}

/// PLN tariff structure, residential through government tiers.
pub const TARIFFS: &[Tariff] = &[
    Tariff {
        tier: "R-1/TR",
        capacity: "900 VA",
        price: 1352.00,
        label_id: "R-1/TR - 900 VA (Rp 1.352/kWh)",
        label_en: "R-1/TR - 900 VA (Rp 1,352/kWh)",
    },
    Tariff {
        tier: "R-1/TR",
        capacity: "1300 VA",
        price: 1444.70,
        label_id: "R-1/TR - 1.300 VA (Rp 1.445/kWh)",
        label_en: "R-1/TR - 1,300 VA (Rp 1,445/kWh)",
    },
    Tariff {
        tier: "R-1/TR",
        capacity: "2200 VA",
        price: 1444.70,
        label_id: "R-1/TR - 2.200 VA (Rp 1.445/kWh)",
        label_en: "R-1/TR - 2,200 VA (Rp 1,445/kWh)",
    },
    Tariff {
        tier: "R-1/TR",
        capacity: "3500-5500 VA",
        price: 1699.53,
        label_id: "R-1/TR - 3.500-5.500 VA (Rp 1.700/kWh)",
        label_en: "R-1/TR - 3,500-5,500 VA (Rp 1,700/kWh)",
    },
    Tariff {
        tier: "R-2/TR",
        capacity: "6600 VA+",
        price: 1699.53,
        label_id: "R-2/TR - 6.600 VA ke atas (Rp 1.700/kWh)",
        label_en: "R-2/TR - 6,600 VA and above (Rp 1,700/kWh)",
    },
    Tariff {
        tier: "R-3/TR",
        capacity: "6600 VA+",
        price: 1699.53,
        label_id: "R-3/TR - 6.600 VA ke atas (Rp 1.700/kWh)",
        label_en: "R-3/TR - 6,600 VA and above (Rp 1,700/kWh)",
    },
    Tariff {
        tier: "B-2/TR",
        capacity: "6600 VA+",
        price: 1444.70,
        label_id: "B-2/TR - Bisnis Kecil 6.600 VA+ (Rp 1.445/kWh)",
        label_en: "B-2/TR - Small Business 6,600 VA+ (Rp 1,445/kWh)",
    },
    Tariff {
        tier: "P-1/TR",
        capacity: "6600 VA+",
        price: 1699.53,
        label_id: "P-1/TR - Pemerintah 6.600 VA+ (Rp 1.700/kWh)",
        label_en: "P-1/TR - Government 6,600 VA+ (Rp 1,700/kWh)",
    },
];

/// Find the first tariff matching a capacity label.
///
/// Capacity labels are not unique across tiers (several share `"6600 VA+"`);
/// the first match wins.
#[must_use]
pub fn find_by_capacity(capacity: &str) -> Option<&'static Tariff> {
    TARIFFS.iter().find(|t| t.capacity == capacity)
}

/// The tariff pre-selected for new profiles (R-1/TR, 2200 VA).
#[must_use]
pub fn default_tariff() -> &'static Tariff {
    // The table always carries the 2200 VA row; fall back to the first
    // entry rather than panic if the table is ever reordered.
    find_by_capacity("2200 VA").unwrap_or(&TARIFFS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tariff_is_2200_va() {
        let t = default_tariff();
        assert_eq!(t.capacity, "2200 VA");
        assert!((t.price - 1444.70).abs() < f64::EPSILON);
    }

    #[test]
    fn test_find_by_capacity() {
        let t = find_by_capacity("900 VA").expect("900 VA tier exists");
        assert!((t.price - 1352.00).abs() < f64::EPSILON);
        assert!(find_by_capacity("42 VA").is_none());
    }

    #[test]
    fn test_ambiguous_capacity_first_match_wins() {
        let t = find_by_capacity("6600 VA+").expect("6600 VA+ tier exists");
        assert_eq!(t.tier, "R-2/TR");
    }

    #[test]
    fn test_price_string_trims_zeros() {
        let t = find_by_capacity("900 VA").expect("900 VA tier exists");
        assert_eq!(t.price_string(), "1352");
        let t = default_tariff();
        assert_eq!(t.price_string(), "1444.7");
    }
}
