//! Static energy-saving recommendation catalogue.
//!
//! The recommendation screen shows a fixed set of actions with estimated
//! monthly savings; nothing here is computed from the user's profile.

/// How hard a recommendation is to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One energy-saving recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    /// Stable identifier, used to track completion client-side.
    pub id: &'static str,
    /// Short action title.
    pub title: &'static str,
    /// Longer explanation of the action.
    pub description: &'static str,
    /// Estimated savings in rupiah per month.
    pub monthly_savings: u64,
    pub difficulty: Difficulty,
}

/// The full catalogue, in display order.
pub const RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        id: "increase_ac_temp",
        title: "Raise the AC setpoint to 24-25°C",
        description: "Every degree below 24°C adds roughly 6% to cooling \
                      energy. A slightly warmer setpoint is barely \
                      noticeable but shows up on the bill.",
        monthly_savings: 35_000,
        difficulty: Difficulty::Easy,
    },
    Recommendation {
        id: "replace_refrigerator",
        title: "Replace an aging refrigerator",
        description: "Refrigerators older than ten years can draw twice \
                      the power of a modern inverter model running around \
                      the clock.",
        monthly_savings: 60_000,
        difficulty: Difficulty::Hard,
    },
    Recommendation {
        id: "use_motion_sensor",
        title: "Put rarely-used lights on motion sensors",
        description: "Hallway, garage, and bathroom lights left on are \
                      pure waste; sensors pay for themselves within \
                      months.",
        monthly_savings: 25_000,
        difficulty: Difficulty::Medium,
    },
];

/// Combined savings if every recommendation were followed.
#[must_use]
pub fn total_potential_savings() -> u64 {
    RECOMMENDATIONS.iter().map(|r| r.monthly_savings).sum()
}

/// Savings for a chosen subset of recommendation ids. Unknown ids are
/// ignored.
#[must_use]
pub fn savings_for(completed: &[&str]) -> u64 {
    RECOMMENDATIONS
        .iter()
        .filter(|r| completed.contains(&r.id))
        .map(|r| r.monthly_savings)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_potential_savings() {
        assert_eq!(total_potential_savings(), 120_000);
    }

    #[test]
    fn test_savings_for_subset() {
        assert_eq!(savings_for(&["increase_ac_temp"]), 35_000);
        assert_eq!(
            savings_for(&["increase_ac_temp", "use_motion_sensor"]),
            60_000
        );
        assert_eq!(savings_for(&["not_a_real_id"]), 0);
        assert_eq!(savings_for(&[]), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in RECOMMENDATIONS.iter().enumerate() {
            for b in RECOMMENDATIONS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
