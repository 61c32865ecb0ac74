//! Recommended vs current nurse-to-patient ratios per hospital unit.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffingUnit {
    /// Value of the matching `<option>` in the unit select
    pub key: &'static str,
    /// Option label shown in the unit select
    pub name: &'static str,
    pub recommended: &'static str,
    pub current: &'static str,
    pub gap_label: &'static str,
    /// Severity of the gap, 0-100
    pub gap_percent: u8,
    pub message: &'static str,
    pub action: &'static str,
}

pub static STAFFING: &[StaffingUnit] = &[
    StaffingUnit {
        key: "medsurg",
        name: "Medical-Surgical",
        recommended: "1 : 4",
        current: "1 : 6",
        gap_label: "+2 patients over safe limit",
        gap_percent: 60,
        message: "This unit needs 2 additional full-time RNs per shift to meet proven safe staffing standards.",
        action: "Document every time assignments exceed 1:4 and escalate through the safe staffing committee.",
    },
    StaffingUnit {
        key: "icu",
        name: "Intensive Care",
        recommended: "1 : 2",
        current: "1 : 3",
        gap_label: "+1 patient over safe limit",
        gap_percent: 70,
        message: "Even one extra ICU patient doubles nurse workload and increases risk of missed alarms.",
        action: "Secure written refusals for unsafe assignments and pair them with rapid-response alerts.",
    },
    StaffingUnit {
        key: "er",
        name: "Emergency",
        recommended: "1 : 4 (acuity-adjusted)",
        current: "1 : 7",
        gap_label: "+3 patients over safe limit",
        gap_percent: 75,
        message: "Boarding times balloon when each nurse juggles seven patients plus triage walk-ins.",
        action: "Log wait times and call-ins to show how understaffing hits community emergency care.",
    },
    StaffingUnit {
        key: "postpartum",
        name: "Postpartum",
        recommended: "1 : 3",
        current: "1 : 5",
        gap_label: "+2 patients over safe limit",
        gap_percent: 65,
        message: "Safe ratios ensure each new family gets education and monitoring in the first 24 hours.",
        action: "Collect stories from new parents and channel them into public testimony for safe staffing.",
    },
];

pub fn find(key: &str) -> Option<&'static StaffingUnit> {
    STAFFING.iter().find(|unit| unit.key == key)
}

/// Width of the gap bar. Never thinner than a sliver so small gaps stay visible.
pub fn gap_bar_width(gap_percent: u8) -> u8 {
    gap_percent.clamp(5, 100)
}
