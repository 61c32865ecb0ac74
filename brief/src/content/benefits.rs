//! Union benefit comparison charts and their color palette.

use crate::charts::ValueFormat;
use serde::Serialize;

/// One union vs non-union comparison chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeriesConfig {
    /// Prefix of the mirrored `data-union-benefit-label` targets
    pub key: &'static str,
    /// Id of the canvas the chart renders into
    pub canvas_id: &'static str,
    /// Dataset label, also used as the y-axis title
    pub label: &'static str,
    /// `[union, non_union]`
    pub values: [f64; 2],
    pub suggested_max: f64,
    pub tick_step: f64,
    pub format: ValueFormat,
}

impl ChartSeriesConfig {
    pub fn union_value(&self) -> f64 {
        self.values[0]
    }

    pub fn non_union_value(&self) -> f64 {
        self.values[1]
    }

    /// Selector value of the text label mirroring the union figure
    pub fn union_label_key(&self) -> String {
        format!("{}-union", self.key)
    }

    /// Selector value of the text label mirroring the non-union figure
    pub fn non_union_label_key(&self) -> String {
        format!("{}-non", self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenefitPalette {
    pub union_bg: &'static str,
    pub union_border: &'static str,
    pub non_union_bg: &'static str,
    pub non_union_border: &'static str,
}

pub static PALETTE: BenefitPalette = BenefitPalette {
    union_bg: "rgba(94, 234, 212, 0.85)",
    union_border: "rgba(94, 234, 212, 1)",
    non_union_bg: "rgba(251, 191, 36, 0.85)",
    non_union_border: "rgba(251, 191, 36, 1)",
};

/// Category labels shared by every comparison chart
pub const CATEGORIES: [&str; 2] = ["Union", "Non-Union"];

pub static BENEFIT_CHARTS: &[ChartSeriesConfig] = &[
    ChartSeriesConfig {
        key: "retention",
        canvas_id: "retentionChart",
        label: "Retention rate (%)",
        values: [89.0, 62.0],
        suggested_max: 100.0,
        tick_step: 10.0,
        format: ValueFormat::Percent,
    },
    ChartSeriesConfig {
        key: "safety",
        canvas_id: "safetyChart",
        label: "Patient safety score (1-5)",
        values: [4.7, 3.5],
        suggested_max: 5.0,
        tick_step: 0.5,
        format: ValueFormat::Fixed { decimals: 1 },
    },
    ChartSeriesConfig {
        key: "pay",
        canvas_id: "payEquityChart",
        label: "Pay equity index (0-1)",
        values: [0.92, 0.68],
        suggested_max: 1.0,
        tick_step: 0.1,
        format: ValueFormat::Fixed { decimals: 2 },
    },
];

pub fn find(key: &str) -> Option<&'static ChartSeriesConfig> {
    BENEFIT_CHARTS.iter().find(|chart| chart.key == key)
}
