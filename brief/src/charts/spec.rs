//! Serializable chart configurations, shaped like the charting library's
//! `{ type, data, options }` constructor argument.
//!
//! Formatter callbacks cannot travel as JSON; the spec keeps the
//! [`ValueFormat`] alongside and adapters install callbacks from it.

use super::format::ValueFormat;
use super::overlay::ValueLabelOptions;
use crate::config::ChartsConfig;
use crate::content::benefits::{ChartSeriesConfig, CATEGORIES, PALETTE};
use crate::content::AnalysisDetail;
use serde::Serialize;

const TICK_COLOR: &str = "#cbd5f5";
const LABEL_COLOR: &str = "#e2e8f0";
const TOOLTIP_BG: &str = "rgba(2, 6, 23, 0.85)";
const TOOLTIP_BORDER: &str = "rgba(148, 163, 184, 0.35)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
    /// Formatter for ticks, tooltips and overlay labels
    #[serde(skip)]
    pub format: ValueFormat,
    /// Whether bar clicks are reported back as `Msg::ChartClick`
    #[serde(skip)]
    pub clickable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    pub border_radius: u32,
    pub border_skipped: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub padding: Padding,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Padding {
    pub top: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_max: Option<f64>,
    pub ticks: Ticks,
    pub grid: Grid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    /// Whether tick labels go through the chart's formatter
    #[serde(skip)]
    pub formatted_ticks: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_border: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
    pub color: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_labels: Option<ValueLabelOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub padding: u32,
    pub background_color: &'static str,
    pub title_color: &'static str,
    pub body_color: &'static str,
    pub border_color: &'static str,
    pub border_width: u32,
    /// Whether tooltip labels go through the chart's formatter
    #[serde(skip)]
    pub formatted: bool,
}

impl ChartSpec {
    /// Union vs non-union comparison chart for one benefit series
    pub fn benefit(series: &ChartSeriesConfig, charts: &ChartsConfig) -> Self {
        Self {
            kind: "bar",
            data: ChartData {
                labels: CATEGORIES.iter().map(|label| label.to_string()).collect(),
                datasets: vec![Dataset {
                    label: series.label.to_string(),
                    data: series.values.to_vec(),
                    background_color: vec![
                        PALETTE.union_bg.to_string(),
                        PALETTE.non_union_bg.to_string(),
                    ],
                    border_color: Some(vec![
                        PALETTE.union_border.to_string(),
                        PALETTE.non_union_border.to_string(),
                    ]),
                    border_width: Some(1),
                    border_radius: 12,
                    border_skipped: false,
                }],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                index_axis: None,
                layout: Some(Layout {
                    padding: Padding { top: 12 },
                }),
                scales: Scales {
                    x: Axis {
                        ticks: Ticks {
                            color: LABEL_COLOR,
                            step_size: None,
                            font: Some(Font { size: 11, weight: None }),
                        },
                        grid: Grid {
                            color: Some("rgba(148, 163, 184, 0.15)"),
                            display: None,
                            draw_border: Some(false),
                        },
                        ..Axis::default()
                    },
                    y: Axis {
                        begin_at_zero: Some(true),
                        suggested_max: Some(series.suggested_max),
                        ticks: Ticks {
                            color: TICK_COLOR,
                            step_size: Some(series.tick_step),
                            font: None,
                        },
                        grid: Grid {
                            color: Some("rgba(148, 163, 184, 0.1)"),
                            display: None,
                            draw_border: Some(false),
                        },
                        title: Some(AxisTitle {
                            display: true,
                            text: series.label.to_string(),
                            color: LABEL_COLOR,
                            font: Font {
                                size: 12,
                                weight: Some("600"),
                            },
                        }),
                        formatted_ticks: true,
                        ..Axis::default()
                    },
                },
                plugins: Plugins {
                    legend: Legend { display: false },
                    tooltip: Tooltip {
                        padding: 10,
                        background_color: TOOLTIP_BG,
                        title_color: "#fff",
                        body_color: LABEL_COLOR,
                        border_color: TOOLTIP_BORDER,
                        border_width: 1,
                        formatted: true,
                    },
                    value_labels: Some(ValueLabelOptions {
                        enabled: charts.value_labels,
                        color: Some(charts.label_color.clone()),
                        font: Some(charts.label_font.clone()),
                    }),
                },
            },
            format: series.format,
            clickable: false,
        }
    }

    /// Horizontal impact chart behind the analysis detail panel
    pub fn analysis(details: &[AnalysisDetail]) -> Self {
        Self {
            kind: "bar",
            data: ChartData {
                labels: details.iter().map(|d| d.label.to_string()).collect(),
                datasets: vec![Dataset {
                    label: "Impact".to_string(),
                    data: details.iter().map(|d| d.impact).collect(),
                    background_color: details.iter().map(|d| d.color.to_string()).collect(),
                    border_color: None,
                    border_width: None,
                    border_radius: 12,
                    border_skipped: false,
                }],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                index_axis: Some("y"),
                layout: None,
                scales: Scales {
                    x: Axis {
                        min: Some(0.0),
                        max: Some(10.0),
                        ticks: Ticks {
                            color: TICK_COLOR,
                            ..Ticks::default()
                        },
                        grid: Grid {
                            color: Some("rgba(148, 163, 184, 0.15)"),
                            ..Grid::default()
                        },
                        ..Axis::default()
                    },
                    y: Axis {
                        ticks: Ticks {
                            color: LABEL_COLOR,
                            step_size: None,
                            font: Some(Font { size: 12, weight: None }),
                        },
                        grid: Grid {
                            display: Some(false),
                            ..Grid::default()
                        },
                        ..Axis::default()
                    },
                },
                plugins: Plugins {
                    legend: Legend { display: false },
                    tooltip: Tooltip {
                        padding: 12,
                        background_color: "rgba(2, 6, 23, 0.8)",
                        title_color: "#fff",
                        body_color: LABEL_COLOR,
                        border_color: TOOLTIP_BORDER,
                        border_width: 1,
                        formatted: false,
                    },
                    value_labels: None,
                },
            },
            format: ValueFormat::default(),
            clickable: true,
        }
    }

    /// Values of the first (only) dataset
    pub fn values(&self) -> &[f64] {
        self.data
            .datasets
            .first()
            .map(|dataset| dataset.data.as_slice())
            .unwrap_or(&[])
    }

    /// Text of a y-axis tick at `value`
    pub fn tick_label(&self, value: f64) -> String {
        if self.options.scales.y.formatted_ticks {
            self.format.apply(value)
        } else {
            value.to_string()
        }
    }

    /// Tooltip title for the bar at `index`
    pub fn tooltip_title(&self, index: usize) -> Option<&str> {
        self.data.labels.get(index).map(String::as_str)
    }

    /// Tooltip body line for the bar at `index`, `"Union: 89%"`
    pub fn tooltip_label(&self, index: usize) -> Option<String> {
        let label = self.data.labels.get(index)?;
        let value = *self.values().get(index)?;
        let shown = if self.options.plugins.tooltip.formatted {
            self.format.apply(value)
        } else {
            value.to_string()
        };
        Some(format!("{label}: {shown}"))
    }

    pub fn value_labels_enabled(&self) -> bool {
        self.options
            .plugins
            .value_labels
            .as_ref()
            .is_some_and(|opts| opts.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{benefits, ANALYSIS};

    #[test]
    fn test_benefit_spec_json_shape() {
        let series = benefits::find("retention").unwrap();
        let spec = ChartSpec::benefit(series, &ChartsConfig::default());
        let json = serde_json::to_value(&spec).unwrap();

        assert_eq!(json["type"], "bar");
        assert_eq!(json["data"]["labels"], serde_json::json!(["Union", "Non-Union"]));
        assert_eq!(json["data"]["datasets"][0]["data"], serde_json::json!([89.0, 62.0]));
        assert_eq!(json["data"]["datasets"][0]["borderSkipped"], false);
        assert_eq!(json["options"]["maintainAspectRatio"], false);
        assert_eq!(json["options"]["scales"]["y"]["suggestedMax"], 100.0);
        assert_eq!(json["options"]["scales"]["y"]["ticks"]["stepSize"], 10.0);
        assert_eq!(json["options"]["scales"]["y"]["title"]["text"], "Retention rate (%)");
        assert_eq!(json["options"]["plugins"]["valueLabels"]["enabled"], true);
        assert!(json["options"].get("indexAxis").is_none());
    }

    #[test]
    fn test_benefit_labels_share_formatter() {
        let series = benefits::find("pay").unwrap();
        let spec = ChartSpec::benefit(series, &ChartsConfig::default());
        assert_eq!(spec.tick_label(0.92), "0.92");
        assert_eq!(spec.tooltip_title(0), Some("Union"));
        assert_eq!(spec.tooltip_label(0).as_deref(), Some("Union: 0.92"));
        assert_eq!(spec.tooltip_label(1).as_deref(), Some("Non-Union: 0.68"));
        assert_eq!(spec.tooltip_label(2), None);
    }

    #[test]
    fn test_value_labels_follow_config() {
        let series = benefits::find("safety").unwrap();
        let config = ChartsConfig {
            value_labels: false,
            ..ChartsConfig::default()
        };
        assert!(!ChartSpec::benefit(series, &config).value_labels_enabled());
        assert!(ChartSpec::benefit(series, &ChartsConfig::default()).value_labels_enabled());
    }

    #[test]
    fn test_analysis_spec() {
        let spec = ChartSpec::analysis(ANALYSIS);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["options"]["indexAxis"], "y");
        assert_eq!(json["options"]["scales"]["x"]["max"], 10.0);
        assert_eq!(json["data"]["labels"][0], "Delay & Decay Appeals");
        assert!(json["options"]["plugins"].get("valueLabels").is_none());
        assert!(spec.clickable);
        assert!(!spec.value_labels_enabled());
        assert_eq!(spec.tooltip_label(3).as_deref(), Some("Political Climate: 5"));
    }
}
