//! Value-label overlay drawn after the chart's dataset pass.

use super::spec::ChartSpec;
use serde::Serialize;

/// Plugin id registered with the charting library
pub const VALUE_LABEL_PLUGIN_ID: &str = "unionValueLabels";

const DEFAULT_COLOR: &str = "#e2e8f0";
const DEFAULT_FONT: &str = "600 12px Inter, sans-serif";
/// Gap between the top of a bar and the baseline of its label
const LABEL_OFFSET: f64 = 6.0;

/// Per-chart switch read at draw time from `options.plugins.valueLabels`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueLabelOptions {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

/// Top-center position of a drawn bar, as reported by the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarAnchor {
    pub x: f64,
    pub y: f64,
}

/// The slice of a 2D canvas context the overlay draws with
pub trait OverlayCanvas {
    fn save(&mut self);
    fn restore(&mut self);
    fn set_fill_style(&mut self, color: &str);
    fn set_font(&mut self, font: &str);
    /// Center horizontally, sit on the bottom baseline
    fn align_bottom_center(&mut self);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// Label positioned above one bar
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLabel {
    pub index: usize,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Draws each bar's formatted value directly above the bar
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueLabelPlugin;

impl ValueLabelPlugin {
    pub fn id(&self) -> &'static str {
        VALUE_LABEL_PLUGIN_ID
    }

    /// Labels for the bars of `spec`. Empty unless the chart enables the overlay.
    pub fn labels(&self, spec: &ChartSpec, bars: &[BarAnchor]) -> Vec<OverlayLabel> {
        if !spec.value_labels_enabled() {
            return Vec::new();
        }
        bars.iter()
            .zip(spec.values())
            .enumerate()
            .map(|(index, (bar, value))| OverlayLabel {
                index,
                text: spec.format.apply(*value),
                x: bar.x,
                y: bar.y - LABEL_OFFSET,
            })
            .collect()
    }

    /// The `afterDatasetsDraw` hook
    pub fn after_datasets_draw<C: OverlayCanvas>(
        &self,
        spec: &ChartSpec,
        bars: &[BarAnchor],
        canvas: &mut C,
    ) {
        let Some(opts) = spec.options.plugins.value_labels.as_ref() else {
            return;
        };
        for label in self.labels(spec, bars) {
            canvas.save();
            canvas.set_fill_style(opts.color.as_deref().unwrap_or(DEFAULT_COLOR));
            canvas.set_font(opts.font.as_deref().unwrap_or(DEFAULT_FONT));
            canvas.align_bottom_center();
            canvas.fill_text(&label.text, label.x, label.y);
            canvas.restore();
        }
    }
}
