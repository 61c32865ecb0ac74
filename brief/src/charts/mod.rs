//! Chart construction on top of an external charting library.

pub mod format;
pub mod overlay;
pub mod spec;

pub use format::ValueFormat;
pub use overlay::{BarAnchor, OverlayCanvas, OverlayLabel, ValueLabelOptions, ValueLabelPlugin};
pub use spec::ChartSpec;

use std::sync::atomic::{AtomicBool, Ordering};

/// The charting library, as seen by the controllers
pub trait ChartBackend {
    /// Whether the library is loaded on this page
    fn is_available(&self) -> bool;

    /// Install a draw-time plugin for every chart created afterwards
    fn register_plugin(&mut self, plugin: &ValueLabelPlugin);

    /// Build a chart on the canvas with `canvas_id`
    fn create_chart(&mut self, canvas_id: &str, spec: &ChartSpec);
}

/// Process-wide "register exactly once" flag
#[derive(Debug)]
pub struct PluginGuard(AtomicBool);

impl PluginGuard {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Run `register` unless it already ran through this guard. Returns whether it ran.
    pub fn register_once<F: FnOnce()>(&self, register: F) -> bool {
        if self.0.swap(true, Ordering::AcqRel) {
            return false;
        }
        register();
        true
    }

    pub fn is_registered(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for PluginGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard for the value-label overlay
pub static VALUE_LABELS: PluginGuard = PluginGuard::new();

/// Headless backend that keeps every chart it is asked to build
#[derive(Debug, Default)]
pub struct RecordingCharts {
    pub available: bool,
    pub plugins: Vec<&'static str>,
    pub charts: Vec<(String, ChartSpec)>,
}

impl RecordingCharts {
    pub fn new() -> Self {
        Self {
            available: true,
            ..Self::default()
        }
    }

    /// A page where the library failed to load
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn chart(&self, canvas_id: &str) -> Option<&ChartSpec> {
        self.charts
            .iter()
            .find(|(id, _)| id == canvas_id)
            .map(|(_, spec)| spec)
    }
}

impl ChartBackend for RecordingCharts {
    fn is_available(&self) -> bool {
        self.available
    }

    fn register_plugin(&mut self, plugin: &ValueLabelPlugin) {
        self.plugins.push(plugin.id());
    }

    fn create_chart(&mut self, canvas_id: &str, spec: &ChartSpec) {
        self.charts.push((canvas_id.to_string(), spec.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_runs_once() {
        let guard = PluginGuard::new();
        let mut calls = 0;
        assert!(guard.register_once(|| calls += 1));
        assert!(!guard.register_once(|| calls += 1));
        assert_eq!(calls, 1);
        assert!(guard.is_registered());
    }
}
