use super::{require_ids, Binding, EventKind};
use crate::content::staffing::{self, STAFFING};
use crate::dom::Page;
use crate::markup::ids;
use tracing::debug;

/// Staffing-ratio calculator driven by the hospital unit select
#[derive(Debug, Clone)]
pub struct StaffingCalculator<N> {
    unit_select: N,
    recommended: N,
    current: N,
    gap_label: N,
    gap_bar: N,
    message: N,
    action: N,
    selected: Option<&'static str>,
}

impl<N: Clone + PartialEq> StaffingCalculator<N> {
    pub fn init<P: Page<Node = N>>(page: &mut P) -> Option<Self> {
        let [unit_select, recommended, current, gap_label, gap_bar, message, action] = require_ids(
            page,
            "staffing",
            [
                ids::CALCULATOR_UNIT,
                ids::CALC_RECOMMENDED,
                ids::CALC_CURRENT,
                ids::CALC_GAP_LABEL,
                ids::CALC_GAP_BAR,
                ids::CALC_MESSAGE,
                ids::CALC_ACTION,
            ],
        )?;

        let mut calculator = Self {
            unit_select,
            recommended,
            current,
            gap_label,
            gap_bar,
            message,
            action,
            selected: None,
        };
        let default_key = page
            .value(&calculator.unit_select)
            .or_else(|| STAFFING.first().map(|unit| unit.key.to_string()));
        if let Some(key) = default_key {
            calculator.select(page, &key);
        }
        Some(calculator)
    }

    pub fn select<P: Page<Node = N>>(&mut self, page: &mut P, key: &str) -> bool {
        let Some(unit) = staffing::find(key) else {
            debug!(widget = "staffing", key, "no staffing data for unit");
            return false;
        };

        page.set_text(&self.recommended, unit.recommended);
        page.set_text(&self.current, unit.current);
        page.set_text(&self.gap_label, unit.gap_label);
        page.set_style(
            &self.gap_bar,
            "width",
            &format!("{}%", staffing::gap_bar_width(unit.gap_percent)),
        );
        page.set_text(&self.message, unit.message);
        page.set_text(&self.action, unit.action);
        self.selected = Some(unit.key);
        true
    }

    /// Re-render from the select's current value
    pub fn on_change<P: Page<Node = N>>(&mut self, page: &mut P, node: &N) -> bool {
        if *node != self.unit_select {
            return false;
        }
        if let Some(key) = page.value(&self.unit_select) {
            self.select(page, &key);
        }
        true
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn bindings(&self) -> Vec<Binding<N>> {
        vec![Binding {
            node: self.unit_select.clone(),
            event: EventKind::Change,
        }]
    }
}
