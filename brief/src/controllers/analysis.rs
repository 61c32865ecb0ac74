use super::require_ids;
use crate::charts::{ChartBackend, ChartSpec};
use crate::content::analysis::{self, ANALYSIS, DEFAULT_ANALYSIS};
use crate::content::AnalysisDetail;
use crate::dom::Page;
use crate::markup::ids;
use tracing::debug;

/// Impact chart whose bars select the detail shown beside it
#[derive(Debug, Clone)]
pub struct AnalysisPanel<N> {
    title: N,
    body: N,
    selected: Option<&'static str>,
}

impl<N: Clone + PartialEq> AnalysisPanel<N> {
    pub fn init<P, C>(page: &mut P, charts: &mut C) -> Option<Self>
    where
        P: Page<Node = N>,
        C: ChartBackend + ?Sized,
    {
        if !charts.is_available() {
            debug!(widget = "analysis", "chart library not loaded");
            return None;
        }
        let [_canvas, title, body] = require_ids(
            page,
            "analysis",
            [ids::ANALYSIS_CHART, ids::ANALYSIS_TITLE, ids::ANALYSIS_BODY],
        )?;

        charts.create_chart(ids::ANALYSIS_CHART, &ChartSpec::analysis(ANALYSIS));
        let mut panel = Self {
            title,
            body,
            selected: None,
        };
        if let Some(detail) = analysis::find(DEFAULT_ANALYSIS) {
            panel.render(page, detail);
        }
        Some(panel)
    }

    /// A click that landed on the bar at `index`. Clicks on empty chart
    /// space arrive with no index and change nothing.
    pub fn on_chart_click<P: Page<Node = N>>(
        &mut self,
        page: &mut P,
        canvas_id: &str,
        index: Option<usize>,
    ) -> bool {
        if canvas_id != ids::ANALYSIS_CHART {
            return false;
        }
        match index.and_then(analysis::at) {
            Some(detail) => self.render(page, detail),
            None => debug!(widget = "analysis", ?index, "click outside any bar"),
        }
        true
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    fn render<P: Page<Node = N>>(&mut self, page: &mut P, detail: &'static AnalysisDetail) {
        page.set_text(&self.title, detail.title);
        page.set_text(&self.body, detail.body);
        self.selected = Some(detail.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::RecordingCharts;
    use crate::dom::MemoryPage;

    fn analysis_page() -> MemoryPage {
        let mut page = MemoryPage::new();
        let root = page.append_element(None, "section");
        for (tag, id) in [
            ("canvas", ids::ANALYSIS_CHART),
            ("h3", ids::ANALYSIS_TITLE),
            ("p", ids::ANALYSIS_BODY),
        ] {
            let node = page.append_element(Some(root), tag);
            page.set_attribute(&node, "id", id);
        }
        page
    }

    #[test]
    fn test_init_builds_chart_and_default_detail() {
        let mut page = analysis_page();
        let mut charts = RecordingCharts::new();
        let panel = AnalysisPanel::init(&mut page, &mut charts).unwrap();

        let spec = charts.chart(ids::ANALYSIS_CHART).unwrap();
        assert_eq!(spec.data.labels.len(), ANALYSIS.len());
        assert!(spec.clickable);
        assert_eq!(panel.selected(), Some(DEFAULT_ANALYSIS));
        let title = page.element_by_id(ids::ANALYSIS_TITLE).unwrap();
        assert_eq!(page.text(&title), ANALYSIS[0].title);
    }

    #[test]
    fn test_bar_click_selects_by_index() {
        let mut page = analysis_page();
        let mut charts = RecordingCharts::new();
        let mut panel = AnalysisPanel::init(&mut page, &mut charts).unwrap();

        assert!(panel.on_chart_click(&mut page, ids::ANALYSIS_CHART, Some(2)));
        assert_eq!(panel.selected(), Some("Captive Audience Messaging"));
        let body = page.element_by_id(ids::ANALYSIS_BODY).unwrap();
        assert_eq!(page.text(&body), ANALYSIS[2].body);

        assert!(panel.on_chart_click(&mut page, ids::ANALYSIS_CHART, None));
        assert!(panel.on_chart_click(&mut page, ids::ANALYSIS_CHART, Some(99)));
        assert_eq!(panel.selected(), Some("Captive Audience Messaging"));
    }

    #[test]
    fn test_other_canvas_is_not_ours() {
        let mut page = analysis_page();
        let mut charts = RecordingCharts::new();
        let mut panel = AnalysisPanel::init(&mut page, &mut charts).unwrap();
        assert!(!panel.on_chart_click(&mut page, "retentionChart", Some(1)));
    }

    #[test]
    fn test_inert_without_chart_library() {
        let mut page = analysis_page();
        let mut charts = RecordingCharts::unavailable();
        assert!(AnalysisPanel::init(&mut page, &mut charts).is_none());
        assert!(charts.charts.is_empty());
        let title = page.element_by_id(ids::ANALYSIS_TITLE).unwrap();
        assert_eq!(page.text(&title), "");
    }
}
