use super::Reveal;
use crate::charts::{ChartBackend, ChartSpec, PluginGuard, ValueLabelPlugin};
use crate::config::{ChartsConfig, RevealConfig};
use crate::content::BENEFIT_CHARTS;
use crate::dom::{Page, Selector};
use crate::markup::{attrs, ids};
use tracing::{debug, info};

/// Union benefits section: fading cards and one comparison chart per series
#[derive(Debug, Clone)]
pub struct BenefitsSection<N> {
    reveal: Reveal<N>,
    charts: Vec<&'static str>,
}

impl<N: Clone + PartialEq> BenefitsSection<N> {
    pub fn init<P, C>(
        page: &mut P,
        charts: &mut C,
        guard: &PluginGuard,
        reveal: &RevealConfig,
        config: &ChartsConfig,
    ) -> Option<Self>
    where
        P: Page<Node = N>,
        C: ChartBackend + ?Sized,
    {
        let Some(section) = page.element_by_id(ids::UNION_BENEFITS) else {
            debug!(widget = "union-benefits", "section missing");
            return None;
        };
        if !charts.is_available() {
            debug!(widget = "union-benefits", "chart library not loaded");
            return None;
        }

        if guard.register_once(|| charts.register_plugin(&ValueLabelPlugin)) {
            info!(plugin = ValueLabelPlugin.id(), "value label overlay registered");
        }

        let cards = Reveal::init(
            page,
            &section,
            &Selector::Attr(attrs::BENEFIT_CARD),
            reveal.threshold,
        );

        let mut built = Vec::new();
        for series in BENEFIT_CHARTS {
            if page.element_by_id(series.canvas_id).is_none() {
                debug!(canvas = series.canvas_id, "benefit canvas missing, chart skipped");
                continue;
            }
            let spec = ChartSpec::benefit(series, config);
            charts.create_chart(series.canvas_id, &spec);

            mirror_label(page, &series.union_label_key(), &spec.format.apply(series.union_value()));
            mirror_label(
                page,
                &series.non_union_label_key(),
                &spec.format.apply(series.non_union_value()),
            );
            built.push(series.canvas_id);
        }
        info!(charts = built.len(), "union benefit charts built");

        Some(Self {
            reveal: cards,
            charts: built,
        })
    }

    /// Canvas ids that received a chart
    pub fn charts(&self) -> &[&'static str] {
        &self.charts
    }

    pub fn reveal(&self) -> &Reveal<N> {
        &self.reveal
    }

    pub fn reveal_mut(&mut self) -> &mut Reveal<N> {
        &mut self.reveal
    }
}

/// Write `text` into every `[data-union-benefit-label="{key}"]` element
fn mirror_label<P: Page>(page: &mut P, key: &str, text: &str) {
    for label in page.query_all(None, &Selector::attr_eq(attrs::BENEFIT_LABEL, key)) {
        page.set_text(&label, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::RecordingCharts;
    use crate::content::benefits;
    use crate::dom::{MemoryPage, NodeId};
    use crate::markup::classes;

    fn benefits_page(canvases: &[&str]) -> (MemoryPage, NodeId) {
        let mut page = MemoryPage::new();
        let section = page.append_element(None, "section");
        page.set_attribute(&section, "id", ids::UNION_BENEFITS);
        for canvas_id in canvases {
            let card = page.append_element(Some(section), "article");
            page.set_attribute(&card, attrs::BENEFIT_CARD, "");
            let canvas = page.append_element(Some(card), "canvas");
            page.set_attribute(&canvas, "id", canvas_id);
        }
        for key in ["pay-union", "pay-non", "retention-union"] {
            let label = page.append_element(Some(section), "span");
            page.set_attribute(&label, attrs::BENEFIT_LABEL, key);
        }
        (page, section)
    }

    fn label_text(page: &MemoryPage, key: &str) -> String {
        let node = page
            .query(None, &Selector::attr_eq(attrs::BENEFIT_LABEL, key))
            .unwrap();
        page.text(&node)
    }

    #[test]
    fn test_builds_chart_per_present_canvas() {
        let (mut page, _) = benefits_page(&["retentionChart", "payEquityChart"]);
        let mut charts = RecordingCharts::new();
        let guard = PluginGuard::new();
        let section = BenefitsSection::init(
            &mut page,
            &mut charts,
            &guard,
            &RevealConfig::default(),
            &ChartsConfig::default(),
        )
        .unwrap();

        assert_eq!(section.charts(), &["retentionChart", "payEquityChart"]);
        assert!(charts.chart("safetyChart").is_none());
        assert_eq!(section.reveal().observations().len(), 2);
        assert_eq!(label_text(&page, "pay-union"), "0.92");
        assert_eq!(label_text(&page, "pay-non"), "0.68");
        assert_eq!(label_text(&page, "retention-union"), "89%");
    }

    #[test]
    fn test_mirrored_label_matches_chart_formatter() {
        let (mut page, _) = benefits_page(&["payEquityChart"]);
        let mut charts = RecordingCharts::new();
        let guard = PluginGuard::new();
        BenefitsSection::init(
            &mut page,
            &mut charts,
            &guard,
            &RevealConfig::default(),
            &ChartsConfig::default(),
        )
        .unwrap();

        let series = benefits::find("pay").unwrap();
        let spec = charts.chart(series.canvas_id).unwrap();
        assert_eq!(spec.tooltip_label(0).as_deref(), Some("Union: 0.92"));
        assert_eq!(label_text(&page, "pay-union"), spec.format.apply(series.union_value()));
    }

    #[test]
    fn test_plugin_registered_once_across_inits() {
        let mut charts = RecordingCharts::new();
        let guard = PluginGuard::new();
        for _ in 0..3 {
            let (mut page, _) = benefits_page(&["safetyChart"]);
            BenefitsSection::init(
                &mut page,
                &mut charts,
                &guard,
                &RevealConfig::default(),
                &ChartsConfig::default(),
            )
            .unwrap();
        }
        assert_eq!(charts.plugins, vec![crate::charts::overlay::VALUE_LABEL_PLUGIN_ID]);
        assert_eq!(charts.charts.len(), 3);
    }

    #[test]
    fn test_inert_without_chart_library() {
        let (mut page, section) = benefits_page(&["retentionChart"]);
        let mut charts = RecordingCharts::unavailable();
        let guard = PluginGuard::new();
        let result = BenefitsSection::init(
            &mut page,
            &mut charts,
            &guard,
            &RevealConfig::default(),
            &ChartsConfig::default(),
        );
        assert!(result.is_none());
        assert!(!guard.is_registered());
        let card = page.query(Some(&section), &Selector::Attr(attrs::BENEFIT_CARD)).unwrap();
        assert!(!page.has_class(&card, classes::FADE_CARD));
    }
}
