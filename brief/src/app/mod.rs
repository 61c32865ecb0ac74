//! The whole page as one state object: init every section, then route
//! messages to the section that owns them.

mod msg;
mod update;

pub use msg::Msg;
pub use update::{update, Effect};

use crate::charts::{ChartBackend, PluginGuard, VALUE_LABELS};
use crate::config::{BriefConfig, Deployment, Widget};
use crate::controllers::disclosure;
use crate::controllers::{
    AnalysisPanel, BenefitsSection, Binding, DisclosureGroup, NavigationMenu, OutcomeExplorer,
    StaffingCalculator, TimelineController, VoicesCarousel, WhyItMatters,
};
use crate::dom::Page;
use crate::markup::ids;
use crate::schedule::Scheduler;
use tracing::{debug, info};

/// Live state of every section on the page. A `None` section stayed inert.
#[derive(Debug, Clone)]
pub struct Brief<N> {
    deployment: Deployment,
    footer_year: bool,
    navigation: Option<NavigationMenu<N>>,
    timeline: Option<TimelineController<N>>,
    analysis: Option<AnalysisPanel<N>>,
    outcomes: Option<OutcomeExplorer<N>>,
    voices: Option<VoicesCarousel<N>>,
    why: Option<WhyItMatters<N>>,
    benefits: Option<BenefitsSection<N>>,
    staffing: Option<StaffingCalculator<N>>,
    accordion: Option<DisclosureGroup<N>>,
}

impl<N: Clone + PartialEq> Brief<N> {
    /// Initialize every section the deployment ships, using the process-wide
    /// overlay registration guard
    pub fn init<P, S, C>(
        page: &mut P,
        scheduler: &mut S,
        charts: &mut C,
        config: &BriefConfig,
        year: i32,
    ) -> Self
    where
        P: Page<Node = N>,
        S: Scheduler + ?Sized,
        C: ChartBackend + ?Sized,
    {
        Self::init_with_guard(page, scheduler, charts, config, year, &VALUE_LABELS)
    }

    pub fn init_with_guard<P, S, C>(
        page: &mut P,
        scheduler: &mut S,
        charts: &mut C,
        config: &BriefConfig,
        year: i32,
        guard: &PluginGuard,
    ) -> Self
    where
        P: Page<Node = N>,
        S: Scheduler + ?Sized,
        C: ChartBackend + ?Sized,
    {
        let deployment = config.site.deployment;
        let wants = |widget| deployment.includes(widget);

        let navigation = wants(Widget::Navigation)
            .then(|| NavigationMenu::init(page))
            .flatten();
        let footer_year = wants(Widget::FooterYear) && write_footer_year(page, year);
        let timeline = wants(Widget::Timeline)
            .then(|| TimelineController::init(page))
            .flatten();
        let analysis = wants(Widget::Analysis)
            .then(|| AnalysisPanel::init(page, charts))
            .flatten();
        let outcomes = wants(Widget::Outcomes)
            .then(|| OutcomeExplorer::init(page))
            .flatten();
        let voices = wants(Widget::Voices)
            .then(|| VoicesCarousel::init(page, scheduler, config.carousel.interval()))
            .flatten();
        let why = wants(Widget::WhyItMatters)
            .then(|| WhyItMatters::init(page, config.reveal.threshold))
            .flatten();
        let benefits = wants(Widget::UnionBenefits)
            .then(|| BenefitsSection::init(page, charts, guard, &config.reveal, &config.charts))
            .flatten();
        let staffing = wants(Widget::Staffing)
            .then(|| StaffingCalculator::init(page))
            .flatten();
        let accordion = wants(Widget::Accordion)
            .then(|| disclosure::accordion(page))
            .filter(|group| !group.is_empty());

        let brief = Self {
            deployment,
            footer_year,
            navigation,
            timeline,
            analysis,
            outcomes,
            voices,
            why,
            benefits,
            staffing,
            accordion,
        };
        let active = brief.active_widgets();
        info!(
            deployment = ?deployment,
            active = active.len(),
            inert = deployment.widgets().count() - active.len(),
            "brief initialized"
        );
        brief
    }

    pub fn deployment(&self) -> Deployment {
        self.deployment
    }

    pub fn is_active(&self, widget: Widget) -> bool {
        match widget {
            Widget::Navigation => self.navigation.is_some(),
            Widget::FooterYear => self.footer_year,
            Widget::Timeline => self.timeline.is_some(),
            Widget::Analysis => self.analysis.is_some(),
            Widget::Outcomes => self.outcomes.is_some(),
            Widget::Voices => self.voices.is_some(),
            Widget::WhyItMatters => self.why.is_some(),
            Widget::UnionBenefits => self.benefits.is_some(),
            Widget::Staffing => self.staffing.is_some(),
            Widget::Accordion => self.accordion.is_some(),
        }
    }

    pub fn active_widgets(&self) -> Vec<Widget> {
        Widget::ALL
            .into_iter()
            .filter(|widget| self.is_active(*widget))
            .collect()
    }

    /// Listeners the host must attach for the active sections
    pub fn bindings(&self) -> Vec<Binding<N>> {
        let mut bindings = Vec::new();
        if let Some(nav) = &self.navigation {
            bindings.extend(nav.bindings());
        }
        if let Some(timeline) = &self.timeline {
            bindings.extend(timeline.bindings());
        }
        if let Some(outcomes) = &self.outcomes {
            bindings.extend(outcomes.bindings());
        }
        if let Some(voices) = &self.voices {
            bindings.extend(voices.bindings());
        }
        if let Some(why) = &self.why {
            bindings.extend(why.panels().bindings());
        }
        if let Some(staffing) = &self.staffing {
            bindings.extend(staffing.bindings());
        }
        if let Some(accordion) = &self.accordion {
            bindings.extend(accordion.bindings());
        }
        bindings
    }

    /// Cards waiting for their first sufficient intersection
    pub fn observations(&self) -> Vec<N> {
        let why = self.why.iter().flat_map(|why| why.reveal().observations());
        let benefits = self
            .benefits
            .iter()
            .flat_map(|benefits| benefits.reveal().observations());
        why.chain(benefits).cloned().collect()
    }

    pub fn navigation(&self) -> Option<&NavigationMenu<N>> {
        self.navigation.as_ref()
    }

    pub fn timeline(&self) -> Option<&TimelineController<N>> {
        self.timeline.as_ref()
    }

    pub fn analysis(&self) -> Option<&AnalysisPanel<N>> {
        self.analysis.as_ref()
    }

    pub fn outcomes(&self) -> Option<&OutcomeExplorer<N>> {
        self.outcomes.as_ref()
    }

    pub fn voices(&self) -> Option<&VoicesCarousel<N>> {
        self.voices.as_ref()
    }

    pub fn why_it_matters(&self) -> Option<&WhyItMatters<N>> {
        self.why.as_ref()
    }

    pub fn benefits(&self) -> Option<&BenefitsSection<N>> {
        self.benefits.as_ref()
    }

    pub fn staffing(&self) -> Option<&StaffingCalculator<N>> {
        self.staffing.as_ref()
    }

    pub fn accordion(&self) -> Option<&DisclosureGroup<N>> {
        self.accordion.as_ref()
    }
}

fn write_footer_year<P: Page>(page: &mut P, year: i32) -> bool {
    match page.element_by_id(ids::YEAR) {
        Some(target) => {
            page.set_text(&target, &year.to_string());
            true
        }
        None => {
            debug!(widget = "footer-year", "no #year element");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::RecordingCharts;
    use crate::controllers::EventKind;
    use crate::dom::{MemoryPage, NodeId};
    use crate::markup::{attrs, ids};
    use crate::schedule::ManualScheduler;

    /// Footer, timeline, one FAQ item and the staffing select
    fn small_page() -> (MemoryPage, Vec<NodeId>) {
        let mut page = MemoryPage::new();
        let body = page.append_element(None, "body");
        let mut buttons = Vec::new();
        for key in ["1989", "1998"] {
            let button = page.append_element(Some(body), "button");
            page.set_attribute(&button, attrs::TIMELINE, key);
            buttons.push(button);
        }
        for id in [
            ids::TIMELINE_YEAR,
            ids::TIMELINE_TAGLINE,
            ids::TIMELINE_TITLE,
            ids::TIMELINE_SUMMARY,
            ids::TIMELINE_BODY,
            ids::YEAR,
        ] {
            let node = page.append_element(Some(body), "p");
            page.set_attribute(&node, "id", id);
        }
        let faq = page.append_element(Some(body), "button");
        page.set_attribute(&faq, attrs::ACCORDION_TRIGGER, "");
        page.set_attribute(&faq, attrs::ARIA_CONTROLS, "faq-1");
        let panel = page.append_element(Some(body), "div");
        page.set_attribute(&panel, "id", "faq-1");
        buttons.push(faq);
        (page, buttons)
    }

    fn init(page: &mut MemoryPage, config: &BriefConfig) -> Brief<NodeId> {
        let guard = PluginGuard::new();
        Brief::init_with_guard(
            page,
            &mut ManualScheduler::new(),
            &mut RecordingCharts::new(),
            config,
            2026,
            &guard,
        )
    }

    #[test]
    fn test_partial_page_activates_what_it_can() {
        let (mut page, _) = small_page();
        let brief = init(&mut page, &BriefConfig::default());
        assert_eq!(
            brief.active_widgets(),
            vec![Widget::FooterYear, Widget::Timeline, Widget::Accordion]
        );
        let year = page.element_by_id(ids::YEAR).unwrap();
        assert_eq!(page.text(&year), "2026");
        assert!(brief.observations().is_empty());
    }

    #[test]
    fn test_clicks_route_to_owning_section() {
        let (mut page, buttons) = small_page();
        let mut brief = init(&mut page, &BriefConfig::default());
        let mut scheduler = ManualScheduler::new();

        let effect = update(&mut brief, &mut page, &mut scheduler, Msg::Click(buttons[1]));
        assert_eq!(effect, Effect::None);
        assert_eq!(brief.timeline().unwrap().selected(), Some("1998"));

        update(&mut brief, &mut page, &mut scheduler, Msg::Click(buttons[2]));
        assert!(brief.accordion().unwrap().items()[0].is_expanded());
        assert_eq!(brief.timeline().unwrap().selected(), Some("1998"));
    }

    #[test]
    fn test_accordion_keys_are_not_intercepted() {
        let (mut page, buttons) = small_page();
        let mut brief = init(&mut page, &BriefConfig::default());
        let effect = update(
            &mut brief,
            &mut page,
            &mut ManualScheduler::new(),
            Msg::KeyDown {
                node: buttons[2],
                key: "Enter".to_string(),
            },
        );
        assert_eq!(effect, Effect::None);
        assert!(brief
            .bindings()
            .iter()
            .all(|binding| binding.event == EventKind::Click));
    }

    #[test]
    fn test_core_deployment_skips_full_only_sections() {
        let with_calculator = || {
            let (mut page, _) = small_page();
            for (tag, id) in [
                ("select", ids::CALCULATOR_UNIT),
                ("p", ids::CALC_RECOMMENDED),
                ("p", ids::CALC_CURRENT),
                ("p", ids::CALC_GAP_LABEL),
                ("div", ids::CALC_GAP_BAR),
                ("p", ids::CALC_MESSAGE),
                ("p", ids::CALC_ACTION),
            ] {
                let node = page.append_element(None, tag);
                page.set_attribute(&node, "id", id);
            }
            page
        };

        let mut page = with_calculator();
        assert!(init(&mut page, &BriefConfig::default()).is_active(Widget::Staffing));

        let mut page = with_calculator();
        let mut config = BriefConfig::default();
        config.site.deployment = Deployment::Core;
        let brief = init(&mut page, &config);
        assert!(!brief.is_active(Widget::Staffing));
        assert!(brief.is_active(Widget::Timeline));
        assert_eq!(brief.deployment(), Deployment::Core);
        let current = page.element_by_id(ids::CALC_CURRENT).unwrap();
        assert_eq!(page.text(&current), "");
    }
}
