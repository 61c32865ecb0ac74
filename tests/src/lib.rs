//! Shared harness: the rendered brief page driven through the reducer.

use brief::charts::{PluginGuard, RecordingCharts};
use brief::config::BriefConfig;
use brief::dom::{MemoryPage, NodeId, Page, Selector};
use brief::schedule::ManualScheduler;
use brief::{update, Brief, Effect, Msg};
use std::time::Duration;

pub struct Harness {
    pub page: MemoryPage,
    pub body: NodeId,
    pub scheduler: ManualScheduler,
    pub charts: RecordingCharts,
    pub guard: PluginGuard,
    pub brief: Brief<NodeId>,
}

impl Harness {
    /// Mount the site markup for `config` and start every controller
    pub fn new(config: &BriefConfig) -> Self {
        let (page, body) = brief_site::mount(config);
        Self::start(page, body, RecordingCharts::new(), config)
    }

    /// Start the controllers on a page the test has already edited
    pub fn start(
        mut page: MemoryPage,
        body: NodeId,
        mut charts: RecordingCharts,
        config: &BriefConfig,
    ) -> Self {
        let mut scheduler = ManualScheduler::new();
        let guard = PluginGuard::new();
        let brief = Brief::init_with_guard(&mut page, &mut scheduler, &mut charts, config, 2026, &guard);
        Self {
            page,
            body,
            scheduler,
            charts,
            guard,
            brief,
        }
    }

    pub fn send(&mut self, msg: Msg<NodeId>) -> Effect<NodeId> {
        update(&mut self.brief, &mut self.page, &mut self.scheduler, msg)
    }

    pub fn click(&mut self, node: NodeId) -> Effect<NodeId> {
        self.send(Msg::Click(node))
    }

    /// Move the virtual clock and deliver every tick that fell due
    pub fn advance(&mut self, millis: u64) -> usize {
        let fired = self.scheduler.advance(Duration::from_millis(millis));
        for id in &fired {
            self.send(Msg::Tick(*id));
        }
        fired.len()
    }

    /// First node matching `selector`; panics when there is none
    pub fn find(&self, selector: &Selector) -> NodeId {
        self.page
            .query(None, selector)
            .unwrap_or_else(|| panic!("no element matches {selector}"))
    }

    pub fn find_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.page.query_all(None, selector)
    }

    pub fn by_id(&self, id: &str) -> NodeId {
        self.page
            .element_by_id(id)
            .unwrap_or_else(|| panic!("no element #{id}"))
    }

    pub fn text_of(&self, id: &str) -> String {
        self.page.text(&self.by_id(id))
    }
}
