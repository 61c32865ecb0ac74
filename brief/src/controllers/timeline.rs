use super::{require_ids, ActiveMarker, Binding, TriggerGroup};
use crate::content::timeline::{self, TIMELINE};
use crate::dom::{Page, Selector};
use crate::markup::{attrs, ids};
use tracing::debug;

/// Timeline selector: a row of year buttons driving one detail card
#[derive(Debug, Clone)]
pub struct TimelineController<N> {
    year: N,
    tagline: N,
    title: N,
    summary: N,
    body: N,
    triggers: TriggerGroup<N>,
    selected: Option<&'static str>,
}

impl<N: Clone + PartialEq> TimelineController<N> {
    pub fn init<P: Page<Node = N>>(page: &mut P) -> Option<Self> {
        let triggers = TriggerGroup::collect(
            page,
            &Selector::Attr(attrs::TIMELINE),
            attrs::TIMELINE,
            ActiveMarker::DataActive,
        );
        if triggers.is_empty() {
            debug!(widget = "timeline", "no timeline triggers on page");
            return None;
        }

        let [year, tagline, title, summary, body] = require_ids(
            page,
            "timeline",
            [
                ids::TIMELINE_YEAR,
                ids::TIMELINE_TAGLINE,
                ids::TIMELINE_TITLE,
                ids::TIMELINE_SUMMARY,
                ids::TIMELINE_BODY,
            ],
        )?;

        let mut controller = Self {
            year,
            tagline,
            title,
            summary,
            body,
            triggers,
            selected: None,
        };
        let default_key = controller
            .triggers
            .first_key()
            .or_else(|| TIMELINE.first().map(|entry| entry.key))
            .map(str::to_string);
        if let Some(key) = default_key {
            controller.select(page, &key);
        }
        Some(controller)
    }

    /// Show the entry for `key`. Unknown keys leave the card untouched.
    pub fn select<P: Page<Node = N>>(&mut self, page: &mut P, key: &str) -> bool {
        let Some(entry) = timeline::find(key) else {
            debug!(widget = "timeline", key, "no timeline entry for key");
            return false;
        };

        self.triggers.mark(page, key);
        page.set_text(&self.year, entry.year);
        page.set_text(&self.tagline, entry.tagline);
        page.set_text(&self.title, entry.title);
        page.set_text(&self.summary, entry.summary);
        page.set_text(&self.body, entry.body);
        self.selected = Some(entry.key);
        true
    }

    /// Returns whether `node` is one of this controller's triggers
    pub fn on_click<P: Page<Node = N>>(&mut self, page: &mut P, node: &N) -> bool {
        if !self.triggers.owns(node) {
            return false;
        }
        if let Some(key) = self.triggers.key_of(node).map(str::to_string) {
            self.select(page, &key);
        }
        true
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn bindings(&self) -> Vec<Binding<N>> {
        self.triggers.bindings()
    }
}
