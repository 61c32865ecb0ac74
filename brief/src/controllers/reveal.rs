use crate::dom::{Page, Selector};
use crate::markup::classes;
use tracing::trace;

/// One-shot fade-in for cards scrolling into view
#[derive(Debug, Clone)]
pub struct Reveal<N> {
    pending: Vec<N>,
    threshold: f64,
}

impl<N: Clone + PartialEq> Reveal<N> {
    /// Prime every card matching `selector` inside `scope` for the fade-in
    pub fn init<P: Page<Node = N>>(
        page: &mut P,
        scope: &N,
        selector: &Selector,
        threshold: f64,
    ) -> Self {
        let pending = page.query_all(Some(scope), selector);
        for card in &pending {
            page.set_class(card, classes::FADE_CARD, true);
        }
        Self { pending, threshold }
    }

    /// Report a card's visible ratio. Returns true when the card was revealed
    /// by this call; the host should stop observing it.
    pub fn on_intersect<P: Page<Node = N>>(&mut self, page: &mut P, node: &N, ratio: f64) -> bool {
        if ratio < self.threshold {
            return false;
        }
        let Some(position) = self.pending.iter().position(|card| card == node) else {
            return false;
        };
        let card = self.pending.remove(position);
        page.set_class(&card, classes::VISIBLE, true);
        trace!(remaining = self.pending.len(), "card revealed");
        true
    }

    /// Cards still waiting to become visible
    pub fn observations(&self) -> &[N] {
        &self.pending
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }
}
