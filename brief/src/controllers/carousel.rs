use super::{require_ids, Binding};
use crate::content::VOICES;
use crate::dom::{Page, Selector};
use crate::markup::{attrs, classes, ids};
use crate::schedule::{Scheduler, TimerId};
use std::time::Duration;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// `data-direction="prev"` goes back, anything else goes forward
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("prev") => Direction::Prev,
            _ => Direction::Next,
        }
    }

    fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Prev => (index + len - 1) % len,
            Direction::Next => (index + 1) % len,
        }
    }
}

/// Testimonial rotator with manual navigation and automatic advance
#[derive(Debug, Clone)]
pub struct VoicesCarousel<N> {
    quote: N,
    name: N,
    role: N,
    nav: Vec<(N, Direction)>,
    indicators: Vec<(N, Option<usize>)>,
    index: usize,
    timer: Option<TimerId>,
    interval: Duration,
}

impl<N: Clone + PartialEq> VoicesCarousel<N> {
    pub fn init<P, S>(page: &mut P, scheduler: &mut S, interval: Duration) -> Option<Self>
    where
        P: Page<Node = N>,
        S: Scheduler + ?Sized,
    {
        if VOICES.is_empty() {
            return None;
        }
        let [quote, name, role] = require_ids(
            page,
            "voices",
            [ids::VOICE_QUOTE, ids::VOICE_NAME, ids::VOICE_ROLE],
        )?;

        let nav: Vec<_> = page
            .query_all(None, &Selector::Class(classes::VOICE_NAV))
            .into_iter()
            .map(|node| {
                let direction = Direction::from_attr(page.attribute(&node, attrs::DIRECTION).as_deref());
                (node, direction)
            })
            .collect();
        let indicators: Vec<_> = page
            .query_all(None, &Selector::Class(classes::VOICE_INDICATOR))
            .into_iter()
            .map(|node| {
                let index = page
                    .attribute(&node, attrs::INDEX)
                    .and_then(|raw| raw.trim().parse().ok());
                (node, index)
            })
            .collect();
        if nav.is_empty() || indicators.is_empty() {
            debug!(widget = "voices", "carousel controls missing");
            return None;
        }

        let mut carousel = Self {
            quote,
            name,
            role,
            nav,
            indicators,
            index: 0,
            timer: None,
            interval,
        };
        carousel.render(page);
        carousel.timer = Some(scheduler.start_interval(interval));
        Some(carousel)
    }

    /// Prev/next click. Moves one step and restarts the automatic advance.
    pub fn on_click<P, S>(&mut self, page: &mut P, scheduler: &mut S, node: &N) -> bool
    where
        P: Page<Node = N>,
        S: Scheduler + ?Sized,
    {
        let Some(direction) = self
            .nav
            .iter()
            .find(|(nav, _)| nav == node)
            .map(|(_, direction)| *direction)
        else {
            return false;
        };
        self.index = direction.step(self.index, VOICES.len());
        self.render(page);
        self.restart(scheduler);
        true
    }

    /// Automatic advance. Ticks from a timer that was since replaced are dropped.
    pub fn on_tick<P: Page<Node = N>>(&mut self, page: &mut P, id: TimerId) -> bool {
        if self.timer != Some(id) {
            trace!(widget = "voices", ?id, "stale tick ignored");
            return false;
        }
        self.index = Direction::Next.step(self.index, VOICES.len());
        self.render(page);
        true
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn bindings(&self) -> Vec<Binding<N>> {
        self.nav
            .iter()
            .map(|(node, _)| Binding::click(node.clone()))
            .collect()
    }

    fn restart<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(old) = self.timer.take() {
            scheduler.cancel(old);
        }
        self.timer = Some(scheduler.start_interval(self.interval));
    }

    fn render<P: Page<Node = N>>(&self, page: &mut P) {
        let Some(entry) = VOICES.get(self.index) else {
            return;
        };
        page.set_text(&self.quote, &format!("\u{201c}{}\u{201d}", entry.quote));
        page.set_text(&self.name, entry.name);
        page.set_text(&self.role, entry.role);
        for (indicator, position) in &self.indicators {
            let current = *position == Some(self.index);
            page.set_class(indicator, classes::INDICATOR_ON, current);
            page.set_class(indicator, classes::INDICATOR_OFF, !current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryPage, NodeId};
    use crate::schedule::ManualScheduler;

    const INTERVAL: Duration = Duration::from_millis(8000);

    struct Fixture {
        page: MemoryPage,
        prev: NodeId,
        next: NodeId,
        dots: Vec<NodeId>,
    }

    fn fixture() -> Fixture {
        let mut page = MemoryPage::new();
        let root = page.append_element(None, "section");
        for id in [ids::VOICE_QUOTE, ids::VOICE_NAME, ids::VOICE_ROLE] {
            let node = page.append_element(Some(root), "p");
            page.set_attribute(&node, "id", id);
        }
        let nav = |page: &mut MemoryPage, direction: &str| {
            let button = page.append_element(Some(root), "button");
            page.set_class(&button, classes::VOICE_NAV, true);
            page.set_attribute(&button, attrs::DIRECTION, direction);
            button
        };
        let prev = nav(&mut page, "prev");
        let next = nav(&mut page, "next");
        let dots = (0..VOICES.len())
            .map(|i| {
                let dot = page.append_element(Some(root), "span");
                page.set_class(&dot, classes::VOICE_INDICATOR, true);
                page.set_attribute(&dot, attrs::INDEX, &i.to_string());
                dot
            })
            .collect();
        Fixture {
            page,
            prev,
            next,
            dots,
        }
    }

    fn quote(page: &MemoryPage) -> String {
        let node = page.element_by_id(ids::VOICE_QUOTE).unwrap();
        page.text(&node)
    }

    #[test]
    fn test_init_renders_first_voice_and_starts_timer() {
        let mut fx = fixture();
        let mut scheduler = ManualScheduler::new();
        let carousel = VoicesCarousel::init(&mut fx.page, &mut scheduler, INTERVAL).unwrap();

        assert_eq!(carousel.index(), 0);
        assert_eq!(quote(&fx.page), format!("\u{201c}{}\u{201d}", VOICES[0].quote));
        assert!(fx.page.has_class(&fx.dots[0], classes::INDICATOR_ON));
        assert!(fx.page.has_class(&fx.dots[1], classes::INDICATOR_OFF));
        assert_eq!(scheduler.active(), 1);
        assert_eq!(scheduler.next_due(carousel.timer().unwrap()), Some(INTERVAL));
    }

    #[test]
    fn test_prev_wraps_and_next_advances() {
        let mut fx = fixture();
        let mut scheduler = ManualScheduler::new();
        let mut carousel = VoicesCarousel::init(&mut fx.page, &mut scheduler, INTERVAL).unwrap();

        assert!(carousel.on_click(&mut fx.page, &mut scheduler, &fx.prev));
        assert_eq!(carousel.index(), VOICES.len() - 1);
        assert!(carousel.on_click(&mut fx.page, &mut scheduler, &fx.next));
        assert!(carousel.on_click(&mut fx.page, &mut scheduler, &fx.next));
        assert_eq!(carousel.index(), 1);
        assert_eq!(quote(&fx.page), format!("\u{201c}{}\u{201d}", VOICES[1].quote));

        let lit: Vec<_> = fx
            .dots
            .iter()
            .filter(|d| fx.page.has_class(d, classes::INDICATOR_ON))
            .collect();
        assert_eq!(lit, vec![&fx.dots[1]]);
    }

    #[test]
    fn test_manual_navigation_resets_timer() {
        let mut fx = fixture();
        let mut scheduler = ManualScheduler::new();
        let mut carousel = VoicesCarousel::init(&mut fx.page, &mut scheduler, INTERVAL).unwrap();
        let first = carousel.timer().unwrap();

        scheduler.advance(Duration::from_millis(5000));
        carousel.on_click(&mut fx.page, &mut scheduler, &fx.next);
        let second = carousel.timer().unwrap();
        assert_ne!(first, second);
        assert_eq!(scheduler.active(), 1);
        assert_eq!(scheduler.next_due(second), Some(Duration::from_millis(13_000)));

        // The old timer's tick arriving late is ignored.
        assert!(!carousel.on_tick(&mut fx.page, first));
        assert_eq!(carousel.index(), 1);

        let fired = scheduler.advance(Duration::from_millis(8000));
        assert_eq!(fired, vec![second]);
        for id in fired {
            assert!(carousel.on_tick(&mut fx.page, id));
        }
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_auto_advance_wraps() {
        let mut fx = fixture();
        let mut scheduler = ManualScheduler::new();
        let mut carousel = VoicesCarousel::init(&mut fx.page, &mut scheduler, INTERVAL).unwrap();
        let fired = scheduler.advance(INTERVAL * VOICES.len() as u32);
        assert_eq!(fired.len(), VOICES.len());
        for id in fired {
            carousel.on_tick(&mut fx.page, id);
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_inert_without_indicators() {
        let mut fx = fixture();
        for dot in fx.dots.drain(..) {
            fx.page.remove(dot);
        }
        let mut scheduler = ManualScheduler::new();
        assert!(VoicesCarousel::init(&mut fx.page, &mut scheduler, INTERVAL).is_none());
        assert_eq!(scheduler.active(), 0);
    }
}
