use super::msg::Msg;
use super::Brief;
use crate::dom::Page;
use crate::schedule::Scheduler;
use tracing::trace;

/// Side effects produced by the reducer. The host should execute them.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<N> {
    None,
    /// Suppress the browser's default action for the event being handled
    PreventDefault,
    /// Stop reporting intersections for this node
    Unobserve(N),
}

impl<N> Default for Effect<N> {
    fn default() -> Self {
        Effect::None
    }
}

pub fn update<P, S>(
    brief: &mut Brief<P::Node>,
    page: &mut P,
    scheduler: &mut S,
    msg: Msg<P::Node>,
) -> Effect<P::Node>
where
    P: Page,
    S: Scheduler + ?Sized,
{
    match msg {
        Msg::Click(node) => {
            handle_click(brief, page, scheduler, &node);
            Effect::None
        }
        Msg::Change(node) => {
            if let Some(staffing) = brief.staffing.as_mut() {
                staffing.on_change(page, &node);
            }
            Effect::None
        }
        Msg::KeyDown { node, key } => {
            let toggled = brief
                .why
                .as_mut()
                .is_some_and(|why| why.panels_mut().on_key(page, &node, &key));
            if toggled {
                Effect::PreventDefault
            } else {
                Effect::None
            }
        }
        Msg::Tick(id) => {
            if let Some(voices) = brief.voices.as_mut() {
                voices.on_tick(page, id);
            }
            Effect::None
        }
        Msg::Intersect { node, ratio } => handle_intersect(brief, page, node, ratio),
        Msg::ChartClick { canvas_id, index } => {
            if let Some(analysis) = brief.analysis.as_mut() {
                analysis.on_chart_click(page, &canvas_id, index);
            }
            Effect::None
        }
    }
}

/// Route a click to the first section that owns the node
fn handle_click<P, S>(
    brief: &mut Brief<P::Node>,
    page: &mut P,
    scheduler: &mut S,
    node: &P::Node,
) where
    P: Page,
    S: Scheduler + ?Sized,
{
    let handled = brief.navigation.as_mut().is_some_and(|nav| nav.on_click(page, node))
        || brief.timeline.as_mut().is_some_and(|t| t.on_click(page, node))
        || brief.outcomes.as_mut().is_some_and(|o| o.on_click(page, node))
        || brief
            .voices
            .as_mut()
            .is_some_and(|v| v.on_click(page, scheduler, node))
        || brief
            .why
            .as_mut()
            .is_some_and(|why| why.panels_mut().on_click(page, node))
        || brief.accordion.as_mut().is_some_and(|a| a.on_click(page, node));
    if !handled {
        trace!(?node, "click on unbound node");
    }
}

fn handle_intersect<P: Page>(
    brief: &mut Brief<P::Node>,
    page: &mut P,
    node: P::Node,
    ratio: f64,
) -> Effect<P::Node> {
    let revealed = brief
        .why
        .as_mut()
        .is_some_and(|why| why.reveal_mut().on_intersect(page, &node, ratio))
        || brief
            .benefits
            .as_mut()
            .is_some_and(|b| b.reveal_mut().on_intersect(page, &node, ratio));
    if revealed {
        Effect::Unobserve(node)
    } else {
        Effect::None
    }
}
