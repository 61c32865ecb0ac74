use crate::schedule::TimerId;

/// Everything the page can tell the brief after startup
#[derive(Debug, Clone, PartialEq)]
pub enum Msg<N> {
    Click(N),
    Change(N),
    KeyDown { node: N, key: String },
    Tick(TimerId),
    /// A watched card's visible ratio changed
    Intersect { node: N, ratio: f64 },
    /// A chart was clicked; `index` is the bar under the pointer, if any
    ChartClick { canvas_id: String, index: Option<usize> },
}
