//! Browser adapters: the live document, `setInterval` timers and Chart.js,
//! wired to the reducer. Built only for wasm32 with the `web` feature.

use crate::app::{update, Brief, Effect, Msg};
use crate::charts::{BarAnchor, ChartBackend, ChartSpec, OverlayCanvas, ValueLabelPlugin};
use crate::config::BriefConfig;
use crate::controllers::{Binding, EventKind};
use crate::dom::{Page, Selector};
use crate::markup::ids;
use crate::schedule::{Scheduler, TimerId};
use gloo_timers::callback::Interval;
use js_sys::{Array, Function, Object, Reflect};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, Event, HtmlElement, HtmlSelectElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent,
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &Element, config: &JsValue) -> Result<ChartJs, JsValue>;

    #[wasm_bindgen(static_method_of = ChartJs, js_class = "Chart", catch)]
    fn register(plugin: &JsValue) -> Result<(), JsValue>;
}

thread_local! {
    static RUNTIME: RefCell<Option<Shared>> = const { RefCell::new(None) };
}

type Shared = Rc<RefCell<Runtime>>;

struct Runtime {
    page: WebPage,
    scheduler: WebScheduler,
    brief: Option<Brief<Element>>,
    observer: Option<IntersectionObserver>,
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Some(runtime) = boot() {
        RUNTIME.with(|slot| *slot.borrow_mut() = Some(runtime));
    }
}

fn boot() -> Option<Shared> {
    let page = WebPage::from_window()?;
    let config = page_config(&page);
    let year = js_sys::Date::new_0().get_full_year() as i32;
    let mut charts = WebCharts::new(page.document.clone());

    let runtime: Shared = Rc::new_cyclic(|weak| {
        RefCell::new(Runtime {
            page,
            scheduler: WebScheduler::new(weak.clone()),
            brief: None,
            observer: None,
        })
    });
    charts.runtime = Rc::downgrade(&runtime);

    let (bindings, cards) = {
        let mut state = runtime.borrow_mut();
        let Runtime {
            page,
            scheduler,
            brief,
            ..
        } = &mut *state;
        let initialized = Brief::init(page, scheduler, &mut charts, &config, year);
        let wiring = (initialized.bindings(), initialized.observations());
        *brief = Some(initialized);
        wiring
    };

    for binding in bindings {
        attach(&runtime, binding);
    }
    let observer = observe(&runtime, config.reveal.threshold, &cards);
    runtime.borrow_mut().observer = observer;
    Some(runtime)
}

/// The `BriefConfig` embedded by the page generator, or defaults
fn page_config(page: &WebPage) -> BriefConfig {
    let Some(script) = page.element_by_id(ids::CONFIG) else {
        return BriefConfig::default();
    };
    serde_json::from_str(&page.text(&script)).unwrap_or_else(|err| {
        warn!(error = %err, "embedded config unreadable, using defaults");
        BriefConfig::default()
    })
}

fn dispatch(runtime: &Shared, msg: Msg<Element>) -> Effect<Element> {
    let effect = {
        // A message raised while the reducer already runs is dropped.
        let Ok(mut state) = runtime.try_borrow_mut() else {
            return Effect::None;
        };
        let Runtime {
            page,
            scheduler,
            brief,
            ..
        } = &mut *state;
        match brief.as_mut() {
            Some(brief) => update(brief, page, scheduler, msg),
            None => Effect::None,
        }
    };
    if let Effect::Unobserve(node) = &effect {
        if let Some(observer) = &runtime.borrow().observer {
            observer.unobserve(node);
        }
    }
    effect
}

fn attach(runtime: &Shared, binding: Binding<Element>) {
    let Binding { node, event } = binding;
    let weak = Rc::downgrade(runtime);
    let target = node.clone();
    let listener = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let Some(runtime) = weak.upgrade() else {
            return;
        };
        let msg = match event {
            EventKind::Click => Msg::Click(target.clone()),
            EventKind::Change => Msg::Change(target.clone()),
            EventKind::KeyDown => match ev.dyn_ref::<KeyboardEvent>() {
                Some(key) => Msg::KeyDown {
                    node: target.clone(),
                    key: key.key(),
                },
                None => return,
            },
        };
        if matches!(dispatch(&runtime, msg), Effect::PreventDefault) {
            ev.prevent_default();
        }
    });
    match node.add_event_listener_with_callback(event.name(), listener.as_ref().unchecked_ref()) {
        Ok(()) => listener.forget(),
        Err(err) => warn!(?err, event = event.name(), "listener not attached"),
    }
}

fn observe(runtime: &Shared, threshold: f64, cards: &[Element]) -> Option<IntersectionObserver> {
    if cards.is_empty() {
        return None;
    }
    let weak = Rc::downgrade(runtime);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let Some(runtime) = weak.upgrade() else {
                return;
            };
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                dispatch(
                    &runtime,
                    Msg::Intersect {
                        node: entry.target(),
                        ratio,
                    },
                );
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                warn!(?err, "intersection observer unavailable");
                return None;
            }
        };
    callback.forget();
    for card in cards {
        observer.observe(card);
    }
    Some(observer)
}

/// The live document
#[derive(Debug, Clone)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl Page for WebPage {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, scope: Option<&Element>, selector: &Selector) -> Vec<Element> {
        let css = selector.to_css();
        let list = match scope {
            Some(scope) => scope.query_selector_all(&css),
            None => self.document.query_selector_all(&css),
        };
        let Ok(list) = list else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_class(&mut self, node: &Element, class: &str, on: bool) {
        let _ = node.class_list().toggle_with_force(class, on);
    }

    fn style(&self, node: &Element, property: &str) -> Option<String> {
        node.dyn_ref::<HtmlElement>()?
            .style()
            .get_property_value(property)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            let _ = element.style().set_property(property, value);
        }
    }

    fn value(&self, node: &Element) -> Option<String> {
        match node.dyn_ref::<HtmlSelectElement>() {
            Some(select) => Some(select.value()),
            None => node.get_attribute("value"),
        }
    }
}

/// `setInterval` timers whose ticks come back through the reducer
struct WebScheduler {
    next_id: u64,
    intervals: HashMap<TimerId, Interval>,
    runtime: Weak<RefCell<Runtime>>,
}

impl WebScheduler {
    fn new(runtime: Weak<RefCell<Runtime>>) -> Self {
        Self {
            next_id: 0,
            intervals: HashMap::new(),
            runtime,
        }
    }
}

impl Scheduler for WebScheduler {
    fn start_interval(&mut self, period: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let runtime = self.runtime.clone();
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX).max(1);
        let interval = Interval::new(millis, move || {
            if let Some(runtime) = runtime.upgrade() {
                dispatch(&runtime, Msg::Tick(id));
            }
        });
        self.intervals.insert(id, interval);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(interval) = self.intervals.remove(&id) {
            interval.cancel();
        }
    }
}

/// Chart.js through its global `Chart` constructor
struct WebCharts {
    document: Document,
    runtime: Weak<RefCell<Runtime>>,
    /// Specs by canvas id, read back by the overlay at draw time
    specs: Rc<RefCell<HashMap<String, Rc<ChartSpec>>>>,
}

impl WebCharts {
    fn new(document: Document) -> Self {
        Self {
            document,
            runtime: Weak::new(),
            specs: Rc::default(),
        }
    }

    fn install_callbacks(&self, canvas_id: &str, config: &JsValue, spec: &Rc<ChartSpec>) {
        if spec.options.scales.y.formatted_ticks {
            let spec = Rc::clone(spec);
            let tick = Closure::<dyn Fn(f64) -> String>::new(move |value: f64| spec.tick_label(value));
            set_path(config, &["options", "scales", "y", "ticks"], "callback", tick.as_ref());
            tick.forget();
        }

        if spec.options.plugins.tooltip.formatted {
            let spec = Rc::clone(spec);
            let label = Closure::<dyn Fn(JsValue) -> String>::new(move |item: JsValue| {
                let index = get(&item, "dataIndex").and_then(|v| v.as_f64()).unwrap_or(-1.0);
                if index < 0.0 {
                    return String::new();
                }
                spec.tooltip_label(index as usize).unwrap_or_default()
            });
            set_path(
                config,
                &["options", "plugins", "tooltip", "callbacks"],
                "label",
                label.as_ref(),
            );
            label.forget();
        }

        if spec.clickable {
            let runtime = self.runtime.clone();
            let canvas_id = canvas_id.to_string();
            let click = Closure::<dyn Fn(JsValue, Array)>::new(move |_event: JsValue, bars: Array| {
                let index = first_bar_index(&bars);
                if let Some(runtime) = runtime.upgrade() {
                    dispatch(
                        &runtime,
                        Msg::ChartClick {
                            canvas_id: canvas_id.clone(),
                            index,
                        },
                    );
                }
            });
            set_path(config, &["options"], "onClick", click.as_ref());
            click.forget();

            let hover = Closure::<dyn Fn(JsValue, Array)>::new(|event: JsValue, bars: Array| {
                let cursor = if bars.length() > 0 { "pointer" } else { "default" };
                let target = get(&event, "native")
                    .and_then(|native| get(&native, "target"))
                    .and_then(|target| target.dyn_into::<HtmlElement>().ok());
                if let Some(target) = target {
                    let _ = target.style().set_property("cursor", cursor);
                }
            });
            set_path(config, &["options"], "onHover", hover.as_ref());
            hover.forget();
        }
    }
}

impl ChartBackend for WebCharts {
    fn is_available(&self) -> bool {
        Reflect::has(&js_sys::global(), &JsValue::from_str("Chart")).unwrap_or(false)
    }

    fn register_plugin(&mut self, plugin: &ValueLabelPlugin) {
        let plugin = *plugin;
        let specs = Rc::clone(&self.specs);
        let draw = Closure::<dyn Fn(JsValue)>::new(move |chart: JsValue| {
            let Some(canvas) = get(&chart, "canvas").and_then(|c| c.dyn_into::<Element>().ok())
            else {
                return;
            };
            let Some(spec) = specs.borrow().get(&canvas.id()).cloned() else {
                return;
            };
            let Some(context) =
                get(&chart, "ctx").and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            else {
                return;
            };
            plugin.after_datasets_draw(&spec, &bar_anchors(&chart), &mut CanvasOverlay(context));
        });

        let object = Object::new();
        let _ = Reflect::set(&object, &"id".into(), &plugin.id().into());
        let _ = Reflect::set(&object, &"afterDatasetsDraw".into(), draw.as_ref());
        draw.forget();
        if let Err(err) = ChartJs::register(&object) {
            warn!(?err, plugin = plugin.id(), "plugin registration failed");
        }
    }

    fn create_chart(&mut self, canvas_id: &str, spec: &ChartSpec) {
        let Some(canvas) = self.document.get_element_by_id(canvas_id) else {
            return;
        };
        let config = match serde_wasm_bindgen::to_value(spec) {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, canvas = canvas_id, "chart config not serializable");
                return;
            }
        };
        let spec = Rc::new(spec.clone());
        self.specs
            .borrow_mut()
            .insert(canvas_id.to_string(), Rc::clone(&spec));
        self.install_callbacks(canvas_id, &config, &spec);
        if let Err(err) = ChartJs::new(&canvas, &config) {
            warn!(?err, canvas = canvas_id, "chart construction failed");
        }
    }
}

struct CanvasOverlay(CanvasRenderingContext2d);

impl OverlayCanvas for CanvasOverlay {
    fn save(&mut self) {
        self.0.save();
    }

    fn restore(&mut self) {
        self.0.restore();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.0.set_fill_style_str(color);
    }

    fn set_font(&mut self, font: &str) {
        self.0.set_font(font);
    }

    fn align_bottom_center(&mut self) {
        self.0.set_text_align("center");
        self.0.set_text_baseline("bottom");
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let _ = self.0.fill_text(text, x, y);
    }
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// Set `key` on the object at `path`, creating missing objects on the way
fn set_path(root: &JsValue, path: &[&str], key: &str, value: &JsValue) {
    let mut target = root.clone();
    for segment in path {
        target = match get(&target, segment) {
            Some(existing) => existing,
            None => {
                let created: JsValue = Object::new().into();
                let _ = Reflect::set(&target, &JsValue::from_str(segment), &created);
                created
            }
        };
    }
    let _ = Reflect::set(&target, &JsValue::from_str(key), value);
}

fn first_bar_index(bars: &Array) -> Option<usize> {
    if bars.length() == 0 {
        return None;
    }
    let index = get(&bars.get(0), "index")?.as_f64()?;
    (index >= 0.0).then_some(index as usize)
}

/// Tooltip anchor (top center) of every bar in the first dataset
fn bar_anchors(chart: &JsValue) -> Vec<BarAnchor> {
    let meta = get(chart, "getDatasetMeta")
        .and_then(|f| f.dyn_into::<Function>().ok())
        .and_then(|f| f.call1(chart, &JsValue::from_f64(0.0)).ok());
    let Some(bars) = meta.and_then(|meta| get(&meta, "data")) else {
        return Vec::new();
    };
    Array::from(&bars)
        .iter()
        .filter_map(|bar| {
            let position = get(&bar, "tooltipPosition")
                .and_then(|f| f.dyn_into::<Function>().ok())
                .and_then(|f| f.call0(&bar).ok())
                .unwrap_or(bar);
            Some(BarAnchor {
                x: get(&position, "x")?.as_f64()?,
                y: get(&position, "y")?.as_f64()?,
            })
        })
        .collect()
}
