//! Scroll-triggered counters and charts.
//!
//! One `IntersectionObserver` watches every counter and both chart canvases.
//! Each element fires once: counters count up, charts are (re)built into the
//! view's chart slots. Dropping or tearing down the [`Activator`] disconnects
//! the observer, cancels running counters and destroys live charts.

use std::cell::RefCell;
use std::rc::Rc;

use activator_core::{
    parse_counter_target, ActivatorConfig, CounterAnimation, CounterStart, VisibilityRegistry,
};
use chart_frontend::{ChartHandle, ChartSlot, ChartSpec};
use gloo_timers::future::IntervalStream;
use js_sys::{Array, Reflect};
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, HtmlCanvasElement, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::resources::{run_counter, ActivatorResources};
use crate::ActivatorError;

const CONFIG_GLOBAL: &str = "HORTAS_ACTIVATOR_CONFIG";

/// Reads overrides from `window.HORTAS_ACTIVATOR_CONFIG` (a JSON string).
pub fn activator_config() -> ActivatorConfig {
    let raw = Reflect::get(&js_sys::global(), &JsValue::from_str(CONFIG_GLOBAL))
        .ok()
        .and_then(|v| v.as_string());
    let Some(raw) = raw else {
        return ActivatorConfig::default();
    };
    ActivatorConfig::from_json(&raw).unwrap_or_else(|err| {
        warn!(%err, "ignoring {CONFIG_GLOBAL}");
        ActivatorConfig::default()
    })
}

enum Trigger {
    Counter(HtmlElement),
    ProductionChart,
    BenefitsChart,
}

/// Chart canvases handed over by the view. Either may be missing.
pub struct ActivatorTargets {
    pub production: Option<HtmlCanvasElement>,
    pub benefits: Option<HtmlCanvasElement>,
}

struct ActivatorState {
    config: ActivatorConfig,
    registry: VisibilityRegistry<Element, Trigger>,
    targets: ActivatorTargets,
    resources: ActivatorResources<ChartHandle>,
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct Activator {
    state: Rc<RefCell<ActivatorState>>,
    observer: IntersectionObserver,
    _callback: EntriesCallback,
    torn_down: bool,
}

impl Activator {
    pub fn install(
        config: ActivatorConfig,
        targets: ActivatorTargets,
    ) -> Result<Activator, ActivatorError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ActivatorError::NoDocument)?;

        let state = Rc::new(RefCell::new(ActivatorState {
            registry: VisibilityRegistry::new(config.threshold),
            config,
            targets,
            resources: ActivatorResources::new(),
        }));

        let callback: EntriesCallback = {
            let state = state.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                on_entries(&state, entries, &observer);
            }))
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(state.borrow().config.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let selector = state.borrow().config.counter_selector();
        let nodes = document.query_selector_all(&selector)?;
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            watch(&state, &observer, el.clone().into(), Trigger::Counter(el));
        }

        let (production, benefits) = {
            let st = state.borrow();
            (st.targets.production.clone(), st.targets.benefits.clone())
        };
        match production {
            Some(canvas) => watch(&state, &observer, canvas.into(), Trigger::ProductionChart),
            None => debug!("production chart canvas not mounted"),
        }
        match benefits {
            Some(canvas) => watch(&state, &observer, canvas.into(), Trigger::BenefitsChart),
            None => debug!("benefits chart canvas not mounted"),
        }

        debug!(watched = state.borrow().registry.len(), "activator installed");
        Ok(Activator {
            state,
            observer,
            _callback: callback,
            torn_down: false,
        })
    }

    /// Disconnects the observer, stops counters and destroys live charts.
    pub fn teardown(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.observer.disconnect();

        let mut st = self.state.borrow_mut();
        let unfired = st.registry.disconnect().len();
        let released = st.resources.release();
        debug!(
            unfired,
            counters = released.counters,
            charts = released.charts,
            "activator torn down"
        );
    }
}

impl Drop for Activator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn watch(
    state: &Rc<RefCell<ActivatorState>>,
    observer: &IntersectionObserver,
    element: Element,
    trigger: Trigger,
) {
    if state.borrow_mut().registry.register(element.clone(), trigger) {
        observer.observe(&element);
    }
}

fn on_entries(state: &Rc<RefCell<ActivatorState>>, entries: Array, observer: &IntersectionObserver) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        let target = entry.target();
        let fired = state.borrow_mut().registry.on_visibility(
            &target,
            entry.is_intersecting(),
            entry.intersection_ratio(),
        );
        if let Some(trigger) = fired {
            observer.unobserve(&target);
            fire(state, trigger);
        }
    }
}

fn fire(state: &Rc<RefCell<ActivatorState>>, trigger: Trigger) {
    match trigger {
        Trigger::Counter(el) => start_counter(state, el),
        Trigger::ProductionChart => {
            let st = &mut *state.borrow_mut();
            rebuild_chart(
                &mut st.resources.production,
                st.targets.production.as_ref(),
                ChartSpec::production_distribution(),
            );
        }
        Trigger::BenefitsChart => {
            let st = &mut *state.borrow_mut();
            rebuild_chart(
                &mut st.resources.benefits,
                st.targets.benefits.as_ref(),
                ChartSpec::ai_benefits(),
            );
        }
    }
}

fn rebuild_chart(
    slot: &mut ChartSlot<ChartHandle>,
    canvas: Option<&HtmlCanvasElement>,
    spec: ChartSpec,
) {
    let Some(canvas) = canvas else {
        return;
    };
    if let Err(err) = slot.rebuild(|| ChartHandle::new(canvas, spec)) {
        warn!(%err, "chart skipped");
    }
}

fn start_counter(state: &Rc<RefCell<ActivatorState>>, el: HtmlElement) {
    let (attribute, duration) = {
        let st = state.borrow();
        (st.config.counter_attribute.clone(), st.config.counter_duration_ms)
    };
    let goal = parse_counter_target(el.get_attribute(&attribute).as_deref());

    let (animation, step_ms) = match CounterAnimation::start(goal, duration) {
        CounterStart::Immediate(text) => {
            el.set_inner_text(&text);
            return;
        }
        CounterStart::Animate { animation, step_ms } => (animation, step_ms),
    };
    debug!(goal, step_ms, "counter started");

    let counter = run_counter(IntervalStream::new(step_ms), animation, move |text| {
        el.set_inner_text(text)
    });
    let (id, task) = state.borrow_mut().resources.track_counter(counter);
    let state = Rc::downgrade(state);
    spawn_local(async move {
        if task.await.is_ok() {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().resources.counter_finished(id);
            }
        }
    });
}
