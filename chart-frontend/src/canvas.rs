use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent};

use crate::layout::{hit_test, layout_chart, ArcSegment, ChartLayout, Rect};
use crate::render::{render_chart, Hover, RendererBackend, TextMeasure, TextStyle};
use crate::slot::ChartInstance;
use crate::spec::ChartSpec;
use crate::ChartError;

pub struct CanvasBackend {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
}

impl CanvasBackend {
    fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self {
            canvas,
            ctx,
            dpr: 1.0,
        }
    }

    fn set_device_pixel_ratio(&mut self, dpr: f64) {
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    }

    fn clear(&self) {
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }
}

impl TextMeasure for CanvasBackend {
    fn measure_text(&mut self, text: &str, font: &str) -> f64 {
        self.ctx.set_font(font);
        self.ctx
            .measure_text(text)
            .map(|m| m.width())
            .unwrap_or(text.chars().count() as f64 * 7.0)
    }
}

impl RendererBackend for CanvasBackend {
    fn begin_frame(&mut self, width: f64, height: f64) {
        let px_w = (width * self.dpr).round() as u32;
        let px_h = (height * self.dpr).round() as u32;
        if self.canvas.width() != px_w {
            self.canvas.set_width(px_w);
        }
        if self.canvas.height() != px_h {
            self.canvas.set_height(px_h);
        }
        self.clear();
        let _ = self
            .ctx
            .set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
    }

    fn fill_arc(&mut self, seg: &ArcSegment, outer_r: f64, fill: &str, stroke: &str, line_width: f64) {
        let ctx = &self.ctx;
        ctx.begin_path();
        if ctx.arc(seg.cx, seg.cy, outer_r, seg.start, seg.end).is_err() {
            return;
        }
        let _ = ctx.arc_with_anticlockwise(seg.cx, seg.cy, seg.inner_r, seg.end, seg.start, true);
        ctx.close_path();
        ctx.set_fill_style_str(fill);
        ctx.fill();
        if line_width > 0.0 {
            ctx.set_line_width(line_width);
            ctx.set_stroke_style_str(stroke);
            ctx.stroke();
        }
    }

    fn fill_rect(&mut self, rect: &Rect, fill: &str, stroke: Option<&str>, line_width: f64) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(fill);
        ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
        if let Some(stroke) = stroke.filter(|_| line_width > 0.0) {
            ctx.set_line_width(line_width);
            ctx.set_stroke_style_str(stroke);
            ctx.stroke_rect(rect.x, rect.y, rect.w, rect.h);
        }
    }

    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(width);
        ctx.begin_path();
        ctx.move_to(from.0, from.1);
        ctx.line_to(to.0, to.1);
        ctx.stroke();
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle<'_>) {
        let ctx = &self.ctx;
        ctx.set_font(style.font);
        ctx.set_fill_style_str(style.color);
        ctx.set_text_align(style.align.as_css());
        ctx.set_text_baseline("middle");
        let _ = ctx.fill_text(text, x, y);
    }
}

struct ChartInner {
    spec: ChartSpec,
    backend: CanvasBackend,
    layout: ChartLayout,
    hover: Option<Hover>,
    destroyed: bool,
}

impl ChartInner {
    /// Fits the drawing buffer to the canvas container and redraws.
    fn resize_to_container(&mut self) {
        if self.destroyed {
            return;
        }
        let canvas = &self.backend.canvas;
        let rect = canvas
            .parent_element()
            .map(|p| p.get_bounding_client_rect())
            .unwrap_or_else(|| canvas.get_bounding_client_rect());
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        self.backend.set_device_pixel_ratio(dpr);
        self.layout = layout_chart(&self.spec, rect.width(), rect.height(), &mut self.backend);
        self.hover = None;
        self.redraw();
    }

    fn redraw(&mut self) {
        if self.destroyed {
            return;
        }
        render_chart(&mut self.backend, &self.spec, &self.layout, self.hover);
    }

    fn pointer_moved(&mut self, x: f64, y: f64) {
        if self.destroyed {
            return;
        }
        let next = hit_test(&self.layout, x, y).map(|index| Hover { index, x, y });
        if next == self.hover {
            return;
        }
        self.hover = next;
        self.redraw();
    }

    fn pointer_left(&mut self) {
        if self.hover.take().is_some() {
            self.redraw();
        }
    }
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, ChartError> {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            event,
            callback,
        })
    }

    fn detach(self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// A chart drawn on one canvas, with its hover and resize listeners.
pub struct ChartHandle {
    inner: Rc<RefCell<ChartInner>>,
    listeners: Vec<Listener>,
}

impl ChartHandle {
    pub fn new(canvas: &HtmlCanvasElement, spec: ChartSpec) -> Result<ChartHandle, ChartError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(ChartError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::NoContext)?;
        let window = web_sys::window().ok_or(ChartError::NoWindow)?;

        let mut backend = CanvasBackend::new(canvas.clone(), context);
        let layout = layout_chart(&spec, 1.0, 1.0, &mut backend);
        let inner = Rc::new(RefCell::new(ChartInner {
            spec,
            backend,
            layout,
            hover: None,
            destroyed: false,
        }));
        inner.borrow_mut().resize_to_container();

        let mut handle = ChartHandle {
            inner,
            listeners: Vec::with_capacity(3),
        };

        let canvas_target: EventTarget = canvas.clone().into();
        {
            let inner = handle.inner.clone();
            let canvas = canvas.clone();
            let cb = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = canvas.get_bounding_client_rect();
                let x = mouse.client_x() as f64 - rect.left();
                let y = mouse.client_y() as f64 - rect.top();
                inner.borrow_mut().pointer_moved(x, y);
            }));
            handle
                .listeners
                .push(Listener::attach(canvas_target.clone(), "mousemove", cb)?);
        }
        {
            let inner = handle.inner.clone();
            let cb = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_event: Event| {
                inner.borrow_mut().pointer_left();
            }));
            handle
                .listeners
                .push(Listener::attach(canvas_target, "mouseleave", cb)?);
        }
        {
            let inner = handle.inner.clone();
            let cb = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_event: Event| {
                inner.borrow_mut().resize_to_container();
            }));
            handle
                .listeners
                .push(Listener::attach(window.into(), "resize", cb)?);
        }

        info!(kind = ?handle.inner.borrow().spec.kind, "chart built");
        Ok(handle)
    }

    /// Removes listeners and clears the canvas. Safe to call more than once.
    fn release(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
        let mut inner = self.inner.borrow_mut();
        if !inner.destroyed {
            inner.destroyed = true;
            inner.hover = None;
            inner.backend.clear();
            debug!(kind = ?inner.spec.kind, "chart destroyed");
        }
    }
}

impl ChartInstance for ChartHandle {
    fn destroy(mut self) {
        self.release();
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        self.release();
    }
}
