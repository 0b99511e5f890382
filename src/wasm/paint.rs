//! Paint canvas: burst controller and the per-frame render loop.
//!
//! Owns the full-viewport `#paint-canvas`, the store of the current burst's
//! particles and the pending animation-frame handle. At most one render loop
//! is live; triggering a new burst cancels the previous frame callback, so a
//! new navigation click always wins over an in-progress animation.

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{console, CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::splatter::{self, NavStyle, Particle, Shape};

/// Handle to the splatter subsystem. Cheap to clone; all clones share one
/// canvas and one particle store. When the canvas is missing from the page
/// the handle is inert and every trigger is a silent no-op.
#[derive(Clone)]
pub struct Paint {
    inner: Option<Rc<PaintState>>,
}

struct PaintState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    drops: RefCell<Vec<Particle>>,
    /// Pending `requestAnimationFrame` handle, if a loop is armed.
    frame: Cell<Option<i32>>,
    /// The self-re-arming frame callback. Stored here so the closure can be
    /// re-scheduled from within itself.
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Paint {
    /// Looks up the paint canvas and wires the resize listener. A missing
    /// canvas disables the effect (logged, not an error).
    pub fn init(document: &Document) -> Result<Paint, JsValue> {
        let Some(element) = document.get_element_by_id("paint-canvas") else {
            console::error_1(&"Paint canvas not found".into());
            return Ok(Paint { inner: None });
        };
        let canvas: HtmlCanvasElement = element.dyn_into()?;
        fit_to_window(&canvas);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;

        let resize_closure = {
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move || fit_to_window(&canvas)) as Box<dyn FnMut()>)
        };
        web_sys::window()
            .ok_or("no window")?
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
        resize_closure.forget();

        let state = Rc::new(PaintState {
            canvas,
            ctx,
            drops: RefCell::new(Vec::new()),
            frame: Cell::new(None),
            tick: RefCell::new(None),
        });
        let tick = {
            let state = state.clone();
            Closure::wrap(Box::new(move || state.frame_step()) as Box<dyn FnMut()>)
        };
        *state.tick.borrow_mut() = Some(tick);

        Ok(Paint { inner: Some(state) })
    }

    /// Starts a splatter burst at `(x, y)` styled by the navigation key.
    /// Cancels any in-flight animation first.
    pub fn burst(&self, x: f64, y: f64, style_key: &str) {
        if let Some(state) = &self.inner {
            state.burst(x, y, style_key);
        }
    }

    /// Whether the canvas was found and the effect is active.
    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Number of particles in the current store (live or fading).
    pub fn particle_count(&self) -> usize {
        self.inner
            .as_ref()
            .map(|state| state.drops.borrow().len())
            .unwrap_or(0)
    }
}

impl PaintState {
    fn burst(&self, x: f64, y: f64, style_key: &str) {
        // A fired handle is consumed by the browser; cancelling it anyway is
        // harmless, so no extra bookkeeping is needed here.
        if let Some(handle) = self.frame.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        self.clear();

        let style = NavStyle::from_key(style_key);
        *self.drops.borrow_mut() =
            splatter::create_burst((x, y), style, &mut js_sys::Math::random);

        self.arm();
    }

    /// One animation frame: clear, draw every live particle, advance, and
    /// re-arm while anything is still visible. When the burst has fully
    /// faded the surface is cleared once more and the loop goes idle.
    fn frame_step(&self) {
        self.clear();
        let now = js_sys::Date::now();
        let live = {
            let mut drops = self.drops.borrow_mut();
            splatter::run_frame(&mut drops, |drop| self.draw(drop, now))
        };
        if live {
            self.arm();
        } else {
            self.clear();
            self.frame.set(None);
        }
    }

    fn arm(&self) {
        let tick = self.tick.borrow();
        let Some(callback) = tick.as_ref() else { return };
        let Some(window) = web_sys::window() else { return };
        if let Ok(handle) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            self.frame.set(Some(handle));
        }
    }

    fn clear(&self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn draw(&self, drop: &Particle, now: f64) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(drop.alpha);
        ctx.set_fill_style_str(drop.color);
        match drop.shape {
            Shape::Disc => {
                let (dx, dy) = splatter::disc_offset(drop.wobble, now);
                ctx.begin_path();
                let _ = ctx.arc(drop.x + dx, drop.y + dy, drop.radius, 0.0, TAU);
                ctx.fill();
            }
            Shape::Blob { .. } => {
                let path = splatter::blob_path(drop, now);
                ctx.begin_path();
                ctx.move_to(path.start.0, path.start.1);
                for segment in &path.segments {
                    ctx.quadratic_curve_to(
                        segment.ctrl.0,
                        segment.ctrl.1,
                        segment.to.0,
                        segment.to.1,
                    );
                }
                ctx.close_path();
                ctx.fill();
            }
        }
        ctx.restore();
    }
}

fn fit_to_window(canvas: &HtmlCanvasElement) {
    let Some(window) = web_sys::window() else { return };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}
