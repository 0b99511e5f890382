//! Paintbrush cursor: a dot and bristled ring that trail the pointer.
//!
//! `mousemove` only records the pointer; the visual follow runs on its own
//! animation-frame loop so DOM writes happen once per frame. The ring picks
//! up context classes while hovering interactive elements, and the whole
//! cursor hides after five seconds without movement.

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent};

const NUM_BRISTLES: usize = 6;
const BRISTLE_COLORS: [&str; 5] = ["#333", "#555", "#777", "#999", "#bbb"];
const BRISTLE_RADIUS: f64 = 8.0;
const IDLE_HIDE_MS: i32 = 5000;

struct CursorState {
    dot: HtmlElement,
    ring: HtmlElement,
    bristles: Vec<HtmlElement>,
    x: Cell<f64>,
    y: Cell<f64>,
    prev_x: Cell<f64>,
    prev_y: Cell<f64>,
    hidden: Cell<bool>,
    idle_timer: Cell<Option<i32>>,
    idle_callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;

    let (dot, ring, bristles) = build_elements(document)?;
    let state = Rc::new(CursorState {
        dot,
        ring,
        bristles,
        x: Cell::new(-100.0),
        y: Cell::new(-100.0),
        prev_x: Cell::new(-100.0),
        prev_y: Cell::new(-100.0),
        hidden: Cell::new(false),
        idle_timer: Cell::new(None),
        idle_callback: RefCell::new(None),
    });

    // Touch devices keep the native cursor.
    if is_touch_device(&window) {
        state.dot.style().set_property("display", "none")?;
        state.ring.style().set_property("display", "none")?;
        return Ok(());
    }

    let idle = {
        let state = state.clone();
        Closure::wrap(Box::new(move || state.hide_idle()) as Box<dyn FnMut()>)
    };
    *state.idle_callback.borrow_mut() = Some(idle);

    wire_events(document, &state)?;
    wire_hover_classes(document, &state.ring)?;

    // Follow loop; `f` holds the frame closure so it can re-arm itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    {
        let state = state.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            state.follow();
            if let Some(window) = web_sys::window() {
                if let Some(callback) = f.borrow().as_ref() {
                    let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
                }
            }
        }) as Box<dyn FnMut()>));
    }
    if let Some(callback) = g.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }

    Ok(())
}

fn is_touch_device(window: &web_sys::Window) -> bool {
    let has_touch_start =
        js_sys::Reflect::has(window.as_ref(), &"ontouchstart".into()).unwrap_or(false);
    has_touch_start || window.navigator().max_touch_points() > 0
}

fn build_elements(
    document: &Document,
) -> Result<(HtmlElement, HtmlElement, Vec<HtmlElement>), JsValue> {
    let container: HtmlElement = document.create_element("div")?.dyn_into()?;
    container.set_class_name("cursor-container");

    let ring: HtmlElement = document.create_element("div")?.dyn_into()?;
    ring.set_class_name("cursor-ring");
    container.append_child(&ring)?;

    let mut bristles = Vec::with_capacity(NUM_BRISTLES);
    for i in 0..NUM_BRISTLES {
        let bristle: HtmlElement = document.create_element("div")?.dyn_into()?;
        bristle.set_class_name("cursor-bristle");
        bristle.style().set_property("width", "2px")?;
        bristle.style().set_property("height", "15px")?;
        bristle
            .style()
            .set_property("background-color", BRISTLE_COLORS[i % BRISTLE_COLORS.len()])?;
        let angle = (i as f64 / NUM_BRISTLES as f64) * TAU;
        let x = angle.cos() * BRISTLE_RADIUS;
        let y = angle.sin() * BRISTLE_RADIUS;
        bristle.style().set_property(
            "transform",
            &format!("translate({x}px, {y}px) rotate({angle}rad)"),
        )?;
        ring.append_child(&bristle)?;
        bristles.push(bristle);
    }

    let dot: HtmlElement = document.create_element("div")?.dyn_into()?;
    dot.set_class_name("cursor-dot");
    container.append_child(&dot)?;

    document.body().ok_or("no body")?.append_child(&container)?;
    Ok((dot, ring, bristles))
}

fn wire_events(document: &Document, state: &Rc<CursorState>) -> Result<(), JsValue> {
    let on_move = {
        let state = state.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            state.prev_x.set(state.x.get());
            state.prev_y.set(state.y.get());
            state.x.set(event.client_x() as f64);
            state.y.set(event.client_y() as f64);
            let _ = state.dot.style().set_property("opacity", "1");
            let _ = state.ring.style().set_property("opacity", "1");
            state.reset_idle_timer();
        }) as Box<dyn FnMut(_)>)
    };
    document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let on_enter = {
        let state = state.clone();
        Closure::wrap(Box::new(move || state.show()) as Box<dyn FnMut()>)
    };
    document.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
    on_enter.forget();

    let on_leave = {
        let state = state.clone();
        Closure::wrap(Box::new(move || {
            let _ = state.dot.style().set_property("opacity", "0");
            let _ = state.ring.style().set_property("opacity", "0");
        }) as Box<dyn FnMut()>)
    };
    document.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
    on_leave.forget();

    let on_down = {
        let state = state.clone();
        Closure::wrap(Box::new(move || {
            let _ = state.dot.class_list().add_1("cursor-active");
            let _ = state.ring.class_list().add_1("cursor-active");
        }) as Box<dyn FnMut()>)
    };
    document.add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())?;
    on_down.forget();

    let on_up = {
        let state = state.clone();
        Closure::wrap(Box::new(move || {
            let _ = state.dot.class_list().remove_1("cursor-active");
            let _ = state.ring.class_list().remove_1("cursor-active");
        }) as Box<dyn FnMut()>)
    };
    document.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())?;
    on_up.forget();

    Ok(())
}

/// Context classes while hovering interactive elements, and no ring at all
/// while a form field has focus.
fn wire_hover_classes(document: &Document, ring: &HtmlElement) -> Result<(), JsValue> {
    hover_class(document, ring, "button, .btn", "cursor-button")?;
    hover_class(document, ring, "a, .nav-link", "cursor-link")?;
    hover_class(document, ring, ".work-image, img", "cursor-image")?;
    hover_class(document, ring, ".paint-drop, #paint-canvas", "cursor-paint")?;

    let fields = document.query_selector_all("input, textarea")?;
    for i in 0..fields.length() {
        let Some(field) = fields.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let on_focus = {
            let ring = ring.clone();
            Closure::wrap(Box::new(move || {
                let _ = ring.class_list().add_1("cursor-hidden");
            }) as Box<dyn FnMut()>)
        };
        field.add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref())?;
        on_focus.forget();
        let on_blur = {
            let ring = ring.clone();
            Closure::wrap(Box::new(move || {
                let _ = ring.class_list().remove_1("cursor-hidden");
            }) as Box<dyn FnMut()>)
        };
        field.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;
        on_blur.forget();
    }
    Ok(())
}

fn hover_class(
    document: &Document,
    ring: &HtmlElement,
    selector: &str,
    class: &'static str,
) -> Result<(), JsValue> {
    let elements = document.query_selector_all(selector)?;
    for i in 0..elements.length() {
        let Some(element) = elements.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let on_enter = {
            let ring = ring.clone();
            Closure::wrap(Box::new(move || {
                let _ = ring.class_list().add_1(class);
            }) as Box<dyn FnMut()>)
        };
        element.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
        on_enter.forget();
        let on_leave = {
            let ring = ring.clone();
            Closure::wrap(Box::new(move || {
                let _ = ring.class_list().remove_1(class);
            }) as Box<dyn FnMut()>)
        };
        element.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
        on_leave.forget();
    }
    Ok(())
}

impl CursorState {
    /// One frame of the follow loop: snap the dot and ring to the pointer
    /// and bend the bristles toward the movement direction with a touch of
    /// scatter.
    fn follow(&self) {
        let x = self.x.get();
        let y = self.y.get();

        let _ = self
            .dot
            .style()
            .set_property("transform", &format!("translate({x}px, {y}px)"));

        let ring_size = web_sys::window()
            .and_then(|w| w.get_computed_style(&self.ring).ok().flatten())
            .and_then(|s| s.get_property_value("width").ok())
            .and_then(|w| w.trim_end_matches("px").parse::<f64>().ok())
            .unwrap_or(30.0);
        let _ = self.ring.style().set_property(
            "transform",
            &format!(
                "translate({}px, {}px)",
                x - ring_size / 2.0,
                y - ring_size / 2.0
            ),
        );

        let dir_x = x - self.prev_x.get();
        let dir_y = y - self.prev_y.get();
        let bend = ((dir_x * dir_x + dir_y * dir_y).sqrt() * 0.1).min(3.0);

        for (i, bristle) in self.bristles.iter().enumerate() {
            let angle = (i as f64 / NUM_BRISTLES as f64) * TAU;
            let base_x = angle.cos() * BRISTLE_RADIUS;
            let base_y = angle.sin() * BRISTLE_RADIUS;
            let scatter_x = (js_sys::Math::random() - 0.5) * 2.0;
            let scatter_y = (js_sys::Math::random() - 0.5) * 2.0;
            let _ = bristle.style().set_property(
                "transform",
                &format!(
                    "translate({}px, {}px) rotate({angle}rad)",
                    base_x + scatter_x + dir_x * bend,
                    base_y + scatter_y + dir_y * bend,
                ),
            );
        }
    }

    fn reset_idle_timer(&self) {
        let Some(window) = web_sys::window() else { return };
        if let Some(handle) = self.idle_timer.take() {
            window.clear_timeout_with_handle(handle);
        }
        if self.hidden.get() {
            self.show();
        }
        let callback = self.idle_callback.borrow();
        if let Some(callback) = callback.as_ref() {
            if let Ok(handle) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                IDLE_HIDE_MS,
            ) {
                self.idle_timer.set(Some(handle));
            }
        }
    }

    fn hide_idle(&self) {
        self.hidden.set(true);
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().add_1("cursor-inactive");
        }
        let _ = self.ring.class_list().add_1("cursor-hidden");
    }

    fn show(&self) {
        self.hidden.set(false);
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().remove_1("cursor-inactive");
        }
        let _ = self.ring.class_list().remove_1("cursor-hidden");
    }
}
