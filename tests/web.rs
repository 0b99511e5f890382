#![cfg(target_arch = "wasm32")]

use portfolio_wasm::Paint;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn remove_paint_canvas(document: &web_sys::Document) {
    if let Some(existing) = document.get_element_by_id("paint-canvas") {
        existing.remove();
    }
}

fn install_paint_canvas(document: &web_sys::Document) {
    remove_paint_canvas(document);
    let canvas: web_sys::HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_id("paint-canvas");
    document.body().unwrap().append_child(&canvas).unwrap();
}

#[wasm_bindgen_test]
fn paint_is_disabled_without_canvas() {
    let document = document();
    remove_paint_canvas(&document);

    let paint = Paint::init(&document).unwrap();
    assert!(!paint.is_enabled());

    // Triggers on a disabled handle are silent no-ops.
    paint.burst(10.0, 10.0, "home");
    assert_eq!(paint.particle_count(), 0);
}

#[wasm_bindgen_test]
fn burst_populates_store_within_structural_bounds() {
    let document = document();
    install_paint_canvas(&document);

    let paint = Paint::init(&document).unwrap();
    assert!(paint.is_enabled());

    // about: 15 secondaries, so 16..=31 particles.
    paint.burst(100.0, 100.0, "about");
    let count = paint.particle_count();
    assert!((16..=31).contains(&count), "got {count}");
}

#[wasm_bindgen_test]
fn new_burst_replaces_the_previous_store() {
    let document = document();
    install_paint_canvas(&document);

    let paint = Paint::init(&document).unwrap();
    paint.burst(100.0, 100.0, "about");
    assert!(paint.particle_count() >= 16);

    // menu: 5 secondaries, so at most 11 particles. Seeing a count in that
    // range proves the first burst's store was discarded wholesale.
    paint.burst(50.0, 50.0, "menu");
    let count = paint.particle_count();
    assert!((6..=11).contains(&count), "got {count}");
}

#[wasm_bindgen_test]
fn unknown_style_key_falls_back_to_default() {
    let document = document();
    install_paint_canvas(&document);

    let paint = Paint::init(&document).unwrap();
    paint.burst(0.0, 0.0, "no-such-style");
    let count = paint.particle_count();
    // default profile: 10 secondaries.
    assert!((11..=21).contains(&count), "got {count}");
}
