//! Page-transition overlay: an entrance sweep on load and an exit sweep that
//! ends in actual navigation. The overlay element is created on demand; all
//! visual movement is CSS driven, this module only toggles classes and
//! inline styles on a timer.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

const ENTRANCE_SWEEP_MS: i32 = 1000;
const ENTRANCE_CONTENT_MS: i32 = 300;
const EXIT_MS: i32 = 500;

pub fn init(document: &Document) -> Result<(), JsValue> {
    ensure_overlay(document)?;
    animate_entrance(document)?;
    Ok(())
}

fn ensure_overlay(document: &Document) -> Result<Element, JsValue> {
    if let Some(existing) = document.get_element_by_id("page-transition-overlay") {
        return Ok(existing);
    }
    let overlay = document.create_element("div")?;
    overlay.set_id("page-transition-overlay");
    overlay.set_class_name("page-transition-overlay");
    document.body().ok_or("no body")?.append_child(&overlay)?;
    Ok(overlay)
}

fn animate_entrance(document: &Document) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;

    if let Some(overlay) = document.get_element_by_id("page-transition-overlay") {
        overlay.class_list().add_1("active")?;
        let settle = {
            let overlay = overlay.clone();
            Closure::wrap(Box::new(move || {
                let _ = overlay.class_list().remove_1("active");
            }) as Box<dyn FnMut()>)
        };
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            settle.as_ref().unchecked_ref(),
            ENTRANCE_SWEEP_MS,
        )?;
        settle.forget();
    }

    if let Some(main) = document
        .query_selector("main")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        main.style().set_property("opacity", "0")?;
        main.style().set_property("transform", "translateY(20px)")?;
        let reveal = {
            let main = main.clone();
            Closure::wrap(Box::new(move || {
                let _ = main.style().set_property("opacity", "1");
                let _ = main.style().set_property("transform", "translateY(0)");
            }) as Box<dyn FnMut()>)
        };
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            reveal.as_ref().unchecked_ref(),
            ENTRANCE_CONTENT_MS,
        )?;
        reveal.forget();
    }

    Ok(())
}

/// Plays the exit sweep, then navigates. Without an overlay on the page the
/// navigation happens immediately.
pub fn exit_to(url: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    let Some(overlay) = document.get_element_by_id("page-transition-overlay") else {
        let _ = window.location().set_href(url);
        return;
    };

    if let Some(main) = document
        .query_selector("main")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = main.style().set_property("opacity", "0");
        let _ = main.style().set_property("transform", "translateY(-20px)");
    }

    let _ = overlay.class_list().add_2("reverse", "active");

    let url = url.to_string();
    let navigate = Closure::wrap(Box::new(move || {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&url);
        }
    }) as Box<dyn FnMut()>);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        navigate.as_ref().unchecked_ref(),
        EXIT_MS,
    );
    navigate.forget();
}
