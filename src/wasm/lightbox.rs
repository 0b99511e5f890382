//! Full-screen lightbox for artwork images. Clicking a `.work-image` card
//! opens its CSS background image in an overlay; close via the button, the
//! backdrop or Escape. Page scrolling is suspended while open.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, KeyboardEvent, MouseEvent};

const FADE_IN_DELAY_MS: i32 = 10;
const FADE_OUT_MS: i32 = 300;

pub fn init(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("lightbox-container").is_none() {
        build_elements(document)?;
    }

    let images = document.query_selector_all(".work-image")?;
    for i in 0..images.length() {
        let Some(image) = images.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let on_click = {
            let image = image.clone();
            Closure::wrap(Box::new(move || {
                if let Some(url) = background_image_url(&image) {
                    open(&url);
                }
            }) as Box<dyn FnMut()>)
        };
        image.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

fn build_elements(document: &Document) -> Result<(), JsValue> {
    let container: HtmlElement = document.create_element("div")?.dyn_into()?;
    container.set_id("lightbox-container");
    container.set_class_name("lightbox-container");

    let image: HtmlImageElement = document.create_element("img")?.dyn_into()?;
    image.set_id("lightbox-image");
    image.set_class_name("lightbox-image");
    container.append_child(&image)?;

    let close_button: HtmlElement = document.create_element("button")?.dyn_into()?;
    close_button.set_class_name("lightbox-close");
    close_button.set_inner_html("&times;");
    let on_close = Closure::wrap(Box::new(close) as Box<dyn FnMut()>);
    close_button.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
    on_close.forget();
    container.append_child(&close_button)?;

    document.body().ok_or("no body")?.append_child(&container)?;

    // Clicks on the backdrop itself close; clicks on the image do not.
    let on_backdrop = Closure::wrap(Box::new(move |event: MouseEvent| {
        let hit_backdrop = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .map(|el| el.id() == "lightbox-container")
            .unwrap_or(false);
        if hit_backdrop {
            close();
        }
    }) as Box<dyn FnMut(_)>);
    container.add_event_listener_with_callback("click", on_backdrop.as_ref().unchecked_ref())?;
    on_backdrop.forget();

    let on_key = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if event.key() == "Escape" {
            close();
        }
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    Ok(())
}

fn open(url: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(container) = document
        .get_element_by_id("lightbox-container")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    if let Some(image) = document
        .get_element_by_id("lightbox-image")
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    {
        image.set_src(url);
    }

    let _ = container.style().set_property("display", "flex");
    // Fade in on the next tick so the display change lands first.
    let fade_in = {
        let container = container.clone();
        Closure::wrap(Box::new(move || {
            let _ = container.style().set_property("opacity", "1");
        }) as Box<dyn FnMut()>)
    };
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        fade_in.as_ref().unchecked_ref(),
        FADE_IN_DELAY_MS,
    );
    fade_in.forget();

    if let Some(body) = document.body() {
        let _ = body.style().set_property("overflow", "hidden");
    }
}

fn close() {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(container) = document
        .get_element_by_id("lightbox-container")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let _ = container.style().set_property("opacity", "0");
    let hide = {
        let container = container.clone();
        Closure::wrap(Box::new(move || {
            let _ = container.style().set_property("display", "none");
        }) as Box<dyn FnMut()>)
    };
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        hide.as_ref().unchecked_ref(),
        FADE_OUT_MS,
    );
    hide.forget();

    if let Some(body) = document.body() {
        let _ = body.style().remove_property("overflow");
    }
}

/// Pulls the URL out of a computed `background-image: url(...)` value.
fn background_image_url(element: &HtmlElement) -> Option<String> {
    let style = web_sys::window()?.get_computed_style(element).ok()??;
    let value = style.get_property_value("background-image").ok()?;
    if value.is_empty() || value == "none" {
        return None;
    }
    let inner = value
        .strip_prefix("url(")
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(&value);
    Some(inner.trim_matches(|c| c == '"' || c == '\'').to_string())
}
