//! Background slideshow: fills `#slideshow-container` with the configured
//! artwork and rotates the `active` class on a fixed interval. The CSS
//! handles the cross-fade.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{console, Document, Element, HtmlImageElement};

const SLIDE_INTERVAL_MS: i32 = 7000;

const SLIDES: [&str; 6] = [
    "media/columttoreart.png",
    "media/contest_entry.png",
    "media/nemia_poster.png",
    "media/valeria.png",
    "media/valeria_icon.png",
    "media/gang_lineart.png",
];

pub fn init(document: &Document) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id("slideshow-container") else {
        console::error_1(&"Slideshow container not found".into());
        return Ok(());
    };

    for (i, src) in SLIDES.iter().enumerate() {
        let image: HtmlImageElement = document.create_element("img")?.dyn_into()?;
        image.set_src(src);
        image.set_alt("Background artwork");
        image.set_class_name("slideshow-image");
        if i == 0 {
            image.class_list().add_1("active")?;
        }
        container.append_child(&image)?;
    }

    let current = Rc::new(Cell::new(0usize));
    let tick = {
        let current = current.clone();
        Closure::wrap(Box::new(move || advance(&current)) as Box<dyn FnMut()>)
    };
    web_sys::window()
        .ok_or("no window")?
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            SLIDE_INTERVAL_MS,
        )?;
    tick.forget();

    Ok(())
}

fn advance(current: &Cell<usize>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    let Ok(slides) = document.query_selector_all(".slideshow-image") else { return };
    let len = slides.length() as usize;
    if len == 0 {
        return;
    }

    if let Some(slide) = slides
        .get(current.get() as u32)
        .and_then(|n| n.dyn_into::<Element>().ok())
    {
        let _ = slide.class_list().remove_1("active");
    }

    let next = (current.get() + 1) % len;
    current.set(next);

    if let Some(slide) = slides.get(next as u32).and_then(|n| n.dyn_into::<Element>().ok()) {
        let _ = slide.class_list().add_1("active");
    }
}
