//! Navigation wiring: splatter bursts on menu clicks, deferred page exits,
//! the mobile menu toggler, the works-page filter buttons and smooth
//! scrolling for same-page anchors.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use super::{audio::AudioPlayer, paint::Paint, transitions};

/// Delay between the burst trigger and the exit transition, so the splash is
/// visible before the page starts to leave.
const EXIT_DELAY_MS: i32 = 500;
const FILTER_REVEAL_MS: i32 = 50;
const FILTER_HIDE_MS: i32 = 300;
const ANCHOR_OFFSET_PX: i32 = 100;

pub fn init(document: &Document, paint: Paint, audio: AudioPlayer) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let pathname = window.location().pathname().unwrap_or_default();

    let links = document.query_selector_all(".nav-link")?;
    for i in 0..links.length() {
        let Some(link) = links.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };

        if link.get_attribute("href").as_deref() == Some(pathname.as_str()) {
            if let Some(parent) = link.parent_element() {
                let _ = parent.class_list().add_1("active");
            }
        }

        let on_click = {
            let link = link.clone();
            let paint = paint.clone();
            let audio = audio.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                // Clicking the current page's link navigates normally.
                let already_active = link
                    .parent_element()
                    .map(|p| p.class_list().contains("active"))
                    .unwrap_or(false);
                if already_active {
                    return;
                }
                event.prevent_default();

                let rect = link.get_bounding_client_rect();
                let x = (rect.left() + rect.right()) / 2.0;
                let y = (rect.top() + rect.bottom()) / 2.0;
                let style = link.get_attribute("data-nav").unwrap_or_default();
                paint.burst(x, y, &style);

                audio.save_state();

                if let Some(href) = link.get_attribute("href") {
                    schedule_exit(href);
                }
            }) as Box<dyn FnMut(_)>)
        };
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    // The mobile menu toggler splashes without navigating.
    if let Some(toggler) = document
        .query_selector(".navbar-toggler")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let on_click = {
            let toggler = toggler.clone();
            let paint = paint.clone();
            Closure::wrap(Box::new(move || {
                let rect = toggler.get_bounding_client_rect();
                let x = (rect.left() + rect.right()) / 2.0;
                let y = (rect.top() + rect.bottom()) / 2.0;
                paint.burst(x, y, "menu");
            }) as Box<dyn FnMut()>)
        };
        toggler.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    init_work_filters(document)?;
    init_anchor_scrolling(document)?;
    Ok(())
}

fn schedule_exit(href: String) {
    let Some(window) = web_sys::window() else { return };
    let exit = Closure::wrap(Box::new(move || transitions::exit_to(&href)) as Box<dyn FnMut()>);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        exit.as_ref().unchecked_ref(),
        EXIT_DELAY_MS,
    );
    exit.forget();
}

/// Works-page category filters: the active button's `data-filter` decides
/// which `.work-item` cards stay visible, with a small fade/slide on both
/// the reveal and the hide.
fn init_work_filters(document: &Document) -> Result<(), JsValue> {
    let buttons = document.query_selector_all(".filter-btns .btn")?;
    let items = document.query_selector_all(".work-item")?;
    if buttons.length() == 0 || items.length() == 0 {
        return Ok(()); // not on the works page
    }

    for i in 0..buttons.length() {
        let Some(button) = buttons.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let on_click = {
            let button = button.clone();
            Closure::wrap(Box::new(move || {
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                if let Ok(all) = document.query_selector_all(".filter-btns .btn") {
                    for j in 0..all.length() {
                        if let Some(other) = all.get(j).and_then(|n| n.dyn_into::<Element>().ok())
                        {
                            let _ = other.class_list().remove_1("active");
                        }
                    }
                }
                let _ = button.class_list().add_1("active");
                let filter = button.get_attribute("data-filter").unwrap_or_default();
                apply_work_filter(&document, &filter);
            }) as Box<dyn FnMut()>)
        };
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

fn apply_work_filter(document: &Document, filter: &str) {
    let Some(window) = web_sys::window() else { return };
    let Ok(items) = document.query_selector_all(".work-item") else { return };

    for i in 0..items.length() {
        let Some(item) = items.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let keep = filter == "all"
            || item.get_attribute("data-category").as_deref() == Some(filter);
        if keep {
            let _ = item.style().set_property("display", "block");
            let reveal = {
                let item = item.clone();
                Closure::wrap(Box::new(move || {
                    let _ = item.style().set_property("opacity", "1");
                    let _ = item.style().set_property("transform", "translateY(0)");
                }) as Box<dyn FnMut()>)
            };
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                reveal.as_ref().unchecked_ref(),
                FILTER_REVEAL_MS,
            );
            reveal.forget();
        } else {
            let _ = item.style().set_property("opacity", "0");
            let _ = item.style().set_property("transform", "translateY(20px)");
            let hide = {
                let item = item.clone();
                Closure::wrap(Box::new(move || {
                    let _ = item.style().set_property("display", "none");
                }) as Box<dyn FnMut()>)
            };
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                hide.as_ref().unchecked_ref(),
                FILTER_HIDE_MS,
            );
            hide.forget();
        }
    }
}

/// Same-page anchor links scroll smoothly, stopping short of the target so
/// the fixed header does not cover it.
fn init_anchor_scrolling(document: &Document) -> Result<(), JsValue> {
    let anchors = document.query_selector_all("a[href^='#']")?;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let on_click = {
            let anchor = anchor.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                let Some(window) = web_sys::window() else { return };
                let Some(document) = window.document() else { return };
                let Some(href) = anchor.get_attribute("href") else { return };
                let Some(target) = document
                    .query_selector(&href)
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                else {
                    return;
                };
                let options = ScrollToOptions::new();
                options.set_top((target.offset_top() - ANCHOR_OFFSET_PX) as f64);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }) as Box<dyn FnMut(_)>)
        };
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}
