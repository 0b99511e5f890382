#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Client-side decoration for a static art-portfolio site: a paint-splatter
//! navigation effect on a full-screen canvas, plus background audio that
//! persists across pages, a custom cursor, an image lightbox, page-transition
//! overlays and a background slideshow. The splatter model itself is pure
//! Rust in [`splatter`]; everything DOM-bound compiles only for wasm32.

pub mod splatter;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod audio;
    mod cursor;
    mod lightbox;
    mod nav;
    pub mod paint;
    mod slideshow;
    mod transitions;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let paint = paint::Paint::init(&document)?;
        let audio = audio::AudioPlayer::init(&document)?;
        transitions::init(&document)?;
        nav::init(&document, paint, audio)?;
        cursor::init(&document)?;
        lightbox::init(&document)?;
        slideshow::init(&document)?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::paint::Paint;

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
