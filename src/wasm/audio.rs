//! Background ambient audio that survives page navigation.
//!
//! Playback position and play/pause state are stashed in session storage
//! (`audioPlaybackTime` / `audioIsPlaying`) before every unload and before
//! the splatter navigation fires, then restored on the next page. Autoplay
//! rejection is handled by pulsing the floating control button instead.

use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlAudioElement, HtmlElement};

const TRACK_SRC: &str = "media/ambient_loop.mp3";
const VOLUME: f64 = 0.3;
const KEY_TIME: &str = "audioPlaybackTime";
const KEY_PLAYING: &str = "audioIsPlaying";
const ICON_PLAYING: &str = "<i class=\"fas fa-volume-up\"></i>";
const ICON_MUTED: &str = "<i class=\"fas fa-volume-mute\"></i>";
const PULSE_MS: i32 = 5000;

/// Shared handle to the audio element and its control button.
#[derive(Clone)]
pub struct AudioPlayer {
    inner: Rc<HtmlAudioElement>,
}

impl AudioPlayer {
    pub fn init(document: &Document) -> Result<AudioPlayer, JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        let element = HtmlAudioElement::new_with_src(TRACK_SRC)?;
        element.set_loop(true);
        element.set_volume(VOLUME);

        let storage = window.session_storage()?;
        if let Some(storage) = &storage {
            if let Ok(Some(time)) = storage.get_item(KEY_TIME) {
                if let Ok(time) = time.parse::<f64>() {
                    element.set_current_time(time);
                }
            }
        }

        let player = AudioPlayer { inner: Rc::new(element) };
        player.build_controls(document)?;

        let was_playing = storage
            .as_ref()
            .and_then(|s| s.get_item(KEY_PLAYING).ok().flatten())
            .map(|v| v == "true")
            .unwrap_or(false);
        if was_playing {
            player.resume(document);
        } else {
            show_play_button(document)?;
        }

        let save = {
            let player = player.clone();
            Closure::wrap(Box::new(move || player.save_state()) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("beforeunload", save.as_ref().unchecked_ref())?;
        save.forget();

        Ok(player)
    }

    /// Persists the current position and play state to session storage.
    /// Called before unload and right before a navigation burst.
    pub fn save_state(&self) {
        let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten())
        else {
            return;
        };
        let _ = storage.set_item(KEY_TIME, &self.inner.current_time().to_string());
        let _ = storage.set_item(KEY_PLAYING, if self.inner.paused() { "false" } else { "true" });
    }

    /// Resumes playback, falling back to the muted-button hint when the
    /// browser rejects the autoplay attempt.
    fn resume(&self, document: &Document) {
        match self.inner.play() {
            Ok(promise) => {
                let document = document.clone();
                let on_rejected = Closure::wrap(Box::new(move |_reason: JsValue| {
                    let _ = show_play_button(&document);
                }) as Box<dyn FnMut(JsValue)>);
                let _ = promise.catch(&on_rejected);
                on_rejected.forget();
            }
            Err(_) => {
                let _ = show_play_button(document);
            }
        }
    }

    fn toggle(&self) {
        if self.inner.paused() {
            if let Ok(promise) = self.inner.play() {
                drop(promise);
            }
        } else {
            let _ = self.inner.pause();
        }
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            self.update_button(&document);
        }
    }

    fn update_button(&self, document: &Document) {
        let Some(button) = document.get_element_by_id("audio-button") else { return };
        if self.inner.paused() {
            button.set_inner_html(ICON_MUTED);
            let _ = button.class_list().remove_1("active");
        } else {
            button.set_inner_html(ICON_PLAYING);
            let _ = button.class_list().add_1("active");
        }
    }

    fn build_controls(&self, document: &Document) -> Result<(), JsValue> {
        let container: HtmlElement = document.create_element("div")?.dyn_into()?;
        container.set_id("audio-control");
        container.set_class_name("audio-control");

        let button: HtmlElement = document.create_element("button")?.dyn_into()?;
        button.set_id("audio-button");
        button.set_class_name("audio-button");
        button.set_inner_html(ICON_PLAYING);
        button.set_title("Toggle background music");

        let on_click = {
            let player = self.clone();
            Closure::wrap(Box::new(move || player.toggle()) as Box<dyn FnMut()>)
        };
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();

        container.append_child(&button)?;
        document.body().ok_or("no body")?.append_child(&container)?;

        self.update_button(document);
        Ok(())
    }
}

/// Flags the control button as muted and pulses it briefly to draw
/// attention, used when autoplay was blocked or audio starts paused.
fn show_play_button(document: &Document) -> Result<(), JsValue> {
    let Some(button) = document.get_element_by_id("audio-button") else {
        return Ok(());
    };
    button.set_inner_html(ICON_MUTED);
    button.class_list().remove_1("active")?;
    button.class_list().add_1("pulse")?;

    let stop_pulse = {
        let button = button.clone();
        Closure::wrap(Box::new(move || {
            let _ = button.class_list().remove_1("pulse");
        }) as Box<dyn FnMut()>)
    };
    web_sys::window()
        .ok_or("no window")?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            stop_pulse.as_ref().unchecked_ref(),
            PULSE_MS,
        )?;
    stop_pulse.forget();
    Ok(())
}
