//! WASM shell for the landing page.
//!
//! Compiled to WebAssembly and loaded by `site/index.html`. It wires browser
//! events to the DOM-free [`interactions`] core and applies the effects the
//! core returns.
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Owns the core, wires listeners, dispatches effects |
//! | [`elements`] | Element bundle collected once at mount |
//! | [`dom`] | Applies element effects, ripples, alert, scrolling |
//! | [`timers`] | `gloo-timers` timeouts keyed by task id |
//! | [`storage`] | `localStorage` settings and the color-scheme query |
//! | [`markup`] | Selectors, injected CSS, button labels, config decoding |

pub mod controller;
pub mod dom;
pub mod elements;
pub mod markup;
pub mod storage;
pub mod timers;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::controller::Page;

/// Module entry point: set up logging, then mount once the document is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("logger already set: {err}");
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if document.ready_state() == "loading" {
        let ready_window = window.clone();
        let ready_document = document.clone();
        let on_ready = Closure::once_into_js(move || mount(ready_window, ready_document));
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::warn!("could not wait for DOMContentLoaded: {err:?}");
        }
    } else {
        mount(window, document);
    }
}

fn mount(window: Window, document: Document) {
    Page::mount(window, document);
}
