#![cfg(target_arch = "wasm32")]
//! Page behaviors for the site, compiled to WASM.
//!
//! Everything is wired once when the document is parsed; after that each
//! listener reacts to its own browser event and reflects the result through
//! marker classes and inline styles. The decisions themselves live in
//! `site-core`.

use wasm_bindgen::prelude::*;
use web_sys as web;

mod anchors;
mod clock;
mod controller;
mod dom;
mod marquee;
mod menu;
mod reveal;
mod scroll;

use controller::PageController;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::add_listener(&document, "DOMContentLoaded", move |_: web::Event| run());
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let controller = PageController::new()?;
    controller.attach();
    log::info!("page behaviors ready");
    Ok(())
}
