//! Spendwell Profile Page Frontend
//!
//! Pure Rust + WASM controller for the profile-management page: avatar
//! upload/selection, preference toggles, account-deletion confirmation.
//! Modularised for extensibility: each concern lives in its own module.

pub mod account;
pub mod avatar;
pub mod config;
pub mod dom;
pub mod events;
pub mod files;
pub mod preferences;
pub mod preview;
pub mod widgets;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init();
    Ok(())
}

/// Main initialisation sequence: resolve elements, read the bootstrap
/// payload, register every listener.
pub fn init() {
    let els = dom::Elements::bind();
    let cfg = config::PageConfig::from_dom();
    events::bind_events(&els, &cfg);
    gloo_console::debug!("profile page controller ready");
}
