//! Preferences panel.
//!
//! Save shows the success toast without reading any toggle. Each toggle
//! logs its own change independently, along with the JSON body a
//! setting update would be posted with. No request is issued.

use gloo_console::{debug, log};
use sw_profile_core::PreferenceChange;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::Elements;
use crate::widgets;

pub const PREFS_SAVED_TOAST_ID: &str = "prefsSavedToast";

pub fn bind(els: &Elements) {
    bind_save(els);
    bind_toggles(els);
}

fn bind_save(els: &Elements) {
    let Some(btn) = &els.save_preferences_btn else {
        return;
    };
    let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        widgets::show_toast(PREFS_SAVED_TOAST_ID);
    }) as Box<dyn FnMut(_)>);
    btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

fn bind_toggles(els: &Elements) {
    for toggle in &els.toggles {
        let toggle2 = toggle.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let change = PreferenceChange::new(toggle2.id(), toggle2.checked());
            log!(change.describe());
            if let Ok(body) = serde_json::to_string(&change) {
                debug!("would POST /update-setting/", body);
            }
        }) as Box<dyn FnMut(_)>);
        toggle
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}
