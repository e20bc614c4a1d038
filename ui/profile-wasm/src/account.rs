//! Account-deletion confirmation gate.
//!
//! Re-evaluated on every `input` event and once at bind time, so the
//! button state is consistent from the first paint. The comparison
//! itself lives in `sw_profile_core::confirm`.

use sw_profile_core::DeletionGate;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlButtonElement, HtmlInputElement};

use crate::config::PageConfig;
use crate::dom::Elements;

pub fn bind(els: &Elements, cfg: &PageConfig) {
    let (Some(input), Some(btn)) = (&els.confirm_email, &els.confirm_delete_btn) else {
        return;
    };
    // No expected email injected: the gate stays disarmed and unwired.
    let Some(expected) = cfg.expected_email.clone() else {
        return;
    };
    let gate = DeletionGate::new(expected);
    apply(&gate, input, btn);

    let input2 = input.clone();
    let btn2 = btn.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        apply(&gate, &input2, &btn2);
    }) as Box<dyn FnMut(_)>);
    input
        .add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

fn apply(gate: &DeletionGate, input: &HtmlInputElement, btn: &HtmlButtonElement) {
    // Raw value on purpose: the match is case-insensitive but untrimmed.
    btn.set_disabled(!gate.is_armed(&input.value()));
}
