//! Bootstrap modal / toast interop.
//!
//! The widget library is a black box: the controller only ever asks for
//! an existing modal instance to hide it, or constructs a toast to show
//! it. A page without the `bootstrap` global (or without the widget
//! element) is tolerated the same way missing form controls are.

use wasm_bindgen::prelude::*;

use crate::dom;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Modal;

    #[wasm_bindgen(static_method_of = Modal, js_namespace = bootstrap, js_name = getInstance)]
    fn get_instance(element: &web_sys::Element) -> Option<Modal>;

    #[wasm_bindgen(method)]
    fn hide(this: &Modal);

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Toast;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    fn new(element: &web_sys::Element) -> Toast;

    #[wasm_bindgen(method)]
    fn show(this: &Toast);
}

fn widgets_available() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

/// Hide the open modal with the given id, if it exists and has an instance.
pub fn hide_modal(id: &str) {
    if !widgets_available() {
        return;
    }
    if let Some(el) = dom::by_id(id) {
        if let Some(modal) = Modal::get_instance(&el) {
            modal.hide();
        }
    }
}

/// Construct and show the toast with the given id.
pub fn show_toast(id: &str) {
    if !widgets_available() {
        return;
    }
    if let Some(el) = dom::by_id(id) {
        Toast::new(&el).show();
    }
}
