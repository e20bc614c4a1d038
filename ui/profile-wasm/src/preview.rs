//! Profile photo preview.
//!
//! Selecting a file swaps the preview `<img>` source for the decoded
//! data URL. No validation of type or size; a failed read leaves the
//! preview untouched.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::Elements;
use crate::files;

pub fn bind(els: &Elements) {
    let (Some(input), Some(img)) = (&els.profile_image_input, &els.profile_image_preview) else {
        return;
    };
    let input2 = input.clone();
    let img2 = img.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let Some(file) = input2.files().and_then(|l| l.get(0)) else {
            return;
        };
        let img3 = img2.clone();
        files::read_as_data_url(&file, move |data_url| {
            img3.set_src(&data_url);
        });
    }) as Box<dyn FnMut(_)>);
    input
        .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}
