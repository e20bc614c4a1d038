//! File-to-data-URL decoding.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Read `file` as a data URL and hand the result to `on_loaded`.
///
/// One reader per call; concurrent reads are independent. A failed read
/// fires no callback and surfaces nothing.
pub fn read_as_data_url<F>(file: &web_sys::File, on_loaded: F)
where
    F: FnOnce(String) + 'static,
{
    let Ok(reader) = web_sys::FileReader::new() else {
        return;
    };
    let reader2 = reader.clone();
    let cb = Closure::once(move |_: web_sys::ProgressEvent| {
        if let Some(data_url) = reader2.result().ok().and_then(|v| v.as_string()) {
            on_loaded(data_url);
        }
    });
    reader.set_onload(Some(cb.as_ref().unchecked_ref()));
    cb.forget();
    let _ = reader.read_as_data_url(file);
}
