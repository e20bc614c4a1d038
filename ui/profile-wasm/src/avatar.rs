//! Avatar selector component.
//!
//! Owns the page-scoped [`AvatarSelection`] and re-renders the full
//! visual state (preview background, remove-button flag, thumbnail
//! highlight) from it after every transition. The selection handle is
//! created here and cloned into each handler; nothing else mutates it.

use std::cell::RefCell;
use std::rc::Rc;

use sw_profile_core::AvatarSelection;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::PageConfig;
use crate::dom::{self, Elements};
use crate::files;
use crate::widgets;

pub const CHANGE_AVATAR_MODAL_ID: &str = "changeAvatarModal";
pub const AVATAR_UPDATED_TOAST_ID: &str = "avatarUpdatedToast";

const SELECTED_CLASS: &str = "selected";

/// Shared handle to the avatar selection.
pub type Selection = Rc<RefCell<AvatarSelection>>;

/// Wire the selector and bring the DOM in line with the initial
/// (unset) selection. Returns the selection handle.
pub fn bind(els: &Elements, cfg: &PageConfig) -> Selection {
    let selection: Selection = Rc::new(RefCell::new(AvatarSelection::default()));
    render(els, &selection.borrow(), cfg);

    bind_upload(els, &selection, cfg);
    bind_preset_gallery(els, &selection, cfg);
    bind_remove(els, &selection, cfg);
    bind_save(els);

    selection
}

/// Project the selection onto the DOM.
pub fn render(els: &Elements, selection: &AvatarSelection, cfg: &PageConfig) {
    if let Some(preview) = &els.avatar_preview {
        let url = selection.preview_url(&cfg.default_avatar);
        let _ = preview
            .style()
            .set_property("background-image", &css_url(url));
    }
    if let Some(btn) = &els.remove_avatar_btn {
        btn.set_disabled(!selection.remove_enabled());
    }
    let highlighted = selection.selected_preset();
    for (i, option) in els.avatar_options().iter().enumerate() {
        if highlighted == Some(i) {
            dom::add_class(option, SELECTED_CLASS);
        } else {
            dom::remove_class(option, SELECTED_CLASS);
        }
    }
}

fn css_url(url: &str) -> String {
    format!("url(\"{}\")", url)
}

// ── Triggers ──

/// Upload: the visible button forwards to the hidden file input; a
/// chosen file is decoded to a data URL and becomes the selection.
fn bind_upload(els: &Elements, selection: &Selection, cfg: &PageConfig) {
    let (Some(btn), Some(input)) = (&els.upload_avatar_btn, &els.avatar_input) else {
        return;
    };

    {
        let input2 = input.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            input2.click();
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    {
        let els2 = els.clone();
        let sel2 = selection.clone();
        let cfg2 = cfg.clone();
        let input2 = input.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let Some(file) = input2.files().and_then(|l| l.get(0)) else {
                return;
            };
            let els3 = els2.clone();
            let sel3 = sel2.clone();
            let cfg3 = cfg2.clone();
            files::read_as_data_url(&file, move |data_url| {
                sel3.borrow_mut().select_upload(data_url);
                render(&els3, &sel3.borrow(), &cfg3);
            });
        }) as Box<dyn FnMut(_)>);
        input
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}

/// Preset pick: one delegated click listener on the gallery container.
fn bind_preset_gallery(els: &Elements, selection: &Selection, cfg: &PageConfig) {
    let Some(container) = &els.default_avatars else {
        return;
    };
    let els2 = els.clone();
    let sel2 = selection.clone();
    let cfg2 = cfg.clone();
    let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(target_el) = target.dyn_into::<web_sys::Element>() else {
            return;
        };
        let Some(option) = target_el.closest(".avatar-option").ok().flatten() else {
            return;
        };
        let options = els2.avatar_options();
        let Some(index) = options
            .iter()
            .position(|o| o.is_same_node(Some(option.as_ref())))
        else {
            return;
        };
        let Some(img) = option.query_selector("img").ok().flatten() else {
            return;
        };
        let Ok(img) = img.dyn_into::<web_sys::HtmlImageElement>() else {
            return;
        };
        sel2.borrow_mut().select_preset(index, img.src());
        render(&els2, &sel2.borrow(), &cfg2);
    }) as Box<dyn FnMut(_)>);
    container
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

/// Remove: back to the default image, selection unset, button disabled.
fn bind_remove(els: &Elements, selection: &Selection, cfg: &PageConfig) {
    let Some(btn) = &els.remove_avatar_btn else {
        return;
    };
    let els2 = els.clone();
    let sel2 = selection.clone();
    let cfg2 = cfg.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        sel2.borrow_mut().clear();
        render(&els2, &sel2.borrow(), &cfg2);
    }) as Box<dyn FnMut(_)>);
    btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

/// Save: close the modal, show the success toast. The selection itself
/// goes nowhere; there is no backend call behind this page.
fn bind_save(els: &Elements) {
    let Some(btn) = &els.save_avatar_btn else {
        return;
    };
    let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        widgets::hide_modal(CHANGE_AVATAR_MODAL_ID);
        widgets::show_toast(AVATAR_UPDATED_TOAST_ID);
    }) as Box<dyn FnMut(_)>);
    btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}
