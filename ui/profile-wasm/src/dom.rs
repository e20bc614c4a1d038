//! DOM element bindings.
//!
//! All profile-page elements are resolved once at startup. Every lookup
//! is optional: the template renders different subsets of the page, and
//! a missing element leaves its feature unwired. To add new UI
//! elements, add a field here and bind it in `Elements::bind()`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlImageElement, HtmlInputElement};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = doc().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    let nl = parent.query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn document() -> Document {
    doc()
}

// ── Elements struct ──

/// All DOM element references used by the profile page.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Profile photo preview
    pub profile_image_input: Option<HtmlInputElement>,
    pub profile_image_preview: Option<HtmlImageElement>,

    // Avatar selector
    pub avatar_input: Option<HtmlInputElement>,
    pub upload_avatar_btn: Option<HtmlElement>,
    pub avatar_preview: Option<HtmlElement>,
    pub remove_avatar_btn: Option<HtmlButtonElement>,
    pub save_avatar_btn: Option<HtmlElement>,
    pub default_avatars: Option<Element>,

    // Delete-account confirmation
    pub confirm_email: Option<HtmlInputElement>,
    pub confirm_delete_btn: Option<HtmlButtonElement>,

    // Preferences
    pub save_preferences_btn: Option<HtmlElement>,
    pub toggles: Vec<HtmlInputElement>,
}

impl Elements {
    /// Resolve all DOM references. Call once after page load.
    pub fn bind() -> Elements {
        Elements {
            profile_image_input: by_id_typed("profileImage"),
            profile_image_preview: by_id_typed("profileImagePreview"),

            avatar_input: by_id_typed("avatarInput"),
            upload_avatar_btn: by_id_typed("uploadAvatarBtn"),
            avatar_preview: by_id_typed("avatarPreview"),
            remove_avatar_btn: by_id_typed("removeAvatarBtn"),
            save_avatar_btn: by_id_typed("saveAvatarBtn"),
            default_avatars: by_id("defaultAvatars"),

            confirm_email: by_id_typed("confirmEmail"),
            confirm_delete_btn: by_id_typed("confirmDeleteBtn"),

            save_preferences_btn: by_id_typed("savePreferences"),
            toggles: query_all(r#".form-check-input[type="checkbox"]"#)
                .into_iter()
                .filter_map(|e| e.dyn_into::<HtmlInputElement>().ok())
                .collect(),
        }
    }

    /// Preset avatar thumbnails, queried live from the gallery container.
    pub fn avatar_options(&self) -> Vec<Element> {
        self.default_avatars
            .as_ref()
            .map(|c| query_all_within(c, ".avatar-option"))
            .unwrap_or_default()
    }
}
