//! Avatar selection state machine.
//!
//! One page-scoped value with three triggers: upload, preset pick,
//! remove. A new selection always overwrites the previous one, so at
//! most one source is ever selected.

/// The avatar source currently chosen on the page.
///
/// Not persisted; lives for the duration of the page view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AvatarSelection {
    /// Nothing chosen; the preview falls back to the default image.
    #[default]
    Unset,
    /// A user-uploaded file, decoded to a data URL.
    Uploaded { data_url: String },
    /// One thumbnail from the preset gallery, by position and image source.
    Preset { index: usize, url: String },
}

impl AvatarSelection {
    /// Replace the selection with an uploaded image.
    pub fn select_upload(&mut self, data_url: impl Into<String>) {
        *self = AvatarSelection::Uploaded {
            data_url: data_url.into(),
        };
    }

    /// Replace the selection with the preset thumbnail at `index`.
    pub fn select_preset(&mut self, index: usize, url: impl Into<String>) {
        *self = AvatarSelection::Preset {
            index,
            url: url.into(),
        };
    }

    /// Reset to unset (the remove trigger).
    pub fn clear(&mut self) {
        *self = AvatarSelection::Unset;
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, AvatarSelection::Unset)
    }

    /// The remove control is enabled exactly when a selection exists.
    pub fn remove_enabled(&self) -> bool {
        self.is_set()
    }

    /// Image source the preview should show, given the page's default.
    pub fn preview_url<'a>(&'a self, default_url: &'a str) -> &'a str {
        match self {
            AvatarSelection::Unset => default_url,
            AvatarSelection::Uploaded { data_url } => data_url,
            AvatarSelection::Preset { url, .. } => url,
        }
    }

    /// Index of the preset thumbnail to highlight, if any.
    pub fn selected_preset(&self) -> Option<usize> {
        match self {
            AvatarSelection::Preset { index, .. } => Some(*index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "/static/images/default-avatar.png";

    #[test]
    fn starts_unset_with_remove_disabled() {
        let sel = AvatarSelection::default();
        assert!(!sel.is_set());
        assert!(!sel.remove_enabled());
        assert_eq!(sel.preview_url(DEFAULT), DEFAULT);
        assert_eq!(sel.selected_preset(), None);
    }

    #[test]
    fn upload_overwrites_preset_and_clears_highlight() {
        let mut sel = AvatarSelection::default();
        sel.select_preset(2, "/static/avatars/cat.png");
        sel.select_upload("data:image/png;base64,AAAA");

        assert_eq!(sel.preview_url(DEFAULT), "data:image/png;base64,AAAA");
        assert_eq!(sel.selected_preset(), None);
        assert!(sel.remove_enabled());
    }

    #[test]
    fn preset_pick_overwrites_upload() {
        let mut sel = AvatarSelection::default();
        sel.select_upload("data:image/png;base64,AAAA");
        sel.select_preset(0, "/static/avatars/dog.png");

        assert_eq!(sel.selected_preset(), Some(0));
        assert_eq!(sel.preview_url(DEFAULT), "/static/avatars/dog.png");
    }

    #[test]
    fn switching_presets_moves_the_highlight() {
        let mut sel = AvatarSelection::default();
        sel.select_preset(0, "/static/avatars/dog.png");
        sel.select_preset(3, "/static/avatars/owl.png");

        assert_eq!(sel.selected_preset(), Some(3));
        assert_eq!(sel.preview_url(DEFAULT), "/static/avatars/owl.png");
    }

    // upload → preset → remove ends with nothing selected and the
    // preview back on the default image.
    #[test]
    fn upload_then_preset_then_remove_ends_unset() {
        let mut sel = AvatarSelection::default();
        sel.select_upload("data:image/png;base64,AAAA");
        sel.select_preset(1, "/static/avatars/cat.png");
        sel.clear();

        assert_eq!(sel, AvatarSelection::Unset);
        assert!(!sel.remove_enabled());
        assert_eq!(sel.preview_url(DEFAULT), DEFAULT);
        assert_eq!(sel.selected_preset(), None);
    }
}
