//! Bootstrap configuration.
//!
//! The rendering layer owns the page-scoped values (account email,
//! default avatar path) and injects them as `data-*` attributes on
//! `<body>`. They are read once at startup instead of being
//! interpolated into handler code, keeping the controller independent
//! of the templating engine.

use crate::dom;

/// Fallback preview image when the template injects no default.
pub const DEFAULT_AVATAR_PATH: &str = "/static/images/default-avatar.png";

/// Page-scoped values injected by the server-side template.
#[derive(Clone, Debug)]
pub struct PageConfig {
    /// Account email the deletion confirmation input must match.
    /// Absent on pages without the danger zone; the gate stays unwired.
    pub expected_email: Option<String>,
    /// Image shown in the avatar preview when nothing is selected.
    pub default_avatar: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            expected_email: None,
            default_avatar: DEFAULT_AVATAR_PATH.to_string(),
        }
    }
}

impl PageConfig {
    /// Read `data-expected-email` / `data-default-avatar` from `<body>`.
    pub fn from_dom() -> PageConfig {
        let Some(body) = dom::document().body() else {
            return PageConfig::default();
        };
        let expected_email = body
            .get_attribute("data-expected-email")
            .filter(|v| !v.is_empty());
        let default_avatar = body
            .get_attribute("data-default-avatar")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_AVATAR_PATH.to_string());
        PageConfig {
            expected_email,
            default_avatar,
        }
    }
}
