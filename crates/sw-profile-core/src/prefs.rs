//! Preference toggle changes.
//!
//! Each checkbox change is an independent event; nothing is aggregated.
//! `PreferenceChange` is the body shape a setting update would be
//! posted with. No request is issued anywhere; the frontend only logs
//! the payload.

use serde::{Deserialize, Serialize};

/// One toggle flip: the control's id and its new state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceChange {
    pub setting: String,
    pub value: bool,
}

impl PreferenceChange {
    pub fn new(setting: impl Into<String>, value: bool) -> Self {
        Self {
            setting: setting.into(),
            value,
        }
    }

    /// Human-readable console line for the change.
    pub fn describe(&self) -> String {
        format!(
            "{} is now {}",
            self.setting,
            if self.value { "enabled" } else { "disabled" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_names_the_setting_and_state() {
        assert_eq!(
            PreferenceChange::new("emailNotifications", true).describe(),
            "emailNotifications is now enabled"
        );
        assert_eq!(
            PreferenceChange::new("weeklyReport", false).describe(),
            "weeklyReport is now disabled"
        );
    }

    #[test]
    fn wire_shape_is_setting_and_value() {
        let body = serde_json::to_string(&PreferenceChange::new("darkMode", true)).unwrap();
        assert_eq!(body, r#"{"setting":"darkMode","value":true}"#);
    }
}
