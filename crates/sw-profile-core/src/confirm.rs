//! Account-deletion confirmation gate.
//!
//! The destructive confirm button is enabled iff the typed value,
//! lowercased, equals the account email, lowercased. The comparison is
//! exact otherwise: no trimming, re-evaluated on every keystroke.

/// Gate guarding the delete-account action.
#[derive(Clone, Debug)]
pub struct DeletionGate {
    expected_email: String,
}

impl DeletionGate {
    pub fn new(expected_email: impl Into<String>) -> Self {
        Self {
            expected_email: expected_email.into(),
        }
    }

    /// True exactly when `confirmation` matches the expected email,
    /// ignoring case.
    pub fn is_armed(&self, confirmation: &str) -> bool {
        confirmation.to_lowercase() == self.expected_email.to_lowercase()
    }
}
