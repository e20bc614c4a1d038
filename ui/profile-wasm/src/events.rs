//! Event binding.
//!
//! Single registration point: every listener on the page is subscribed
//! here, once, right after the elements are resolved. Components own
//! their handlers; this module only sequences the binds.

use crate::account;
use crate::avatar;
use crate::config::PageConfig;
use crate::dom::Elements;
use crate::preferences;
use crate::preview;

/// Bind all UI event listeners. Call once after init.
/// Returns the avatar selection handle (the only page-scoped state).
pub fn bind_events(els: &Elements, cfg: &PageConfig) -> avatar::Selection {
    preview::bind(els);
    let selection = avatar::bind(els, cfg);
    account::bind(els, cfg);
    preferences::bind(els);
    selection
}
