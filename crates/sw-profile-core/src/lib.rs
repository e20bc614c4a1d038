//! Page logic for the Spendwell profile page.
//!
//! Everything in this crate is a plain, synchronous value transition:
//! no DOM, no JS interop, no I/O. The wasm frontend in `ui/profile-wasm`
//! drives these types from its event handlers and renders the result.

pub mod avatar;
pub mod confirm;
pub mod prefs;

pub use avatar::AvatarSelection;
pub use confirm::DeletionGate;
pub use prefs::PreferenceChange;
