//! Peripheral page effects
//!
//! Each effect is a small piece of state or a pure decision; the DOM wiring
//! in the web entry point only reads inputs and applies the results.

pub mod follower;
pub mod form;
pub mod loader;
pub mod nav;
pub mod projects;
pub mod scroll;
pub mod skills;
pub mod typewriter;

pub use follower::Follower;
pub use form::{ContactForm, FieldError, FormField};
pub use loader::Loader;
pub use nav::{MenuState, Section, active_section};
pub use projects::{ProjectCatalog, ProjectDetails};
pub use scroll::Throttle;
pub use typewriter::Typewriter;

/// Body `overflow` value while an overlay (menu, modal) is open or closed
pub fn body_overflow(overlay_open: bool) -> &'static str {
    if overlay_open { "hidden" } else { "auto" }
}
