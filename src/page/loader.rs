//! Startup loader overlay
//!
//! Hidden by a timer, or by `window.load` if that fires first. Either path
//! hides it once and schedules one reveal re-check.

/// Timer hide (ms after startup)
pub const HIDE_DELAY_MS: i32 = 1000;
/// Reveal re-check after the loader hides
pub const HIDE_RECHECK_MS: i32 = 300;
/// Reveal re-check after `window.load`
pub const LOAD_RECHECK_MS: i32 = 500;
/// Reveal re-check after startup, once styles have applied
pub const LAYOUT_RECHECK_MS: i32 = 800;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loader {
    hidden: bool,
}

impl Loader {
    /// Mark hidden; `true` only for the call that actually hid it
    pub fn hide(&mut self) -> bool {
        !std::mem::replace(&mut self.hidden, true)
    }
}
