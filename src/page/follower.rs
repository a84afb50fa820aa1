//! Cursor follower dot
//!
//! Follows the mouse, grows over clickable elements, shrinks while a button
//! is held and hides when the pointer leaves the window.

/// Elements that put the follower in its hover style
pub const CLICKABLE_SELECTOR: &str = "a, button, .column-card, .project-card, .view-btn, .submit-btn, .contact-btn, .theme-toggle, .back-to-top";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Follower {
    visible: bool,
    hover: bool,
    pressed: bool,
}

impl Follower {
    pub fn on_move(&mut self, over_clickable: bool) {
        self.visible = true;
        self.hover = over_clickable;
    }

    pub fn on_press(&mut self) {
        self.pressed = true;
    }

    pub fn on_release(&mut self) {
        self.pressed = false;
    }

    pub fn on_leave(&mut self) {
        self.visible = false;
    }

    /// Re-entering shows the dot only when the entry point is strictly inside
    /// the viewport; edge events report 0 or the full extent
    pub fn on_enter(&mut self, x: f64, y: f64, viewport_width: f64, viewport_height: f64) {
        if x > 0.0 && x < viewport_width && y > 0.0 && y < viewport_height {
            self.visible = true;
        }
    }

    /// CSS class toggles, applied in this order
    pub fn classes(&self) -> [(&'static str, bool); 3] {
        [
            ("visible", self.visible),
            ("hover", self.hover),
            ("click", self.pressed),
        ]
    }
}
