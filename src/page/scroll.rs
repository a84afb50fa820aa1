//! Scroll-driven effects

/// Scroll handlers run at most once per this many ms (~60fps)
pub const SCROLL_THROTTLE_MS: f64 = 16.0;
/// Back-to-top button appears past this scroll offset (px)
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;
/// Elements reveal once their top is this far above the viewport bottom (px)
pub const REVEAL_MARGIN: f64 = 150.0;
/// Nav bar gets the heavier shadow past this scroll offset (px)
pub const NAV_SHADOW_OFFSET: f64 = 100.0;

pub const NAV_SHADOW_RAISED: &str = "0 2px 20px rgba(0, 0, 0, 0.15)";
pub const NAV_SHADOW_RESTING: &str = "0 2px 10px rgba(0, 0, 0, 0.1)";

/// Leading-edge throttle: the first call passes, later calls are dropped
/// until `limit_ms` has elapsed since the last call that passed
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    limit_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_ms: None,
        }
    }

    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last < self.limit_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_OFFSET
}

/// Reading progress in percent; 0 when the page does not scroll
pub fn progress_percent(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Whether an element whose top is at `element_top` (viewport-relative) should reveal
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_MARGIN
}

pub fn nav_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > NAV_SHADOW_OFFSET {
        NAV_SHADOW_RAISED
    } else {
        NAV_SHADOW_RESTING
    }
}
