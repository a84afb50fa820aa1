//! Skill tag entrance and press effects

/// Delay between consecutive tags in the entrance cascade (ms)
pub const ENTRANCE_STAGGER_MS: i32 = 80;
/// Time a tag spends in its hidden pose before animating in (ms)
pub const ENTRANCE_SETTLE_MS: i32 = 50;
/// How long a clicked tag stays pressed (ms)
pub const PRESS_RELEASE_MS: i32 = 150;

pub const ENTRANCE_TRANSITION: &str = "all 0.5s cubic-bezier(0.175, 0.885, 0.32, 1.275)";
pub const HIDDEN_TRANSFORM: &str = "translateY(20px) scale(0.8)";
pub const RESTING_TRANSFORM: &str = "translateY(0) scale(1)";
pub const PRESSED_TRANSFORM: &str = "scale(0.95)";
pub const HOVER_TRANSFORM: &str = "scale(1.1)";
pub const HOVER_ANIMATION: &str = "pulse 1s ease-in-out";

/// When the tag at `index` starts its entrance
pub fn entrance_delay_ms(index: usize) -> i32 {
    i32::try_from(index)
        .unwrap_or(i32::MAX)
        .saturating_mul(ENTRANCE_STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_is_staggered() {
        assert_eq!(entrance_delay_ms(0), 0);
        assert_eq!(entrance_delay_ms(1), 80);
        assert_eq!(entrance_delay_ms(12), 960);
    }

    #[test]
    fn test_entrance_delay_saturates() {
        assert_eq!(entrance_delay_ms(usize::MAX), i32::MAX);
    }
}
