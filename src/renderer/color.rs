//! RGBA colour with CSS formatting

use std::fmt;

/// 8-bit RGB with a fractional alpha, as Canvas 2D styles take it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Formats as `rgba(r, g, b, a)` with alpha clamped to 0..1
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_string() {
        assert_eq!(
            Rgba::new(110, 142, 251, 0.5).to_string(),
            "rgba(110, 142, 251, 0.5)"
        );
        assert_eq!(Rgba::new(0, 0, 0, 2.0).to_string(), "rgba(0, 0, 0, 1)");
    }
}
