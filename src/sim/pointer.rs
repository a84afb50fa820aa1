//! Pointer state seen by the field

use glam::Vec2;

/// Last known cursor position and the radius it pushes particles within
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    position: Option<Vec2>,
    radius: f32,
}

impl Pointer {
    pub fn new(radius: f32) -> Self {
        Self {
            position: None,
            radius,
        }
    }

    /// `None` while the pointer is outside the surface
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    pub fn leave(&mut self) {
        self.position = None;
    }

    /// Repulsion to subtract from a particle's velocity at `pos`.
    ///
    /// Zero outside the radius and exactly on the cursor; otherwise
    /// `(radius - d) / radius * max_force` along the direction to the cursor.
    pub fn repulsion(&self, pos: Vec2, max_force: f32) -> Vec2 {
        let Some(cursor) = self.position else {
            return Vec2::ZERO;
        };
        let offset = cursor - pos;
        let dist_sq = offset.length_squared();
        if dist_sq >= self.radius * self.radius || dist_sq == 0.0 {
            return Vec2::ZERO;
        }
        let dist = dist_sq.sqrt();
        let force = (self.radius - dist) / self.radius;
        offset / dist * force * max_force
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_force_without_cursor() {
        let pointer = Pointer::new(100.0);
        assert_eq!(pointer.repulsion(Vec2::new(10.0, 10.0), 0.3), Vec2::ZERO);
    }

    #[test]
    fn test_force_scales_with_proximity() {
        let mut pointer = Pointer::new(100.0);
        pointer.move_to(100.0, 100.0);

        // 50px to the left: half strength, pointing at the cursor (+x)
        let near = pointer.repulsion(Vec2::new(50.0, 100.0), 0.3);
        assert!((near.x - 0.15).abs() < 1e-6);
        assert_eq!(near.y, 0.0);

        // 90px away: weaker
        let far = pointer.repulsion(Vec2::new(10.0, 100.0), 0.3);
        assert!(far.x > 0.0 && far.x < near.x);
    }

    #[test]
    fn test_no_force_at_or_beyond_radius() {
        let mut pointer = Pointer::new(100.0);
        pointer.move_to(0.0, 0.0);
        assert_eq!(pointer.repulsion(Vec2::new(100.0, 0.0), 0.3), Vec2::ZERO);
        assert_eq!(pointer.repulsion(Vec2::new(150.0, 0.0), 0.3), Vec2::ZERO);
        assert_eq!(pointer.repulsion(Vec2::ZERO, 0.3), Vec2::ZERO);
    }

    #[test]
    fn test_leave_clears_position() {
        let mut pointer = Pointer::new(100.0);
        pointer.move_to(1.0, 2.0);
        assert_eq!(pointer.position(), Some(Vec2::new(1.0, 2.0)));
        pointer.leave();
        assert_eq!(pointer.position(), None);
    }
}
