//! Particle entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Finite lifetime of a burst particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lifetime {
    /// Creation timestamp (ms, clock time)
    pub born_ms: f64,
    /// How long the particle lives (ms)
    pub life_ms: f64,
}

impl Lifetime {
    /// Whether `now_ms` is at or past the end of this lifetime
    #[inline]
    pub fn is_over(&self, now_ms: f64) -> bool {
        now_ms - self.born_ms >= self.life_ms
    }
}

/// A single particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Surface-relative position (px)
    pub pos: Vec2,
    /// Velocity (px/frame)
    pub vel: Vec2,
    /// Circle radius (px)
    pub size: f32,
    /// Fill opacity (0.0 - 1.0)
    pub opacity: f32,
    /// `None` for ambient particles, which live until the next repopulate
    pub lifetime: Option<Lifetime>,
}

impl Particle {
    pub fn ambient(pos: Vec2, vel: Vec2, size: f32, opacity: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            opacity,
            lifetime: None,
        }
    }

    pub fn burst(pos: Vec2, vel: Vec2, size: f32, opacity: f32, born_ms: f64, life_ms: f64) -> Self {
        Self {
            pos,
            vel,
            size,
            opacity,
            lifetime: Some(Lifetime { born_ms, life_ms }),
        }
    }

    pub fn is_burst(&self) -> bool {
        self.lifetime.is_some()
    }

    pub fn is_expired(&self, now_ms: f64) -> bool {
        self.lifetime.is_some_and(|l| l.is_over(now_ms))
    }
}
