//! Drawing surface abstraction
//!
//! The field is drawn through `Surface` so the same render pass targets the
//! browser Canvas 2D context or a counting surface in headless runs.

pub mod color;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use color::Rgba;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::sim::ParticleField;

/// Immediate-mode 2D drawing target
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// Clear, then draw every particle followed by every link
pub fn render_field<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
    let config = field.config();
    let [r, g, b] = config.color;

    surface.clear(field.width(), field.height());

    for p in field.particles() {
        surface.fill_circle(p.pos, p.size, Rgba::new(r, g, b, p.opacity));
    }

    for link in field.links() {
        surface.stroke_line(
            link.from,
            link.to,
            config.link_width,
            Rgba::new(r, g, b, link.opacity),
        );
    }
}

/// Surface that only counts draw calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub clears: usize,
    pub circles: usize,
    pub lines: usize,
}

impl Surface for FrameStats {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.clears += 1;
    }

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {
        self.circles += 1;
    }

    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Rgba) {
        self.lines += 1;
    }
}
