//! Particle Field - interactive background and page effects for a portfolio site
//!
//! Core modules:
//! - `sim`: Particle field simulation (pointer repulsion, bursts, links, frame loop)
//! - `simulator`: Event entry points tying the field to a clock and frame scheduler
//! - `renderer`: Drawing surface abstraction (Canvas 2D on web)
//! - `platform`: Browser/native platform abstraction (time, frames, storage)
//! - `page`: Peripheral page effects (typewriter, form, scroll, nav, project modal)
//! - `settings`: Data-driven field tuning and presets
//! - `theme`: Light/dark theme persisted in storage

pub mod page;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod simulator;
pub mod theme;

pub use settings::{FieldConfig, FieldPreset};
pub use simulator::Simulator;
pub use theme::Theme;

/// Reference tuning constants
pub mod consts {
    /// Surface area (px²) per ambient particle
    pub const PARTICLE_DENSITY: f32 = 25_000.0;

    /// Pointer interaction
    pub const INTERACTION_RADIUS: f32 = 100.0;
    pub const MAX_FORCE: f32 = 0.3;

    /// Per-axis velocity cap (px/frame)
    pub const MAX_SPEED: f32 = 1.5;

    /// Ambient particles
    pub const AMBIENT_SPEED: f32 = 0.5;
    pub const AMBIENT_OPACITY: (f32, f32) = (0.2, 0.7);
    pub const PARTICLE_SIZE: (f32, f32) = (1.0, 4.0);

    /// Click bursts
    pub const BURST_COUNT: usize = 10;
    /// Upper bound for a configured burst
    pub const MAX_BURST_COUNT: usize = 200;
    pub const BURST_SPEED: f32 = 1.5;
    pub const BURST_LIFE_MS: f64 = 3000.0;
    pub const BURST_OPACITY: (f32, f32) = (0.2, 1.0);

    /// Connecting lines
    pub const LINK_DISTANCE: f32 = 80.0;
    pub const LINK_OPACITY: f32 = 0.05;
    pub const LINK_WIDTH: f32 = 0.3;

    /// Particle colour (RGB)
    pub const PARTICLE_COLOR: [u8; 3] = [110, 142, 251];
}
