//! Particle field simulation
//!
//! Everything here is host-independent so it runs the same in the browser,
//! in headless native runs and in tests:
//! - Seeded RNG only
//! - Time comes from an injected `Clock`
//! - Frames come from an injected `FrameScheduler`
//! - No DOM or rendering dependencies

pub mod clock;
pub mod field;
pub mod frame_loop;
pub mod particle;
pub mod pointer;

pub use clock::{Clock, ManualClock};
pub use field::{Link, ParticleField};
pub use frame_loop::{FrameHandle, FrameLoop, FrameScheduler, LoopState, QueuedScheduler};
pub use particle::{Lifetime, Particle};
pub use pointer::Pointer;
