//! Particle field simulator
//!
//! Owns the field, the pointer, an injected clock and the frame loop, and
//! exposes one entry point per host event. The host shares it with its event
//! handlers as `Rc<RefCell<Simulator<..>>>`; handlers run strictly between
//! frames so a click appending particles never races a step.

use glam::Vec2;

use crate::renderer::{Surface, render_field};
use crate::settings::FieldConfig;
use crate::sim::{Clock, FrameLoop, FrameScheduler, ParticleField, Pointer};

pub struct Simulator<C: Clock, S: FrameScheduler> {
    field: ParticleField,
    pointer: Pointer,
    clock: C,
    frames: FrameLoop<S>,
}

impl<C: Clock, S: FrameScheduler> Simulator<C, S> {
    pub fn new(
        config: FieldConfig,
        width: f32,
        height: f32,
        seed: u64,
        clock: C,
        scheduler: S,
    ) -> Self {
        let pointer = Pointer::new(config.interaction_radius);
        let mut field = ParticleField::new(config, seed);
        field.resize(width, height);
        Self {
            field,
            pointer,
            clock,
            frames: FrameLoop::new(scheduler),
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn frames(&self) -> &FrameLoop<S> {
        &self.frames
    }

    /// Populate and start the loop
    pub fn start(&mut self) {
        self.field.populate();
        self.frames.start();
        log::info!(
            "Particle field started: {} particles on {}x{}",
            self.field.len(),
            self.field.width(),
            self.field.height()
        );
    }

    /// Cancel the pending frame, regenerate for the new size and restart.
    ///
    /// Externally a seamless restart: exactly one frame is pending afterwards.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.frames.stop();
        self.field.resize(width, height);
        self.field.populate();
        self.frames.start();
        log::debug!(
            "Resized to {}x{}, {} particles",
            width,
            height,
            self.field.len()
        );
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.move_to(x, y);
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.leave();
    }

    /// Spawn a burst at the click position
    pub fn on_click(&mut self, x: f32, y: f32) {
        let count = self.field.config().burst_count;
        let now = self.clock.now_ms();
        self.field.spawn_burst(Vec2::new(x, y), count, now);
        log::debug!("Burst of {} at ({}, {})", count, x, y);
    }

    /// One animation tick: step, render, schedule the next frame.
    ///
    /// A callback that arrives while stopped (already cancelled) does nothing.
    pub fn on_frame<R: Surface + ?Sized>(&mut self, surface: &mut R) {
        if !self.frames.is_running() {
            return;
        }
        let now = self.clock.now_ms();
        self.field.step(now, &self.pointer);
        render_field(&self.field, surface);
        self.frames.reschedule();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::FrameStats;
    use crate::sim::{FrameHandle, LoopState, ManualClock, QueuedScheduler};

    type TestSim = Simulator<ManualClock, QueuedScheduler>;

    fn sim(width: f32, height: f32) -> (TestSim, ManualClock, QueuedScheduler) {
        let clock = ManualClock::new(0.0);
        let host = QueuedScheduler::new();
        let sim = Simulator::new(
            FieldConfig::default(),
            width,
            height,
            42,
            clock.clone(),
            host.clone(),
        );
        (sim, clock, host)
    }

    /// Fire the pending frame the way the browser would
    fn tick(sim: &mut TestSim, host: &QueuedScheduler, stats: &mut FrameStats) -> bool {
        if host.fire().is_none() {
            return false;
        }
        sim.on_frame(stats);
        true
    }

    #[test]
    fn test_start_runs_one_loop() {
        let (mut sim, _clock, host) = sim(800.0, 600.0);
        assert_eq!(sim.frames().state(), LoopState::Stopped);

        sim.start();
        assert_eq!(sim.field().len(), 19);
        assert_eq!(host.pending(), 1);

        let mut stats = FrameStats::default();
        for _ in 0..5 {
            assert!(tick(&mut sim, &host, &mut stats));
            assert_eq!(host.pending(), 1);
        }
        assert_eq!(stats.clears, 5);
        assert_eq!(stats.circles, 5 * 19);
    }

    #[test]
    fn test_resize_cancels_one_frame_and_restarts_one_loop() {
        let (mut sim, _clock, host) = sim(800.0, 600.0);
        sim.start();
        assert_eq!(host.pending(), 1);

        sim.on_resize(1000.0, 500.0);
        assert_eq!(host.cancelled(), 1);
        assert_eq!(host.pending(), 1);
        assert!(sim.frames().is_running());
        assert_eq!(sim.field().width(), 1000.0);
        assert_eq!(sim.field().len(), 20);

        // Repeated resizes never stack loops
        sim.on_resize(800.0, 600.0);
        sim.on_resize(800.0, 600.0);
        assert_eq!(host.cancelled(), 3);
        assert_eq!(host.pending(), 1);
        assert_eq!(sim.field().len(), 19);
    }

    #[test]
    fn test_cancelled_callback_is_ignored() {
        let (mut sim, _clock, host) = sim(800.0, 600.0);
        sim.start();

        let mut stats = FrameStats::default();
        let handle = host.fire();
        assert_eq!(handle, Some(FrameHandle(1)));
        sim.frames.stop();
        sim.on_frame(&mut stats);
        assert_eq!(stats.clears, 0);
        assert_eq!(host.pending(), 0);
    }

    #[test]
    fn test_click_burst_pruned_after_life() {
        let (mut sim, clock, host) = sim(800.0, 600.0);
        sim.start();
        let ambient = sim.field().len();

        sim.on_click(100.0, 100.0);
        assert_eq!(sim.field().len(), ambient + 10);
        let bursts: Vec<_> = sim
            .field()
            .particles()
            .iter()
            .filter(|p| p.is_burst())
            .collect();
        assert_eq!(bursts.len(), 10);
        assert!(bursts.iter().all(|p| p.pos == Vec2::new(100.0, 100.0)));

        let mut stats = FrameStats::default();
        clock.advance(2999.0);
        tick(&mut sim, &host, &mut stats);
        assert_eq!(sim.field().len(), ambient + 10);

        clock.advance(2.0);
        tick(&mut sim, &host, &mut stats);
        assert_eq!(sim.field().len(), ambient);
    }

    #[test]
    fn test_pointer_events_update_state() {
        let (mut sim, _clock, _host) = sim(800.0, 600.0);
        sim.on_pointer_move(10.0, 20.0);
        assert_eq!(sim.pointer().position(), Some(Vec2::new(10.0, 20.0)));
        assert_eq!(sim.pointer().radius(), 100.0);
        sim.on_pointer_leave();
        assert_eq!(sim.pointer().position(), None);
    }
}
