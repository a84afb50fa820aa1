//! Particle field: population, click bursts and the per-frame step
//!
//! Positions stay inside `[0, width] x [0, height]`. Boundary hits mirror the
//! overshoot back into the surface and turn the velocity inward; positions are
//! never clamped.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::particle::Particle;
use super::pointer::Pointer;
use crate::settings::{Band, FieldConfig};

/// A connecting line between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    /// Fades linearly from `link_opacity` at distance 0 to 0 at `link_distance`
    pub opacity: f32,
}

/// Owns the particle collection and the surface bounds it lives in
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: FieldConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: Pcg32,
}

impl ParticleField {
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Set the surface size. Existing particles are not moved; call `populate()`.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Number of ambient particles for the current surface
    pub fn ambient_count(&self) -> usize {
        let area = self.width as f64 * self.height as f64;
        (area / self.config.density as f64).floor() as usize
    }

    /// Replace the whole collection (bursts included) with fresh ambient particles
    pub fn populate(&mut self) {
        let count = self.ambient_count();
        let speed = self.config.ambient_speed;
        let size = self.config.size;
        let opacity = self.config.ambient_opacity;

        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let pos = Vec2::new(
                self.rng.random::<f32>() * self.width,
                self.rng.random::<f32>() * self.height,
            );
            let vel = self.random_velocity(speed);
            let size = sample(&mut self.rng, size);
            let opacity = sample(&mut self.rng, opacity);
            self.particles.push(Particle::ambient(pos, vel, size, opacity));
        }
        log::debug!(
            "Populated {} particles for {}x{}",
            count,
            self.width,
            self.height
        );
    }

    /// Append `count` short-lived particles at `origin`
    pub fn spawn_burst(&mut self, origin: Vec2, count: usize, now_ms: f64) {
        let speed = self.config.burst_speed;
        let life_ms = self.config.burst_life_ms;
        let size = self.config.size;
        let opacity = self.config.burst_opacity;

        self.particles.reserve(count);
        for _ in 0..count {
            let vel = self.random_velocity(speed);
            let size = sample(&mut self.rng, size);
            let opacity = sample(&mut self.rng, opacity);
            self.particles
                .push(Particle::burst(origin, vel, size, opacity, now_ms, life_ms));
        }
    }

    /// Advance one frame: prune expired bursts, then integrate, repel, reflect
    /// and cap speed for every remaining particle.
    pub fn step(&mut self, now_ms: f64, pointer: &Pointer) {
        self.prune(now_ms);

        let max_force = self.config.max_force;
        let max_speed = Vec2::splat(self.config.max_speed);
        let (width, height) = (self.width, self.height);

        for p in &mut self.particles {
            p.pos += p.vel;
            p.vel -= pointer.repulsion(p.pos, max_force);

            reflect_axis(&mut p.pos.x, &mut p.vel.x, width);
            reflect_axis(&mut p.pos.y, &mut p.vel.y, height);

            p.vel = p.vel.clamp(-max_speed, max_speed);
        }
    }

    /// Drop burst particles whose lifetime is over
    pub fn prune(&mut self, now_ms: f64) {
        self.particles.retain(|p| !p.is_expired(now_ms));
    }

    /// Every unordered pair closer than `link_distance`
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let max_dist = self.config.link_distance;
        let max_dist_sq = max_dist * max_dist;
        let base_opacity = self.config.link_opacity;
        let particles = &self.particles;

        particles.iter().enumerate().flat_map(move |(i, a)| {
            particles[i + 1..].iter().filter_map(move |b| {
                let dist_sq = a.pos.distance_squared(b.pos);
                if dist_sq >= max_dist_sq {
                    return None;
                }
                let dist = dist_sq.sqrt();
                Some(Link {
                    from: a.pos,
                    to: b.pos,
                    opacity: base_opacity * (1.0 - dist / max_dist),
                })
            })
        })
    }

    fn random_velocity(&mut self, speed: f32) -> Vec2 {
        let band = Band::new(-speed, speed);
        Vec2::new(sample(&mut self.rng, band), sample(&mut self.rng, band))
    }
}

/// Uniform sample in `[min, max)`; a degenerate band yields `min`
#[inline]
fn sample(rng: &mut Pcg32, band: Band) -> f32 {
    band.lerp(rng.random::<f32>())
}

/// Mirror a coordinate back into `[0, extent]`, pointing its velocity inward
fn reflect_axis(pos: &mut f32, vel: &mut f32, extent: f32) {
    if extent <= 0.0 {
        *pos = 0.0;
        return;
    }
    if *pos < 0.0 {
        *pos = -*pos;
        *vel = vel.abs();
    } else if *pos > extent {
        *pos = 2.0 * extent - *pos;
        *vel = -vel.abs();
    }
    // Overshoot wider than the surface itself: fold until inside
    if !(0.0..=extent).contains(pos) {
        let period = 2.0 * extent;
        let folded = pos.rem_euclid(period);
        *pos = if folded > extent { period - folded } else { folded };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field(width: f32, height: f32) -> ParticleField {
        let mut field = ParticleField::new(FieldConfig::default(), 12345);
        field.resize(width, height);
        field
    }

    fn in_bounds(field: &ParticleField) -> bool {
        field.particles().iter().all(|p| {
            (0.0..=field.width()).contains(&p.pos.x) && (0.0..=field.height()).contains(&p.pos.y)
        })
    }

    #[test]
    fn test_ambient_count_example() {
        let mut field = field(800.0, 600.0);
        field.populate();
        assert_eq!(field.len(), 19);
    }

    #[test]
    fn test_populate_count_is_stable() {
        let mut field = field(1920.0, 1080.0);
        field.populate();
        let first = field.len();
        field.populate();
        assert_eq!(field.len(), first);
        assert_eq!(first, 82);
    }

    #[test]
    fn test_populate_respects_config_bands() {
        let mut field = field(1600.0, 1200.0);
        field.populate();
        let config = field.config().clone();
        for p in field.particles() {
            assert!(!p.is_burst());
            assert!(p.vel.x.abs() <= config.ambient_speed);
            assert!(p.vel.y.abs() <= config.ambient_speed);
            assert!(p.opacity >= config.ambient_opacity.min && p.opacity < config.ambient_opacity.max);
            assert!(p.size >= config.size.min && p.size < config.size.max);
        }
        assert!(in_bounds(&field));
    }

    #[test]
    fn test_populate_drops_bursts() {
        let mut field = field(800.0, 600.0);
        field.populate();
        field.spawn_burst(Vec2::new(10.0, 10.0), 10, 0.0);
        assert_eq!(field.len(), 29);
        field.populate();
        assert_eq!(field.len(), 19);
        assert!(field.particles().iter().all(|p| !p.is_burst()));
    }

    #[test]
    fn test_empty_surface_has_no_particles() {
        let mut field = field(0.0, 0.0);
        field.populate();
        assert!(field.is_empty());
    }

    #[test]
    fn test_burst_pruned_after_life() {
        let mut field = field(800.0, 600.0);
        let pointer = Pointer::new(100.0);
        field.spawn_burst(Vec2::new(100.0, 100.0), 10, 0.0);
        assert_eq!(field.len(), 10);
        for p in field.particles() {
            assert_eq!(p.pos, Vec2::new(100.0, 100.0));
            assert_eq!(p.lifetime.map(|l| l.life_ms), Some(3000.0));
        }

        field.step(3001.0, &pointer);
        assert!(field.is_empty());
    }

    #[test]
    fn test_burst_survives_until_life_elapsed() {
        let mut field = field(800.0, 600.0);
        let pointer = Pointer::new(100.0);
        field.spawn_burst(Vec2::new(400.0, 300.0), 3, 1000.0);

        field.step(3999.0, &pointer);
        assert_eq!(field.len(), 3);

        field.step(4000.0, &pointer);
        assert!(field.is_empty());
    }

    #[test]
    fn test_pointer_pushes_particle_away() {
        let mut field = field(800.0, 600.0);
        field.particles.push(Particle::ambient(
            Vec2::new(390.0, 300.0),
            Vec2::ZERO,
            2.0,
            0.5,
        ));
        let mut pointer = Pointer::new(100.0);
        pointer.move_to(400.0, 300.0);

        field.step(0.0, &pointer);
        // Cursor is to the right, so the particle gains leftward velocity
        assert!(field.particles()[0].vel.x < 0.0);
        assert_eq!(field.particles()[0].vel.y, 0.0);
    }

    #[test]
    fn test_reflection_at_bounds() {
        let mut field = field(100.0, 100.0);
        field.particles.push(Particle::ambient(
            Vec2::new(99.5, 0.5),
            Vec2::new(1.5, -1.5),
            2.0,
            0.5,
        ));

        field.step(0.0, &Pointer::new(100.0));
        let p = &field.particles()[0];
        assert!((p.pos.x - 99.0).abs() < 1e-4);
        assert!((p.pos.y - 1.0).abs() < 1e-4);
        assert_eq!(p.vel, Vec2::new(-1.5, 1.5));
    }

    #[test]
    fn test_speed_capped() {
        let mut field = field(800.0, 600.0);
        field.particles.push(Particle::ambient(
            Vec2::new(400.0, 300.0),
            Vec2::new(1.5, 0.0),
            2.0,
            0.5,
        ));
        let mut pointer = Pointer::new(100.0);
        pointer.move_to(400.0, 300.0);

        // Repeated pushes cannot exceed the cap
        for _ in 0..50 {
            field.step(0.0, &pointer);
        }
        let vel = field.particles()[0].vel;
        assert!(vel.x.abs() <= 1.5 && vel.y.abs() <= 1.5);
    }

    #[test]
    fn test_links_fade_with_distance() {
        let mut field = field(800.0, 600.0);
        for x in [0.0, 40.0, 200.0] {
            field
                .particles
                .push(Particle::ambient(Vec2::new(x, 0.0), Vec2::ZERO, 1.0, 1.0));
        }

        let links: Vec<Link> = field.links().collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].from, Vec2::ZERO);
        assert_eq!(links[0].to, Vec2::new(40.0, 0.0));
        assert!((links[0].opacity - 0.025).abs() < 1e-6);
    }

    #[test]
    fn test_same_seed_same_field() {
        let mut a = field(800.0, 600.0);
        let mut b = field(800.0, 600.0);
        a.populate();
        b.populate();
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_reflect_axis_folds_huge_overshoot() {
        let (mut pos, mut vel) = (-25.0_f32, -30.0_f32);
        reflect_axis(&mut pos, &mut vel, 10.0);
        assert!((0.0..=10.0).contains(&pos));
        assert!(vel > 0.0);

        let (mut pos, mut vel) = (5.0_f32, 1.0_f32);
        reflect_axis(&mut pos, &mut vel, 0.0);
        assert_eq!(pos, 0.0);
    }

    proptest! {
        #[test]
        fn particles_stay_in_bounds_and_under_speed_cap(
            seed in any::<u64>(),
            width in 1.0_f32..2000.0,
            height in 1.0_f32..2000.0,
            cursor in proptest::option::of((0.0_f32..2000.0, 0.0_f32..2000.0)),
            clicks in proptest::collection::vec((0.0_f32..1.0, 0.0_f32..1.0), 0..4),
            steps in 1_usize..120,
        ) {
            let mut field = ParticleField::new(FieldConfig::default(), seed);
            field.resize(width, height);
            field.populate();
            for (fx, fy) in clicks {
                field.spawn_burst(Vec2::new(fx * width, fy * height), 10, 0.0);
            }
            let mut pointer = Pointer::new(100.0);
            if let Some((x, y)) = cursor {
                pointer.move_to(x, y);
            }

            for frame in 0..steps {
                field.step(frame as f64 * 16.0, &pointer);
                prop_assert!(in_bounds(&field));
                for p in field.particles() {
                    prop_assert!(p.vel.x.abs() <= 1.5 && p.vel.y.abs() <= 1.5);
                }
            }
        }
    }
}
