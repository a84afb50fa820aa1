//! Field tuning and presets
//!
//! The canvas element may override the defaults through `data-preset` and
//! `data-config` (JSON) attributes.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Density presets, one per page variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FieldPreset {
    #[default]
    Sparse,
    Balanced,
    Dense,
}

impl FieldPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldPreset::Sparse => "Sparse",
            FieldPreset::Balanced => "Balanced",
            FieldPreset::Dense => "Dense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sparse" => Some(FieldPreset::Sparse),
            "balanced" => Some(FieldPreset::Balanced),
            "dense" => Some(FieldPreset::Dense),
            _ => None,
        }
    }

    /// Surface area per ambient particle
    pub fn density(&self) -> f32 {
        match self {
            FieldPreset::Sparse => 25_000.0,
            FieldPreset::Balanced => 20_000.0,
            FieldPreset::Dense => 15_000.0,
        }
    }
}

/// Inclusive-exclusive sampling band `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f32,
    pub max: f32,
}

impl Band {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Finite, non-negative and ordered
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && 0.0 <= self.min && self.min <= self.max
    }

    /// Map a unit sample in [0, 1) into the band
    #[inline]
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t
    }
}

/// Every tuning value of the particle field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Surface area (px²) per ambient particle
    pub density: f32,

    // === Pointer ===
    pub interaction_radius: f32,
    pub max_force: f32,

    /// Per-axis velocity cap
    pub max_speed: f32,

    // === Ambient particles ===
    pub ambient_speed: f32,
    pub ambient_opacity: Band,
    pub size: Band,

    // === Click bursts ===
    pub burst_count: usize,
    pub burst_speed: f32,
    pub burst_life_ms: f64,
    pub burst_opacity: Band,

    // === Links ===
    pub link_distance: f32,
    pub link_opacity: f32,
    pub link_width: f32,

    /// Particle and link colour (RGB)
    pub color: [u8; 3],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density: PARTICLE_DENSITY,

            interaction_radius: INTERACTION_RADIUS,
            max_force: MAX_FORCE,
            max_speed: MAX_SPEED,

            ambient_speed: AMBIENT_SPEED,
            ambient_opacity: Band::new(AMBIENT_OPACITY.0, AMBIENT_OPACITY.1),
            size: Band::new(PARTICLE_SIZE.0, PARTICLE_SIZE.1),

            burst_count: BURST_COUNT,
            burst_speed: BURST_SPEED,
            burst_life_ms: BURST_LIFE_MS,
            burst_opacity: Band::new(BURST_OPACITY.0, BURST_OPACITY.1),

            link_distance: LINK_DISTANCE,
            link_opacity: LINK_OPACITY,
            link_width: LINK_WIDTH,

            color: PARTICLE_COLOR,
        }
    }
}

impl FieldConfig {
    /// Defaults with the preset's density
    pub fn from_preset(preset: FieldPreset) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config
    }

    pub fn apply_preset(&mut self, preset: FieldPreset) {
        self.density = preset.density();
    }

    /// Build from the canvas `data-preset` / `data-config` attributes.
    ///
    /// The preset is applied first so an explicit `density` in the JSON wins.
    /// Unknown presets and malformed JSON are ignored with a warning.
    pub fn from_attributes(preset: Option<&str>, json: Option<&str>) -> Self {
        let preset = preset.and_then(|name| {
            let parsed = FieldPreset::from_str(name);
            if parsed.is_none() {
                log::warn!("Unknown field preset '{}', using defaults", name);
            }
            parsed
        });
        let mut config = Self::from_preset(preset.unwrap_or_default());

        if let Some(json) = json {
            match serde_json::from_str::<serde_json::Value>(json) {
                Ok(overrides) => config = config.merged(overrides),
                Err(e) => log::warn!("Ignoring malformed field config: {}", e),
            }
        }

        config.sanitized()
    }

    /// Overlay the fields present in `overrides` on top of `self`. Nested
    /// objects (bands) merge key by key, so `{"size": {"max": 6}}` keeps the
    /// current `size.min`.
    fn merged(self, overrides: serde_json::Value) -> Self {
        if !overrides.is_object() {
            log::warn!("Field config must be a JSON object");
            return self;
        }
        let Ok(mut base) = serde_json::to_value(&self) else {
            return self;
        };
        merge_json(&mut base, overrides);
        match serde_json::from_value(base) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring invalid field config: {}", e);
                self
            }
        }
    }

    /// Replace values that would break the simulation with their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.density.is_finite() && self.density > 0.0) {
            self.density = defaults.density;
        }
        if !non_negative(self.interaction_radius) {
            self.interaction_radius = defaults.interaction_radius;
        }
        if !non_negative(self.max_force) {
            self.max_force = defaults.max_force;
        }
        if !non_negative(self.max_speed) {
            self.max_speed = defaults.max_speed;
        }
        // Particles never start faster than the cap
        if !non_negative(self.ambient_speed) {
            self.ambient_speed = defaults.ambient_speed;
        }
        self.ambient_speed = self.ambient_speed.min(self.max_speed);
        if !non_negative(self.burst_speed) {
            self.burst_speed = defaults.burst_speed;
        }
        self.burst_speed = self.burst_speed.min(self.max_speed);
        self.burst_count = self.burst_count.min(MAX_BURST_COUNT);
        if !(self.burst_life_ms.is_finite() && self.burst_life_ms >= 0.0) {
            self.burst_life_ms = defaults.burst_life_ms;
        }
        if !non_negative(self.link_distance) {
            self.link_distance = defaults.link_distance;
        }
        if !self.size.is_valid() {
            self.size = defaults.size;
        }
        if !self.ambient_opacity.is_valid() {
            self.ambient_opacity = defaults.ambient_opacity;
        }
        if !self.burst_opacity.is_valid() {
            self.burst_opacity = defaults.burst_opacity;
        }
        self
    }
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

/// Recursive JSON overlay: objects merge per key, anything else replaces
fn merge_json(base: &mut serde_json::Value, overrides: serde_json::Value) {
    match (base, overrides) {
        (serde_json::Value::Object(base), serde_json::Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, value) => *base = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_round_trip_names() {
        for preset in [FieldPreset::Sparse, FieldPreset::Balanced, FieldPreset::Dense] {
            assert_eq!(FieldPreset::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(FieldPreset::from_str(" DENSE "), Some(FieldPreset::Dense));
        assert_eq!(FieldPreset::from_str("ultra"), None);
    }

    #[test]
    fn test_default_matches_reference_constants() {
        let config = FieldConfig::default();
        assert_eq!(config.density, 25_000.0);
        assert_eq!(config.burst_count, 10);
        assert_eq!(config.burst_life_ms, 3000.0);
        assert_eq!(config.color, [110, 142, 251]);
    }

    #[test]
    fn test_attributes_preset_then_json_override() {
        let config = FieldConfig::from_attributes(Some("dense"), None);
        assert_eq!(config.density, 15_000.0);

        let config =
            FieldConfig::from_attributes(Some("dense"), Some(r#"{"density": 18000, "burst_count": 4}"#));
        assert_eq!(config.density, 18_000.0);
        assert_eq!(config.burst_count, 4);
        // Untouched fields keep their defaults
        assert_eq!(config.link_distance, LINK_DISTANCE);
    }

    #[test]
    fn test_attributes_ignore_bad_input() {
        let config = FieldConfig::from_attributes(Some("nope"), Some("{not json"));
        assert_eq!(config, FieldConfig::default());

        let config = FieldConfig::from_attributes(None, Some(r#"{"density": "lots"}"#));
        assert_eq!(config, FieldConfig::default());

        let config = FieldConfig::from_attributes(None, Some("[1, 2]"));
        assert_eq!(config, FieldConfig::default());
    }

    #[test]
    fn test_from_preset_sets_density_only() {
        let config = FieldConfig::from_preset(FieldPreset::Balanced);
        assert_eq!(config.density, 20_000.0);
        assert_eq!(config.burst_count, BURST_COUNT);
        assert_eq!(FieldConfig::from_preset(FieldPreset::default()), FieldConfig::default());
    }

    #[test]
    fn test_partial_band_override_keeps_other_overrides() {
        let config = FieldConfig::from_attributes(
            Some("dense"),
            Some(r#"{"density": 18000, "size": {"max": 6}}"#),
        );
        assert_eq!(config.density, 18_000.0);
        assert_eq!(config.size, Band::new(PARTICLE_SIZE.0, 6.0));
        assert_eq!(config.ambient_opacity, FieldConfig::default().ambient_opacity);
    }

    #[test]
    fn test_invalid_band_falls_back() {
        let config = FieldConfig::from_attributes(None, Some(r#"{"size": {"min": 5, "max": 2}}"#));
        assert_eq!(config.size, FieldConfig::default().size);

        let config =
            FieldConfig::from_attributes(None, Some(r#"{"burst_opacity": {"min": -1}}"#));
        assert_eq!(config.burst_opacity, FieldConfig::default().burst_opacity);
    }

    #[test]
    fn test_sanitized_bounds_burst_and_speeds() {
        let config = FieldConfig::from_attributes(
            None,
            Some(r#"{"burst_count": 1000000000, "ambient_speed": 9, "burst_speed": 9, "max_force": -1}"#),
        );
        assert_eq!(config.burst_count, MAX_BURST_COUNT);
        assert_eq!(config.ambient_speed, MAX_SPEED);
        assert_eq!(config.burst_speed, MAX_SPEED);
        assert_eq!(config.max_force, MAX_FORCE);

        let config = FieldConfig::from_attributes(
            None,
            Some(r#"{"max_speed": 0.25, "ambient_speed": 0.5}"#),
        );
        assert_eq!(config.ambient_speed, 0.25);
        assert_eq!(config.burst_speed, 0.25);
    }

    #[test]
    fn test_sanitized_rejects_non_positive_density() {
        let config = FieldConfig::from_attributes(None, Some(r#"{"density": 0}"#));
        assert_eq!(config.density, PARTICLE_DENSITY);
    }
}
