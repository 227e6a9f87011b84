//! Tunable simulation parameters

use serde::{Deserialize, Serialize};

/// How spawn positions are distributed across the volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpawnDistribution {
    /// Uniform over the spawn volume
    Uniform,
    /// Biased toward cluster centers laid on a lower-left → upper-right diagonal
    Clustered,
}

/// What happens when a particle leaves the horizontal bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Respawn when rising past the top of the volume (age respawn also applies)
    Respawn,
    /// Toroidal wrap of x/z; only age triggers a respawn
    Wrap,
}

/// Configuration for the smoke simulation.
///
/// A flat set of scalars fed from the tunable-control surface. Changing
/// `particle_count`, `layer_count`, or `layer_depth_step` requires a pool
/// rebuild (layer depths are baked per particle at build time); everything
/// else is read live each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokeConfig {
    pub particle_count: usize,
    /// Base point size in pixels, applied uniformly at render time
    pub base_size: f32,
    /// Global multiplier on all velocity contributions
    pub speed: f32,
    /// Ceiling multiplier on the fade shape, applied at render time
    pub max_opacity: f32,
    /// Whole-effect opacity multiplier, render time only
    pub global_opacity: f32,
    /// Fade-in ramp duration in seconds
    pub fade_in_sec: f32,
    /// Fade-out ramp duration in seconds
    pub fade_out_sec: f32,
    /// Mean lifetime; per-particle lifetime is drawn from ±20% of this
    pub lifetime_sec: f32,
    /// Width of the horizontal spawn volume
    pub spread_x: f32,
    /// Depth of the spawn volume
    pub spread_z: f32,
    /// Amplitude of the sinusoidal lateral perturbation
    pub swirl_amp: f32,
    /// Frequency of the sinusoidal lateral perturbation
    pub swirl_freq: f32,
    /// Number of spawn clusters (clustered distribution only)
    pub cluster_count: usize,
    /// Radius of each spawn cluster
    pub cluster_radius: f32,
    /// Number of parallax depth bands
    pub layer_count: usize,
    /// Depth spacing between adjacent bands
    pub layer_depth_step: f32,
    pub spawn_distribution: SpawnDistribution,
    pub boundary: BoundaryPolicy,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            particle_count: 600,
            base_size: 40.0,
            speed: 0.7,
            max_opacity: 0.35,
            global_opacity: 1.0,
            fade_in_sec: 2.0,
            fade_out_sec: 2.5,
            lifetime_sec: 12.0,
            spread_x: 18.0,
            spread_z: 18.0,
            swirl_amp: 0.3,
            swirl_freq: 0.6,
            cluster_count: 6,
            cluster_radius: 2.8,
            layer_count: 3,
            layer_depth_step: 3.0,
            spawn_distribution: SpawnDistribution::Uniform,
            boundary: BoundaryPolicy::Respawn,
        }
    }
}

impl SmokeConfig {
    /// Number of depth bands, floored at one
    pub fn effective_layer_count(&self) -> usize {
        self.layer_count.max(1)
    }

    /// True if switching to `next` requires discarding and rebuilding the pool
    pub fn needs_rebuild(&self, next: &SmokeConfig) -> bool {
        self.particle_count != next.particle_count
            || self.layer_count != next.layer_count
            || self.layer_depth_step != next.layer_depth_step
    }

    /// True if switching to `next` should re-draw live particle positions
    /// in place (the spawn volume was resized, but the pool shape is intact)
    pub fn needs_position_reset(&self, next: &SmokeConfig) -> bool {
        self.spread_x != next.spread_x || self.spread_z != next.spread_z
    }

    /// Merge a flat TOML table into this config.
    ///
    /// Known keys are overwritten, unknown keys ignored. Integer values are
    /// coerced to floats where the field expects one.
    pub fn apply_table(&mut self, table: &toml::value::Table) {
        if let Some(v) = table.get("particle_count") {
            self.particle_count = toml_usize(v, self.particle_count);
        }
        if let Some(v) = table.get("base_size") {
            self.base_size = toml_f32(v, self.base_size);
        }
        if let Some(v) = table.get("speed") {
            self.speed = toml_f32(v, self.speed);
        }
        if let Some(v) = table.get("max_opacity") {
            self.max_opacity = toml_f32(v, self.max_opacity);
        }
        if let Some(v) = table.get("global_opacity") {
            self.global_opacity = toml_f32(v, self.global_opacity);
        }
        if let Some(v) = table.get("fade_in_sec") {
            self.fade_in_sec = toml_f32(v, self.fade_in_sec);
        }
        if let Some(v) = table.get("fade_out_sec") {
            self.fade_out_sec = toml_f32(v, self.fade_out_sec);
        }
        if let Some(v) = table.get("lifetime_sec") {
            self.lifetime_sec = toml_f32(v, self.lifetime_sec);
        }
        if let Some(v) = table.get("spread_x") {
            self.spread_x = toml_f32(v, self.spread_x);
        }
        if let Some(v) = table.get("spread_z") {
            self.spread_z = toml_f32(v, self.spread_z);
        }
        if let Some(v) = table.get("swirl_amp") {
            self.swirl_amp = toml_f32(v, self.swirl_amp);
        }
        if let Some(v) = table.get("swirl_freq") {
            self.swirl_freq = toml_f32(v, self.swirl_freq);
        }
        if let Some(v) = table.get("cluster_count") {
            self.cluster_count = toml_usize(v, self.cluster_count);
        }
        if let Some(v) = table.get("cluster_radius") {
            self.cluster_radius = toml_f32(v, self.cluster_radius);
        }
        if let Some(v) = table.get("layer_count") {
            self.layer_count = toml_usize(v, self.layer_count);
        }
        if let Some(v) = table.get("layer_depth_step") {
            self.layer_depth_step = toml_f32(v, self.layer_depth_step);
        }
        if let Some(v) = table.get("spawn_distribution") {
            self.spawn_distribution = match v.as_str().unwrap_or("uniform") {
                "clustered" => SpawnDistribution::Clustered,
                _ => SpawnDistribution::Uniform,
            };
        }
        if let Some(v) = table.get("boundary") {
            self.boundary = match v.as_str().unwrap_or("respawn") {
                "wrap" => BoundaryPolicy::Wrap,
                _ => BoundaryPolicy::Respawn,
            };
        }
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f32(v: &toml::Value, default: f32) -> f32 {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .unwrap_or(default)
}

fn toml_usize(v: &toml::Value, default: usize) -> usize {
    v.as_integer()
        .filter(|&i| i >= 0)
        .map(|i| i as usize)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let config = SmokeConfig::default();
        assert_eq!(config.particle_count, 600);
        assert!(config.lifetime_sec > 0.0);
        assert!(config.layer_count >= 1);
        assert_eq!(config.boundary, BoundaryPolicy::Respawn);
    }

    #[test]
    fn apply_table_overwrites_known_keys() {
        let toml_str = r#"
particle_count = 800
speed = 1.2
swirl_amp = 0
boundary = "wrap"
spawn_distribution = "clustered"
unknown_key = 42
"#;
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        let mut config = SmokeConfig::default();
        config.apply_table(&table);

        assert_eq!(config.particle_count, 800);
        assert!((config.speed - 1.2).abs() < 0.01);
        // Integer 0 coerced to float
        assert!(config.swirl_amp.abs() < 0.01);
        assert_eq!(config.boundary, BoundaryPolicy::Wrap);
        assert_eq!(config.spawn_distribution, SpawnDistribution::Clustered);
        // Untouched field keeps its default
        assert!((config.max_opacity - 0.35).abs() < 0.01);
    }

    #[test]
    fn rebuild_only_on_pool_shape_keys() {
        let base = SmokeConfig::default();

        let mut same_shape = base.clone();
        same_shape.speed = 2.0;
        same_shape.max_opacity = 0.9;
        assert!(!base.needs_rebuild(&same_shape));

        let mut more_particles = base.clone();
        more_particles.particle_count = 1000;
        assert!(base.needs_rebuild(&more_particles));

        let mut more_layers = base.clone();
        more_layers.layer_count = 5;
        assert!(base.needs_rebuild(&more_layers));

        let mut deeper = base.clone();
        deeper.layer_depth_step = 5.0;
        assert!(base.needs_rebuild(&deeper));
    }

    #[test]
    fn spread_change_resets_positions_without_rebuild() {
        let base = SmokeConfig::default();

        let mut narrower = base.clone();
        narrower.spread_x = 6.0;
        assert!(!base.needs_rebuild(&narrower));
        assert!(base.needs_position_reset(&narrower));

        let mut deeper = base.clone();
        deeper.spread_z = 30.0;
        assert!(base.needs_position_reset(&deeper));

        let mut faster = base.clone();
        faster.speed = 2.0;
        assert!(!base.needs_position_reset(&faster));
    }

    #[test]
    fn negative_particle_count_ignored() {
        let table: toml::value::Table = toml::from_str("particle_count = -5").unwrap();
        let mut config = SmokeConfig::default();
        config.apply_table(&table);
        assert_eq!(config.particle_count, 600);
    }

    #[test]
    fn zero_layer_count_treated_as_one() {
        let mut config = SmokeConfig::default();
        config.layer_count = 0;
        assert_eq!(config.effective_layer_count(), 1);
    }
}
