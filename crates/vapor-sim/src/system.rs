//! Frame driver — owns the pool and runs the simulation once per tick

use crate::config::SmokeConfig;
use crate::integrate::{apply_lifecycle, step_particle};
use crate::particle::{FrameParams, SmokeInstance, SmokePool};
use crate::spawn::{make_cluster_centers, reset_position, spawn_particle};
use vapor_core::{Result, SmokeRng};
use vapor_runtime::FrameSystem;

/// Upper bound on one integration step (~30 FPS floor). Larger raw frame
/// deltas are clamped so a hitch cannot destabilize the motion.
pub const MAX_FRAME_DT: f32 = 0.033;

/// The smoke simulation — implements `FrameSystem` for the frame loop.
///
/// Configuration changes are staged and swapped in at the next tick
/// boundary, so every particle in a tick sees one consistent snapshot.
pub struct SmokeSystem {
    config: SmokeConfig,
    pending: Option<SmokeConfig>,
    pool: SmokePool,
    rng: SmokeRng,
    /// Pre-allocated render payload, repacked every tick
    instances: Vec<SmokeInstance>,
}

impl SmokeSystem {
    pub fn new(config: SmokeConfig) -> Self {
        Self::with_seed(config, 0xDEAD_BEEF)
    }

    /// Seeded constructor for reproducible runs and tests.
    pub fn with_seed(config: SmokeConfig, seed: u32) -> Self {
        let mut rng = SmokeRng::new(seed);
        let pool = build_pool(&config, &mut rng);
        let instances = Vec::with_capacity(pool.len());
        Self {
            config,
            pending: None,
            pool,
            rng,
            instances,
        }
    }

    /// Stage a full configuration to apply at the next tick boundary.
    pub fn set_config(&mut self, config: SmokeConfig) {
        self.pending = Some(config);
    }

    /// Stage a partial configuration (flat TOML table, unknown keys ignored).
    pub fn apply_table(&mut self, table: &toml::value::Table) {
        let mut next = self.pending.take().unwrap_or_else(|| self.config.clone());
        next.apply_table(table);
        self.pending = Some(next);
    }

    pub fn config(&self) -> &SmokeConfig {
        &self.config
    }

    pub fn particle_count(&self) -> usize {
        self.pool.len()
    }

    pub fn particles(&self) -> &[crate::particle::Particle] {
        self.pool.particles()
    }

    /// Packed per-particle render payload for the current frame.
    pub fn instances(&self) -> &[SmokeInstance] {
        &self.instances
    }

    /// Pool-wide shading knobs for the current frame.
    pub fn frame_params(&self) -> FrameParams {
        FrameParams {
            base_size: self.config.base_size,
            max_opacity: self.config.max_opacity,
            global_opacity: self.config.global_opacity,
        }
    }

    /// Run one simulation tick with a raw frame delta in seconds.
    pub fn step(&mut self, raw_dt: f32) {
        // Swap in staged configuration at the tick boundary
        if let Some(next) = self.pending.take() {
            if self.config.needs_rebuild(&next) {
                self.pool = build_pool(&next, &mut self.rng);
                self.instances = Vec::with_capacity(self.pool.len());
            } else if self.config.needs_position_reset(&next) {
                // Redistribute live particles into the resized volume
                for p in self.pool.particles_mut() {
                    reset_position(p, &next, &mut self.rng);
                }
            }
            self.config = next;
        }

        let dt = raw_dt.min(MAX_FRAME_DT);
        let cfg = &self.config;
        for p in self.pool.particles_mut() {
            step_particle(p, dt, cfg);
            apply_lifecycle(p, cfg, &mut self.rng);
        }

        self.instances.clear();
        for p in self.pool.particles() {
            self.instances.push(SmokeInstance::from_particle(p));
        }
    }
}

impl FrameSystem for SmokeSystem {
    fn initialize(&mut self) -> Result<()> {
        println!(
            "[smoke] pool built: {} particles in {} layer(s)",
            self.pool.len(),
            self.config.effective_layer_count()
        );
        Ok(())
    }

    fn update(&mut self, dt: f64) -> Result<()> {
        self.step(dt as f32);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "smoke"
    }
}

fn build_pool(config: &SmokeConfig, rng: &mut SmokeRng) -> SmokePool {
    let centers = make_cluster_centers(config, rng);
    let mut pool = SmokePool::new(config.particle_count, centers);
    // Split borrow: centers are read while particles are written
    let (particles, centers) = pool.split_mut();
    for p in particles {
        spawn_particle(p, false, config, centers, rng);
    }
    pool
}
