//! Spawn logic shared by pool build and respawn
//!
//! A single routine initializes a particle record both at build time and on
//! respawn, so the two paths cannot drift apart. `preserve_layer = false`
//! is the build path: it also assigns the parallax band, per-particle scale,
//! and the layer-derived multipliers, and desynchronizes the starting age.

use crate::config::{SmokeConfig, SpawnDistribution};
use crate::particle::Particle;
use vapor_core::{lerp_f32, SmokeRng, Vec3};

/// Vertical spawn range (world units)
const SPAWN_Y_MIN: f32 = -6.5;
const SPAWN_Y_MAX: f32 = 9.5;

/// Generate spawn-bias centers along a lower-left → upper-right diagonal.
pub fn make_cluster_centers(cfg: &SmokeConfig, rng: &mut SmokeRng) -> Vec<Vec3> {
    let count = cfg.cluster_count.max(1);
    let mut centers = Vec::with_capacity(count);
    for i in 0..count {
        let t = if count == 1 {
            0.5
        } else {
            i as f32 / (count - 1) as f32
        };
        let cx = lerp_f32(-cfg.spread_x * 0.5, cfg.spread_x * 0.5, t) + rng.range(-0.75, 0.75);
        let cy = lerp_f32(-5.5, 7.5, t) + rng.range(-0.5, 0.5);
        let cz = rng.range(-0.3, 0.3) * cfg.spread_z;
        centers.push(Vec3::new(cx, cy, cz));
    }
    centers
}

/// Re-draw only the position, preserving the particle's parallax band.
///
/// Used on respawn and when the spawn volume is resized, so live particles
/// redistribute into the new volume without touching their age, opacity,
/// or velocity.
pub fn reset_position(p: &mut Particle, cfg: &SmokeConfig, rng: &mut SmokeRng) {
    p.position = [
        rng.range(-cfg.spread_x * 0.5, cfg.spread_x * 0.5),
        rng.range(SPAWN_Y_MIN, SPAWN_Y_MAX),
        rng.range(-cfg.spread_z * 0.5, cfg.spread_z * 0.5) + p.layer_depth,
    ];
}

/// Initialize or reset one particle record.
///
/// With `preserve_layer` the band depth, scale, and multipliers are kept and
/// only the motion state is redrawn (the respawn path). Without it the
/// record is built from scratch, including its band assignment.
pub fn spawn_particle(
    p: &mut Particle,
    preserve_layer: bool,
    cfg: &SmokeConfig,
    centers: &[Vec3],
    rng: &mut SmokeRng,
) {
    if !preserve_layer {
        let layer_count = cfg.effective_layer_count();
        let layer_idx = rng.index(layer_count);
        let t = if layer_count == 1 {
            0.0
        } else {
            layer_idx as f32 / (layer_count - 1) as f32
        };
        p.layer_depth = -t * cfg.layer_depth_step;
        p.scale = rng.range(0.7, 1.3) * lerp_f32(1.0, 0.75, t);
        p.speed_mul = lerp_f32(1.0, 0.6, t);
        p.opacity_mul = lerp_f32(1.0, 0.85, t);
    }

    let clustered = !preserve_layer
        && cfg.spawn_distribution == SpawnDistribution::Clustered
        && !centers.is_empty();
    if clustered {
        let center = centers[rng.index(centers.len())];
        let mut pos = (center + rng.in_ball(cfg.cluster_radius)).to_array();
        pos[2] += p.layer_depth;
        p.position = pos;
    } else {
        reset_position(p, cfg, rng);
    }

    p.velocity = [
        rng.range(0.15, 0.5),
        rng.range(0.35, 0.7),
        rng.range(-0.075, 0.075),
    ];

    p.lifetime = cfg.lifetime_sec * rng.range(0.8, 1.2);
    p.opacity = 0.0;
    p.age = if preserve_layer {
        0.0
    } else {
        // Desynchronize the pool so the effect does not pulse at startup
        rng.range(0.0, cfg.lifetime_sec * 0.8)
    };
}
