//! Per-particle integration and lifecycle
//!
//! One tick advances age, tracks the fade shape with fixed exponential
//! smoothing, applies drift + wind + swirl, and then the lifecycle check
//! decides whether the particle respawns for the next tick.

use crate::config::{BoundaryPolicy, SmokeConfig};
use crate::particle::Particle;
use crate::spawn::spawn_particle;
use vapor_core::{smoothstep, SmokeRng, Vec3};

/// Constant upward-rightward drift added to every particle's x/y velocity
pub const WIND: Vec3 = Vec3::new(0.25, 0.35, 0.0);

/// Particles rising past this height respawn under the respawn policy
const RESPAWN_CEILING_Y: f32 = 10.0;

/// Fixed per-tick opacity damping factor. Deliberately not scaled by dt —
/// the smoothing rate is part of the effect's look.
const OPACITY_SMOOTHING: f32 = 0.25;

/// Advance one particle by `dt` seconds.
pub fn step_particle(p: &mut Particle, dt: f32, cfg: &SmokeConfig) {
    p.age += dt;

    // Fade shape: rising ramp × falling ramp over normalized age
    let lifetime = p.lifetime.max(1e-4);
    let fi = (cfg.fade_in_sec / lifetime).clamp(0.0, 1.0);
    let fo = (cfg.fade_out_sec / lifetime).clamp(0.0, 1.0);
    let t = p.age / lifetime;
    let fade_in = smoothstep(0.0, fi, t);
    let fade_out = 1.0 - smoothstep(1.0 - fo, 1.0, t);
    let shape = (fade_in * fade_out).clamp(0.0, 1.0);
    p.opacity += (shape - p.opacity) * OPACITY_SMOOTHING;

    // Lateral swirl keyed off height + age so neighbors desynchronize
    let phase = p.position[1] + p.age;
    let sx = (phase * cfg.swirl_freq).sin() * cfg.swirl_amp;
    let sz = (phase * cfg.swirl_freq * 0.8).cos() * cfg.swirl_amp;

    let k = cfg.speed * p.speed_mul * dt;
    p.position[0] += (p.velocity[0] + WIND.x + sx) * k;
    p.position[1] += (p.velocity[1] + WIND.y) * k;
    p.position[2] += (p.velocity[2] + sz) * k;

    if cfg.boundary == BoundaryPolicy::Wrap {
        p.position[0] = wrap_coord(p.position[0], cfg.spread_x * 0.5);
        // z wraps within the particle's own parallax band
        p.position[2] =
            wrap_coord(p.position[2] - p.layer_depth, cfg.spread_z * 0.5) + p.layer_depth;
    }
}

/// Respawn the particle if it ended the tick past its lifetime or bounds.
/// Runs strictly after `step_particle`. Returns true if a respawn happened.
pub fn apply_lifecycle(p: &mut Particle, cfg: &SmokeConfig, rng: &mut SmokeRng) -> bool {
    let expired = p.age >= p.lifetime;
    let escaped =
        cfg.boundary == BoundaryPolicy::Respawn && p.position[1] > RESPAWN_CEILING_Y;
    if expired || escaped {
        spawn_particle(p, true, cfg, &[], rng);
        return true;
    }
    false
}

fn wrap_coord(v: f32, half: f32) -> f32 {
    if half <= 0.0 {
        return v;
    }
    if v > half {
        v - 2.0 * half
    } else if v < -half {
        v + 2.0 * half
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_particle(cfg: &SmokeConfig, rng: &mut SmokeRng) -> Particle {
        let mut p = Particle::zeroed();
        spawn_particle(&mut p, true, cfg, &[], rng);
        p
    }

    #[test]
    fn opacity_stays_in_unit_range() {
        let cfg = SmokeConfig::default();
        let mut rng = SmokeRng::new(42);
        let mut p = fresh_particle(&cfg, &mut rng);
        for _ in 0..2000 {
            step_particle(&mut p, 0.016, &cfg);
            assert!(p.opacity >= 0.0 && p.opacity <= 1.0);
            apply_lifecycle(&mut p, &cfg, &mut rng);
        }
    }

    #[test]
    fn opacity_zero_at_spawn() {
        let cfg = SmokeConfig::default();
        let mut rng = SmokeRng::new(1);
        let p = fresh_particle(&cfg, &mut rng);
        assert_eq!(p.age, 0.0);
        assert_eq!(p.opacity, 0.0);
    }

    #[test]
    fn age_monotone_until_respawn() {
        let cfg = SmokeConfig::default();
        let mut rng = SmokeRng::new(8);
        let mut p = fresh_particle(&cfg, &mut rng);
        let mut prev = p.age;
        for _ in 0..5000 {
            step_particle(&mut p, 0.016, &cfg);
            assert!(p.age > prev);
            if apply_lifecycle(&mut p, &cfg, &mut rng) {
                assert_eq!(p.age, 0.0);
            }
            prev = p.age;
        }
    }

    #[test]
    fn oversized_step_respawns_exactly_once() {
        let cfg = SmokeConfig::default();
        let mut rng = SmokeRng::new(42);
        let mut p = fresh_particle(&cfg, &mut rng);
        p.lifetime = 2.0;

        step_particle(&mut p, 2.1, &cfg);
        assert!(p.age >= p.lifetime);
        assert!(apply_lifecycle(&mut p, &cfg, &mut rng));

        assert_eq!(p.age, 0.0);
        // Lifetime redrawn from the ±20% band around the configured mean
        assert!(p.lifetime >= cfg.lifetime_sec * 0.8);
        assert!(p.lifetime < cfg.lifetime_sec * 1.2);
        // One step, one respawn
        assert!(!apply_lifecycle(&mut p, &cfg, &mut rng));
    }

    #[test]
    fn ceiling_triggers_respawn_under_respawn_policy() {
        let cfg = SmokeConfig::default();
        let mut rng = SmokeRng::new(17);
        let mut p = fresh_particle(&cfg, &mut rng);
        p.position[1] = 10.5;
        assert!(apply_lifecycle(&mut p, &cfg, &mut rng));
        assert!(p.position[1] < 10.0);
    }

    #[test]
    fn wrap_policy_folds_x_to_opposite_edge() {
        let mut cfg = SmokeConfig::default();
        cfg.boundary = BoundaryPolicy::Wrap;
        cfg.swirl_amp = 0.0;
        let mut rng = SmokeRng::new(2);
        let mut p = fresh_particle(&cfg, &mut rng);

        p.position[0] = cfg.spread_x * 0.5 - 0.001;
        p.velocity = [10.0, 0.0, 0.0];
        step_particle(&mut p, 0.033, &cfg);
        assert!(p.position[0] < 0.0, "x was {}", p.position[0]);
        assert!(p.position[0] >= -cfg.spread_x * 0.5);
    }

    #[test]
    fn wrap_policy_keeps_band_depth() {
        let mut cfg = SmokeConfig::default();
        cfg.boundary = BoundaryPolicy::Wrap;
        let mut p = Particle::zeroed();
        p.layer_depth = -3.0;
        p.position = [0.0, 0.0, -3.0 + cfg.spread_z * 0.5 + 0.5];
        p.velocity = [0.0; 3];
        cfg.swirl_amp = 0.0;
        cfg.speed = 0.0;
        step_particle(&mut p, 0.016, &cfg);
        // Folded to the near edge of its own band, not the global volume
        assert!((p.position[2] - (-3.0 - cfg.spread_z * 0.5 + 0.5)).abs() < 1e-3);
    }

    #[test]
    fn wrap_policy_ignores_ceiling() {
        let mut cfg = SmokeConfig::default();
        cfg.boundary = BoundaryPolicy::Wrap;
        let mut rng = SmokeRng::new(3);
        let mut p = fresh_particle(&cfg, &mut rng);
        p.position[1] = 50.0;
        assert!(!apply_lifecycle(&mut p, &cfg, &mut rng));
    }

    #[test]
    fn degenerate_lifetime_does_not_divide_by_zero() {
        let mut cfg = SmokeConfig::default();
        cfg.fade_in_sec = 1.0;
        let mut p = Particle::zeroed();
        p.lifetime = 0.0;
        step_particle(&mut p, 0.016, &cfg);
        assert!(p.opacity.is_finite());
        assert!(p.position[0].is_finite());
    }

    #[test]
    fn opacity_tracks_fade_shape_midlife() {
        let mut cfg = SmokeConfig::default();
        cfg.swirl_amp = 0.0;
        let mut rng = SmokeRng::new(99);
        let mut p = fresh_particle(&cfg, &mut rng);
        p.lifetime = 12.0;
        // Walk to mid-life where the shape plateaus at 1
        for _ in 0..375 {
            step_particle(&mut p, 0.016, &cfg);
        }
        assert!(p.opacity > 0.95, "opacity was {}", p.opacity);
    }
}
