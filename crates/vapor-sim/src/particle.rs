//! Particle types: CPU simulation state and the packed render payload

use bytemuck::{Pod, Zeroable};
use vapor_core::Vec3;

/// CPU-side particle state (not sent to the renderer)
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: [f32; 3],
    /// Base drift vector, re-randomized on spawn
    pub velocity: [f32; 3],
    /// Seconds since last spawn
    pub age: f32,
    /// Seconds until forced respawn
    pub lifetime: f32,
    /// Smoothed visual alpha in [0, 1]
    pub opacity: f32,
    /// Per-particle size multiplier, fixed at build
    pub scale: f32,
    /// Layer-derived velocity multiplier, fixed at build
    pub speed_mul: f32,
    /// Layer-derived opacity multiplier, fixed at build
    pub opacity_mul: f32,
    /// Depth offset of the assigned parallax band, fixed at build
    pub layer_depth: f32,
}

impl Particle {
    pub fn zeroed() -> Self {
        Self {
            position: [0.0; 3],
            velocity: [0.0; 3],
            age: 0.0,
            lifetime: 1.0,
            opacity: 0.0,
            scale: 1.0,
            speed_mul: 1.0,
            opacity_mul: 1.0,
            layer_depth: 0.0,
        }
    }

    /// Normalized age in [0, 1]
    pub fn age_ratio(&self) -> f32 {
        if self.lifetime <= 0.0 {
            1.0
        } else {
            (self.age / self.lifetime).min(1.0)
        }
    }
}

/// Per-particle render payload — two rows of vec4, 32 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SmokeInstance {
    /// World position + size packed into vec4
    pub pos_scale: [f32; 4], // xyz = position, w = scale
    /// Smoothed alpha; remaining lanes reserved for alignment
    pub opacity: [f32; 4], // x = opacity
}

impl SmokeInstance {
    pub fn from_particle(p: &Particle) -> Self {
        Self {
            pos_scale: [p.position[0], p.position[1], p.position[2], p.scale],
            opacity: [p.opacity * p.opacity_mul, 0.0, 0.0, 0.0],
        }
    }
}

/// Pool-wide shading knobs, applied uniformly at render time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub base_size: f32,
    pub max_opacity: f32,
    pub global_opacity: f32,
}

/// Fixed-size pool of particle records.
///
/// Every slot is always live: end-of-life mutates the record in place via
/// respawn instead of killing it. The pool is discarded and rebuilt only
/// when a shape-affecting configuration key changes.
pub struct SmokePool {
    particles: Vec<Particle>,
    /// Spawn-bias centers for the clustered distribution, regenerated at build
    cluster_centers: Vec<Vec3>,
}

impl SmokePool {
    pub fn new(count: usize, cluster_centers: Vec<Vec3>) -> Self {
        Self {
            particles: vec![Particle::zeroed(); count],
            cluster_centers,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn cluster_centers(&self) -> &[Vec3] {
        &self.cluster_centers
    }

    /// Mutable particles alongside the (read-only) cluster centers
    pub fn split_mut(&mut self) -> (&mut [Particle], &[Vec3]) {
        (&mut self.particles, &self.cluster_centers)
    }
}
