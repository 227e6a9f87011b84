//! Vapor Sim - Ambient smoke particle simulation
//!
//! A fixed-size pool of drifting billboard particles with:
//! - Looping lifecycle: spawn → fade-in → drift → fade-out → respawn
//! - Base drift + constant wind + sinusoidal swirl, layered parallax bands
//! - Exponentially smoothed age-based opacity
//! - Per-frame packing of the render payload for an external renderer

pub mod config;
pub mod integrate;
pub mod particle;
pub mod spawn;
pub mod system;

pub use config::{BoundaryPolicy, SmokeConfig, SpawnDistribution};
pub use particle::{FrameParams, Particle, SmokeInstance, SmokePool};
pub use system::{SmokeSystem, MAX_FRAME_DT};
