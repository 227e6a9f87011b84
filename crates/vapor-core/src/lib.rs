//! Vapor Core - Foundational types for the Vapor smoke effect
//!
//! This crate provides the types that all other Vapor crates depend on:
//! - `Vec3` - Spatial type for positions, velocities, and wind
//! - `lerp_f32` / `smoothstep` - Interpolation curves used by the fade shape
//! - `SmokeRng` - Seedable PRNG for spawn randomization
//! - Error types and Result alias

mod curves;
mod error;
mod rand;
mod types;

pub use curves::{lerp_f32, smoothstep};
pub use error::{Result, VaporError};
pub use rand::SmokeRng;
pub use types::Vec3;
