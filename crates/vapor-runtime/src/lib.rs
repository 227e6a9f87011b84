//! Vapor Runtime - Frame loop infrastructure
//!
//! Provides the pieces that drive the simulation from outside:
//! - `FrameClock` — wall-clock delta measurement, one tick per display refresh
//! - `FrameSystem` — trait for systems ticked by the frame loop
//! - `ConfigStore` — TOML-file-backed store for persisted configuration

mod clock;
mod persist;
mod system;

pub use clock::FrameClock;
pub use persist::ConfigStore;
pub use system::FrameSystem;
