//! Frame system trait

use vapor_core::Result;

/// A system that can be ticked by the frame loop
///
/// Systems are updated once per display refresh with the measured frame
/// delta. There is no fixed-step path: the smoke simulation is purely
/// visual and bounds its own worst-case step size.
pub trait FrameSystem {
    /// Called once before the first tick
    fn initialize(&mut self) -> Result<()>;

    /// Called once per frame with the raw frame delta in seconds
    fn update(&mut self, dt: f64) -> Result<()>;

    /// Called when the system is being shut down
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
