//! Vector helpers on top of `glam::Vec2`

use crate::CoreError;
use glam::Vec2;

/// 2D vector used for positions, sizes and velocities
pub type Vector2 = Vec2;

/// Magnitude read and rescale for [`Vector2`]
pub trait Vector2Ext {
    fn magnitude(&self) -> f32;

    /// Rescale in place so that `magnitude() == target`, keeping direction.
    ///
    /// Fails and leaves the vector untouched when the current length is zero
    /// (or not finite), since there is no direction to keep.
    fn scale_to_length(&mut self, target: f32) -> Result<(), CoreError>;
}

impl Vector2Ext for Vec2 {
    fn magnitude(&self) -> f32 {
        self.length()
    }

    fn scale_to_length(&mut self, target: f32) -> Result<(), CoreError> {
        let current = self.length();
        if current <= 0.0 || !current.is_finite() {
            return Err(CoreError::InvalidVectorOperation { target });
        }

        let factor = target / current;
        self.x *= factor;
        self.y *= factor;
        Ok(())
    }
}
