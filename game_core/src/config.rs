use crate::{CoreError, Params};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for an arena of the given size (usually the canvas size)
    pub fn with_arena(arena_width: f32, arena_height: f32) -> Result<Self, CoreError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(arena_width) || !valid(arena_height) {
            return Err(CoreError::InvalidArena {
                width: arena_width,
                height: arena_height,
            });
        }
        Ok(Self {
            arena_width,
            arena_height,
        })
    }

    /// Get X position for paddle based on its index
    pub fn paddle_x(&self, index: usize) -> f32 {
        if index == 0 {
            Params::PADDLE_INSET // Left paddle
        } else {
            self.arena_width - Params::PADDLE_INSET // Right paddle
        }
    }

    /// Center of the arena, where the ball waits between points
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }
}
