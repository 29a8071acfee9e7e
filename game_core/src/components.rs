use crate::{BoundingBox, Params};
use glam::Vec2;

/// Ball - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub bounds: BoundingBox,
    pub vel: Vec2,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            bounds: BoundingBox::new(Params::BALL_SIZE, Params::BALL_SIZE),
            vel: Vec2::ZERO,
        }
    }

    /// Idle means the ball is waiting for a serve
    pub fn is_idle(&self) -> bool {
        self.vel.x == 0.0 && self.vel.y == 0.0
    }

    /// Park the ball at `center` with no velocity
    pub fn reset(&mut self, center: Vec2) {
        self.bounds.center = center;
        self.vel = Vec2::ZERO;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Paddle - a player's paddle and the points it has won
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub bounds: BoundingBox,
    pub score: u32,
}

impl Paddle {
    pub fn new() -> Self {
        Self {
            bounds: BoundingBox::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
            score: 0,
        }
    }

    pub fn award_point(&mut self) {
        self.score = self.score.saturating_add(1);
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}
