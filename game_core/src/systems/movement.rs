use crate::{Ball, Paddle};

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball, dt: f32) {
    ball.bounds.center += ball.vel * dt;
}

/// Snap the paddle's vertical center onto the ball's. No clamping: the paddle
/// may leave the arena when the ball is near a wall.
pub fn follow_ball(paddle: &mut Paddle, ball: &Ball) {
    paddle.bounds.center.y = ball.bounds.center.y;
}
