use crate::{Ball, Config, Events, Paddle};

/// Check if ball left the arena through a side wall (scoring).
///
/// The point goes to the paddle the ball was travelling away from: a ball
/// moving left scores for paddle 1, anything else for paddle 0. The ball is
/// then parked at the arena center. Returns the index of the scorer.
pub fn check_scoring(
    ball: &mut Ball,
    paddles: &mut [Paddle; 2],
    config: &Config,
    events: &mut Events,
) -> Option<usize> {
    if ball.bounds.left() >= 0.0 && ball.bounds.right() <= config.arena_width {
        return None;
    }

    let scorer = if ball.vel.x < 0.0 { 1 } else { 0 };
    paddles[scorer].award_point();
    events.scored = Some(scorer);

    ball.reset(config.center());
    Some(scorer)
}
