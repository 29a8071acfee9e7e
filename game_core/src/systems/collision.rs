use crate::{Ball, Config, CoreError, Events, GameRng, Paddle, Params, Vector2Ext};

/// Reflect the ball off the top and bottom walls.
///
/// Only the vertical velocity flips. The ball is not pushed back inside, so it
/// can overlap the wall for a frame.
pub fn check_wall_bounce(ball: &mut Ball, config: &Config, events: &mut Events) {
    if ball.bounds.top() < 0.0 || ball.bounds.bottom() > config.arena_height {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Check the ball against each paddle in index order and deflect on overlap
pub fn check_paddle_collisions(
    ball: &mut Ball,
    paddles: &[Paddle; 2],
    rng: &mut GameRng,
    events: &mut Events,
) {
    for (index, paddle) in paddles.iter().enumerate() {
        if !paddle.bounds.overlaps(&ball.bounds) {
            continue;
        }

        events.ball_hit_paddle[index] = true;
        match deflect(ball, rng) {
            Ok(()) => tracing::trace!(
                paddle = index,
                speed = ball.vel.magnitude(),
                "ball hit paddle"
            ),
            Err(err) => tracing::warn!(paddle = index, %err, "paddle deflection skipped rescale"),
        }
    }
}

/// Send the ball back horizontally with a random vertical kick, 5% faster
/// than it arrived. There is no speed cap, so long rallies keep accelerating.
pub fn deflect(ball: &mut Ball, rng: &mut GameRng) -> Result<(), CoreError> {
    let speed = ball.vel.magnitude();

    ball.vel.x = -ball.vel.x;
    ball.vel.y += Params::DEFLECT_SPREAD * (rng.unit() - 0.5);
    ball.vel.scale_to_length(speed * Params::BALL_SPEED_INCREASE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (Ball, [Paddle; 2], Config, Events, GameRng) {
        let config = Config::new();
        let mut paddles = [Paddle::new(), Paddle::new()];
        for (index, paddle) in paddles.iter_mut().enumerate() {
            paddle.bounds.center = Vec2::new(config.paddle_x(index), 200.0);
        }
        (Ball::new(), paddles, config, Events::new(), GameRng::new(12345))
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut ball, _, config, mut events, _) = setup();
        ball.bounds.center = Vec2::new(300.0, 4.0); // top edge at -1
        ball.vel = Vec2::new(120.0, -80.0);

        check_wall_bounce(&mut ball, &config, &mut events);

        assert_eq!(ball.vel, Vec2::new(120.0, 80.0));
        assert_eq!(ball.bounds.center.y, 4.0, "Position is not clamped");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut ball, _, config, mut events, _) = setup();
        ball.bounds.center = Vec2::new(300.0, config.arena_height - 4.0);
        ball.vel = Vec2::new(-50.0, 90.0);

        check_wall_bounce(&mut ball, &config, &mut events);

        assert_eq!(ball.vel, Vec2::new(-50.0, -90.0));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_bounce_inside_arena() {
        let (mut ball, _, config, mut events, _) = setup();
        ball.bounds.center = Vec2::new(300.0, 5.0); // top edge exactly on the wall
        ball.vel = Vec2::new(10.0, -10.0);

        check_wall_bounce(&mut ball, &config, &mut events);

        assert_eq!(ball.vel, Vec2::new(10.0, -10.0));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut ball, paddles, _, mut events, mut rng) = setup();
        ball.bounds.center = Vec2::new(52.0, 210.0);
        ball.vel = Vec2::new(-200.0, 0.0);

        check_paddle_collisions(&mut ball, &paddles, &mut rng, &mut events);

        assert!(ball.vel.x > 0.0, "Ball should bounce right");
        assert_eq!(events.ball_hit_paddle, [true, false]);
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut ball, paddles, _, mut events, mut rng) = setup();
        ball.bounds.center = Vec2::new(548.0, 160.0);
        ball.vel = Vec2::new(150.0, 60.0);

        check_paddle_collisions(&mut ball, &paddles, &mut rng, &mut events);

        assert!(ball.vel.x < 0.0, "Ball should bounce left");
        assert_eq!(events.ball_hit_paddle, [false, true]);
    }

    #[test]
    fn test_ball_speed_increases_on_paddle_hit() {
        let (mut ball, paddles, _, mut events, mut rng) = setup();
        ball.bounds.center = Vec2::new(45.0, 200.0);
        ball.vel = Vec2::new(-160.0, 120.0); // speed 200

        check_paddle_collisions(&mut ball, &paddles, &mut rng, &mut events);

        let expected = 200.0 * Params::BALL_SPEED_INCREASE;
        assert!(
            (ball.vel.magnitude() - expected).abs() < 1e-3,
            "Ball speed should increase by {}x, got {}",
            Params::BALL_SPEED_INCREASE,
            ball.vel.magnitude()
        );
    }

    #[test]
    fn test_speedup_compounds_without_cap() {
        let (mut ball, _, _, _, mut rng) = setup();
        ball.vel = Vec2::new(200.0, 0.0);

        for _ in 0..100 {
            deflect(&mut ball, &mut rng).unwrap();
        }

        let expected = 200.0 * Params::BALL_SPEED_INCREASE.powi(100);
        let speed = ball.vel.magnitude();
        assert!(
            (speed - expected).abs() / expected < 1e-3,
            "Expected {}, got {}",
            expected,
            speed
        );
    }

    #[test]
    fn test_deflection_kick_is_bounded() {
        let mut rng = GameRng::new(99);
        for _ in 0..500 {
            let mut ball = Ball::new();
            ball.vel = Vec2::new(-100.0, 0.0);
            let kick = {
                let mut probe = GameRng(rng.0.clone());
                Params::DEFLECT_SPREAD * (probe.unit() - 0.5)
            };
            assert!((-150.0..150.0).contains(&kick));

            deflect(&mut ball, &mut rng).unwrap();
            // Before the rescale the vector was (100, kick); direction survives it
            let ratio = ball.vel.y / ball.vel.x;
            assert!((ratio - kick / 100.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_touching_paddle_does_not_collide() {
        let (mut ball, paddles, _, mut events, mut rng) = setup();
        ball.bounds.center = Vec2::new(55.0, 200.0); // left edge on paddle's right edge
        ball.vel = Vec2::new(-200.0, 0.0);

        check_paddle_collisions(&mut ball, &paddles, &mut rng, &mut events);

        assert_eq!(ball.vel, Vec2::new(-200.0, 0.0));
        assert!(!events.any_paddle_hit());
    }

    #[test]
    fn test_deflecting_idle_ball_keeps_it_still() {
        let mut rng = GameRng::new(1);
        let mut ball = Ball::new();

        // The kick supplies a direction, and the target speed is 1.05 * 0
        deflect(&mut ball, &mut rng).unwrap();

        assert!(ball.vel.magnitude() < 1e-6);
    }
}
