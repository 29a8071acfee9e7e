use crate::render::{self, Snapshot, Surface};
use crate::systems::*;
use crate::{
    input::pointer_to_arena_y, Ball, Config, Events, FrameClock, GameRng, Input, Paddle, Params,
    Vector2Ext,
};
use glam::Vec2;

/// A Pong match: one ball, a human paddle on the left (index 0) and an
/// auto-following paddle on the right (index 1).
///
/// The ball is either idle at the arena center waiting for [`serve`](Self::serve)
/// or in play with a non-zero velocity.
pub struct Simulation {
    pub ball: Ball,
    pub paddles: [Paddle; 2],
    config: Config,
    rng: GameRng,
    events: Events,
    clock: FrameClock,
}

impl Simulation {
    pub fn new(config: Config, rng: GameRng) -> Self {
        let mut paddles = [Paddle::new(), Paddle::new()];
        for (index, paddle) in paddles.iter_mut().enumerate() {
            paddle.bounds.center = Vec2::new(config.paddle_x(index), config.arena_height / 2.0);
        }

        let mut sim = Self {
            ball: Ball::new(),
            paddles,
            config,
            rng,
            events: Events::new(),
            clock: FrameClock::new(),
        };
        sim.reset();
        sim
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Clock driven by [`on_frame`](Self::on_frame)
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn scores(&self) -> [u32; 2] {
        [self.paddles[0].score, self.paddles[1].score]
    }

    pub fn is_idle(&self) -> bool {
        self.ball.is_idle()
    }

    /// Put the ball back at the center with no velocity. Scores are kept.
    pub fn reset(&mut self) {
        self.ball.reset(self.config.center());
    }

    /// Launch an idle ball toward a random side at the serve speed.
    ///
    /// Returns `false` (and changes nothing) when the ball is already in play.
    pub fn serve(&mut self) -> bool {
        if !self.ball.is_idle() {
            return false;
        }

        let mut vel = Vec2::new(
            Params::SERVE_BASE_SPEED * self.rng.sign(),
            Params::SERVE_BASE_SPEED * self.rng.signed_unit(),
        );
        if let Err(err) = vel.scale_to_length(Params::SERVE_SPEED) {
            tracing::warn!(%err, "serve produced no direction, ball stays idle");
            return false;
        }

        self.ball.vel = vel;
        tracing::debug!(vx = vel.x, vy = vel.y, "ball served");
        true
    }

    /// Advance the match by `dt` seconds.
    ///
    /// Order matters: the ball moves, a side exit scores and resets before any
    /// other check, walls reflect, paddle 1 snaps to the ball, then paddle
    /// collisions are resolved.
    pub fn tick(&mut self, dt: f32) -> &Events {
        self.events.clear();

        move_ball(&mut self.ball, dt);

        if let Some(scorer) =
            check_scoring(&mut self.ball, &mut self.paddles, &self.config, &mut self.events)
        {
            tracing::info!(
                scorer,
                left = self.paddles[0].score,
                right = self.paddles[1].score,
                "point scored"
            );
        }

        check_wall_bounce(&mut self.ball, &self.config, &mut self.events);

        follow_ball(&mut self.paddles[1], &self.ball);

        check_paddle_collisions(
            &mut self.ball,
            &self.paddles,
            &mut self.rng,
            &mut self.events,
        );

        &self.events
    }

    /// Tick, then draw the resulting state
    pub fn update<S: Surface>(&mut self, dt: f32, surface: &mut S) {
        self.tick(dt);
        render::draw(&self.snapshot(), &self.config, surface);
    }

    /// Handle one scheduler callback. The first frame only starts the clock;
    /// later frames update by the elapsed time. Returns whether a tick ran.
    pub fn on_frame<S: Surface>(&mut self, timestamp_ms: f64, surface: &mut S) -> bool {
        match self.clock.advance(timestamp_ms) {
            Some(dt) => {
                self.update(dt, surface);
                true
            }
            None => false,
        }
    }

    pub fn apply_input(&mut self, input: Input) {
        match input {
            Input::PointerMove {
                offset_y,
                surface_height,
            } => {
                if let Some(y) =
                    pointer_to_arena_y(offset_y, surface_height, self.config.arena_height)
                {
                    self.paddles[0].bounds.center.y = y;
                }
            }
            Input::Click => {
                self.serve();
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: self.ball.bounds,
            paddles: [self.paddles[0].bounds, self.paddles[1].bounds],
            scores: self.scores(),
        }
    }
}
