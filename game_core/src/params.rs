/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 40.0; // distance from the side wall to the paddle center

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const SERVE_BASE_SPEED: f32 = 300.0; // per-axis scale before the serve rescale
    pub const SERVE_SPEED: f32 = 200.0; // units per second
    pub const DEFLECT_SPREAD: f32 = 300.0; // vertical kick on paddle hit, centered on zero
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
}
