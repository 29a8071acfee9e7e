use rand::Rng;

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seeded from the platform entropy source (browser crypto on wasm)
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// Uniform sample in [0, 1)
    pub fn unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }

    /// Uniform sample in [-1, 1)
    pub fn signed_unit(&mut self) -> f32 {
        self.0.gen_range(-1.0..1.0)
    }

    /// +1 or -1 with equal probability
    pub fn sign(&mut self) -> f32 {
        if self.0.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub scored: Option<usize>, // index of the paddle that won the point
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: [bool; 2],
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.scored = None;
        self.ball_hit_wall = false;
        self.ball_hit_paddle = [false; 2];
    }

    pub fn any_paddle_hit(&self) -> bool {
        self.ball_hit_paddle.iter().any(|hit| *hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_is_deterministic_for_seed() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[test]
    fn test_rng_ranges() {
        let mut rng = GameRng::default();
        for _ in 0..1000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
            let s = rng.signed_unit();
            assert!((-1.0..1.0).contains(&s));
            let sign = rng.sign();
            assert!(sign == 1.0 || sign == -1.0);
        }
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.scored = Some(1);
        events.ball_hit_wall = true;
        events.ball_hit_paddle = [true, true];
        assert!(events.any_paddle_hit());

        events.clear();

        assert_eq!(events.scored, None);
        assert!(!events.ball_hit_wall);
        assert!(!events.any_paddle_hit());
    }
}
