/// Turns scheduler timestamps into tick durations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    last_timestamp_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp in milliseconds and return the seconds elapsed
    /// since the previous one. The first frame has nothing to diff against and
    /// yields `None`.
    pub fn advance(&mut self, timestamp_ms: f64) -> Option<f32> {
        let dt = self
            .last_timestamp_ms
            .map(|last| ((timestamp_ms - last) / 1000.0) as f32);
        self.last_timestamp_ms = Some(timestamp_ms);
        dt
    }

    pub fn last_timestamp_ms(&self) -> Option<f64> {
        self.last_timestamp_ms
    }
}
