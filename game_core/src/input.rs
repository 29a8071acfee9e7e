//! Player input in arena terms

/// Commands fed into the simulation by the input adapter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Pointer moved to `offset_y` pixels down a surface `surface_height` pixels tall
    PointerMove { offset_y: f32, surface_height: f32 },
    /// Click anywhere: serve if the ball is waiting
    Click,
}

/// Map a pointer's vertical offset on the display surface to an arena Y.
///
/// The result is not clamped, so a pointer past the surface edge puts the
/// paddle past the wall. Returns `None` for a surface with no height.
pub fn pointer_to_arena_y(offset_y: f32, surface_height: f32, arena_height: f32) -> Option<f32> {
    if surface_height <= 0.0 || !surface_height.is_finite() {
        return None;
    }
    Some(arena_height * (offset_y / surface_height))
}
