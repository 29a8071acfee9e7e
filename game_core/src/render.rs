//! Frame drawing against an abstract 2D surface

use crate::glyph::{digits_of, Glyph, GLYPH_CELL};
use crate::{BoundingBox, Config};

/// Distance from the top of the arena to the score digits
pub const SCORE_TOP: f32 = 20.0;

/// Fill colours used by the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// CSS colour string
    pub fn css(&self) -> &'static str {
        match self {
            Color::Black => "#000",
            Color::White => "#fff",
        }
    }
}

/// Something that can fill rectangles, e.g. a canvas 2D context
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Draw a digit with its top-left corner at `(x, y)`.
    ///
    /// The default fills each lit cell; surfaces with cached bitmaps can blit
    /// them instead.
    fn draw_glyph(&mut self, glyph: &Glyph, x: f32, y: f32) {
        for (col, row) in glyph.lit_cells() {
            self.fill_rect(
                x + col as f32 * GLYPH_CELL,
                y + row as f32 * GLYPH_CELL,
                GLYPH_CELL,
                GLYPH_CELL,
                Color::White,
            );
        }
    }
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub ball: BoundingBox,
    pub paddles: [BoundingBox; 2],
    pub scores: [u32; 2],
}

/// Clear the surface, then draw the ball, both paddles and both scores
pub fn draw<S: Surface>(snapshot: &Snapshot, config: &Config, surface: &mut S) {
    surface.fill_rect(
        0.0,
        0.0,
        config.arena_width,
        config.arena_height,
        Color::Black,
    );

    draw_box(&snapshot.ball, surface);
    for paddle in &snapshot.paddles {
        draw_box(paddle, surface);
    }

    for (index, score) in snapshot.scores.iter().enumerate() {
        for (glyph, x, y) in score_layout(*score, index, config.arena_width) {
            surface.draw_glyph(&glyph, x, y);
        }
    }
}

fn draw_box<S: Surface>(rect: &BoundingBox, surface: &mut S) {
    surface.fill_rect(rect.left(), rect.top(), rect.size.x, rect.size.y, Color::White);
}

/// Where each digit of a paddle's score goes.
///
/// Scores are centered on the thirds of the arena: paddle 0 at `width / 3`,
/// paddle 1 at `2 * width / 3`. Each digit takes four cells of width (three
/// for the glyph, one gap).
pub fn score_layout(score: u32, index: usize, arena_width: f32) -> Vec<(Glyph, f32, f32)> {
    let align = arena_width / 3.0;
    let char_width = GLYPH_CELL * 4.0;
    let digits = digits_of(score);
    let offset =
        align * (index + 1) as f32 - char_width * digits.len() as f32 / 2.0 + GLYPH_CELL / 2.0;

    digits
        .into_iter()
        .enumerate()
        .map(|(pos, glyph)| (glyph, offset + pos as f32 * char_width, SCORE_TOP))
        .collect()
}
