//! Canvas 2D implementation of the render surface

use game_core::glyph::{Glyph, GLYPH_CELL};
use game_core::{Color, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

/// Fetch the 2D context of a canvas
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Draws onto the game canvas. Score digits are pre-rendered once into small
/// offscreen canvases and blitted each frame.
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    digits: Vec<HtmlCanvasElement>,
}

impl CanvasSurface {
    pub fn new(document: &Document, canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = context_2d(canvas)?;
        let digits = (0..10u8)
            .filter_map(Glyph::for_digit)
            .map(|glyph| rasterize_glyph(document, &glyph))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { context, digits })
    }
}

fn rasterize_glyph(document: &Document, glyph: &Glyph) -> Result<HtmlCanvasElement, JsValue> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(JsValue::from)?;
    canvas.set_width(Glyph::width() as u32);
    canvas.set_height(Glyph::height() as u32);

    let context = context_2d(&canvas)?;
    context.set_fill_style_str(Color::White.css());
    let cell = GLYPH_CELL as f64;
    for (col, row) in glyph.lit_cells() {
        context.fill_rect(col as f64 * cell, row as f64 * cell, cell, cell);
    }
    Ok(canvas)
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.context.set_fill_style_str(color.css());
        self.context
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn draw_glyph(&mut self, glyph: &Glyph, x: f32, y: f32) {
        if let Some(bitmap) = self.digits.get(glyph.digit() as usize) {
            if let Err(e) =
                self.context
                    .draw_image_with_html_canvas_element(bitmap, x as f64, y as f64)
            {
                web_sys::console::error_2(&"Failed to draw score digit".into(), &e);
            }
        }
    }
}
