//! Mouse input handling

use game_core::Input;
use web_sys::{HtmlCanvasElement, MouseEvent};

/// Convert a mousemove on the canvas into a paddle command.
///
/// Uses the canvas' displayed height, so CSS scaling of the canvas still maps
/// the pointer onto the whole arena.
pub fn pointer_move(event: &MouseEvent, canvas: &HtmlCanvasElement) -> Input {
    Input::PointerMove {
        offset_y: event.offset_y() as f32,
        surface_height: canvas.get_bounding_client_rect().height() as f32,
    }
}

/// Any click serves
pub fn click(_event: &MouseEvent) -> Input {
    Input::Click
}
