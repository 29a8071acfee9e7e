//! Browser client for Pong
//!
//! Draws with the canvas 2D API, follows the mouse with the left paddle and
//! serves on click. The frame loop runs on `requestAnimationFrame`.

#![cfg(target_arch = "wasm32")]

mod canvas;
mod input;

use canvas::CanvasSurface;
use game_core::{Config, GameRng, Input, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

/// Simulation plus the surface it draws on
struct Game {
    sim: Simulation,
    surface: CanvasSurface,
}

impl Game {
    fn frame(&mut self, timestamp_ms: f64) {
        self.sim.on_frame(timestamp_ms, &mut self.surface);
        if let Some(scorer) = self.sim.events().scored {
            let [left, right] = self.sim.scores();
            web_sys::console::log_1(
                &format!("Player {} scores ({} - {})", scorer + 1, left, right).into(),
            );
        }
    }

    fn input(&mut self, input: Input) {
        self.sim.apply_input(input);
    }
}

thread_local! {
    // Input callbacks and the frame loop share one owner on the main thread
    static GAME: RefCell<Option<Game>> = const { RefCell::new(None) };
}

fn with_game(f: impl FnOnce(&mut Game)) {
    GAME.with(|game| {
        if let Some(game) = game.borrow_mut().as_mut() {
            f(game);
        }
    });
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

fn request_animation_frame(callback: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    window()?.request_animation_frame(callback.as_ref().unchecked_ref())
}

fn listen(
    canvas: &HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(MouseEvent) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

/// Start a game on `canvas`. The arena takes the canvas' pixel size.
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let config = Config::with_arena(canvas.width() as f32, canvas.height() as f32)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let surface = CanvasSurface::new(&document, &canvas)?;

    GAME.with(|game| {
        *game.borrow_mut() = Some(Game {
            sim: Simulation::new(config, GameRng::from_entropy()),
            surface,
        });
    });

    let target = canvas.clone();
    listen(&canvas, "mousemove", move |event| {
        let input = input::pointer_move(&event, &target);
        with_game(|game| game.input(input));
    })?;
    listen(&canvas, "click", |event| {
        let input = input::click(&event);
        with_game(|game| game.input(input));
    })?;

    // The callback re-schedules itself through this shared slot
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    *slot.borrow_mut() = Some(Closure::new(move |timestamp_ms: f64| {
        with_game(|game| game.frame(timestamp_ms));
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(e) = request_animation_frame(callback) {
                web_sys::console::error_2(&"Failed to schedule frame".into(), &e);
            }
        }
    }));
    if let Some(callback) = slot.borrow().as_ref() {
        request_animation_frame(callback)?;
    }

    web_sys::console::log_1(&"Pong started, click to serve".into());
    Ok(())
}

/// Put the ball back in the middle, keeping the score
#[wasm_bindgen]
pub fn reset_ball() {
    with_game(|game| game.sim.reset());
}

/// Current `[left, right]` scores
#[wasm_bindgen]
pub fn scores() -> Vec<u32> {
    let mut scores = Vec::new();
    GAME.with(|game| {
        if let Some(game) = game.borrow().as_ref() {
            scores.extend_from_slice(&game.sim.scores());
        }
    });
    scores
}
