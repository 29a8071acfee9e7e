//! Runs the Pong simulation without a display.
//!
//! The left paddle holds still at a fixed pointer position and the ball is
//! served again as soon as a point ends, so long runs show how scores and ball
//! speed evolve. Set `RUST_LOG=game_core=debug` to see serves and bounces.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use game_core::{Color, Config, GameRng, Input, Simulation, Surface, Vector2Ext};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a headless Pong match", long_about = None)]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 36_000)]
    frames: u64,
    /// Simulated display refresh rate
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    /// RNG seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Left paddle pointer position as a fraction of the surface height
    #[arg(long, default_value_t = 0.5)]
    pointer: f32,
    /// Arena width
    #[arg(long, default_value_t = game_core::Params::ARENA_WIDTH)]
    width: f32,
    /// Arena height
    #[arg(long, default_value_t = game_core::Params::ARENA_HEIGHT)]
    height: f32,
}

/// Counts frames instead of drawing them
#[derive(Default)]
struct NullSurface {
    frames: u64,
}

impl Surface for NullSurface {
    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32, color: Color) {
        if color == Color::Black {
            self.frames += 1;
        }
    }
}

#[derive(Debug, Default, PartialEq)]
struct RunStats {
    scores: [u32; 2],
    serves: u64,
    paddle_hits: u64,
    peak_speed: f32,
    frames_drawn: u64,
    simulated_ms: f64,
}

fn run(args: &Args) -> Result<RunStats> {
    ensure!(args.fps > 0.0 && args.fps.is_finite(), "fps must be positive");
    ensure!(args.pointer.is_finite(), "pointer must be a finite fraction");

    let config = Config::with_arena(args.width, args.height).context("invalid arena")?;
    let mut sim = Simulation::new(config, GameRng::new(args.seed));
    tracing::debug!(
        width = sim.config().arena_width,
        height = sim.config().arena_height,
        "arena ready"
    );
    let mut surface = NullSurface::default();
    let mut stats = RunStats::default();

    sim.apply_input(Input::PointerMove {
        offset_y: args.pointer,
        surface_height: 1.0,
    });

    let frame_ms = 1000.0 / args.fps;
    for frame in 0..args.frames {
        if sim.is_idle() && sim.serve() {
            stats.serves += 1;
        }

        sim.on_frame(frame as f64 * frame_ms, &mut surface);

        let events = sim.events();
        stats.paddle_hits += events.ball_hit_paddle.iter().filter(|hit| **hit).count() as u64;
        stats.peak_speed = stats.peak_speed.max(sim.ball.vel.magnitude());
        if let Some(scorer) = events.scored {
            tracing::debug!(frame, scorer, "rally over");
        }
    }

    stats.scores = sim.scores();
    stats.frames_drawn = surface.frames;
    stats.simulated_ms = sim.clock().last_timestamp_ms().unwrap_or(0.0);
    Ok(stats)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::info!(?args, "starting headless match");

    let stats = run(&args)?;
    tracing::info!(simulated_ms = stats.simulated_ms, "match finished");

    println!("Frames drawn: {}", stats.frames_drawn);
    println!("Sim time:     {:.1}s", stats.simulated_ms / 1000.0);
    println!("Score:        {} - {}", stats.scores[0], stats.scores[1]);
    println!("Serves:       {}", stats.serves);
    println!("Paddle hits:  {}", stats.paddle_hits);
    println!("Peak speed:   {:.1}", stats.peak_speed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(frames: u64) -> Args {
        Args {
            frames,
            fps: 60.0,
            seed: 7,
            pointer: 0.5,
            width: 600.0,
            height: 400.0,
        }
    }

    #[test]
    fn test_first_frame_is_not_drawn() {
        let stats = run(&args(10)).unwrap();
        assert_eq!(stats.frames_drawn, 9);
        assert_eq!(stats.serves, 1);
        assert!((stats.simulated_ms - 9000.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_long_run_scores_points() {
        let stats = run(&args(60 * 120)).unwrap();
        assert!(stats.scores[0] + stats.scores[1] > 0);
        assert!(stats.serves >= u64::from(stats.scores[0] + stats.scores[1]));
        assert!(stats.peak_speed >= game_core::Params::SERVE_SPEED - 1e-3);
    }

    #[test]
    fn test_same_seed_same_match() {
        assert_eq!(run(&args(3000)).unwrap(), run(&args(3000)).unwrap());
    }

    #[test]
    fn test_rejects_bad_fps() {
        let mut bad = args(10);
        bad.fps = 0.0;
        assert!(run(&bad).is_err());
    }
}
