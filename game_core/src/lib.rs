pub mod bounds;
pub mod clock;
pub mod components;
pub mod config;
pub mod error;
pub mod glyph;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod systems;
pub mod vector;

pub use bounds::*;
pub use clock::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use input::*;
pub use params::*;
pub use render::{Color, Snapshot, Surface};
pub use resources::*;
pub use simulation::*;
pub use vector::*;
