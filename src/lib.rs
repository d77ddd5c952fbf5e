//! Lines Intersection - two player-driven segments and their crossing point
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, boxes, input mapping, tick)
//! - `game_loop`: Fixed timestep driver
//! - `scene`: Draws the simulation through a `Canvas`
//! - `platform`: Window/input/clock abstraction and the native backend
//! - `renderer`: wgpu triangle pipeline used by the native backend
//! - `settings`: Data-driven configuration

pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use game_loop::{GameLoop, LoopState};
pub use settings::Settings;

/// Configuration defaults
pub mod consts {
    /// Window title
    pub const GAME_TITLE: &str = "Lines Intersection";

    /// Screen dimensions (logical pixels)
    pub const SCREEN_WIDTH: u32 = 960;
    pub const SCREEN_HEIGHT: u32 = 640;

    /// Background grid cell size
    pub const CELL_SIZE: u32 = 32;

    /// Box displacement per tick while a key is held
    pub const MOVE_SPEED: i32 = 5;

    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f64 = 1.0 / TICK_RATE as f64;

    /// Player box edge length
    pub const BOX_SIZE: i32 = 10;
    /// Edge length of the square drawn around the intersection point
    pub const MARKER_SIZE: f32 = 10.0;
}
