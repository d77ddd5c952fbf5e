//! Deterministic simulation module
//!
//! All game logic lives here, independent of rendering and platform.
//! Uses a fixed timestep for reproducible behavior.

pub mod float_cmp;
pub mod input;
pub mod line;
pub mod state;
pub mod tick;

pub use float_cmp::TolerantFloat;
pub use input::{InputEvent, InputMapper, Key};
pub use line::{LineCoefficients, Segment, intersection};
pub use state::{BOX_COUNT, Color, GameState, PlayerBox};
pub use tick::tick;
