//! Platform abstraction layer
//!
//! The game loop only talks to a [`Platform`]:
//! - Input events (quit, key down/up)
//! - High resolution clock
//! - A [`Canvas`] with the handful of 2D primitives the scene needs
//!
//! [`native::NativePlatform`] implements it with winit + wgpu. Tests use the
//! in-memory `scripted` backend.

pub mod native;
#[cfg(test)]
pub(crate) mod scripted;

use glam::Vec2;
use thiserror::Error;

use crate::sim::{Color, InputEvent};

pub use native::NativePlatform;

/// Axis-aligned rectangle in logical pixels (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w`×`h` centered on `center`
    pub fn centered(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }
}

/// 2D drawing surface
pub trait Canvas {
    /// Start a frame filled with `color`
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// One pixel wide line
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);

    /// One pixel wide rectangle border
    fn draw_rect_outline(&mut self, rect: Rect, color: Color);

    /// Show everything drawn since `clear`
    fn present(&mut self);
}

/// Window, input and clock collaborators of the game loop
pub trait Platform: Canvas {
    /// Next pending input event, `None` once the queue is drained
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Monotonic timestamp in ticks of [`Platform::frequency`]
    fn now(&self) -> u64;

    /// Clock ticks per second
    fn frequency(&self) -> u64;
}

/// Failures while bringing up the window and renderer
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("window could not be created: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("event loop never delivered a window (gave up after {0} polls)")]
    WindowNotResumed(u32),
    #[error("event loop exited during startup with code {0}")]
    ExitedDuringStartup(i32),
    #[error("failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("renderer could not be created: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported texture formats")]
    UnsupportedSurface,
}
