//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here; rendering only reads it.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::line::Segment;
use crate::settings::Settings;

/// Number of player boxes (two per segment)
pub const BOX_COUNT: usize = 4;

/// RGBA display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// RGBA in `[0, 1]` without gamma conversion
    pub fn to_f32(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a].map(|c| c as f32 / 255.0)
    }

    /// Linear-space RGBA in `[0, 1]`, for sRGB render targets
    pub fn to_linear(self) -> [f32; 4] {
        fn channel(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [
            channel(self.r),
            channel(self.g),
            channel(self.b),
            self.a as f32 / 255.0,
        ]
    }
}

/// Colors for scene elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const GRID: Color = Color::rgb(0x14, 0x14, 0x14);
    pub const SEGMENT: Color = Color::rgb(0x00, 0xFF, 0xFF);
    pub const MARKER: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    /// Player boxes, in index order
    pub const BOXES: [Color; super::BOX_COUNT] = [
        Color::rgb(0xFF, 0x00, 0x00),
        Color::rgb(0xA0, 0x00, 0x00),
        Color::rgb(0x00, 0xFF, 0x00),
        Color::rgb(0x00, 0xA0, 0x00),
    ];
}

/// A player-controlled box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerBox {
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
    /// Displacement applied every tick
    pub vel: IVec2,
    pub color: Color,
}

impl PlayerBox {
    /// Box of edge `size` centered (integer-wise) on `center`, at rest
    pub fn centered_at(center: IVec2, size: i32, color: Color) -> Self {
        Self {
            pos: center - IVec2::splat(size / 2),
            size: IVec2::splat(size),
            vel: IVec2::ZERO,
            color,
        }
    }

    /// Advance by one tick's worth of velocity
    #[inline]
    pub fn step(&mut self) {
        self.pos += self.vel;
    }

    /// Center point, using integer half-size like the drawn rectangle
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.pos + self.size / 2).as_vec2()
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Boxes 0 and 1 span the first segment, 2 and 3 the second
    pub boxes: [PlayerBox; BOX_COUNT],
    /// Crossing point computed by the latest tick
    pub intersection: Option<Vec2>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Starting layout: the first pair on the upper third line, the second
    /// pair on the lower third line, each at the left and right thirds
    pub fn new(settings: &Settings) -> Self {
        let w = settings.screen_width as i32;
        let h = settings.screen_height as i32;
        let anchors = [
            IVec2::new(w / 3, h / 3),
            IVec2::new(w * 2 / 3, h / 3),
            IVec2::new(w / 3, h * 2 / 3),
            IVec2::new(w * 2 / 3, h * 2 / 3),
        ];
        let boxes = std::array::from_fn(|i| {
            PlayerBox::centered_at(anchors[i], settings.box_size, colors::BOXES[i])
        });

        Self {
            boxes,
            intersection: None,
            time_ticks: 0,
        }
    }

    /// The two segments joining the box centers of each pair
    pub fn segments(&self) -> [Segment; 2] {
        let b = &self.boxes;
        [
            Segment::new(b[0].center(), b[1].center()),
            Segment::new(b[2].center(), b[3].center()),
        ]
    }
}
