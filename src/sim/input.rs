//! Keyboard to velocity mapping
//!
//! WASD drives boxes 0/1 and the arrow keys drive boxes 2/3. Holding the
//! modifier at key-down steers the second box of the pair instead of the
//! first. Key-up stops that axis for both boxes of the pair, whichever one the
//! press was aimed at.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::PlayerBox;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    /// Selects the second box of a pair while held
    LeftShift,
}

/// Discrete input event delivered by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window closed or OS quit request
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Which pair of boxes a key steers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pair {
    /// Boxes 0 and 1 (first segment)
    First,
    /// Boxes 2 and 3 (second segment)
    Second,
}

impl Pair {
    /// Box indices as (unmodified target, modified target)
    pub const fn indices(self) -> (usize, usize) {
        match self {
            Pair::First => (0, 1),
            Pair::Second => (2, 3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// What a directional key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub pair: Pair,
    pub axis: Axis,
    /// -1 or +1
    pub direction: i32,
}

impl Key {
    /// Movement binding, `None` for the modifier
    pub const fn binding(self) -> Option<Binding> {
        let (pair, axis, direction) = match self {
            Key::W => (Pair::First, Axis::Y, -1),
            Key::S => (Pair::First, Axis::Y, 1),
            Key::A => (Pair::First, Axis::X, -1),
            Key::D => (Pair::First, Axis::X, 1),
            Key::Up => (Pair::Second, Axis::Y, -1),
            Key::Down => (Pair::Second, Axis::Y, 1),
            Key::Left => (Pair::Second, Axis::X, -1),
            Key::Right => (Pair::Second, Axis::X, 1),
            Key::LeftShift => return None,
        };
        Some(Binding {
            pair,
            axis,
            direction,
        })
    }
}

fn set_axis(vel: &mut IVec2, axis: Axis, value: i32) {
    match axis {
        Axis::X => vel.x = value,
        Axis::Y => vel.y = value,
    }
}

/// Translates key events into box velocities
#[derive(Debug, Clone)]
pub struct InputMapper {
    speed: i32,
    modifier_held: bool,
}

impl InputMapper {
    pub fn new(speed: i32) -> Self {
        Self {
            speed,
            modifier_held: false,
        }
    }

    pub fn modifier_held(&self) -> bool {
        self.modifier_held
    }

    pub fn key_down(&mut self, key: Key, boxes: &mut [PlayerBox]) {
        let Some(binding) = key.binding() else {
            self.modifier_held = true;
            return;
        };

        let (first, second) = binding.pair.indices();
        let target = if self.modifier_held { second } else { first };
        set_axis(&mut boxes[target].vel, binding.axis, binding.direction * self.speed);
    }

    pub fn key_up(&mut self, key: Key, boxes: &mut [PlayerBox]) {
        let Some(binding) = key.binding() else {
            self.modifier_held = false;
            return;
        };

        let (first, second) = binding.pair.indices();
        for i in [first, second] {
            set_axis(&mut boxes[i].vel, binding.axis, 0);
        }
    }

    /// Apply a key event; returns `false` for [`InputEvent::Quit`]
    pub fn apply(&mut self, event: InputEvent, boxes: &mut [PlayerBox]) -> bool {
        match event {
            InputEvent::Quit => return false,
            InputEvent::KeyDown(key) => self.key_down(key, boxes),
            InputEvent::KeyUp(key) => self.key_up(key, boxes),
        }
        true
    }
}
