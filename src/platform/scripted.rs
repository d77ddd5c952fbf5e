//! In-memory platform for tests
//!
//! Input is scripted per frame, the clock is fake, and every draw call is
//! recorded.

use std::cell::Cell;
use std::collections::VecDeque;

use glam::Vec2;

use super::{Canvas, Platform, Rect};
use crate::sim::{Color, InputEvent};

/// Clock frequency of the scripted backend (microseconds)
pub const FREQUENCY: u64 = 1_000_000;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    FillRect(Rect, Color),
    Line(Vec2, Vec2, Color),
    RectOutline(Rect, Color),
    Present,
}

#[derive(Debug, Default)]
pub struct ScriptedPlatform {
    /// Events for upcoming frames; the next batch is queued on `present`
    frames: VecDeque<Vec<InputEvent>>,
    pending: VecDeque<InputEvent>,
    clock: Cell<u64>,
    /// Added to the clock after every `now` read
    step_us: u64,
    replay: bool,
    pub calls: Vec<DrawCall>,
    pub presents: usize,
}

impl ScriptedPlatform {
    /// Platform whose clock only moves through [`ScriptedPlatform::advance`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform that replays `frames` (one batch of events per iteration,
    /// then a quit) with `step_us` passing between clock reads
    pub fn scripted(step_us: u64, frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        let mut platform = Self {
            frames: frames.into_iter().collect(),
            step_us,
            replay: true,
            ..Default::default()
        };
        platform.queue_next_frame();
        platform
    }

    pub fn advance(&mut self, elapsed_us: u64) {
        self.clock.set(self.clock.get() + elapsed_us);
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    fn queue_next_frame(&mut self) {
        match self.frames.pop_front() {
            Some(events) => self.pending.extend(events),
            None => self.pending.push_back(InputEvent::Quit),
        }
    }

    /// Draw calls since the previous `present`, up to and including the last one
    pub fn last_frame(&self) -> &[DrawCall] {
        let end = self.calls.len();
        let start = self.calls[..end.saturating_sub(1)]
            .iter()
            .rposition(|c| *c == DrawCall::Present)
            .map_or(0, |i| i + 1);
        &self.calls[start..end]
    }
}

impl Canvas for ScriptedPlatform {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect(rect, color));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.calls.push(DrawCall::Line(from, to, color));
    }

    fn draw_rect_outline(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::RectOutline(rect, color));
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
        self.presents += 1;
        if self.replay {
            self.queue_next_frame();
        }
    }
}

impl Platform for ScriptedPlatform {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }

    fn now(&self) -> u64 {
        let t = self.clock.get();
        self.clock.set(t + self.step_us);
        t
    }

    fn frequency(&self) -> u64 {
        FREQUENCY
    }
}
