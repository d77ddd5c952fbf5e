//! Scene drawing
//!
//! Turns a [`GameState`] into canvas calls. Runs once per outer loop
//! iteration, independent of how many ticks ran.

use glam::Vec2;

use crate::platform::{Canvas, Rect};
use crate::settings::Settings;
use crate::sim::GameState;
use crate::sim::state::colors;

/// Draw and present one frame
pub fn draw_frame<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState, settings: &Settings) {
    canvas.clear(colors::BACKGROUND);

    draw_grid(canvas, settings);

    for b in &state.boxes {
        let pos = b.pos.as_vec2();
        let size = b.size.as_vec2();
        canvas.fill_rect(Rect::new(pos.x, pos.y, size.x, size.y), b.color);
    }

    for segment in state.segments() {
        canvas.draw_line(segment.start, segment.end, colors::SEGMENT);
    }

    if let Some(p) = state.intersection {
        let size = settings.marker_size;
        canvas.draw_rect_outline(Rect::centered(p, size, size), colors::MARKER);
    }

    canvas.present();
}

/// Interior grid lines; the screen border itself is not drawn
fn draw_grid<C: Canvas + ?Sized>(canvas: &mut C, settings: &Settings) {
    let cell = settings.cell_size;
    let (w, h) = (settings.screen_width, settings.screen_height);
    let (wf, hf) = (w as f32, h as f32);

    for y in 1..h / cell {
        let y = (y * cell) as f32;
        canvas.draw_line(Vec2::new(0.0, y), Vec2::new(wf, y), colors::GRID);
    }

    for x in 1..w / cell {
        let x = (x * cell) as f32;
        canvas.draw_line(Vec2::new(x, 0.0), Vec2::new(x, hf), colors::GRID);
    }
}
