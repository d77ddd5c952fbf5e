//! Fixed timestep simulation tick
//!
//! Velocities are per-tick displacements, so a tick never looks at wall time.

use super::line::intersection;
use super::state::GameState;

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState) {
    state.time_ticks += 1;

    for b in &mut state.boxes {
        b.step();
    }

    let [first, second] = state.segments();
    let hit = intersection(&first, &second);

    if hit != state.intersection {
        match hit {
            Some(p) => log::debug!("Segments cross at ({:.2}, {:.2})", p.x, p.y),
            None => log::debug!("Segments no longer cross"),
        }
    }
    state.intersection = hit;
}

#[cfg(test)]
mod tests {
    use glam::{IVec2, Vec2};

    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_tick_without_velocity_is_stable() {
        let mut state = GameState::new(&Settings::default());
        tick(&mut state);
        let after_first = state.clone();

        for _ in 0..100 {
            tick(&mut state);
        }

        assert_eq!(state.boxes, after_first.boxes);
        assert_eq!(state.intersection, after_first.intersection);
        assert_eq!(state.time_ticks, 101);
    }

    #[test]
    fn test_tick_moves_by_exact_velocity() {
        let mut state = GameState::new(&Settings::default());
        state.boxes[0].vel = IVec2::new(5, -5);
        state.boxes[3].vel = IVec2::new(-3, 0);
        let before = state.boxes;

        tick(&mut state);

        assert_eq!(state.boxes[0].pos, before[0].pos + IVec2::new(5, -5));
        assert_eq!(state.boxes[1].pos, before[1].pos);
        assert_eq!(state.boxes[2].pos, before[2].pos);
        assert_eq!(state.boxes[3].pos, before[3].pos + IVec2::new(-3, 0));
    }

    #[test]
    fn test_initial_layout_has_no_crossing() {
        // Two horizontal segments: parallel
        let mut state = GameState::new(&Settings::default());
        tick(&mut state);
        assert_eq!(state.intersection, None);
    }

    #[test]
    fn test_tick_computes_crossing() {
        let mut state = GameState::new(&Settings::default());
        // Swap the vertical placement of boxes 0 and 2 to form an X
        state.boxes[0].pos = IVec2::new(315, 421);
        state.boxes[2].pos = IVec2::new(315, 208);

        tick(&mut state);

        // Centers (320,426)-(640,213) and (320,213)-(640,426) meet mid-way
        let p = state.intersection.expect("diagonals should cross");
        assert!((p - Vec2::new(480.0, 319.5)).length() < 1e-3);
    }

    #[test]
    fn test_crossing_recomputed_every_tick() {
        let mut state = GameState::new(&Settings::default());
        // Raise box 2 until its end of the second segment passes the first
        state.boxes[2].vel = IVec2::new(0, -5);
        tick(&mut state);
        assert_eq!(state.intersection, None);

        // Center y after 44 ticks: 426 - 220 = 206, above the first line at 213
        for _ in 0..43 {
            tick(&mut state);
        }
        let p = state.intersection.expect("segments should now cross");
        assert!((p.y - 213.0).abs() < 1e-3);

        // Stop, then the result stays put
        state.boxes[2].vel = IVec2::ZERO;
        let before = state.intersection;
        tick(&mut state);
        assert_eq!(state.intersection, before);
    }

    #[test]
    fn test_determinism() {
        let settings = Settings::default();
        let mut state1 = GameState::new(&settings);
        let mut state2 = GameState::new(&settings);

        for state in [&mut state1, &mut state2] {
            state.boxes[1].vel = IVec2::new(0, 5);
            state.boxes[2].vel = IVec2::new(5, -5);
        }

        for _ in 0..30 {
            tick(&mut state1);
            tick(&mut state2);
        }

        assert_eq!(state1, state2);
        assert_eq!(
            serde_json::to_string(&state1).unwrap(),
            serde_json::to_string(&state2).unwrap()
        );
    }
}
