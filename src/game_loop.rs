//! Fixed timestep driver
//!
//! Wall time is accumulated and drained in fixed `tick_duration` steps; the
//! scene is drawn exactly once per outer iteration no matter how many ticks
//! (zero or more) ran.

use std::time::{Duration, Instant};

use crate::platform::{InitError, Platform};
use crate::scene;
use crate::settings::Settings;
use crate::sim::{GameState, InputMapper, tick};

/// Lifecycle of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Created, platform not initialized yet
    NotStarted,
    Running,
    /// Quit requested, or the platform failed to initialize
    Stopped,
}

/// Frames/ticks counters, reported once per second of wall time
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    pub frames: u32,
    pub ticks: u32,
    window: f64,
}

impl FrameStats {
    /// Record one outer iteration; returns `(frames, ticks)` when a full
    /// second has accumulated
    pub fn record(&mut self, elapsed: f64, ticks: u32) -> Option<(u32, u32)> {
        self.frames += 1;
        self.ticks += ticks;
        self.window += elapsed;

        if self.window < 1.0 {
            return None;
        }

        let report = (self.frames, self.ticks);
        self.window -= 1.0;
        self.frames = 0;
        self.ticks = 0;
        Some(report)
    }
}

/// Owns the simulation and drives it against a [`Platform`]
pub struct GameLoop {
    settings: Settings,
    state: GameState,
    input: InputMapper,
    loop_state: LoopState,
    /// Unconsumed wall time in seconds
    accumulator: f64,
    step: f64,
    stats: FrameStats,
    init_failed: bool,
}

impl GameLoop {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: GameState::new(&settings),
            input: InputMapper::new(settings.move_speed),
            loop_state: LoopState::NotStarted,
            accumulator: 0.0,
            step: settings.tick_duration(),
            stats: FrameStats::default(),
            init_failed: false,
            settings,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Whether `run` stopped because the platform could not be created
    pub fn init_failed(&self) -> bool {
        self.init_failed
    }

    /// Initialize the platform and run until quit
    ///
    /// A failed initialization is logged and leaves the loop `Stopped`
    /// without a single iteration. The platform is dropped before returning.
    pub fn run<P, F>(&mut self, init: F) -> LoopState
    where
        P: Platform,
        F: FnOnce() -> Result<P, InitError>,
    {
        if self.loop_state != LoopState::NotStarted {
            log::warn!("Game loop already {:?}", self.loop_state);
            return self.loop_state;
        }

        let mut platform = match init() {
            Ok(platform) => platform,
            Err(e) => {
                log::error!("Initialization failed: {e}");
                self.init_failed = true;
                self.loop_state = LoopState::Stopped;
                return self.loop_state;
            }
        };

        self.loop_state = LoopState::Running;
        log::info!("Running at {} ticks/s", self.settings.tick_rate);

        let frame_budget = self
            .settings
            .frame_cap
            .map(|fps| Duration::from_secs_f64(1.0 / fps as f64));
        let mut last_time = platform.now();

        while self.loop_state == LoopState::Running {
            let frame_start = Instant::now();

            let now = platform.now();
            let elapsed = now.saturating_sub(last_time) as f64 / platform.frequency() as f64;
            last_time = now;

            self.iterate(&mut platform, elapsed);

            if let Some(budget) = frame_budget {
                let spent = frame_start.elapsed();
                if spent < budget {
                    std::thread::sleep(budget - spent);
                }
            }
        }

        log::info!("Stopped after {} ticks", self.state.time_ticks);
        self.loop_state
    }

    /// One outer iteration: accumulate `elapsed` seconds, dispatch input,
    /// drain fixed ticks, draw once
    ///
    /// Returns the number of ticks run. A quit event stops the loop and skips
    /// the rest of the iteration, including any events queued behind it.
    pub fn iterate<P: Platform + ?Sized>(&mut self, platform: &mut P, elapsed: f64) -> u32 {
        self.accumulator += elapsed;

        while let Some(event) = platform.poll_event() {
            if !self.input.apply(event, &mut self.state.boxes) {
                log::info!("Quit requested");
                self.loop_state = LoopState::Stopped;
                return 0;
            }
        }

        let mut ticks = 0;
        while self.accumulator >= self.step {
            tick(&mut self.state);
            self.accumulator -= self.step;
            ticks += 1;
        }

        scene::draw_frame(platform, &self.state, &self.settings);

        if let Some((frames, ticks)) = self.stats.record(elapsed, ticks) {
            log::debug!("Frames: {frames}, Ticks: {ticks}");
        }

        ticks
    }
}
