//! Native backend: winit window + wgpu renderer
//!
//! The event loop is pumped rather than run, so the game loop keeps control
//! of program flow. Events are drained at most once per frame: the first
//! `poll_event` after a `present` pumps winit, later calls only pop the
//! queue.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::error::OsError;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use super::{Canvas, InitError, Platform, Rect};
use crate::renderer::{LINE_WIDTH, RenderState, ShapeBatch};
use crate::sim::{Color, InputEvent, Key};

/// Pumps allowed for the window to appear before giving up
const STARTUP_PUMPS: u32 = 500;
const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

/// Clock frequency of [`NativePlatform::now`] (nanoseconds)
pub const FREQUENCY: u64 = 1_000_000_000;

fn map_key(code: KeyCode) -> Option<Key> {
    Some(match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::ShiftLeft => Key::LeftShift,
        _ => return None,
    })
}

/// Collects winit callbacks into a queue the game loop can poll
struct WindowHandler {
    attributes: Option<WindowAttributes>,
    window: Option<Arc<Window>>,
    create_error: Option<OsError>,
    events: VecDeque<InputEvent>,
    resized: Option<PhysicalSize<u32>>,
}

impl WindowHandler {
    fn new(attributes: WindowAttributes) -> Self {
        Self {
            attributes: Some(attributes),
            window: None,
            create_error: None,
            events: VecDeque::new(),
            resized: None,
        }
    }

    /// Pump until `resumed` has created the window
    fn wait_for_window(&mut self, event_loop: &mut EventLoop<()>) -> Result<Arc<Window>, InitError> {
        for _ in 0..STARTUP_PUMPS {
            if let PumpStatus::Exit(code) =
                event_loop.pump_app_events(Some(STARTUP_PUMP_TIMEOUT), self)
            {
                return Err(InitError::ExitedDuringStartup(code));
            }
            if let Some(e) = self.create_error.take() {
                return Err(e.into());
            }
            if let Some(window) = &self.window {
                return Ok(Arc::clone(window));
            }
        }
        Err(InitError::WindowNotResumed(STARTUP_PUMPS))
    }
}

impl ApplicationHandler for WindowHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attributes) = self.attributes.take() else {
            return;
        };
        match event_loop.create_window(attributes) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(e) => self.create_error = Some(e),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.events.push_back(InputEvent::Quit),
            WindowEvent::Resized(size) => self.resized = Some(size),
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let Some(key) = map_key(code) else {
                    return;
                };
                self.events.push_back(match event.state {
                    ElementState::Pressed => InputEvent::KeyDown(key),
                    ElementState::Released => InputEvent::KeyUp(key),
                });
            }
            _ => {}
        }
    }
}

/// Desktop [`Platform`]
pub struct NativePlatform {
    render: RenderState,
    batch: ShapeBatch,
    clear_color: wgpu::Color,
    /// Surface applies sRGB encoding, so colors are uploaded linear
    linear_colors: bool,
    handler: WindowHandler,
    event_loop: EventLoop<()>,
    window: Arc<Window>,
    epoch: Instant,
    /// Events already pumped for the current frame
    pumped: bool,
}

impl NativePlatform {
    /// Open a non-resizable `width`×`height` window and set up the renderer
    pub fn create(title: &str, width: u32, height: u32) -> Result<Self, InitError> {
        let mut event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width as f64, height as f64))
            .with_resizable(false);
        let mut handler = WindowHandler::new(attributes);
        let window = handler.wait_for_window(&mut event_loop)?;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(Arc::clone(&window))?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        let info = adapter.get_info();
        log::info!("Using adapter {} ({:?})", info.name, info.backend);

        let physical = window.inner_size();
        let render = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            (physical.width, physical.height),
            (width as f32, height as f32),
        ))?;
        let linear_colors = render.config.format.is_srgb();

        log::info!("Window {width}x{height} ready");

        Ok(Self {
            render,
            batch: ShapeBatch::new(),
            clear_color: wgpu::Color::BLACK,
            linear_colors,
            handler,
            event_loop,
            window,
            epoch: Instant::now(),
            pumped: false,
        })
    }

    fn color(&self, color: Color) -> [f32; 4] {
        if self.linear_colors {
            color.to_linear()
        } else {
            color.to_f32()
        }
    }

    fn pump(&mut self) {
        if let PumpStatus::Exit(code) = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.handler)
        {
            log::info!("Event loop exited with code {code}");
            self.handler.events.push_back(InputEvent::Quit);
        }

        if let Some(size) = self.handler.resized.take() {
            self.render.resize(size.width, size.height);
        }
    }
}

impl Canvas for NativePlatform {
    fn clear(&mut self, color: Color) {
        let [r, g, b, a] = self.color(color);
        self.clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        };
        self.batch.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let c = self.color(color);
        self.batch.rect(rect.min(), rect.max(), c);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let c = self.color(color);
        // Integer coordinates name pixels; center the line on them
        let half = Vec2::splat(LINE_WIDTH / 2.0);
        self.batch.line(from + half, to + half, LINE_WIDTH, c);
    }

    fn draw_rect_outline(&mut self, rect: Rect, color: Color) {
        let c = self.color(color);
        self.batch.rect_outline(rect.min(), rect.max(), LINE_WIDTH, c);
    }

    fn present(&mut self) {
        self.pumped = false;

        match self.render.render(self.clear_color, self.batch.vertices()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = self.window.inner_size();
                self.render.resize(size.width, size.height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory");
            }
            Err(e) => {
                log::warn!("Render error: {e:?}");
            }
        }
    }
}

impl Platform for NativePlatform {
    fn poll_event(&mut self) -> Option<InputEvent> {
        if !self.pumped {
            self.pumped = true;
            self.pump();
        }
        self.handler.events.pop_front()
    }

    fn now(&self) -> u64 {
        self.epoch.elapsed().as_nanos() as u64
    }

    fn frequency(&self) -> u64 {
        FREQUENCY
    }
}
