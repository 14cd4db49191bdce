//! Application loop
//!
//! Owns the window, the render state and the one `GameState`. Keyboard
//! events become discrete input messages, applied before each batch of
//! fixed-timestep update steps; a redraw is requested after every frame.

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::consts::{TICK_DT, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::renderer::{RenderState, build_frame};
use crate::sim::{GameState, InputEvent, apply_input, tick};

/// Maximum update steps per frame, so a stalled frame cannot spiral
const MAX_SUBSTEPS: u32 = 8;

/// Main application state
pub struct App {
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    state: GameState,
    pending_input: Vec<InputEvent>,
    last_frame_time: Option<Instant>,
    accumulated_time: f32,
}

impl App {
    pub fn new() -> Self {
        Self {
            window: None,
            render_state: None,
            state: GameState::new(),
            pending_input: Vec::new(),
            last_frame_time: None,
            accumulated_time: 0.0,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) {
        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("failed to create window"),
        );

        let render_state = pollster::block_on(RenderState::new(window.clone()))
            .expect("failed to create renderer");

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.last_frame_time = Some(Instant::now());

        log::info!("window and renderer initialized");
    }

    /// Run queued input, then as many fixed update steps as the elapsed
    /// time covers.
    fn advance(&mut self, event_loop: &ActiveEventLoop, delta_time: f32) {
        let was_ended = self.state.is_ended();

        for event in self.pending_input.drain(..) {
            if event == InputEvent::Quit {
                log::info!("quit requested");
                event_loop.exit();
                return;
            }
            apply_input(&mut self.state, event);
        }

        self.accumulated_time += delta_time;
        let mut substeps = 0;
        while self.accumulated_time >= TICK_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state);
            self.accumulated_time -= TICK_DT;
            substeps += 1;
        }

        if !was_ended && self.state.is_ended() {
            log::info!("game ended: {}", self.state.final_message);
        }
    }

    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_state) = &mut self.render_state else {
            return;
        };

        let (vertices, clear_color) = build_frame(&self.state);
        match render_state.render(&vertices, clear_color) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = render_state.size;
                render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {e:?}"),
        }
    }

    fn key_to_input(key: &Key) -> Option<InputEvent> {
        match key {
            Key::Named(NamedKey::Escape) => Some(InputEvent::Quit),
            Key::Named(NamedKey::ArrowLeft) => Some(InputEvent::MoveLeft),
            Key::Named(NamedKey::ArrowRight) => Some(InputEvent::MoveRight),
            // Everything else is silently ignored
            _ => None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.init_window(event_loop);
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested, exiting");
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(new_size.width, new_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let Some(input) = Self::key_to_input(&event.logical_key) {
                        self.pending_input.push(input);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta_time = match self.last_frame_time {
                    Some(last) => now.duration_since(last).as_secs_f32(),
                    None => TICK_DT,
                };
                self.last_frame_time = Some(now);

                self.advance(event_loop, delta_time);
                self.render_frame(event_loop);

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}
