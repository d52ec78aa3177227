//! winit frame driver
//!
//! Each redraw renders. A redraw also drains input, ticks the game and
//! plays sounds when the limiter says a frame is due.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use crate::assets::Assets;
use crate::audio::AudioManager;
use crate::config::GameConfig;
use crate::consts::*;
use crate::error::InitError;
use crate::frame::{FrameLimiter, RunClock};
use crate::input::InputState;
use crate::renderer::{RenderState, ScoreLabel, build_scene};
use crate::sim::{GameState, tick};

/// Whether the loop should run another frame
pub fn keep_running(input: &InputState, state: &GameState) -> bool {
    !input.quit_requested() && state.is_running()
}

/// Tick the game if the limiter says a frame is due. Redraws that arrive
/// early (expose, resize) only repaint, so they never speed the game up.
/// Returns whether a tick ran.
pub fn tick_if_due(
    state: &mut GameState,
    input: &mut InputState,
    limiter: &mut FrameLimiter,
    clock: &RunClock,
    now: Instant,
) -> bool {
    if !limiter.is_due(now) {
        return false;
    }
    let tick_input = input.drain();
    tick(state, &tick_input, clock.elapsed_ms(now));
    limiter.frame_done(now);
    true
}

/// Everything that exists once the window is up
struct Session {
    window: Arc<Window>,
    render: RenderState,
    audio: AudioManager,
    state: GameState,
    clock: RunClock,
    label: ScoreLabel,
}

pub struct App {
    config: GameConfig,
    assets: Assets,
    input: InputState,
    limiter: FrameLimiter,
    session: Option<Session>,
    error: Option<InitError>,
    final_score: Option<u32>,
}

impl App {
    pub fn new(config: GameConfig, assets: Assets) -> Self {
        Self {
            limiter: FrameLimiter::new(config.tuning.frame_delay()),
            config,
            assets,
            input: InputState::new(),
            session: None,
            error: None,
            final_score: None,
        }
    }

    /// The start-up failure that ended the loop, if any
    pub fn take_error(&mut self) -> Option<InitError> {
        self.error.take()
    }

    /// Score at the end of the run, once it has ended
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    fn start(&self, event_loop: &ActiveEventLoop) -> Result<Session, InitError> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);
        window.set_cursor_visible(!self.config.settings.hide_cursor);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {}", adapter.get_info().name);

        let size = window.inner_size();
        let render = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width.max(1),
            size.height.max(1),
            &self.assets,
        ))?;

        let mut audio = AudioManager::new(&self.assets, &self.config.settings);
        audio.start_music();

        let seed: u64 = rand::random();
        log::info!("Game initialized with seed: {}", seed);

        Ok(Session {
            window,
            render,
            audio,
            state: GameState::new(seed, self.config.tuning.clone()),
            clock: RunClock::start(Instant::now()),
            label: ScoreLabel::new(),
        })
    }

    /// Stop the loop, remembering the final score
    fn finish(&mut self, event_loop: &ActiveEventLoop) {
        if self.final_score.is_some() {
            return;
        }
        if let Some(session) = &mut self.session {
            let score = session.state.score.value();
            if !session.state.is_running() {
                log::info!("Game over! Final score: {}", score);
            } else {
                log::info!("Quit with score: {}", score);
            }
            session.audio.stop_music();
            self.final_score = Some(score);
        }
        event_loop.exit();
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(session) = &mut self.session else {
            return;
        };
        if !keep_running(&self.input, &session.state) {
            self.finish(event_loop);
            return;
        }

        let ticked = tick_if_due(
            &mut session.state,
            &mut self.input,
            &mut self.limiter,
            &session.clock,
            Instant::now(),
        );
        if ticked {
            session.audio.play_events(&session.state.events);
        }

        if let Some(font) = &self.assets.font {
            let score = session.state.score.value();
            if let Some(bitmap) = session.label.update(font, score, SCORE_FONT_PX) {
                session.render.set_label(bitmap);
            }
        }

        let cmds = build_scene(
            &session.state,
            &self.config.settings,
            session.render.label_size(),
        );
        match session.render.render(&cmds) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                session.render.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory");
            }
            Err(e) => {
                log::warn!("Surface error: {:?}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(session) => {
                session.window.request_redraw();
                self.session = Some(session);
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.input.request_quit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                ..
            } => {
                self.input.mouse_pressed();
            }
            WindowEvent::Resized(size) => {
                if let Some(session) = &mut self.session {
                    session.render.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(session) = &self.session else {
            return;
        };
        if !keep_running(&self.input, &session.state) {
            self.finish(event_loop);
            return;
        }

        let now = Instant::now();
        match self.limiter.deadline() {
            Some(deadline) if !self.limiter.is_due(now) => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
            }
            _ => {
                event_loop.set_control_flow(ControlFlow::Wait);
                session.window.request_redraw();
            }
        }
    }
}
