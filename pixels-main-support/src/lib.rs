#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod frame_rate;
mod palette;

pub use frame_rate::{FpsMeter, FrameRate, MAX_FPS, MIN_FPS};
pub use palette::{
    ColorParseError, DEFAULT_BACKGROUND_COLOR, DEFAULT_LIVE_COLOR, Palette, Rgba,
    parse_hex_color,
};

use life_grid::{Command, World};
use log::{debug, error, info};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, KeyEvent, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Debug, Error)]
pub enum AnimateError {
    #[error("event loop failed")]
    EventLoop(#[from] EventLoopError),
    #[error("could not create window")]
    Window(#[from] OsError),
    #[error("could not draw frame")]
    Pixels(#[from] pixels::Error),
    #[error("could not resize drawing surface")]
    Texture(#[from] pixels::TextureError),
}

#[derive(Clone, Debug)]
pub struct AnimateSettings {
    pub title: String,
    pub cell_pixels: u32,
    pub frame_rate: FrameRate,
    pub palette: Palette,
}

/// Opens a window sized to the world and runs it until the window closes.
///
/// Keys: Space starts or pauses, R regenerates, C cycles the live color,
/// Escape or Q quits.
pub fn animate<W: World>(settings: AnimateSettings, world: W) -> Result<(), AnimateError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut handler = AppEventHandler::new(settings, world);
    event_loop.run_app(&mut handler)?;
    handler.error.map_or(Ok(()), Err)
}

/// Paints the background, then one pixel per live cell. `frame` is RGBA,
/// row-major, one pixel per interior cell.
pub fn draw_world<W: World>(world: &W, palette: &Palette, frame: &mut [u8]) {
    let width = world.width() as usize;
    debug_assert_eq!(frame.len(), 4 * width * world.height() as usize);

    let background = palette.background();
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&background);
    }

    let live = palette.live();
    for loc in world.live_cells() {
        let index = 4 * ((loc.y as usize - 1) * width + (loc.x as usize - 1));
        frame[index..index + 4].copy_from_slice(&live);
    }
}

fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Space => Some(Command::Toggle),
        KeyCode::KeyR => Some(Command::Regenerate),
        _ => None,
    }
}

fn clear_color(color: Rgba) -> Color {
    let channel = |value: u8| value as f64 / 0xff as f64;
    Color {
        r: channel(color[0]),
        g: channel(color[1]),
        b: channel(color[2]),
        a: channel(color[3]),
    }
}

struct App<W: World> {
    world: W,
    settings: AnimateSettings,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    next_update: Instant,
    fps: FpsMeter,
}

impl<W: World> App<W> {
    fn new(
        event_loop: &ActiveEventLoop,
        settings: AnimateSettings,
        world: W,
    ) -> Result<Self, AnimateError> {
        let window = Arc::new(Self::build_window(event_loop, &settings, &world)?);
        let pixels = Self::build_pixels(&window, &settings, world.width(), world.height())?;
        Ok(Self {
            world,
            settings,
            window,
            pixels,
            next_update: Instant::now(),
            fps: FpsMeter::new(),
        })
    }

    fn build_window(
        event_loop: &ActiveEventLoop,
        settings: &AnimateSettings,
        world: &W,
    ) -> Result<Window, OsError> {
        let size = PhysicalSize::new(
            world.width() * settings.cell_pixels,
            world.height() * settings.cell_pixels,
        );
        let window_attributes = Window::default_attributes()
            .with_title(settings.title.clone())
            .with_inner_size(size)
            .with_min_inner_size(PhysicalSize::new(world.width(), world.height()))
            .with_visible(false);
        event_loop.create_window(window_attributes)
    }

    fn build_pixels(
        window: &Arc<Window>,
        settings: &AnimateSettings,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        PixelsBuilder::new(width, height, surface_texture)
            .clear_color(clear_color(settings.palette.background()))
            .build()
    }

    fn on_create(&mut self) {
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_time_step(&mut self) {
        let now = Instant::now();
        self.world.update();
        self.window.request_redraw();

        if let Some(rate) = self.fps.record(now) {
            debug!("Current FPS: {rate:.3}");
            self.window.set_title(&format!(
                "{} - Generation {} - Current FPS: {rate:.3}",
                self.settings.title,
                self.world.generation()
            ));
        }

        // Missed slots are skipped rather than replayed.
        let interval = self.settings.frame_rate.interval();
        while self.next_update <= now {
            self.next_update += interval;
        }
    }

    fn on_command(&mut self, command: Command) {
        let was_running = self.world.is_running();
        self.world.handle(command);
        if self.world.is_running() && !was_running {
            self.next_update = Instant::now() + self.settings.frame_rate.interval();
            self.fps.reset();
        }
        if !self.world.is_running() {
            self.window.set_title(&self.settings.title);
        }
        self.window.request_redraw();
    }

    fn on_next_color(&mut self) {
        let color = self.settings.palette.next_live_color();
        info!("Live color is now {color:02x?}");
        self.window.request_redraw();
    }

    fn on_resize(&mut self, size: PhysicalSize<u32>) -> Result<(), AnimateError> {
        if size.width > 0 && size.height > 0 {
            self.pixels.resize_surface(size.width, size.height)?;
        }
        Ok(())
    }

    fn on_redraw(&mut self) -> Result<(), AnimateError> {
        draw_world(&self.world, &self.settings.palette, self.pixels.frame_mut());
        self.pixels.render()?;
        Ok(())
    }
}

struct AppEventHandler<W: World> {
    pending: Option<(AnimateSettings, W)>,
    app: Option<App<W>>,
    error: Option<AnimateError>,
}

impl<W: World> AppEventHandler<W> {
    fn new(settings: AnimateSettings, world: W) -> Self {
        Self {
            pending: Some((settings, world)),
            app: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AnimateError) {
        error!("{err}");
        self.error = Some(err);
        event_loop.exit();
    }
}

impl<W: World> ApplicationHandler for AppEventHandler<W> {
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause
            && let Some(app) = self.app.as_mut()
            && app.world.is_running()
        {
            app.on_time_step();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some((settings, world)) = self.pending.take() else {
            return;
        };
        match App::new(event_loop, settings, world) {
            Ok(mut app) => {
                app.on_create();
                self.app = Some(app);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        let result = match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                Ok(())
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Released,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                match code {
                    KeyCode::Escape | KeyCode::KeyQ => event_loop.exit(),
                    KeyCode::KeyC => app.on_next_color(),
                    _ => {
                        if let Some(command) = command_for_key(code) {
                            app.on_command(command);
                        }
                    }
                }
                Ok(())
            }
            WindowEvent::Resized(size) => app.on_resize(size),
            WindowEvent::RedrawRequested => app.on_redraw(),
            _ => Ok(()),
        };
        if let Err(err) = result {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let control_flow = match self.app.as_ref() {
            Some(app) if app.world.is_running() => ControlFlow::WaitUntil(app.next_update),
            _ => ControlFlow::Wait,
        };
        event_loop.set_control_flow(control_flow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_grid::{Random, Simulation};

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(command_for_key(KeyCode::Space), Some(Command::Toggle));
        assert_eq!(command_for_key(KeyCode::KeyR), Some(Command::Regenerate));
        assert_eq!(command_for_key(KeyCode::KeyZ), None);
    }

    #[test]
    fn draw_world_paints_live_cells_only() {
        let world = Simulation::new(6, 4, 0.5, Random::from_seed(8));
        let palette = Palette::default();
        let mut frame = vec![0; 4 * 6 * 4];
        draw_world(&world, &palette, &mut frame);

        let live_pixels = frame
            .chunks_exact(4)
            .filter(|pixel| *pixel == palette.live())
            .count();
        let background_pixels = frame
            .chunks_exact(4)
            .filter(|pixel| *pixel == palette.background())
            .count();
        assert_eq!(live_pixels, world.grid().live_count());
        assert_eq!(live_pixels, 12);
        assert_eq!(live_pixels + background_pixels, 24);

        for loc in world.grid().live_cells() {
            let index = 4 * ((loc.y as usize - 1) * 6 + (loc.x as usize - 1));
            assert_eq!(frame[index..index + 4], palette.live());
        }
    }

    #[test]
    fn clear_color_is_normalized() {
        let color = clear_color([0xff, 0x00, 0xff, 0xff]);
        assert_eq!((color.r, color.g, color.b, color.a), (1.0, 0.0, 1.0, 1.0));
    }
}
