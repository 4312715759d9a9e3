use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use playground_scene::cli::Cli;
use playground_scene::core::Clock;
use playground_scene::renderer::Renderer;
use playground_scene::{PlaygroundScene, Stage, StageLoop};

const FPS_UPDATE_INTERVAL: f32 = 1.0;

// === Application ===

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    player: StageLoop<PlaygroundScene>,
    clock: Clock,
    frame_count: u32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli) -> Self {
        let aspect = cli.width as f32 / cli.height as f32;

        Self {
            cli,
            window: None,
            renderer: None,
            player: StageLoop::new(PlaygroundScene, Stage::new(aspect)),
            clock: Clock::new(),
            frame_count: 0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            let fps = self.frame_count as f32 / self.fps_update_timer;
            log::info!("FPS: {:.1}", fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Playground")
                    .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(Renderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.player.stage_mut().input.process_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
                if size.height > 0 {
                    self.player.stage_mut().camera.aspect =
                        size.width as f32 / size.height as f32;
                }
            }
            WindowEvent::RedrawRequested => {
                let frame = self.clock.tick();
                self.update_fps(frame.delta);

                self.player.advance(frame.time);

                if let Some(renderer) = &mut self.renderer {
                    match renderer.render(self.player.stage()) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            let size = renderer.size();
                            renderer.resize(size);
                        }
                        Err(e) => log::error!("render error: {}", e),
                    }
                }

                self.player.stage_mut().input.reset_deltas();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    log::info!("Playground - drag to orbit, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
