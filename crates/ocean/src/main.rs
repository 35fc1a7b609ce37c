//! Ocean: a depth-driven procedural underwater scene.
//!
//! The mouse wheel scrolls a virtual page; descent through the page drives
//! every visual in the scene, from fog and bloom to which creatures exist.

mod anchor;
mod angler;
mod bubbles;
mod config;
mod depth;
mod jellyfish;
mod plankton;
mod pointer;
mod state;
mod update;
mod zones;

use std::sync::Arc;

use anyhow::Result;
use engine_core::Vec2;
use input::{ViewportEvent, VirtualPage};
use scene::{Environment, Present, RenderCaps};
use state::OceanState;
use winit::{
    application::ApplicationHandler,
    event::{MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};
use zones::zone_at;

/// Wheel line-to-pixel conversion for hosts reporting line deltas.
const LINE_SCROLL_PIXELS: f32 = 40.0;

/// Presenter bound to the winit window. Presentation here is the frame
/// pacing handshake; drawing backends plug in behind [`Present`].
struct WindowPresent {
    window: Arc<Window>,
}

impl Present for WindowPresent {
    fn present(&mut self, _env: &Environment) {
        self.window.pre_present_notify();
    }
}

/// Application handler for winit.
struct App {
    state: Option<(OceanState, VirtualPage, WindowPresent)>,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_none() {
            let config = config::OceanConfig::load();
            let window_attrs = Window::default_attributes()
                .with_title("Ocean")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    config.window_width,
                    config.window_height,
                ));

            let window = match event_loop.create_window(window_attrs) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            let viewport = Vec2::new(size.width as f32, size.height as f32);
            let page = VirtualPage::new(config.page_screens, viewport.y);

            match OceanState::new(config, viewport, &RenderCaps::default()) {
                Ok(mut state) => {
                    // Seed the depth tracker so frame one already knows the
                    // page geometry.
                    state.push_event(page.scroll_event());
                    window.request_redraw();
                    self.state = Some((state, page, WindowPresent { window }));
                }
                Err(e) => {
                    log::error!("Failed to initialize scene: {:#}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some((state, page, presenter)) = &mut self.state else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                page.set_viewport_height(size.height as f32);
                state.push_event(ViewportEvent::Resized {
                    width: size.width as f32,
                    height: size.height as f32,
                });
                state.push_event(page.scroll_event());
            }
            WindowEvent::CursorMoved { position, .. } => {
                state.push_event(ViewportEvent::PointerMoved {
                    position: Vec2::new(position.x as f32, position.y as f32),
                });
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // Wheel down scrolls the page down, i.e. descends.
                let pixels = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * LINE_SCROLL_PIXELS,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                state.push_event(page.apply_wheel(pixels));
            }
            WindowEvent::RedrawRequested => {
                state.frame(presenter);
                if state.time.frame_count() % 30 == 0 {
                    let depth = state.depth.depth();
                    presenter.window.set_title(&format!(
                        "Ocean - {} ({:.0}%)",
                        zone_at(depth).name,
                        depth * 100.0
                    ));
                }
                presenter.window.request_redraw();
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔══════════════════════════════════════════════════╗");
    println!("║                      Ocean                       ║");
    println!("╠══════════════════════════════════════════════════╣");
    println!("║  CONTROLS:                                       ║");
    println!("║    Scroll wheel - Descend / ascend               ║");
    println!("║    Mouse        - Disturb plankton, touch        ║");
    println!("║                   jellyfish                      ║");
    println!("╚══════════════════════════════════════════════════╝");

    log::info!("Starting the descent");

    let event_loop = EventLoop::new()?;
    // Poll keeps redraws flowing between input events; the scene animates
    // every frame regardless of input.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}
