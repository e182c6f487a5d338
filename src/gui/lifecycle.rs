use std::time::Instant;

use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::WindowId;

use crate::config::save_config;

use super::state::App;

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Only create the window once.
        if self.window.is_some() {
            return;
        }

        let context = match Context::new(event_loop.owned_display_handle()) {
            Ok(ctx) => ctx,
            Err(err) => {
                eprintln!("Failed to create rendering context: {err}");
                event_loop.exit();
                return;
            }
        };
        self.context = Some(context);

        if !self.create_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(win) = self.window.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                // Remember the window size for the next launch.
                let scale = win.window.scale_factor();
                let size = win.window.inner_size().to_logical::<f64>(scale);
                self.config.window.width = (size.width.round() as u32).max(1);
                self.config.window.height = (size.height.round() as u32).max(1);
                save_config(&self.config);
                event_loop.exit();
            }
            WindowEvent::Focused(_) => {
                win.modifiers = ModifiersState::empty();
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                win.modifiers = modifiers.state();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                win.on_keyboard_input(&event);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                win.on_mouse_wheel(delta);
            }
            WindowEvent::CursorMoved { position, .. } => {
                win.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                win.on_mouse_input(state, button);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                win.renderer.set_scale(scale_factor);
                win.window.request_redraw();
            }
            WindowEvent::Resized(_) => {
                win.window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                win.on_redraw_requested();
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(win) = self.window.as_mut() else {
            return;
        };
        let now = Instant::now();

        win.autosave_tick(now);
        if win.notifications.tick(now) {
            win.window.request_redraw();
        }

        let mut deadline = win.next_autosave;
        if let Some(toast_deadline) = win.notifications.schedule(now) {
            deadline = deadline.min(toast_deadline);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
    }
}
