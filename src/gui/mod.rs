mod actions;
mod context_menu;
mod events;
mod fields;
mod lifecycle;
mod notify;
mod panel;
mod preview;
mod renderer;
mod state;

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use softbuffer::{Context, Surface};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::ModifiersState;
use winit::window::Window;

use crate::config::AppConfig;
use crate::doc::PoemDocument;
use crate::storage::{DraftStore, Freshness};

use self::fields::FieldState;
use self::notify::Severity;
use self::renderer::{CpuRenderer, FontStore};
use self::state::{AUTOSAVE_INTERVAL, App, QuillWindow};

impl QuillWindow {
    /// Wraps an already-created winit window with a render surface and a
    /// fresh document.
    fn new(
        window: Arc<Window>,
        context: &Context<winit::event_loop::OwnedDisplayHandle>,
        fonts: FontStore,
        config: AppConfig,
    ) -> Option<Self> {
        let surface = match Surface::new(context, window.clone()) {
            Ok(surface) => surface,
            Err(err) => {
                eprintln!("Failed to create rendering surface: {err}");
                return None;
            }
        };
        let mut renderer = CpuRenderer::new(fonts);
        renderer.set_scale(window.scale_factor());

        Some(QuillWindow {
            window,
            surface,
            renderer,
            config,
            store: DraftStore::open(),
            doc: PoemDocument::default(),
            title_field: FieldState::default(),
            body_field: FieldState::default(),
            author_field: FieldState::default(),
            focus: None,
            open_dropdown: None,
            panel_scroll: 0.0,
            modifiers: ModifiersState::empty(),
            mouse_pos: (0.0, 0.0),
            context_menu: None,
            notifications: Default::default(),
            fullscreen_preview: false,
            exporting: false,
            next_autosave: Instant::now() + AUTOSAVE_INTERVAL,
        })
    }
}

impl App {
    fn new(config: AppConfig) -> Self {
        App {
            window: None,
            context: None,
            config,
        }
    }

    /// Creates the editor window. Returns false when any required piece
    /// (window, surface, fonts) cannot be set up.
    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let Some(context) = self.context.as_ref() else {
            return false;
        };

        let attrs = Window::default_attributes()
            .with_title("Quill")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ))
            .with_min_inner_size(winit::dpi::LogicalSize::new(640.0, 480.0));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                eprintln!("Failed to create window: {err}");
                return false;
            }
        };

        let fonts = match FontStore::load() {
            Ok(fonts) => fonts,
            Err(err) => {
                eprintln!("No usable system fonts found: {err}");
                return false;
            }
        };

        let Some(mut win) = QuillWindow::new(window, context, fonts, self.config.clone()) else {
            return false;
        };

        if let Some(store) = &win.store
            && store.check_autosave(Utc::now()) == Freshness::Fresh
        {
            win.notify(
                "Auto-saved draft detected. Click \"Load Draft\" to restore.",
                Severity::Info,
            );
        }

        win.window.request_redraw();
        self.window = Some(win);
        true
    }
}

pub fn run() {
    let event_loop = match EventLoop::new() {
        Ok(loop_) => loop_,
        Err(err) => {
            eprintln!("Failed to create event loop: {err}");
            return;
        }
    };
    let mut app = App::new(crate::config::load_config());
    if let Err(err) = event_loop.run_app(&mut app) {
        eprintln!("Application error: {err}");
    }
}
