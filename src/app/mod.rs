// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the collage domain (entry store, canvas
//! configuration, layout), the view state (display scale, notifications,
//! export progress), and the side effects (decode tasks, rasterization,
//! config persistence). Policy decisions like what triggers a re-layout and
//! the single-flight export rule live next to the update loop so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::collage::{CanvasConfig, EntryId, EntryStore, Placement};
use crate::config;
use crate::media::ImageData;
use crate::ui::notifications;
use crate::ui::progress::ProgressReport;
use crate::ui::zoom::ScaleState;
use iced::{Element, Size, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
pub struct App {
    /// Ordered, append-only collage entries.
    store: EntryStore,
    /// Logical canvas configuration (export resolution, background).
    canvas: CanvasConfig,
    /// Current placements, recomputed in full after every store or canvas
    /// mutation.
    placements: Vec<Placement>,
    /// Decoded pixels per entry; pending and failed entries have no slot.
    images: HashMap<EntryId, ImageData>,
    /// Display scale state (fit computation, manual override).
    zoom: ScaleState,
    /// Last known window size; drives the fit scale.
    viewport: Size,
    /// Text mirrors of the canvas controls.
    width_input: String,
    height_input: String,
    background_input: String,
    size_input_error: bool,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Export progress modal state.
    progress: ProgressReport,
    /// Single-flight export guard.
    export_in_flight: bool,
    /// Canvas size frozen at export invocation; names the exported file.
    export_size: Option<(u32, u32)>,
    /// Config directory override from the CLI.
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("entries", &self.store.len())
            .field("canvas", &self.canvas)
            .field("export_in_flight", &self.export_in_flight)
            .finish()
    }
}

impl App {
    /// Builds the initial state from persisted settings and CLI flags.
    #[allow(clippy::cast_precision_loss)] // canvas dimensions fit f32 exactly
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags { config_dir, files } = flags;
        let loaded = config::load(config_dir.as_deref()).unwrap_or_default();

        let canvas = CanvasConfig {
            width: loaded.canvas_width.unwrap_or(config::DEFAULT_CANVAS_WIDTH),
            height: loaded.canvas_height.unwrap_or(config::DEFAULT_CANVAS_HEIGHT),
            background: loaded
                .background
                .unwrap_or_else(|| config::DEFAULT_BACKGROUND.to_string()),
        };

        let mut app = Self {
            store: EntryStore::new(),
            placements: Vec::new(),
            images: HashMap::new(),
            zoom: ScaleState::default(),
            viewport: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            width_input: canvas.width.to_string(),
            height_input: canvas.height.to_string(),
            background_input: canvas.background.clone(),
            size_input_error: false,
            notifications: notifications::Manager::new(),
            progress: ProgressReport::new(),
            export_in_flight: false,
            export_size: None,
            config_dir,
            canvas,
        };

        // The scale starts at the fit for the default window; the first
        // Resized event corrects it for the real viewport.
        app.zoom.refresh_fit(
            app.canvas.width as f32,
            app.canvas.height as f32,
            app.viewport.width,
            app.viewport.height,
        );

        let startup = if files.is_empty() {
            Task::none()
        } else {
            Task::done(Message::FilesPicked(files))
        };

        (app, startup)
    }

    /// Window title.
    pub fn title(&self) -> String {
        format!("Iced Collage ({}×{})", self.canvas.width, self.canvas.height)
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Builds the current view; see `view.rs`.
    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Event subscriptions; see `subscription.rs`.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
