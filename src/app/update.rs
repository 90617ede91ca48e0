// SPDX-License-Identifier: MPL-2.0
//! Update loop: message handling and side effects.
//!
//! Every mutation of the entry store or the canvas triggers a full layout
//! recomputation here: the layout engine has no incremental path, and the
//! per-file decode completions may arrive in any order (last completed
//! decode wins the visible state). Display-scale changes never pass
//! through `relayout`.

use super::{App, Message};
use crate::collage::{layout, EntryId};
use crate::config;
use crate::error::Error;
use crate::media::export::{
    export_file_name, CollageRasterizer, DownloadsSink, ExportScene, ExportSink, Rasterizer,
};
use crate::media::{self, ingest};
use crate::ui::controls;
use crate::ui::notifications::Notification;
use iced::Task;
use std::path::PathBuf;

impl App {
    /// Handles application messages and updates state.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Controls(message) => self.handle_controls(message),
            Message::FileDropped(path) => self.ingest_files(vec![path]),
            Message::FilesPicked(paths) => self.ingest_files(paths),
            Message::EntryDecoded { id, result } => self.handle_entry_decoded(id, result),
            Message::ExportCaptured(result) => self.handle_export_captured(result),
            Message::ExportDelivered(result) => self.handle_export_delivered(result),
            Message::DismissNotification(id) => {
                self.notifications.dismiss(id);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.viewport = size;
                let (canvas_width, canvas_height) = self.canvas_size_f32();
                self.zoom.refresh_fit(
                    canvas_width,
                    canvas_height,
                    self.viewport.width,
                    self.viewport.height,
                );
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn handle_controls(&mut self, message: controls::Message) -> Task<Message> {
        match message {
            controls::Message::WidthChanged(input) => {
                self.width_input = input;
                self.size_input_error = false;
                Task::none()
            }
            controls::Message::HeightChanged(input) => {
                self.height_input = input;
                self.size_input_error = false;
                Task::none()
            }
            controls::Message::SizeSubmitted => {
                self.handle_canvas_size_submitted();
                Task::none()
            }
            controls::Message::BackgroundChanged(input) => {
                self.background_input = input;
                Task::none()
            }
            controls::Message::BackgroundSubmitted => {
                self.canvas.background = self.background_input.trim().to_string();
                self.persist_config();
                Task::none()
            }
            controls::Message::ScaleChanged(input) => {
                self.zoom.on_input_changed(input);
                Task::none()
            }
            controls::Message::ScaleSubmitted => {
                // Presentation only: no relayout, no canvas mutation.
                self.zoom.on_input_submitted();
                Task::none()
            }
            controls::Message::FitRequested => {
                let (canvas_width, canvas_height) = self.canvas_size_f32();
                self.zoom.snap_to_fit(
                    canvas_width,
                    canvas_height,
                    self.viewport.width,
                    self.viewport.height,
                );
                Task::none()
            }
            controls::Message::AddImagesRequested => pick_files_task(),
            controls::Message::ExportRequested => self.handle_export_requested(),
        }
    }

    /// Applies a submitted canvas size: both fields must parse as positive
    /// integers. The scale always snaps back to fit when the canvas shape
    /// changes.
    fn handle_canvas_size_submitted(&mut self) {
        let width = self.width_input.trim().parse::<u32>();
        let height = self.height_input.trim().parse::<u32>();

        match (width, height) {
            (Ok(width), Ok(height)) if width > 0 && height > 0 => {
                self.canvas.width = width;
                self.canvas.height = height;
                self.size_input_error = false;
                self.relayout();
                let (canvas_width, canvas_height) = self.canvas_size_f32();
                self.zoom.snap_to_fit(
                    canvas_width,
                    canvas_height,
                    self.viewport.width,
                    self.viewport.height,
                );
                self.persist_config();
            }
            _ => {
                self.size_input_error = true;
            }
        }
    }

    /// Screens a batch of dropped or picked files.
    ///
    /// Accepted files become `Pending` entries and spawn independent decode
    /// tasks; rejected files produce a warning naming the file and never
    /// reach the layout engine.
    fn ingest_files(&mut self, paths: Vec<PathBuf>) -> Task<Message> {
        let mut tasks = Vec::new();
        let mut accepted_any = false;

        for outcome in ingest::screen_dropped_files(paths) {
            match outcome {
                ingest::DropOutcome::Accepted { entry, path } => {
                    let id = self.store.append(entry);
                    accepted_any = true;
                    tasks.push(decode_task(id, path));
                }
                ingest::DropOutcome::Rejected { file_name } => {
                    self.notifications.push(Notification::warning(format!(
                        "Dropped non-image file: {file_name}"
                    )));
                }
            }
        }

        if accepted_any {
            self.relayout();
        }

        Task::batch(tasks)
    }

    fn handle_entry_decoded(
        &mut self,
        id: EntryId,
        result: Result<media::ImageData, Error>,
    ) -> Task<Message> {
        match result {
            Ok(data) => {
                self.store.mark_loaded(id, data.width, data.height);
                self.images.insert(id, data);
            }
            Err(error) => {
                self.store.mark_failed(id);
                let name = self
                    .store
                    .get(id)
                    .map_or_else(|| "image".to_string(), |e| e.source_name().to_string());
                self.notifications
                    .push(Notification::error(format!("Could not load {name}: {error}")));
            }
        }

        // Full recomputation over the entire current entry list; whichever
        // decode completes last wins the visible state.
        self.relayout();
        Task::none()
    }

    /// Starts the three-step export: announce, capture, deliver.
    ///
    /// The scene is snapshotted at the canvas's logical size before the
    /// capture task runs, so neither the display scale nor later edits can
    /// leak into the output.
    fn handle_export_requested(&mut self) -> Task<Message> {
        if self.export_in_flight {
            self.notifications
                .push(Notification::info("An export is already running"));
            return Task::none();
        }

        self.export_in_flight = true;
        self.export_size = Some((self.canvas.width, self.canvas.height));

        self.progress.start("Exporting collage");
        self.progress.add_message(format!(
            "Rendering {}×{} canvas",
            self.canvas.width, self.canvas.height
        ));

        let scene = ExportScene::snapshot(&self.store, &self.canvas, &self.images);
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || CollageRasterizer.rasterize(&scene))
                    .await
                    .unwrap_or_else(|join| Err(Error::Export(join.to_string())))
            },
            Message::ExportCaptured,
        )
    }

    fn handle_export_captured(&mut self, result: Result<Vec<u8>, Error>) -> Task<Message> {
        let bytes = match result {
            Ok(bytes) => bytes,
            Err(error) => return self.finish_export_with_error(&error),
        };

        let (width, height) = self
            .export_size
            .unwrap_or((self.canvas.width, self.canvas.height));
        let file_name = export_file_name(width, height);
        self.progress.add_message(format!("Saving {file_name}"));

        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || DownloadsSink::default().deliver(&bytes, &file_name))
                    .await
                    .unwrap_or_else(|join| Err(Error::Export(join.to_string())))
            },
            Message::ExportDelivered,
        )
    }

    fn handle_export_delivered(&mut self, result: Result<PathBuf, Error>) -> Task<Message> {
        match result {
            Ok(path) => {
                self.progress.close();
                self.export_in_flight = false;
                self.export_size = None;
                self.notifications
                    .push(Notification::success(format!("Exported {}", path.display())));
                Task::none()
            }
            Err(error) => self.finish_export_with_error(&error),
        }
    }

    /// Terminal-but-recoverable export failure: the progress modal is
    /// always closed and the session stays alive.
    fn finish_export_with_error(&mut self, error: &Error) -> Task<Message> {
        self.progress.close();
        self.export_in_flight = false;
        self.export_size = None;
        self.notifications
            .push(Notification::error(format!("Export failed: {error}")));
        Task::none()
    }

    /// Recomputes all placements from the current entries and canvas size.
    fn relayout(&mut self) {
        let (canvas_width, canvas_height) = self.canvas_size_f32();
        self.placements = layout(self.store.all(), canvas_width, canvas_height);
    }

    #[allow(clippy::cast_precision_loss)] // canvas dimensions fit f32 exactly
    fn canvas_size_f32(&self) -> (f32, f32) {
        (self.canvas.width as f32, self.canvas.height as f32)
    }

    fn persist_config(&mut self) {
        let config = config::Config {
            canvas_width: Some(self.canvas.width),
            canvas_height: Some(self.canvas.height),
            background: Some(self.canvas.background.clone()),
        };
        if let Err(error) = config::save(&config, self.config_dir.as_deref()) {
            self.notifications
                .push(Notification::warning(format!("Could not save settings: {error}")));
        }
    }
}

/// Spawns the independent decode task for one accepted file.
fn decode_task(id: EntryId, path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || media::decode_image(&path))
                .await
                .unwrap_or_else(|join| Err(Error::Image(join.to_string())))
        },
        move |result| Message::EntryDecoded { id, result },
    )
}

/// Opens the native pick-files dialog filtered to image types.
fn pick_files_task() -> Task<Message> {
    Task::perform(
        async move {
            let picked = rfd::AsyncFileDialog::new()
                .set_title("Add Images")
                .add_filter("Images", &ingest::dialog_extensions())
                .pick_files()
                .await;

            picked
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
                .unwrap_or_default()
        },
        Message::FilesPicked,
    )
}
