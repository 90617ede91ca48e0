// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::collage::EntryId;
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::controls;
use crate::ui::notifications::NotificationId;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// toolbar messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Result from the pick-files dialog (empty when cancelled).
    FilesPicked(Vec<PathBuf>),
    /// A per-file decode task finished.
    EntryDecoded {
        id: EntryId,
        result: Result<ImageData, Error>,
    },
    /// The rasterizer produced encoded PNG bytes (capture step).
    ExportCaptured(Result<Vec<u8>, Error>),
    /// The export sink finished writing the file (deliver step).
    ExportDelivered(Result<PathBuf, Error>),
    /// A toast's dismiss button was pressed.
    DismissNotification(NotificationId),
    /// The window was resized; the viewport drives the fit scale.
    WindowResized(iced::Size),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<PathBuf>,
    /// Image paths to ingest on startup.
    pub files: Vec<PathBuf>,
}
