// SPDX-License-Identifier: MPL-2.0
//! Collage domain model: entries, the entry store, the canvas configuration,
//! and the grid layout engine.

pub mod canvas;
pub mod entry;
pub mod layout;
pub mod store;

pub use canvas::CanvasConfig;
pub use entry::{Entry, EntryId, LoadState};
pub use layout::{grid_size, layout, Placement};
pub use store::EntryStore;
