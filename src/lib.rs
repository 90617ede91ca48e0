// SPDX-License-Identifier: MPL-2.0
//! `iced_collage` is a drag-and-drop image collage maker built with the
//! Iced GUI framework.
//!
//! Dropped images are arranged automatically into a square grid sized to a
//! configurable logical canvas; the view can be zoomed independently, and
//! the composed canvas exports as a full-resolution PNG.

pub mod app;
pub mod collage;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
