// SPDX-License-Identifier: MPL-2.0
//! The grid layout engine.
//!
//! A pure function from (entries, canvas size) to one placement per entry.
//! The collage always uses a square-celled grid whose edge length is
//! `ceil(sqrt(n))`; each image is aspect-fitted inside its cell and
//! re-centered along the shrunk axis. Every call recomputes all placements
//! from scratch; there is no incremental update path.

use super::entry::Entry;

/// Computed position and size for one entry, in absolute canvas-relative
/// coordinates (unscaled logical pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

/// Edge length of the square cell grid for the given entry count.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn grid_size(count: usize) -> u32 {
    (count as f64).sqrt().ceil() as u32
}

/// Computes placements for all entries on a canvas of the given logical size.
///
/// Deterministic: identical inputs always yield identical placements. There
/// is no failure path; zero entries produce an empty list and a zero-sized
/// canvas degrades to all-zero placements.
#[must_use]
#[allow(clippy::cast_precision_loss)] // cell indices and counts fit f32 exactly
pub fn layout(entries: &[Entry], canvas_width: f32, canvas_height: f32) -> Vec<Placement> {
    let count = entries.len();
    if count == 0 {
        return Vec::new();
    }

    let grid = grid_size(count);
    let grid_f = grid as f32;

    let cell_width = (canvas_width / grid_f).round();
    let cell_height = (canvas_height / grid_f).round();

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let col = (idx as u32 % grid) as f32;
            let row = (idx as u32 / grid) as f32;

            let mut top = (row * canvas_height / grid_f).round();
            let mut left = (col * canvas_width / grid_f).round();
            let mut width = cell_width;
            let mut height = cell_height;

            let ratio = entry.aspect_ratio();
            if ratio < 1.0 {
                // Portrait: shrink width, re-center horizontally.
                let new_width = (cell_height * ratio).round();
                left += (cell_width - new_width) / 2.0;
                width = new_width;
            } else if ratio > 1.0 {
                // Landscape: shrink height, re-center vertically.
                let new_height = (cell_width / ratio).round();
                top += (cell_height - new_height) / 2.0;
                height = new_height;
            }

            Placement {
                top,
                left,
                width,
                height,
            }
        })
        .collect()
}
