// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Canvas**: Logical canvas dimensions and background
//! - **Display scale**: Fit-to-viewport margin and quantization

// ==========================================================================
// Canvas Defaults
// ==========================================================================

/// Default logical canvas width in pixels (the export resolution).
pub const DEFAULT_CANVAS_WIDTH: u32 = 1024;

/// Default logical canvas height in pixels (the export resolution).
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1024;

/// Default canvas background color as a hex string.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

// ==========================================================================
// Display Scale Defaults
// ==========================================================================

/// Fraction of the viewport the canvas must fit within when fitting.
/// f64 so the quantization below behaves identically at exact boundaries.
pub const FIT_VIEWPORT_FRACTION: f64 = 0.9;

/// The fit scale is floored to whole steps of 1/FIT_SCALE_STEPS.
/// Multiplying by the step count is exact in floating point; dividing by a
/// 0.1 quantum is not.
pub const FIT_SCALE_STEPS: f64 = 10.0;

/// Lower bound for the fit scale; keeps the display scale positive even
/// when the canvas dwarfs the viewport.
pub const MIN_FIT_SCALE: f64 = 0.1;

/// Display scale used before any viewport is known (1.0 = logical size).
pub const DEFAULT_DISPLAY_SCALE: f32 = 1.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Canvas validation
    assert!(DEFAULT_CANVAS_WIDTH > 0);
    assert!(DEFAULT_CANVAS_HEIGHT > 0);

    // Scale validation
    assert!(FIT_VIEWPORT_FRACTION > 0.0);
    assert!(FIT_VIEWPORT_FRACTION <= 1.0);
    assert!(FIT_SCALE_STEPS >= 1.0);
    assert!(MIN_FIT_SCALE > 0.0);
    assert!(MIN_FIT_SCALE <= 1.0);
    assert!(DEFAULT_DISPLAY_SCALE > 0.0);
};
