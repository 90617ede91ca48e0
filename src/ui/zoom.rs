// SPDX-License-Identifier: MPL-2.0
//! Display scale state management.
//!
//! This module handles all zoom-related state and logic, including:
//! - The fit-to-viewport calculation
//! - Manual scale entry
//! - Scale input validation
//!
//! The scale is pure presentation: it never alters the canvas's logical
//! size and never triggers a layout recomputation.

use crate::config::{
    DEFAULT_DISPLAY_SCALE, FIT_SCALE_STEPS, FIT_VIEWPORT_FRACTION, MIN_FIT_SCALE,
};

/// Computes the fit-to-viewport scale for a canvas of the given logical size.
///
/// The result is the largest scale ≤ 1.0 at which the whole canvas fits
/// within 90% of the viewport on both axes, floored to the nearest 0.1 and
/// clamped up to [`MIN_FIT_SCALE`] so the scale stays positive for canvases
/// that dwarf the viewport. Degenerate inputs yield the default scale.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // quantized fit is always in (0, 1]
pub fn compute_fit_scale(
    canvas_width: f32,
    canvas_height: f32,
    viewport_width: f32,
    viewport_height: f32,
) -> f32 {
    if canvas_width <= 0.0
        || canvas_height <= 0.0
        || viewport_width <= 0.0
        || viewport_height <= 0.0
    {
        return DEFAULT_DISPLAY_SCALE;
    }

    // f64 keeps exact boundaries (e.g. 720/900 = 0.8) on the right side of
    // the floor below.
    let scale_x = (f64::from(viewport_width) * FIT_VIEWPORT_FRACTION / f64::from(canvas_width))
        .min(1.0);
    let scale_y = (f64::from(viewport_height) * FIT_VIEWPORT_FRACTION / f64::from(canvas_height))
        .min(1.0);
    let fit = scale_x.min(scale_y);

    let quantized = (fit * FIT_SCALE_STEPS).floor() / FIT_SCALE_STEPS;
    quantized.max(MIN_FIT_SCALE) as f32
}

/// Manages the display scale of the collage view.
#[derive(Debug, Clone)]
pub struct ScaleState {
    /// Current display scale (may be auto-calculated while following fit).
    scale: f32,

    /// Last computed fit-to-viewport scale.
    fit_scale: f32,

    /// Whether the active scale tracks the fit scale on viewport changes.
    /// Manual scale entry turns this off; an explicit canvas-size change
    /// snaps back to fit and turns it on again.
    follow_fit: bool,

    /// Current scale input string (for the text field).
    scale_input: String,

    /// Whether the last submitted scale input failed to parse.
    input_error: bool,
}

impl Default for ScaleState {
    fn default() -> Self {
        Self {
            scale: DEFAULT_DISPLAY_SCALE,
            fit_scale: DEFAULT_DISPLAY_SCALE,
            follow_fit: true,
            scale_input: format_scale(DEFAULT_DISPLAY_SCALE),
            input_error: false,
        }
    }
}

impl ScaleState {
    /// Returns the active display scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns the last computed fit scale.
    #[must_use]
    pub fn fit_scale(&self) -> f32 {
        self.fit_scale
    }

    /// Returns whether the scale currently tracks the fit scale.
    #[must_use]
    pub fn follows_fit(&self) -> bool {
        self.follow_fit
    }

    /// Gets the scale input value.
    #[must_use]
    pub fn scale_input_value(&self) -> &str {
        &self.scale_input
    }

    /// Returns whether the last scale input submission was invalid.
    #[must_use]
    pub fn has_input_error(&self) -> bool {
        self.input_error
    }

    fn update_scale_display(&mut self, scale: f32) {
        self.scale = scale;
        self.scale_input = format_scale(scale);
    }

    /// Applies a user-entered scale and stops following the fit scale.
    ///
    /// Rejects non-positive or non-finite factors; the canvas's logical
    /// size and the layout are never touched.
    pub fn apply_manual_scale(&mut self, scale: f32) -> bool {
        if !scale.is_finite() || scale <= 0.0 {
            self.input_error = true;
            return false;
        }
        self.update_scale_display(scale);
        self.input_error = false;
        self.follow_fit = false;
        true
    }

    /// Recomputes the fit scale and applies it as the active scale.
    ///
    /// This is the canvas-size-change handler: the view always snaps back
    /// to fit when the canvas shape changes.
    pub fn snap_to_fit(
        &mut self,
        canvas_width: f32,
        canvas_height: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) {
        self.fit_scale =
            compute_fit_scale(canvas_width, canvas_height, viewport_width, viewport_height);
        self.update_scale_display(self.fit_scale);
        self.input_error = false;
        self.follow_fit = true;
    }

    /// Recomputes the fit scale after a viewport change.
    ///
    /// The active scale only moves while fit-following is on; a manually
    /// entered scale survives window resizes.
    pub fn refresh_fit(
        &mut self,
        canvas_width: f32,
        canvas_height: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) {
        self.fit_scale =
            compute_fit_scale(canvas_width, canvas_height, viewport_width, viewport_height);
        if self.follow_fit {
            self.update_scale_display(self.fit_scale);
        }
    }

    /// Handles scale input change.
    pub fn on_input_changed(&mut self, input: String) {
        self.scale_input = input;
        self.input_error = false;
    }

    /// Handles scale input submission.
    pub fn on_input_submitted(&mut self) -> bool {
        match self.scale_input.trim().parse::<f32>() {
            Ok(value) => self.apply_manual_scale(value),
            Err(_) => {
                self.input_error = true;
                false
            }
        }
    }
}

/// Formats a scale factor for display (removes unnecessary decimal places).
#[must_use]
pub fn format_scale(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        // Value has no fractional part, so it represents an integer exactly
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i32;
        format!("{int_value}")
    } else {
        format!("{value:.2}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
