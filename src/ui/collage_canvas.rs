// SPDX-License-Identifier: MPL-2.0
//! Canvas widget that renders the collage.
//!
//! Applies the computed placements at the current display scale. The scale
//! is a single frame transform, so the drawing code below works purely in
//! logical canvas coordinates, the same coordinates the export rasterizer
//! uses.

use crate::collage::{Entry, EntryId, LoadState, Placement};
use crate::media::ImageData;
use iced::widget::canvas::{self, Canvas};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Size, Theme};
use std::collections::HashMap;

const PENDING_FILL: Color = Color::from_rgba(0.5, 0.5, 0.5, 0.25);
const PENDING_BORDER: Color = Color::from_rgba(0.5, 0.5, 0.5, 0.6);
const FAILED_FILL: Color = Color::from_rgba(0.78, 0.16, 0.16, 0.2);
const FAILED_BORDER: Color = Color::from_rgba(0.78, 0.16, 0.16, 0.6);

/// Everything the canvas program needs to paint one frame.
pub struct CollageScene<'a> {
    pub entries: &'a [Entry],
    pub placements: &'a [Placement],
    pub images: &'a HashMap<EntryId, ImageData>,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub background: Color,
    pub scale: f32,
}

/// Builds the canvas element at the scaled display size.
pub fn view<'a, Message: 'a>(scene: CollageScene<'a>) -> Element<'a, Message> {
    let display_width = (scene.canvas_width * scene.scale).max(1.0);
    let display_height = (scene.canvas_height * scene.scale).max(1.0);

    Canvas::new(scene)
        .width(Length::Fixed(display_width))
        .height(Length::Fixed(display_height))
        .into()
}

impl<Message> canvas::Program<Message> for CollageScene<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.scale(self.scale.max(f32::EPSILON));

        frame.fill_rectangle(
            Point::ORIGIN,
            Size::new(self.canvas_width, self.canvas_height),
            self.background,
        );

        for (entry, placement) in self.entries.iter().zip(self.placements) {
            let slot = Rectangle::new(
                Point::new(placement.left, placement.top),
                Size::new(placement.width, placement.height),
            );
            if slot.width <= 0.0 || slot.height <= 0.0 {
                continue;
            }

            if let Some(data) = self.images.get(&entry.id()) {
                frame.draw_image(slot, canvas::Image::new(data.handle.clone()));
            } else {
                let (fill, border) = match entry.load_state() {
                    LoadState::Failed => (FAILED_FILL, FAILED_BORDER),
                    _ => (PENDING_FILL, PENDING_BORDER),
                };
                let path = canvas::Path::rectangle(slot.position(), slot.size());
                frame.fill(&path, fill);
                frame.stroke(
                    &path,
                    canvas::Stroke::default().with_color(border).with_width(2.0),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_colors_are_distinct() {
        assert_ne!(PENDING_FILL, FAILED_FILL);
        assert_ne!(PENDING_BORDER, FAILED_BORDER);
    }
}
