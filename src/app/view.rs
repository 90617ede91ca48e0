// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the toolbar, the collage canvas (or the empty state), and the
//! overlay layers: export progress modal and toast notifications.

use super::{App, Message};
use crate::ui::collage_canvas::{self, CollageScene};
use crate::ui::{controls, empty_state, notifications, progress};
use iced::widget::{container, scrollable, Column, Stack};
use iced::{Element, Length};

/// Renders the current application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let toolbar = controls::view(controls::ViewContext {
        width_input: &app.width_input,
        height_input: &app.height_input,
        background_input: &app.background_input,
        size_input_error: app.size_input_error,
        zoom: &app.zoom,
        entry_count: app.store.len(),
        export_in_flight: app.export_in_flight,
    })
    .map(Message::Controls);

    let content: Element<'_, Message> = if app.store.is_empty() {
        empty_state::view(Message::Controls(controls::Message::AddImagesRequested))
    } else {
        view_collage(app)
    };

    let base = Column::new()
        .push(toolbar)
        .push(content)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().push(base);

    if let Some(modal) = progress::overlay(&app.progress) {
        layers = layers.push(modal);
    }

    if app.notifications.visible_count() > 0 {
        layers = layers.push(notifications::toasts(
            &app.notifications,
            Message::DismissNotification,
        ));
    }

    layers.into()
}

#[allow(clippy::cast_precision_loss)] // canvas dimensions fit f32 exactly
fn view_collage(app: &App) -> Element<'_, Message> {
    let scene = CollageScene {
        entries: app.store.all(),
        placements: &app.placements,
        images: &app.images,
        canvas_width: app.canvas.width as f32,
        canvas_height: app.canvas.height as f32,
        background: app.canvas.background_color(),
        scale: app.zoom.scale(),
    };

    let canvas = container(collage_canvas::view(scene)).padding(24);

    scrollable(
        container(canvas)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .direction(scrollable::Direction::Both {
        vertical: scrollable::Scrollbar::new(),
        horizontal: scrollable::Scrollbar::new(),
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
