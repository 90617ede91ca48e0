// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when the collage has no entries.
//!
//! Provides a welcoming UI with a message explaining the empty state, a
//! button to pick files via the system dialog, and a hint that files can be
//! dropped on the window.

use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Color, Element, Length};

const TITLE_COLOR: Color = Color::from_rgb(0.6, 0.6, 0.62);
const HINT_COLOR: Color = Color::from_rgba(0.6, 0.6, 0.62, 0.6);

/// Renders the empty state view.
///
/// `on_open` is emitted when the user presses the pick-files button.
pub fn view<'a, Message: Clone + 'a>(on_open: Message) -> Element<'a, Message> {
    let title = Text::new("Drop images to start a collage")
        .size(26)
        .color(TITLE_COLOR);

    let subtitle = Text::new("Every image lands in a square grid sized to the canvas")
        .size(15)
        .color(TITLE_COLOR);

    let open_button = button(Text::new("Add images…"))
        .padding([10, 18])
        .on_press(on_open);

    let drop_hint = Text::new("…or drag files anywhere in this window")
        .size(13)
        .color(HINT_COLOR);

    let content = Column::new()
        .spacing(18)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button)
        .push(drop_hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
