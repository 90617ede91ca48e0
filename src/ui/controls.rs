// SPDX-License-Identifier: MPL-2.0
//! Toolbar with the canvas, scale, and export controls.

use crate::ui::zoom::ScaleState;
use iced::widget::{button, container, text, text_input, Row, Text};
use iced::{alignment, Color, Element, Length};

const INPUT_WIDTH: f32 = 70.0;
const BACKGROUND_INPUT_WIDTH: f32 = 90.0;
const ERROR_COLOR: Color = Color::from_rgb(0.78, 0.16, 0.16);

/// Messages emitted by the toolbar controls.
#[derive(Debug, Clone)]
pub enum Message {
    WidthChanged(String),
    HeightChanged(String),
    SizeSubmitted,
    BackgroundChanged(String),
    BackgroundSubmitted,
    ScaleChanged(String),
    ScaleSubmitted,
    FitRequested,
    AddImagesRequested,
    ExportRequested,
}

/// Context required to render the toolbar.
pub struct ViewContext<'a> {
    pub width_input: &'a str,
    pub height_input: &'a str,
    pub background_input: &'a str,
    pub size_input_error: bool,
    pub zoom: &'a ScaleState,
    pub entry_count: usize,
    pub export_in_flight: bool,
}

/// Renders the toolbar row.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut bar = Row::new()
        .spacing(12)
        .padding(12)
        .align_y(alignment::Vertical::Center)
        .push(button(Text::new("Add images…")).on_press(Message::AddImagesRequested))
        .push(text("Canvas").size(14))
        .push(
            text_input("width", ctx.width_input)
                .on_input(Message::WidthChanged)
                .on_submit(Message::SizeSubmitted)
                .width(Length::Fixed(INPUT_WIDTH)),
        )
        .push(text("×").size(14))
        .push(
            text_input("height", ctx.height_input)
                .on_input(Message::HeightChanged)
                .on_submit(Message::SizeSubmitted)
                .width(Length::Fixed(INPUT_WIDTH)),
        );

    if ctx.size_input_error {
        bar = bar.push(text("invalid size").size(12).color(ERROR_COLOR));
    }

    bar = bar
        .push(text("Background").size(14))
        .push(
            text_input("#rrggbb", ctx.background_input)
                .on_input(Message::BackgroundChanged)
                .on_submit(Message::BackgroundSubmitted)
                .width(Length::Fixed(BACKGROUND_INPUT_WIDTH)),
        )
        .push(text("Scale").size(14))
        .push(
            text_input("1.0", ctx.zoom.scale_input_value())
                .on_input(Message::ScaleChanged)
                .on_submit(Message::ScaleSubmitted)
                .width(Length::Fixed(INPUT_WIDTH)),
        )
        .push(button(Text::new("Fit")).on_press(Message::FitRequested));

    if ctx.zoom.has_input_error() {
        bar = bar.push(text("invalid scale").size(12).color(ERROR_COLOR));
    }

    let export_label = if ctx.export_in_flight {
        "Exporting…"
    } else {
        "Export PNG"
    };
    bar = bar
        .push(
            button(Text::new(export_label))
                .on_press_maybe((!ctx.export_in_flight).then_some(Message::ExportRequested)),
        )
        .push(
            text(match ctx.entry_count {
                1 => "1 image".to_string(),
                n => format!("{n} images"),
            })
            .size(14),
        );

    container(bar).width(Length::Fill).into()
}
