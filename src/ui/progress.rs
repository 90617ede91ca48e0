// SPDX-License-Identifier: MPL-2.0
//! Export progress reporting.
//!
//! A small state machine with `start`, `add_message`, and `close`,
//! independent of any specific rendering technology. The export coordinator
//! starts it before the capture step and closes it exactly once per export,
//! on success and on failure alike. Rendering is a separate concern handled
//! by [`overlay`].

use iced::widget::{container, Column, Text};
use iced::{Border, Color, Element, Length};

/// Multi-step progress report shown during export.
///
/// Distinct from the live display scale: the progress modal exists because
/// export renders at full logical resolution no matter what the view shows.
#[derive(Debug, Clone, Default)]
pub struct ProgressReport {
    title: String,
    messages: Vec<String>,
    active: bool,
}

impl ProgressReport {
    /// Creates an inactive report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the report with a fresh title, discarding earlier messages.
    pub fn start(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.messages.clear();
        self.active = true;
    }

    /// Appends a step message. Ignored while the report is closed.
    pub fn add_message(&mut self, message: impl Into<String>) {
        if self.active {
            self.messages.push(message.into());
        }
    }

    /// Closes the report. Safe to call more than once.
    pub fn close(&mut self) {
        self.active = false;
    }

    /// Returns whether the report is currently shown.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the report title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the step messages in order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// Renders the active report as a modal overlay layer, or nothing.
pub fn overlay<'a, Message: 'a>(report: &'a ProgressReport) -> Option<Element<'a, Message>> {
    if !report.is_active() {
        return None;
    }

    let mut content = Column::new()
        .spacing(8)
        .push(Text::new(report.title()).size(20));

    for message in report.messages() {
        content = content.push(Text::new(message.as_str()).size(14));
    }

    let card = container(content)
        .padding(24)
        .max_width(420.0)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgb(0.13, 0.13, 0.15).into()),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: 8.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    Some(
        container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.55).into()),
                ..container::Style::default()
            })
            .into(),
    )
}
