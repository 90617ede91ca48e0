// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window events (file drops, resizes) into messages and
//! drives the periodic tick that auto-dismisses notifications.

use super::{App, Message};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Assembles all subscriptions for the current state.
pub fn subscription(app: &App) -> Subscription<Message> {
    let events = event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    });

    // The tick only runs while there is something to auto-dismiss.
    let tick = if app.notifications.has_notifications() {
        time::every(Duration::from_millis(500)).map(Message::Tick)
    } else {
        Subscription::none()
    };

    Subscription::batch([events, tick])
}
