use iced::widget::{center, container, image, mouse_area, opaque, text};
use iced::{Color, Element, Length};

use crate::api::ImageRecord;
use crate::Message;

/// Backdrop color behind the enlarged photo.
const BACKDROP: Color = Color {
    r: 0.12,
    g: 0.16,
    b: 0.23,
    a: 0.85,
};

/// Full-size preview overlay for the selected photo.
///
/// Purely presentational: it renders whichever handle is already in memory
/// (the hover-prefetched full image when available, otherwise the grid
/// thumbnail) and never triggers a fetch. A click anywhere closes it.
pub fn lightbox<'a>(
    record: &'a ImageRecord,
    handle: Option<&image::Handle>,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => text(format!("{} — loading preview…", record.author))
            .size(18)
            .color(Color::WHITE)
            .into(),
    };

    let backdrop = center(container(body).padding(24))
        .style(|_theme| container::Style {
            background: Some(BACKDROP.into()),
            ..container::Style::default()
        });

    opaque(mouse_area(backdrop).on_press(Message::LightboxClosed))
}
