use iced::mouse::Interaction;
use iced::widget::{button, container, horizontal_space, image, mouse_area, row, stack, text, Space};
use iced::{Alignment, Color, Element, Length};

use crate::api::ImageRecord;
use crate::Message;

/// Assumed on-screen column width, used to size placeholders before the
/// thumbnail arrives so the layout doesn't jump much once it does.
const PLACEHOLDER_WIDTH: f32 = 440.0;

/// Dark translucent scrim behind the hover overlay.
const SCRIM: Color = Color {
    r: 0.06,
    g: 0.09,
    b: 0.16,
    a: 0.55,
};

/// One photo in the grid.
///
/// Shows a gray aspect-ratio placeholder until the thumbnail is decoded.
/// While hovered, an overlay with the author and a save button is stacked on
/// top; the save button stays disabled until the hover-prefetched download
/// finished. Clicking anywhere on the card opens the lightbox.
pub fn image_card<'a>(
    index: usize,
    record: &'a ImageRecord,
    thumbnail: Option<&image::Handle>,
    hovered: bool,
    download_ready: bool,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone()).width(Length::Fill).into(),
        None => {
            let height = (PLACEHOLDER_WIDTH / record.aspect_ratio()).clamp(160.0, 720.0);
            container(Space::new(Length::Fill, Length::Fixed(height)))
                .width(Length::Fill)
                .style(|_theme| container::Style {
                    background: Some(Color::from_rgb(0.22, 0.23, 0.26).into()),
                    ..container::Style::default()
                })
                .into()
        }
    };

    let content: Element<'a, Message> = if hovered {
        stack![picture, overlay(index, record, download_ready)].into()
    } else {
        picture
    };

    mouse_area(content)
        .on_enter(Message::CardHovered(index))
        .on_exit(Message::CardUnhovered(index))
        .on_press(Message::CardPressed(index))
        .interaction(Interaction::Pointer)
        .into()
}

/// Hover overlay: author name and the save-to-disk button.
fn overlay<'a>(
    index: usize,
    record: &'a ImageRecord,
    download_ready: bool,
) -> Element<'a, Message> {
    let caption = row![
        text(&record.author).size(16).color(Color::WHITE),
        horizontal_space(),
        button(text(if download_ready { "Save" } else { "Fetching…" }).size(14))
            .padding(8)
            .on_press_maybe(download_ready.then(|| Message::SaveRequested(index))),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .padding(12);

    container(caption)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(iced::alignment::Vertical::Bottom)
        .style(|_theme| container::Style {
            background: Some(SCRIM.into()),
            ..container::Style::default()
        })
        .into()
}
