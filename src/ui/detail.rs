// ui/detail.rs - Detail Renderer
//
// Large item id above the full image, centered in the pane. Successive
// selections crossfade: the outgoing content is stacked under the incoming
// one and both track the fade progress.

use iced::widget::image::Handle;
use iced::widget::{center, column, container, image, stack, text};
use iced::{Alignment, Element, Length};

use crate::constants::detail;
use crate::models::GalleryItem;
use crate::ui::theme::{self, colors};

/// One side of the crossfade: an item and its full-size image handle.
pub struct DetailContent<'a> {
    pub item: &'a GalleryItem,
    pub handle: &'a Handle,
}

/// Detail pane for the current selection. `fade` carries the outgoing
/// content and the fade progress in `[0, 1]` while a transition runs.
pub fn detail_view<'a, Message: 'a>(
    current: DetailContent<'a>,
    fade: Option<(DetailContent<'a>, f32)>,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match fade {
        Some((outgoing, progress)) => stack![
            detail_body(outgoing, 1.0 - progress),
            detail_body(current, progress),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
        None => detail_body(current, 1.0),
    };

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::pane)
        .into()
}

fn detail_body<'a, Message: 'a>(
    content: DetailContent<'a>,
    opacity: f32,
) -> Element<'a, Message> {
    let inner = column![
        text(&content.item.id)
            .size(detail::ID_TEXT_SIZE)
            .color(theme::faded(colors::TEXT_PRIMARY, opacity)),
        image(content.handle.clone())
            .width(Length::Fill)
            .opacity(opacity),
    ]
    .spacing(detail::CONTENT_SPACING)
    .align_x(Alignment::Center)
    .padding(20);

    center(inner).into()
}

/// Placeholder pane shown when the item list is empty.
pub fn empty_view<'a, Message: 'a>() -> Element<'a, Message> {
    center(text("No items to show").color(colors::TEXT_MUTED)).into()
}
