// ui/list.rs - List Renderer
//
// Scrollable item rows: thumbnail, bold id, caption, separator. Tapping a
// row emits the caller's message and the selected row stays highlighted.

use iced::widget::image::Handle;
use iced::widget::{button, column, horizontal_rule, image, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Padding};

use crate::constants::list;
use crate::models::GalleryItem;
use crate::ui::theme::{self, colors};

use super::detail::empty_view;

/// Scrollable list over `items`; `thumbnails` is parallel to it. `on_select`
/// maps a tapped row index to the caller's message.
pub fn list_view<'a, Message: Clone + 'a>(
    items: &'a [GalleryItem],
    thumbnails: &'a [Handle],
    selected: Option<usize>,
    on_select: impl Fn(usize) -> Message + 'a,
) -> Element<'a, Message> {
    if items.is_empty() {
        return empty_view();
    }

    let mut rows = Column::new().padding(Padding::from([8, 8]));
    for (index, (item, thumbnail)) in items.iter().zip(thumbnails).enumerate() {
        rows = rows.push(list_row(
            index,
            item,
            thumbnail,
            selected == Some(index),
            &on_select,
        ));
        rows = rows.push(horizontal_rule(1).style(theme::divider));
    }

    scrollable(rows)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn list_row<'a, Message: Clone + 'a>(
    index: usize,
    item: &'a GalleryItem,
    thumbnail: &Handle,
    selected: bool,
    on_select: &impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    let thumb = image(thumbnail.clone())
        .width(Length::Fixed(list::THUMB_WIDTH))
        .height(Length::Fixed(list::THUMB_HEIGHT));

    let caption = column![
        text(&item.id)
            .size(list::ID_TEXT_SIZE)
            .font(theme::bold())
            .color(colors::TEXT_PRIMARY),
        text(&item.title).color(colors::TEXT_SECONDARY),
    ]
    .spacing(4);

    button(
        row![thumb, caption]
            .spacing(list::ROW_SPACING)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(Padding::from([8, 12]))
    .style(theme::row_style(selected))
    .on_press(on_select(index))
    .into()
}
