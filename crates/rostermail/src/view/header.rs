//! Inbox top bar: folder title, search box, refresh.

use iced::widget::{button, container, row, text, text_input};
use iced::{Element, Length};

use rostermail_api::Folder;

use crate::message::Message;
use crate::style::widgets::{header_style, icon_button_style, palette, text_field_style};

/// Renders the inbox top bar for the selected folder.
pub fn view_header(folder: Folder, search_query: &str) -> Element<'_, Message> {
    let p = palette::current();

    let title = text(folder.name())
        .size(20)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        })
        .color(p.text_primary);

    let search = text_input("Search emails...", search_query)
        .width(Length::Fixed(260.0))
        .padding([8, 14])
        .style(text_field_style)
        .on_input(Message::SearchChanged);

    let refresh_btn = button(text("\u{21BB}").size(18))
        .padding([6, 10])
        .style(icon_button_style)
        .on_press(Message::RefreshEmails);

    let spacer = iced::widget::Space::new().width(Length::Fill);

    container(
        row![title, spacer, search, refresh_btn]
            .spacing(12)
            .padding(16)
            .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .style(header_style)
    .into()
}
