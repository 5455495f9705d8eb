//! Sidebar view component: branding, folder list, and bottom actions.

use iced::widget::{Column, button, column, container, row, text};
use iced::{Background, Border, Element, Length};

use rostermail_api::Folder;

use crate::message::{Message, View};
use crate::style::widgets::{
    nav_button_selected_style, nav_button_style, palette, radius, sidebar_style,
    sign_out_button_style,
};

/// Renders the sidebar with the folder list and bottom actions.
pub fn view_sidebar(selected: Folder) -> Element<'static, Message> {
    let p = palette::current();

    // Branding block
    let mark = container(text("\u{2709}").size(18).color(p.text_on_primary))
        .width(Length::Fixed(40.0))
        .height(Length::Fixed(40.0))
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .style(|_theme| {
            let p = palette::current();
            container::Style {
                background: Some(Background::Color(p.primary)),
                border: Border {
                    radius: radius::PILL.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        });

    let brand = container(
        row![
            mark,
            column![
                text("Email System").size(16).font(iced::Font {
                    weight: iced::font::Weight::Semibold,
                    ..Default::default()
                }),
                text("SFDA").size(13).color(p.text_secondary),
            ]
            .spacing(2),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding(24)
    .style(|_theme| {
        let p = palette::current();
        container::Style {
            border: Border {
                color: p.border_subtle,
                width: 1.0,
                radius: radius::NONE.into(),
            },
            ..Default::default()
        }
    });

    // Folder navigation
    let folder_buttons: Vec<Element<'static, Message>> = Folder::ALL
        .into_iter()
        .map(|folder| view_folder_item(folder, selected))
        .collect();

    let folders = Column::with_children(folder_buttons)
        .spacing(8)
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill);

    // Bottom actions
    let schedule_btn = button(
        row![text("\u{1F4C5}").size(16), text("Schedule").size(14)]
            .spacing(12)
            .align_y(iced::Alignment::Center)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding([8, 12])
    .style(nav_button_style)
    .on_press(Message::NavigateTo(View::Roster));

    let sign_out_btn = button(
        row![text("\u{1F6AA}").size(16), text("Sign Out").size(14)]
            .spacing(12)
            .align_y(iced::Alignment::Center)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding([8, 12])
    .style(sign_out_button_style)
    .on_press(Message::SignOut);

    let actions = container(column![schedule_btn, sign_out_btn].spacing(8))
        .width(Length::Fill)
        .padding(16)
        .style(|_theme| {
            let p = palette::current();
            container::Style {
                border: Border {
                    color: p.border_subtle,
                    width: 1.0,
                    radius: radius::NONE.into(),
                },
                ..Default::default()
            }
        });

    container(column![brand, folders, actions])
        .width(Length::Fixed(256.0))
        .height(Length::Fill)
        .style(sidebar_style)
        .into()
}

/// Renders a single folder button with its icon.
fn view_folder_item(folder: Folder, selected: Folder) -> Element<'static, Message> {
    let is_selected = folder == selected;

    let icon = match folder {
        Folder::Inbox => "\u{1F4E5}",        // inbox tray
        Folder::SentItems => "\u{1F4E4}",    // outbox tray
        Folder::Archive => "\u{1F4C1}",      // folder
        Folder::DeletedItems => "\u{1F5D1}", // wastebasket
    };

    let btn_style = if is_selected {
        nav_button_selected_style
    } else {
        nav_button_style
    };

    button(
        row![text(icon).size(16), text(folder.name()).size(14)]
            .spacing(12)
            .align_y(iced::Alignment::Center)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding([8, 12])
    .style(btn_style)
    .on_press(Message::SelectFolder(folder))
    .into()
}
