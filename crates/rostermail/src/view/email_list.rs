//! Email list view component: fetch states and the message rows.

use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Element, Length};

use rostermail_api::Email;
use rostermail_core::{InboxPhase, InboxState};

use crate::message::Message;
use crate::model::{format_received, sender_display, subject_display};
use crate::style::widgets::{
    avatar_style, badge_style, email_row_style, email_row_unread_style, palette,
    primary_button_style, scrollable_style,
};

/// Renders the email list for the current folder, narrowed by the search text.
pub fn view_email_list(inbox: &InboxState) -> Element<'static, Message> {
    match inbox.phase() {
        InboxPhase::Idle | InboxPhase::Loading => view_loading(),
        InboxPhase::Failed(_) => view_fetch_error(),
        InboxPhase::Ready(_) => {
            let visible = inbox.visible();
            if visible.is_empty() {
                return view_empty();
            }

            let rows: Vec<Element<'static, Message>> =
                visible.into_iter().map(view_email_row).collect();

            scrollable(Column::with_children(rows))
                .height(Length::Fill)
                .style(scrollable_style)
                .into()
        }
    }
}

fn view_loading() -> Element<'static, Message> {
    let p = palette::current();

    container(
        column![
            text("\u{23F3}").size(48), // hourglass spinner
            text("Loading emails...").size(14).color(p.text_secondary),
        ]
        .spacing(12)
        .align_x(iced::Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn view_fetch_error() -> Element<'static, Message> {
    let p = palette::current();

    let retry = button(text("Try Again").size(14))
        .padding([10, 20])
        .style(primary_button_style)
        .on_press(Message::RefreshEmails);

    container(
        column![
            text("Failed to fetch emails.").size(14).color(p.danger),
            retry,
        ]
        .spacing(12)
        .align_x(iced::Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn view_empty() -> Element<'static, Message> {
    let p = palette::current();

    container(
        column![
            text("\u{1F4ED}").size(48), // empty mailbox
            text("No emails found").size(14).color(p.text_muted),
        ]
        .spacing(12)
        .align_x(iced::Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// Renders a single email row: avatar, sender, received date, and subject.
fn view_email_row(email: &Email) -> Element<'static, Message> {
    let p = palette::current();

    let avatar = container(text("\u{1F464}").size(16).color(p.text_muted))
        .width(Length::Fixed(40.0))
        .height(Length::Fixed(40.0))
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .style(avatar_style);

    // Sender and subject gain weight while unread
    let sender_weight = if email.is_read {
        iced::font::Weight::Medium
    } else {
        iced::font::Weight::Bold
    };
    let subject_weight = if email.is_read {
        iced::font::Weight::Normal
    } else {
        iced::font::Weight::Semibold
    };

    let sender = text(sender_display(email).to_owned())
        .size(14)
        .font(iced::Font {
            weight: sender_weight,
            ..Default::default()
        })
        .color(p.text_primary);

    let received = row![
        text("\u{1F552}").size(11).color(p.text_muted), // clock
        text(format_received(&email.datetime_received))
            .size(12)
            .color(p.text_muted),
    ]
    .spacing(4)
    .align_y(iced::Alignment::Center);

    let spacer = iced::widget::Space::new().width(Length::Fill);

    let header_row = row![sender, spacer, received].align_y(iced::Alignment::Center);

    let subject = text(subject_display(email).to_owned())
        .size(13)
        .font(iced::Font {
            weight: subject_weight,
            ..Default::default()
        })
        .color(p.text_secondary);

    let mut content = column![header_row, subject].spacing(4).width(Length::Fill);

    if !email.is_read {
        let badge = container(text("Unread").size(11).color(p.badge_text))
            .padding([2, 8])
            .style(badge_style);
        content = content.push(badge);
    }

    let row_style = if email.is_read {
        email_row_style
    } else {
        email_row_unread_style
    };

    container(
        row![avatar, content]
            .spacing(16)
            .padding(16)
            .align_y(iced::Alignment::Start),
    )
    .width(Length::Fill)
    .style(row_style)
    .into()
}
