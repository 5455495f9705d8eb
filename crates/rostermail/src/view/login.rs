//! Login view.
//!
//! Collects the credentials the backend forwards to the Exchange gateway.

use iced::widget::{Space, button, column, container, scrollable, text, text_input};
use iced::{Background, Border, Element, Length};

use crate::message::{LoginMessage, Message};
use crate::model::LoginState;
use crate::style::widgets::{self, palette, radius};

/// Render the login view.
pub fn view_login(state: &LoginState) -> Element<'_, Message> {
    let p = palette::current();

    // Brand mark: blue circle with an envelope, as on the sidebar
    let mark = container(text("\u{2709}").size(22).color(p.text_on_primary))
        .width(Length::Fixed(48.0))
        .height(Length::Fixed(48.0))
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

    let title = text("Email System").size(24).color(p.text_primary);
    let subtitle = text("Sign in to your SFDA account")
        .size(14)
        .color(p.text_secondary);

    let form = column![
        labeled_input(
            "Username",
            "username",
            &state.username,
            false,
            LoginMessage::UsernameChanged,
            state.errors.get("username"),
        ),
        labeled_input(
            "Password",
            "",
            &state.password,
            true,
            LoginMessage::PasswordChanged,
            state.errors.get("password"),
        ),
        labeled_input(
            "Email Address",
            "user@example.com",
            &state.email,
            false,
            LoginMessage::EmailChanged,
            state.errors.get("email"),
        ),
        labeled_input(
            "EWS URL",
            "https://mail.example.com/EWS/Exchange.asmx",
            &state.ews_url,
            false,
            LoginMessage::EwsUrlChanged,
            state.errors.get("ews_url"),
        ),
    ]
    .spacing(12);

    let error_display = create_error_display(state);

    let submit = button(
        container(
            text(if state.is_submitting {
                "Signing In..."
            } else {
                "Sign In"
            })
            .size(14),
        )
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([10, 20])
    .style(widgets::primary_button_style)
    .on_press_maybe(if state.is_submitting {
        None
    } else {
        Some(Message::Login(LoginMessage::Submit))
    });

    let card = container(
        column![
            container(mark).width(Length::Fill).align_x(iced::alignment::Horizontal::Center),
            container(title).width(Length::Fill).align_x(iced::alignment::Horizontal::Center),
            container(subtitle).width(Length::Fill).align_x(iced::alignment::Horizontal::Center),
            Space::new().height(12),
            form,
            error_display,
            Space::new().height(12),
            submit,
        ]
        .spacing(8),
    )
    .padding(32)
    .max_width(420)
    .style(widgets::card_style);

    container(scrollable(
        container(card)
            .width(Length::Fill)
            .padding([48, 16])
            .align_x(iced::alignment::Horizontal::Center),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(widgets::app_background_style)
    .into()
}

/// Create a labeled text input with an optional field error below it.
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    secure: bool,
    on_input: impl Fn(String) -> LoginMessage + 'a,
    error: Option<&'a String>,
) -> Element<'a, Message> {
    let p = palette::current();
    let mut input = text_input(placeholder, value)
        .on_input(move |s| Message::Login(on_input(s)))
        .on_submit(Message::Login(LoginMessage::Submit))
        .padding(10)
        .style(widgets::text_field_style);

    if secure {
        input = input.secure(true);
    }

    let mut col = column![text(label).size(12).color(p.text_secondary), input].spacing(4);

    if let Some(err) = error {
        col = col.push(text(err).size(11).color(p.danger));
    }

    col.into()
}

/// Create the submit error display element.
fn create_error_display(state: &LoginState) -> Element<'_, Message> {
    let p = palette::current();
    let error_color = p.danger_text;
    state.submit_error.as_ref().map_or_else(
        || Space::new().height(0).into(),
        move |error| {
            container(text(error).size(13).color(error_color))
                .width(Length::Fill)
                .padding(10)
                .style(widgets::danger_banner_style)
                .into()
        },
    )
}
