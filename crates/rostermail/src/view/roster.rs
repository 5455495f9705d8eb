//! Schedule editor view: top bar, save notices, and the editable table.

use iced::widget::{
    Column, Row, button, column, container, pick_list, radio, row, scrollable, text, text_input,
};
use iced::{Element, Length};

use rostermail_api::{DayFlag, Shift};
use rostermail_core::{Notice, RosterEditor, RosterPhase, RosterRow, RowId};

use crate::message::{Message, RosterMessage, View};
use crate::style::widgets::{
    app_background_style, card_style, danger_banner_style, header_style, icon_button_style,
    palette, primary_button_style, scrollable_style, success_banner_style, success_button_style,
    table_header_style, table_row_style, text_field_style,
};

/// Column portions shared by the header row and the body rows.
mod col {
    pub const ID: u16 = 1;
    pub const EMAIL: u16 = 4;
    pub const DEPARTMENT: u16 = 3;
    pub const DAY: u16 = 2;
    pub const SHIFT: u16 = 3;
    pub const SCORE: u16 = 2;
    pub const DELETE: u16 = 2;
}

/// Renders the schedule editor screen.
pub fn view_roster(editor: &RosterEditor) -> Element<'_, Message> {
    let p = palette::current();

    let header = view_editor_header(editor);

    let body: Element<'_, Message> = match editor.phase() {
        RosterPhase::Idle | RosterPhase::Loading => view_loading(),
        RosterPhase::Failed(_) => view_load_error(),
        RosterPhase::Ready | RosterPhase::Saving => view_table(editor),
    };

    let card = container(body).width(Length::Fill).style(card_style);

    let mut content = Column::new().spacing(16).width(Length::Fill).max_width(1280);
    match editor.notice() {
        Some(Notice::Saved) => {
            content = content.push(notice_banner(
                "Schedule updated successfully!",
                p.success_text,
                success_banner_style,
            ));
        }
        Some(Notice::SaveFailed(_)) => {
            content = content.push(notice_banner(
                "Failed to save schedule changes.",
                p.danger_text,
                danger_banner_style,
            ));
        }
        None => {}
    }
    content = content.push(card);

    let scroll_area = scrollable(
        container(content)
            .width(Length::Fill)
            .padding(24)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .height(Length::Fill)
    .style(scrollable_style);

    container(column![header, scroll_area])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(app_background_style)
        .into()
}

/// Top bar: back navigation, title, and the add/save actions.
fn view_editor_header(editor: &RosterEditor) -> Element<'static, Message> {
    let p = palette::current();

    let back_btn = button(text("\u{2190}").size(18)) // back arrow
        .padding([6, 10])
        .style(icon_button_style)
        .on_press(Message::NavigateTo(View::Inbox));

    let title = row![
        text("\u{1F4C5}").size(18), // calendar
        text("Schedule Editor")
            .size(20)
            .font(iced::Font {
                weight: iced::font::Weight::Semibold,
                ..Default::default()
            })
            .color(p.text_primary),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    let add_btn = button(
        row![text("+").size(14), text("Add Row").size(14)]
            .spacing(8)
            .align_y(iced::Alignment::Center),
    )
    .padding([8, 16])
    .style(success_button_style)
    .on_press(Message::Roster(RosterMessage::AddRow));

    let save_label = if editor.is_saving() {
        "Saving..."
    } else {
        "Save Changes"
    };
    let save_btn = button(text(save_label).size(14))
        .padding([8, 16])
        .style(primary_button_style)
        .on_press_maybe((!editor.is_saving()).then_some(Message::Roster(RosterMessage::Save)));

    let spacer = iced::widget::Space::new().width(Length::Fill);

    container(
        row![back_btn, title, spacer, add_btn, save_btn]
            .spacing(12)
            .padding(16)
            .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .style(header_style)
    .into()
}

fn notice_banner(
    message: &'static str,
    color: iced::Color,
    style: fn(&iced::Theme) -> container::Style,
) -> Element<'static, Message> {
    container(text(message).size(14).color(color))
        .width(Length::Fill)
        .padding([12, 16])
        .style(style)
        .into()
}

fn view_loading() -> Element<'static, Message> {
    let p = palette::current();

    container(
        column![
            text("\u{23F3}").size(48), // hourglass spinner
            text("Loading schedule...").size(14).color(p.text_secondary),
        ]
        .spacing(12)
        .align_x(iced::Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(320.0))
    .into()
}

fn view_load_error() -> Element<'static, Message> {
    let p = palette::current();

    let retry = button(text("Try Again").size(14))
        .padding([10, 20])
        .style(primary_button_style)
        .on_press(Message::Roster(RosterMessage::Retry));

    container(
        column![
            text("Failed to fetch schedule data.").size(14).color(p.danger),
            retry,
        ]
        .spacing(12)
        .align_x(iced::Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(320.0))
    .into()
}

fn view_table(editor: &RosterEditor) -> Element<'_, Message> {
    if editor.rows().is_empty() {
        return view_table_empty();
    }

    let body: Vec<Element<'_, Message>> = editor
        .rows()
        .iter()
        .enumerate()
        .map(|(index, entry)| view_table_row(index, entry))
        .collect();

    column![view_table_header(), Column::with_children(body)]
        .width(Length::Fill)
        .into()
}

fn view_table_empty() -> Element<'static, Message> {
    let p = palette::current();

    let add_btn = button(
        row![text("+").size(14), text("Add First Row").size(14)]
            .spacing(8)
            .align_y(iced::Alignment::Center),
    )
    .padding([10, 20])
    .style(primary_button_style)
    .on_press(Message::Roster(RosterMessage::AddRow));

    container(
        column![
            text("\u{270F}").size(48), // pencil
            text("No schedule items found").size(14).color(p.text_muted),
            add_btn,
        ]
        .spacing(12)
        .align_x(iced::Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(320.0))
    .into()
}

fn view_table_header() -> Element<'static, Message> {
    container(
        row![
            header_cell("ID", col::ID),
            header_cell("Email", col::EMAIL),
            header_cell("Department", col::DEPARTMENT),
            header_cell("SunTue", col::DAY),
            header_cell("WedThu", col::DAY),
            header_cell("FriSat", col::DAY),
            header_cell("Shift", col::SHIFT),
            header_cell("Score", col::SCORE),
            header_cell("Delete", col::DELETE),
        ]
        .spacing(8)
        .padding([10, 16]),
    )
    .width(Length::Fill)
    .style(table_header_style)
    .into()
}

fn header_cell(label: &'static str, portion: u16) -> Element<'static, Message> {
    let p = palette::current();

    container(
        text(label)
            .size(11)
            .font(iced::Font {
                weight: iced::font::Weight::Semibold,
                ..Default::default()
            })
            .color(p.text_muted),
    )
    .width(Length::FillPortion(portion))
    .into()
}

fn cell<'a>(content: impl Into<Element<'a, Message>>, portion: u16) -> Element<'a, Message> {
    container(content).width(Length::FillPortion(portion)).into()
}

/// Renders one editable table row.
fn view_table_row(index: usize, entry: &RosterRow) -> Element<'static, Message> {
    let p = palette::current();
    let id = entry.id;
    let item = &entry.item;

    let number = text((index + 1).to_string()).size(13).color(p.text_primary);

    let email_input = text_input("user@example.com", &item.email)
        .on_input(move |value| Message::Roster(RosterMessage::EmailEdited(id, value)))
        .padding(8)
        .size(13)
        .style(text_field_style);

    let department_input = text_input("Department name", &item.department)
        .on_input(move |value| Message::Roster(RosterMessage::DepartmentEdited(id, value)))
        .padding(8)
        .size(13)
        .style(text_field_style);

    let sun_tue = day_flag_cell(id, item.sun_tue, RosterMessage::SunTueEdited);
    let wed_thu = day_flag_cell(id, item.wed_thu, RosterMessage::WedThuEdited);
    let fri_sat = day_flag_cell(id, item.fri_sat, RosterMessage::FriSatEdited);

    let shift = pick_list(Shift::ALL, Some(item.shift), move |choice| {
        Message::Roster(RosterMessage::ShiftEdited(id, choice))
    })
    .padding(8)
    .text_size(13)
    .width(Length::Fill);

    let score_text = item.score.to_string();
    let score_input = text_input("0", &score_text)
        .on_input(move |value| Message::Roster(RosterMessage::ScoreEdited(id, value)))
        .padding(8)
        .size(13)
        .style(text_field_style);

    let delete_btn = button(text("Delete").size(13))
        .padding([6, 12])
        .style(primary_button_style)
        .on_press(Message::Roster(RosterMessage::DeleteRow(id)));

    container(
        row![
            cell(number, col::ID),
            cell(email_input, col::EMAIL),
            cell(department_input, col::DEPARTMENT),
            cell(sun_tue, col::DAY),
            cell(wed_thu, col::DAY),
            cell(fri_sat, col::DAY),
            cell(shift, col::SHIFT),
            cell(score_input, col::SCORE),
            cell(delete_btn, col::DELETE),
        ]
        .spacing(8)
        .padding([10, 16])
        .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .style(table_row_style)
    .into()
}

/// Yes/No radio pair for one working-days column.
fn day_flag_cell(
    id: RowId,
    current: DayFlag,
    edit: fn(RowId, DayFlag) -> RosterMessage,
) -> Element<'static, Message> {
    let options = DayFlag::ALL.map(|flag| {
        radio(flag.label(), flag, Some(current), move |choice| {
            Message::Roster(edit(id, choice))
        })
        .size(14)
        .text_size(13)
        .spacing(4)
        .into()
    });

    Row::with_children(options).spacing(8).into()
}
