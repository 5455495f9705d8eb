//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use rostermail_api::{DayFlag, Email, Folder, LoginResponse, ScheduleItem, Shift};
use rostermail_core::{Generation, LoadError, NoticeSeq, RowId};

use crate::model::AppSettings;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    /// Navigate to a different view.
    NavigateTo(View),
    /// Return to the login screen, dropping all loaded state.
    SignOut,

    // Login
    /// Login form messages.
    Login(LoginMessage),
    /// Login request completed.
    LoginFinished(Result<LoginResponse, LoadError>),

    // Inbox
    /// Select a folder to view its emails.
    SelectFolder(Folder),
    /// Search query changed.
    SearchChanged(String),
    /// Re-run the fetch for the current folder.
    RefreshEmails,
    /// Email list arrived for the stamped fetch.
    EmailsFetched(Generation, Result<Vec<Email>, LoadError>),

    // Schedule editor
    /// Schedule editor messages.
    Roster(RosterMessage),
    /// Schedule rows arrived for the stamped fetch.
    RosterLoaded(Generation, Result<Vec<ScheduleItem>, LoadError>),
    /// Save request completed.
    RosterSaved(Result<(), LoadError>),
    /// The success banner timed out.
    NoticeExpired(NoticeSeq),

    // Settings
    /// Settings loaded from disk.
    SettingsLoaded(Result<AppSettings, String>),

    // Keyboard Events
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
}

/// Messages for the login form.
#[derive(Debug, Clone)]
pub enum LoginMessage {
    /// Username changed.
    UsernameChanged(String),
    /// Password changed.
    PasswordChanged(String),
    /// Email address changed.
    EmailChanged(String),
    /// EWS endpoint URL changed.
    EwsUrlChanged(String),
    /// Submit the credentials.
    Submit,
}

/// Messages for the schedule editor.
#[derive(Debug, Clone)]
pub enum RosterMessage {
    /// Email cell changed on a row.
    EmailEdited(RowId, String),
    /// Department cell changed on a row.
    DepartmentEdited(RowId, String),
    /// Sunday-Tuesday flag changed on a row.
    SunTueEdited(RowId, DayFlag),
    /// Wednesday-Thursday flag changed on a row.
    WedThuEdited(RowId, DayFlag),
    /// Friday-Saturday flag changed on a row.
    FriSatEdited(RowId, DayFlag),
    /// Shift selection changed on a row.
    ShiftEdited(RowId, Shift),
    /// Score cell changed on a row.
    ScoreEdited(RowId, String),
    /// Append a blank row.
    AddRow,
    /// Remove a row.
    DeleteRow(RowId),
    /// Save the full current collection.
    Save,
    /// Re-run the schedule fetch after a failure.
    Retry,
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Refresh the current view's data (F5).
    Refresh,
    /// Clear the search field (Escape).
    ClearSearch,
}

/// Application views/screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Login screen.
    #[default]
    Login,
    /// Inbox with folder sidebar and email list.
    Inbox,
    /// Shift-schedule editor table.
    Roster,
}
