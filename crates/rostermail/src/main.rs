//! `RosterMail` - Desktop client for the SFDA email and shift-schedule service
//!
//! Built with Rust, the iced GUI framework, and a thin REST client.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use std::time::Duration;

use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, container, row};
use iced::{Element, Length, Subscription, Task};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rostermail_api::{
    ApiClient, Email, ErrorKind, Folder, LoginRequest, LoginResponse, ScheduleItem,
};
use rostermail_core::{FetchRequest, Generation, InboxState, LoadError, RosterEditor, RowEdit};

use message::{KeyboardAction, LoginMessage, Message, RosterMessage, View};
use model::{AppSettings, LoginState};
use style::widgets::app_background_style;

/// How long the save-success banner stays up before it clears itself.
const NOTICE_TIMEOUT: Duration = Duration::from_millis(3000);

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rostermail=debug,rostermail_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting RosterMail");

    iced::application(RosterMail::new, RosterMail::update, RosterMail::view)
        .title("RosterMail")
        .subscription(RosterMail::subscription)
        .run()?;

    Ok(())
}

/// Main application state.
struct RosterMail {
    /// Current view/screen.
    current_view: View,
    /// Login form state.
    login: LoginState,
    /// Inbox state: selected folder, search text, and fetch lifecycle.
    inbox: InboxState,
    /// Schedule editor state.
    roster: RosterEditor,
    /// Persisted settings.
    settings: AppSettings,
    /// REST client for the backend, absent while the base URL is invalid.
    client: Option<ApiClient>,
}

impl Default for RosterMail {
    fn default() -> Self {
        let settings = AppSettings::default();
        let client = ApiClient::new(&settings.api_base_url).ok();
        Self {
            current_view: View::default(),
            login: LoginState::new(),
            inbox: InboxState::new(),
            roster: RosterEditor::new(),
            settings,
            client,
        }
    }
}

impl RosterMail {
    /// Applies the persisted theme mode to the global palette.
    fn apply_theme(&self) {
        style::widgets::palette::set_theme(self.settings.theme_mode);
    }

    /// The configured client, or the error the completion paths report.
    fn client_or_error(&self) -> Result<ApiClient, LoadError> {
        self.client
            .clone()
            .ok_or_else(|| LoadError::new(ErrorKind::Network, "API base URL is not configured"))
    }

    /// Issues the email fetch a state transition requested.
    fn fetch_emails(&self, request: FetchRequest) -> Task<Message> {
        let generation = request.generation;
        match self.client_or_error() {
            Ok(client) => Task::perform(load_emails(client, request.folder), move |result| {
                Message::EmailsFetched(generation, result)
            }),
            Err(err) => Task::done(Message::EmailsFetched(generation, Err(err))),
        }
    }

    /// Issues the stamped schedule fetch.
    fn fetch_roster(&self, generation: Generation) -> Task<Message> {
        match self.client_or_error() {
            Ok(client) => Task::perform(load_roster(client), move |result| {
                Message::RosterLoaded(generation, result)
            }),
            Err(err) => Task::done(Message::RosterLoaded(generation, Err(err))),
        }
    }
}

impl RosterMail {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        app.apply_theme(); // Apply default theme until settings arrive
        let settings_task = Task::perform(load_settings(), Message::SettingsLoaded);
        (app, settings_task)
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    #[allow(clippy::too_many_lines)] // Large match is idiomatic for Elm architecture
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(view) => {
                return self.navigate_to(view);
            }
            Message::SignOut => {
                info!("Signing out");
                self.login = LoginState::new();
                self.inbox.reset();
                self.roster.reset();
                self.current_view = View::Login;
            }
            Message::Login(msg) => {
                return self.handle_login(msg);
            }
            Message::LoginFinished(result) => {
                self.login.is_submitting = false;
                match result {
                    Ok(response) if response.success => {
                        info!("Login accepted");
                        self.current_view = View::Inbox;
                        let request = self.inbox.open();
                        return self.fetch_emails(request);
                    }
                    Ok(response) => {
                        warn!("Login rejected: {:?}", response.message);
                        self.login.submit_error = Some(response.message.unwrap_or_else(|| {
                            "Login failed. Please check your credentials.".to_owned()
                        }));
                    }
                    Err(err) => {
                        warn!("Login request failed: {err}");
                        self.login.submit_error =
                            Some("Login failed. Please check your credentials.".to_owned());
                    }
                }
            }
            Message::SelectFolder(folder) => {
                // Re-selecting the current folder is a no-op
                if let Some(request) = self.inbox.select_folder(folder) {
                    return self.fetch_emails(request);
                }
            }
            Message::SearchChanged(query) => {
                self.inbox.set_query(query);
            }
            Message::RefreshEmails => {
                let request = self.inbox.refresh();
                return self.fetch_emails(request);
            }
            Message::EmailsFetched(generation, result) => {
                self.inbox.finish_fetch(generation, result);
            }
            Message::Roster(msg) => {
                return self.handle_roster(msg);
            }
            Message::RosterLoaded(generation, result) => {
                self.roster.finish_load(generation, result);
            }
            Message::RosterSaved(result) => {
                if let Some(seq) = self.roster.finish_save(result) {
                    return Task::perform(notice_delay(), move |()| Message::NoticeExpired(seq));
                }
            }
            Message::NoticeExpired(seq) => {
                self.roster.dismiss_notice(seq);
            }
            Message::SettingsLoaded(result) => match result {
                Ok(settings) => {
                    info!("Settings loaded: theme={:?}", settings.theme_mode);
                    self.settings = settings;
                    self.apply_theme();
                    match ApiClient::new(&self.settings.api_base_url) {
                        Ok(client) => self.client = Some(client),
                        Err(err) => {
                            warn!("Invalid API base URL in settings, keeping previous: {err}");
                        }
                    }
                }
                Err(e) => {
                    info!("Failed to load settings, using defaults: {e}");
                }
            },
            Message::KeyPressed(action) => {
                return self.handle_keyboard_action(action);
            }
        }
        Task::none()
    }

    /// Switches screens. A data screen mounts fresh and begins its fetch.
    fn navigate_to(&mut self, view: View) -> Task<Message> {
        self.current_view = view;
        match view {
            View::Login => Task::none(),
            View::Inbox => {
                let request = self.inbox.open();
                self.fetch_emails(request)
            }
            View::Roster => {
                let generation = self.roster.begin_load();
                self.fetch_roster(generation)
            }
        }
    }

    /// Handle login form messages.
    fn handle_login(&mut self, msg: LoginMessage) -> Task<Message> {
        match msg {
            LoginMessage::UsernameChanged(username) => {
                self.login.username = username;
            }
            LoginMessage::PasswordChanged(password) => {
                self.login.password = password;
            }
            LoginMessage::EmailChanged(email) => {
                self.login.email = email;
            }
            LoginMessage::EwsUrlChanged(ews_url) => {
                self.login.ews_url = ews_url;
            }
            LoginMessage::Submit => {
                if self.login.is_submitting {
                    return Task::none();
                }
                if self.login.validate() {
                    self.login.is_submitting = true;
                    self.login.submit_error = None;
                    let request = self.login.to_request();
                    match self.client_or_error() {
                        Ok(client) => {
                            return Task::perform(
                                submit_login(client, request),
                                Message::LoginFinished,
                            );
                        }
                        Err(err) => {
                            return Task::done(Message::LoginFinished(Err(err)));
                        }
                    }
                }
            }
        }
        Task::none()
    }

    /// Handle schedule editor messages.
    fn handle_roster(&mut self, msg: RosterMessage) -> Task<Message> {
        match msg {
            RosterMessage::EmailEdited(id, value) => {
                self.roster.update_row(id, RowEdit::Email(value));
            }
            RosterMessage::DepartmentEdited(id, value) => {
                self.roster.update_row(id, RowEdit::Department(value));
            }
            RosterMessage::SunTueEdited(id, flag) => {
                self.roster.update_row(id, RowEdit::SunTue(flag));
            }
            RosterMessage::WedThuEdited(id, flag) => {
                self.roster.update_row(id, RowEdit::WedThu(flag));
            }
            RosterMessage::FriSatEdited(id, flag) => {
                self.roster.update_row(id, RowEdit::FriSat(flag));
            }
            RosterMessage::ShiftEdited(id, shift) => {
                self.roster.update_row(id, RowEdit::Shift(shift));
            }
            RosterMessage::ScoreEdited(id, value) => {
                self.roster.update_row(id, RowEdit::Score(value));
            }
            RosterMessage::AddRow => {
                self.roster.add_row();
            }
            RosterMessage::DeleteRow(id) => {
                self.roster.delete_row(id);
            }
            RosterMessage::Save => {
                if let Some(items) = self.roster.begin_save() {
                    match self.client_or_error() {
                        Ok(client) => {
                            return Task::perform(save_roster(client, items), Message::RosterSaved);
                        }
                        Err(err) => {
                            return Task::done(Message::RosterSaved(Err(err)));
                        }
                    }
                }
            }
            RosterMessage::Retry => {
                let generation = self.roster.begin_load();
                return self.fetch_roster(generation);
            }
        }
        Task::none()
    }

    /// Handle keyboard shortcut actions.
    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        match action {
            KeyboardAction::Refresh => match self.current_view {
                View::Inbox => return Task::done(Message::RefreshEmails),
                View::Roster => return Task::done(Message::Roster(RosterMessage::Retry)),
                View::Login => {}
            },
            KeyboardAction::ClearSearch => {
                if self.current_view == View::Inbox && !self.inbox.query().is_empty() {
                    self.inbox.set_query(String::new());
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        match self.current_view {
            View::Login => view::view_login(&self.login),
            View::Inbox => self.view_inbox(),
            View::Roster => view::view_roster(&self.roster),
        }
    }

    /// Inbox screen: folder sidebar beside the header and email list.
    fn view_inbox(&self) -> Element<'_, Message> {
        let sidebar = view::view_sidebar(self.inbox.folder());
        let header = view::view_header(self.inbox.folder(), self.inbox.query());
        let list = view::view_email_list(&self.inbox);

        let content = column![header, list].height(Length::Fill);

        container(row![sidebar, content].height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(app_background_style)
            .into()
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                handle_key_press(key, modifiers)
            }
            _ => None,
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: Key, _modifiers: Modifiers) -> Option<Message> {
    match key {
        // F5: Refresh the current view's data
        Key::Named(keyboard::key::Named::F5) => Some(Message::KeyPressed(KeyboardAction::Refresh)),
        // Escape: Clear the search field
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::ClearSearch))
        }
        _ => None,
    }
}

/// Path of the persisted settings file.
fn settings_path() -> std::path::PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("rostermail")
        .join("settings.json")
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    let path = settings_path();

    if !path.exists() {
        // First run: persist the defaults so there is a file to edit
        let defaults = AppSettings::default();
        if let Err(e) = save_settings(defaults.clone()).await {
            warn!("Could not write default settings: {e}");
        }
        return Ok(defaults);
    }

    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| e.to_string())?;

    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let path = settings_path();
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| e.to_string())?;
    }

    let contents = serde_json::to_string_pretty(&settings).map_err(|e| e.to_string())?;
    tokio::fs::write(&path, contents)
        .await
        .map_err(|e| e.to_string())?;

    info!("Settings saved to {:?}", path);
    Ok(())
}

/// Submits credentials to the backend.
async fn submit_login(
    client: ApiClient,
    request: LoginRequest,
) -> Result<LoginResponse, LoadError> {
    Ok(client.login(&request).await?)
}

/// Fetches the email list for one folder.
async fn load_emails(client: ApiClient, folder: Folder) -> Result<Vec<Email>, LoadError> {
    Ok(client.emails(folder).await?)
}

/// Fetches the full schedule.
async fn load_roster(client: ApiClient) -> Result<Vec<ScheduleItem>, LoadError> {
    Ok(client.schedule().await?)
}

/// Pushes the full schedule to the backend.
async fn save_roster(client: ApiClient, items: Vec<ScheduleItem>) -> Result<(), LoadError> {
    client.update_schedule(&items).await?;
    Ok(())
}

/// Holds the success banner up before it clears itself.
async fn notice_delay() {
    tokio::time::sleep(NOTICE_TIMEOUT).await;
}
