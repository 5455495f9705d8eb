//! # rostermail-api
//!
//! Typed REST client for the `RosterMail` backend.
//!
//! The backend owns every hard concern (mailbox access, schedule
//! persistence, authentication against the mail server); this crate is a
//! thin pass-through: one method per endpoint, typed request and response
//! structs, no retries, no caching, no validation.
//!
//! ## Endpoints
//!
//! | Method | Path | Wrapper |
//! |--------|------|---------|
//! | POST | `/api/login` | [`ApiClient::login`] |
//! | GET | `/api/emails?folder_name={name}` | [`ApiClient::emails`] |
//! | GET | `/api/schedule` | [`ApiClient::schedule`] |
//! | POST | `/api/schedule` | [`ApiClient::update_schedule`] |
//!
//! ## Quick Start
//!
//! ```ignore
//! use rostermail_api::{ApiClient, Folder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new("http://localhost:8000")?;
//!
//!     let emails = client.emails(Folder::Inbox).await?;
//!     println!("{} messages in Inbox", emails.len());
//!
//!     let schedule = client.schedule().await?;
//!     println!("{} schedule rows", schedule.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error classification
//!
//! Every failure is an [`ApiError`]; [`ApiError::kind`] projects it onto
//! [`ErrorKind`] so callers can tell a dead connection from a server-side
//! rejection without holding the (non-`Clone`) error itself.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod error;
pub mod types;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::{ApiError, ErrorKind, Result};
pub use types::{
    DayFlag, Email, EmailListResponse, Folder, LoginRequest, LoginResponse, ScheduleItem,
    ScheduleResponse, Shift, UpdateScheduleRequest,
};
