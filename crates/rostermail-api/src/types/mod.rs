//! Wire types for the backend REST API.
//!
//! Field names and enumerated strings mirror the backend contract exactly:
//! `ScheduleItem` keeps its PascalCase keys through serde renames, shift
//! labels and day flags serialize to the literal strings the backend
//! stores, and folder names render with their embedded spaces.

mod email;
mod login;
mod schedule;

pub use email::{Email, EmailListResponse, Folder};
pub use login::{LoginRequest, LoginResponse};
pub use schedule::{DayFlag, ScheduleItem, ScheduleResponse, Shift, UpdateScheduleRequest};
