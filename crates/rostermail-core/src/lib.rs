//! # rostermail-core
//!
//! View state machines for the `RosterMail` client.
//!
//! The GUI owns widgets and async plumbing; this crate owns the legal
//! state transitions behind them:
//!
//! - [`InboxState`] - folder selection, fetch lifecycle, client-side search
//! - [`RosterEditor`] - the editable schedule table and its save lifecycle
//! - [`Generation`] stamps - responses from superseded requests are
//!   discarded, never applied
//!
//! Everything here is synchronous and side-effect free. Network work
//! happens in the GUI's async tasks; outcomes are fed back through the
//! machines' `finish_*` methods, which enforce the stale-response guard.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
mod generation;
pub mod inbox;
pub mod roster;

pub use error::LoadError;
pub use generation::Generation;
pub use inbox::{FetchRequest, InboxPhase, InboxState, filter_emails};
pub use roster::{Notice, NoticeSeq, RosterEditor, RosterPhase, RosterRow, RowEdit, RowId};
