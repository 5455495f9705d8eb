//! Schedule editor state: the editable row collection and its lifecycles.

use rostermail_api::{DayFlag, ScheduleItem, Shift};
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::generation::Generation;

/// Stable synthetic identifier for one roster row.
///
/// Local to the editor: assigned at creation, never serialized, never
/// reused within one editor's lifetime. Update and delete address rows by
/// this id, so a concurrent removal cannot redirect an edit to a
/// neighboring row the way positional indexing would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(pub u64);

/// One editable row: a schedule record plus its editor-local identity.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow {
    /// Editor-local identity, used by update and delete.
    pub id: RowId,
    /// The record as it will be saved.
    pub item: ScheduleItem,
}

/// Lifecycle of the editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RosterPhase {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// Initial fetch in flight.
    Loading,
    /// Rows are editable.
    Ready,
    /// A save is in flight; rows stay editable, saving again does not.
    Saving,
    /// Initial fetch failed; a retry re-runs it.
    Failed(LoadError),
}

/// Outcome banner shown above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Last save succeeded. Cleared automatically after a short delay.
    Saved,
    /// Last save failed. Stays until the next save attempt.
    SaveFailed(LoadError),
}

/// Sequence stamp for notices.
///
/// The auto-clear timer for a success notice carries the stamp it was
/// scheduled for; a dismissal whose stamp is not current is ignored, so an
/// old timer can never erase a newer notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoticeSeq(pub u64);

impl NoticeSeq {
    /// The stamp after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// One field edit, addressed to a single row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowEdit {
    /// Replace the employee address.
    Email(String),
    /// Replace the department label.
    Department(String),
    /// Replace the Sunday-Tuesday flag.
    SunTue(DayFlag),
    /// Replace the Wednesday-Thursday flag.
    WedThu(DayFlag),
    /// Replace the Friday-Saturday flag.
    FriSat(DayFlag),
    /// Replace the shift window.
    Shift(Shift),
    /// Replace the score from raw text, coercing unparseable input to 0.
    Score(String),
}

/// State machine for the schedule editor.
///
/// All edits are local until [`begin_save`](Self::begin_save) hands the
/// full collection to the caller for a full-replace submit; nothing is
/// re-fetched after a save, the in-memory rows stay authoritative.
#[derive(Debug, Clone, Default)]
pub struct RosterEditor {
    /// Editable rows, in display and save order.
    rows: Vec<RosterRow>,
    /// Next identifier to mint.
    next_row_id: u64,
    /// Editor lifecycle.
    phase: RosterPhase,
    /// Stamp of the latest issued load.
    latest: Generation,
    /// Current banner, if any.
    notice: Option<Notice>,
    /// Stamp of the current banner.
    notice_seq: NoticeSeq,
}

impl RosterEditor {
    /// Creates an idle editor with no rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins the initial fetch: rows and banner are dropped, and the
    /// returned stamp must come back with the response.
    ///
    /// Also the retry transition after a failed load.
    pub fn begin_load(&mut self) -> Generation {
        self.rows.clear();
        self.notice = None;
        self.phase = RosterPhase::Loading;
        self.latest = self.latest.next();
        self.latest
    }

    /// Applies a load outcome.
    ///
    /// Returns `false` when the response was stale (its stamp is not the
    /// latest issued one) and was discarded without touching state.
    pub fn finish_load(
        &mut self,
        generation: Generation,
        outcome: Result<Vec<ScheduleItem>, LoadError>,
    ) -> bool {
        if generation != self.latest {
            debug!(
                "Discarding stale schedule response (generation {generation}, latest {})",
                self.latest
            );
            return false;
        }
        match outcome {
            Ok(items) => {
                debug!("Loaded {} schedule rows", items.len());
                let mut rows = Vec::with_capacity(items.len());
                for item in items {
                    let id = self.mint_id();
                    rows.push(RosterRow { id, item });
                }
                self.rows = rows;
                self.phase = RosterPhase::Ready;
            }
            Err(err) => {
                warn!("Schedule fetch failed: {err}");
                self.phase = RosterPhase::Failed(err);
            }
        }
        true
    }

    /// Appends one blank row (empty texts, all flags "No", first shift
    /// option, score 0) and returns its identity.
    ///
    /// `None` outside the editable phases.
    pub fn add_row(&mut self) -> Option<RowId> {
        if !self.is_editable() {
            return None;
        }
        let id = self.mint_id();
        self.rows.push(RosterRow {
            id,
            item: ScheduleItem::default(),
        });
        Some(id)
    }

    /// Applies one field edit to the addressed row, leaving every other
    /// row and field untouched.
    ///
    /// Returns `false` if the row is gone or the editor is not editable.
    pub fn update_row(&mut self, id: RowId, edit: RowEdit) -> bool {
        if !self.is_editable() {
            return false;
        }
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            return false;
        };
        match edit {
            RowEdit::Email(value) => row.item.email = value,
            RowEdit::Department(value) => row.item.department = value,
            RowEdit::SunTue(flag) => row.item.sun_tue = flag,
            RowEdit::WedThu(flag) => row.item.wed_thu = flag,
            RowEdit::FriSat(flag) => row.item.fri_sat = flag,
            RowEdit::Shift(shift) => row.item.shift = shift,
            RowEdit::Score(text) => row.item.score = parse_score(&text),
        }
        true
    }

    /// Removes the addressed row; later rows shift up.
    ///
    /// Returns `false` if the row is gone or the editor is not editable.
    pub fn delete_row(&mut self, id: RowId) -> bool {
        if !self.is_editable() {
            return false;
        }
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    /// Begins a save: drops the banner and hands back the full current
    /// collection for a full-replace submit.
    ///
    /// `None` unless the editor is ready (a save already in flight blocks
    /// another one).
    pub fn begin_save(&mut self) -> Option<Vec<ScheduleItem>> {
        if self.phase != RosterPhase::Ready {
            return None;
        }
        self.notice = None;
        self.phase = RosterPhase::Saving;
        Some(self.to_schedule())
    }

    /// Applies a save outcome.
    ///
    /// On success the returned stamp schedules the banner's auto-clear;
    /// on failure the banner persists and the rows stay as edited. A
    /// completion arriving when no save is in flight (the editor was
    /// reset meanwhile) is discarded.
    pub fn finish_save(&mut self, outcome: Result<(), LoadError>) -> Option<NoticeSeq> {
        if self.phase != RosterPhase::Saving {
            debug!("Discarding save completion, no save in flight");
            return None;
        }
        self.phase = RosterPhase::Ready;
        match outcome {
            Ok(()) => {
                debug!("Schedule saved");
                let seq = self.set_notice(Notice::Saved);
                Some(seq)
            }
            Err(err) => {
                warn!("Schedule save failed: {err}");
                self.set_notice(Notice::SaveFailed(err));
                None
            }
        }
    }

    /// Clears the banner the stamp was scheduled for; ignored when a
    /// newer banner has replaced it.
    pub fn dismiss_notice(&mut self, seq: NoticeSeq) -> bool {
        if seq != self.notice_seq || self.notice.is_none() {
            return false;
        }
        self.notice = None;
        true
    }

    /// The full current collection in save order, identifiers stripped.
    #[must_use]
    pub fn to_schedule(&self) -> Vec<ScheduleItem> {
        self.rows.iter().map(|row| row.item.clone()).collect()
    }

    /// Drops everything back to the initial state.
    ///
    /// Counters survive so neither a stale load response nor a recycled
    /// row identity can collide with post-reset state.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.notice = None;
        self.phase = RosterPhase::Idle;
    }

    /// Editable rows, in display and save order.
    #[must_use]
    pub fn rows(&self) -> &[RosterRow] {
        &self.rows
    }

    /// Editor lifecycle.
    #[must_use]
    pub const fn phase(&self) -> &RosterPhase {
        &self.phase
    }

    /// Current banner, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Whether a save is in flight.
    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.phase == RosterPhase::Saving
    }

    /// Whether rows may be mutated right now.
    const fn is_editable(&self) -> bool {
        matches!(self.phase, RosterPhase::Ready | RosterPhase::Saving)
    }

    /// Mints a fresh row identity.
    const fn mint_id(&mut self) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        id
    }

    /// Replaces the banner and stamps it.
    fn set_notice(&mut self, notice: Notice) -> NoticeSeq {
        self.notice_seq = self.notice_seq.next();
        self.notice = Some(notice);
        self.notice_seq
    }
}

/// Coerces raw score text the way the editor's numeric column does:
/// unparseable input becomes 0. Non-finite values also coerce to 0 so the
/// save payload stays representable in JSON.
#[must_use]
pub fn parse_score(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
