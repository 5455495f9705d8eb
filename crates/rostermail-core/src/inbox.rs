//! Inbox view state: folder selection, fetch lifecycle, search.

use rostermail_api::{Email, Folder};
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::generation::Generation;

/// Lifecycle of the email list for the selected folder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InboxPhase {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A fetch is in flight; no usable list is held.
    Loading,
    /// The last fetch succeeded; the held list is current for the folder.
    Ready(Vec<Email>),
    /// The last fetch failed; a retry re-runs the same request.
    Failed(LoadError),
}

/// One fetch the caller must issue: the folder to query and the stamp the
/// response must carry back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Folder to query.
    pub folder: Folder,
    /// Stamp the response must carry back.
    pub generation: Generation,
}

/// State machine for the inbox view.
///
/// Every transition is one of the methods below. Methods returning a
/// [`FetchRequest`] ask the caller to issue exactly one backend fetch and
/// report its outcome through [`finish_fetch`](Self::finish_fetch), which
/// discards responses from superseded requests.
#[derive(Debug, Clone, Default)]
pub struct InboxState {
    /// Currently selected folder.
    folder: Folder,
    /// Live search text.
    query: String,
    /// Fetch lifecycle for the selected folder.
    phase: InboxPhase,
    /// Stamp of the latest issued fetch.
    latest: Generation,
}

impl InboxState {
    /// Creates an idle inbox on the default folder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters (or re-enters) the view: selection back to Inbox, search
    /// cleared, and the initial fetch begun.
    pub fn open(&mut self) -> FetchRequest {
        self.folder = Folder::default();
        self.query.clear();
        self.begin_fetch()
    }

    /// Switches to `folder` and begins its fetch.
    ///
    /// Selecting the already-selected folder is a no-op; the refresh
    /// control covers deliberate re-fetching.
    pub fn select_folder(&mut self, folder: Folder) -> Option<FetchRequest> {
        if folder == self.folder {
            return None;
        }
        self.folder = folder;
        Some(self.begin_fetch())
    }

    /// Re-runs the fetch for the current folder, from whatever state.
    pub fn refresh(&mut self) -> FetchRequest {
        self.begin_fetch()
    }

    /// Applies a fetch outcome.
    ///
    /// Returns `false` when the response was stale (its stamp is not the
    /// latest issued one) and was discarded without touching state.
    pub fn finish_fetch(
        &mut self,
        generation: Generation,
        outcome: Result<Vec<Email>, LoadError>,
    ) -> bool {
        if generation != self.latest {
            debug!(
                "Discarding stale email response (generation {generation}, latest {})",
                self.latest
            );
            return false;
        }
        self.phase = match outcome {
            Ok(emails) => {
                debug!("Loaded {} emails for {}", emails.len(), self.folder);
                InboxPhase::Ready(emails)
            }
            Err(err) => {
                warn!("Email fetch for {} failed: {err}", self.folder);
                InboxPhase::Failed(err)
            }
        };
        true
    }

    /// Updates the search text. Pure local state; never triggers a fetch.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Drops everything back to the initial state.
    ///
    /// The generation counter survives so a response issued before the
    /// reset can never match a request issued after it.
    pub fn reset(&mut self) {
        self.folder = Folder::default();
        self.query.clear();
        self.phase = InboxPhase::Idle;
    }

    /// Currently selected folder.
    #[must_use]
    pub const fn folder(&self) -> Folder {
        self.folder
    }

    /// Live search text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current fetch lifecycle.
    #[must_use]
    pub const fn phase(&self) -> &InboxPhase {
        &self.phase
    }

    /// The loaded list, empty unless the last fetch succeeded.
    #[must_use]
    pub fn emails(&self) -> &[Email] {
        match &self.phase {
            InboxPhase::Ready(emails) => emails,
            _ => &[],
        }
    }

    /// The loaded list narrowed by the search text.
    #[must_use]
    pub fn visible(&self) -> Vec<&Email> {
        filter_emails(self.emails(), &self.query)
    }

    /// Stamps and begins one fetch for the current folder.
    fn begin_fetch(&mut self) -> FetchRequest {
        self.latest = self.latest.next();
        self.phase = InboxPhase::Loading;
        FetchRequest {
            folder: self.folder,
            generation: self.latest,
        }
    }
}

/// Case-insensitive substring filter over sender and subject.
///
/// Pure: the underlying list is never mutated, and the result is a subset
/// of it. An empty (or whitespace-only) query matches everything.
#[must_use]
pub fn filter_emails<'a>(emails: &'a [Email], query: &str) -> Vec<&'a Email> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return emails.iter().collect();
    }
    emails
        .iter()
        .filter(|email| {
            email.sender.to_lowercase().contains(&needle)
                || email.subject.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;
    use rostermail_api::ErrorKind;

    use super::*;

    fn email(sender: &str, subject: &str, is_read: bool) -> Email {
        Email {
            subject: subject.to_string(),
            sender: sender.to_string(),
            datetime_received: "2024-03-11T09:30:00+03:00".to_string(),
            is_read,
        }
    }

    fn failure() -> LoadError {
        LoadError::new(ErrorKind::Network, "connection refused")
    }

    mod selection_tests {
        use super::*;

        #[test]
        fn test_open_starts_on_inbox_and_fetches() {
            let mut inbox = InboxState::new();
            assert_eq!(*inbox.phase(), InboxPhase::Idle);

            let request = inbox.open();
            assert_eq!(request.folder, Folder::Inbox);
            assert_eq!(*inbox.phase(), InboxPhase::Loading);
        }

        #[test]
        fn test_select_folder_issues_one_fetch_for_it() {
            let mut inbox = InboxState::new();
            inbox.open();

            let request = inbox.select_folder(Folder::Archive).unwrap();
            assert_eq!(request.folder, Folder::Archive);
            assert_eq!(inbox.folder(), Folder::Archive);
            assert_eq!(*inbox.phase(), InboxPhase::Loading);
        }

        #[test]
        fn test_reselecting_current_folder_is_a_no_op() {
            let mut inbox = InboxState::new();
            let request = inbox.open();
            inbox.finish_fetch(request.generation, Ok(vec![email("a", "b", true)]));

            assert!(inbox.select_folder(Folder::Inbox).is_none());
            assert_eq!(inbox.emails().len(), 1);
        }

        #[test]
        fn test_reopen_resets_selection_and_query() {
            let mut inbox = InboxState::new();
            inbox.open();
            inbox.select_folder(Folder::DeletedItems);
            inbox.set_query("invoice".to_string());

            let request = inbox.open();
            assert_eq!(request.folder, Folder::Inbox);
            assert_eq!(inbox.folder(), Folder::Inbox);
            assert!(inbox.query().is_empty());
        }

        #[test]
        fn test_reset_keeps_generation_monotonic() {
            let mut inbox = InboxState::new();
            let before = inbox.open();
            inbox.reset();
            assert_eq!(*inbox.phase(), InboxPhase::Idle);

            let after = inbox.refresh();
            assert!(after.generation > before.generation);
        }
    }

    mod fetch_tests {
        use super::*;

        #[test]
        fn test_success_replaces_the_list() {
            let mut inbox = InboxState::new();
            let first = inbox.open();
            assert!(inbox.finish_fetch(first.generation, Ok(vec![email("a", "one", true)])));
            assert_eq!(inbox.emails().len(), 1);

            let second = inbox.refresh();
            assert!(inbox.finish_fetch(
                second.generation,
                Ok(vec![email("b", "two", true), email("c", "three", false)]),
            ));
            let subjects: Vec<_> = inbox.emails().iter().map(|e| e.subject.as_str()).collect();
            assert_eq!(subjects, ["two", "three"]);
        }

        #[test]
        fn test_stale_response_is_discarded() {
            let mut inbox = InboxState::new();
            let first = inbox.open();
            let second = inbox.select_folder(Folder::Archive).unwrap();

            assert!(!inbox.finish_fetch(first.generation, Ok(vec![email("x", "stale", true)])));
            assert_eq!(*inbox.phase(), InboxPhase::Loading);

            assert!(inbox.finish_fetch(second.generation, Ok(vec![email("y", "fresh", true)])));
            assert_eq!(inbox.emails()[0].subject, "fresh");
        }

        #[test]
        fn test_stale_error_is_discarded_too() {
            let mut inbox = InboxState::new();
            let first = inbox.open();
            let second = inbox.refresh();

            assert!(!inbox.finish_fetch(first.generation, Err(failure())));
            assert_eq!(*inbox.phase(), InboxPhase::Loading);

            assert!(inbox.finish_fetch(second.generation, Ok(vec![])));
            assert_eq!(*inbox.phase(), InboxPhase::Ready(Vec::new()));
        }

        #[test]
        fn test_failure_then_retry_reissues_same_folder() {
            let mut inbox = InboxState::new();
            inbox.open();
            let request = inbox.select_folder(Folder::SentItems).unwrap();
            inbox.finish_fetch(request.generation, Err(failure()));

            match inbox.phase() {
                InboxPhase::Failed(err) => assert_eq!(err.kind, ErrorKind::Network),
                other => panic!("expected failed phase, got {other:?}"),
            }
            assert!(inbox.emails().is_empty());

            let retry = inbox.refresh();
            assert_eq!(retry.folder, Folder::SentItems);
            assert!(retry.generation > request.generation);
        }

        #[test]
        fn test_unread_flags_pass_through() {
            let mut inbox = InboxState::new();
            let request = inbox.open();
            inbox.finish_fetch(
                request.generation,
                Ok(vec![
                    email("a@x.com", "read one", true),
                    email("b@x.com", "unread", false),
                    email("c@x.com", "read two", true),
                ]),
            );

            let unread: Vec<_> = inbox.emails().iter().filter(|e| !e.is_read).collect();
            assert_eq!(unread.len(), 1);
            assert_eq!(unread[0].subject, "unread");
        }
    }

    mod filter_tests {
        use super::*;

        fn loaded_inbox() -> InboxState {
            let mut inbox = InboxState::new();
            let request = inbox.open();
            inbox.finish_fetch(
                request.generation,
                Ok(vec![
                    email("alice@corp.com", "Quarterly numbers", true),
                    email("bob@corp.com", "Lunch?", false),
                    email("carol@other.org", "quarterly planning", true),
                ]),
            );
            inbox
        }

        #[test]
        fn test_filter_matches_sender_and_subject_case_insensitive() {
            let inbox = loaded_inbox();
            let emails = inbox.emails();

            let by_subject = filter_emails(emails, "QUARTERLY");
            assert_eq!(by_subject.len(), 2);

            let by_sender = filter_emails(emails, "bob@");
            assert_eq!(by_sender.len(), 1);
            assert_eq!(by_sender[0].subject, "Lunch?");
        }

        #[test]
        fn test_filter_never_touches_the_loaded_list() {
            let mut inbox = loaded_inbox();
            let before = inbox.emails().to_vec();

            inbox.set_query("nothing matches this".to_string());
            assert!(inbox.visible().is_empty());
            assert_eq!(inbox.emails(), before);
        }

        #[test]
        fn test_query_change_does_not_refetch() {
            let mut inbox = loaded_inbox();
            inbox.set_query("bob".to_string());
            assert!(matches!(inbox.phase(), InboxPhase::Ready(_)));
        }

        #[test]
        fn test_blank_query_matches_everything() {
            let inbox = loaded_inbox();
            assert_eq!(filter_emails(inbox.emails(), "   ").len(), 3);
        }
    }

    prop_compose! {
        fn arb_email()(
            sender in "[a-zA-Z0-9@. ]{0,12}",
            subject in "[a-zA-Z0-9 ]{0,16}",
            is_read in any::<bool>(),
        ) -> Email {
            Email {
                subject,
                sender,
                datetime_received: String::new(),
                is_read,
            }
        }
    }

    proptest! {
        #[test]
        fn prop_filter_returns_a_subset(
            emails in proptest::collection::vec(arb_email(), 0..12),
            query in ".{0,8}",
        ) {
            let filtered = filter_emails(&emails, &query);
            prop_assert!(filtered.len() <= emails.len());
            for kept in filtered {
                prop_assert!(emails.contains(kept));
            }
        }

        #[test]
        fn prop_filter_is_idempotent(
            emails in proptest::collection::vec(arb_email(), 0..12),
            query in ".{0,8}",
        ) {
            let once: Vec<Email> = filter_emails(&emails, &query)
                .into_iter()
                .cloned()
                .collect();
            let twice: Vec<Email> = filter_emails(&once, &query)
                .into_iter()
                .cloned()
                .collect();
            prop_assert_eq!(once, twice);
        }
    }
}
