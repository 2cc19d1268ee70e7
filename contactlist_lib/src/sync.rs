//! Reconciles fetch completions with the displayed view.

use contacts_api::types::ContactPage;
use contacts_api::ContactQuery;

use crate::config::ResponsePolicy;
use crate::view::{ViewState, DELETE_FAILED_MESSAGE, FETCH_FAILED_MESSAGE};

/// Identifies one issued fetch and the query it was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: ContactQuery,
}

/// What a completion did to the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The page replaced the displayed one.
    Applied,
    /// The fetch failed; the displayed page was kept and the error set.
    Failed,
    /// A newer fetch was issued since; the completion was dropped.
    Discarded,
}

/// Owns the view and the generation counter for issued fetches.
#[derive(Debug)]
pub struct Synchronizer {
    latest: u64,
    policy: ResponsePolicy,
    view: ViewState,
}

impl Synchronizer {
    pub fn new(policy: ResponsePolicy) -> Self {
        Self {
            latest: 0,
            policy,
            view: ViewState::default(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Generation of the most recently issued fetch, 0 before the first.
    pub fn latest_generation(&self) -> u64 {
        self.latest
    }

    /// Tags a fetch for `query` with the next generation.
    pub fn issue(&mut self, query: &ContactQuery) -> FetchTicket {
        self.latest += 1;
        FetchTicket {
            generation: self.latest,
            query: query.clone(),
        }
    }

    /// Applies a fetch completion according to the response policy.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<ContactPage, contacts_api::Error>,
    ) -> SyncOutcome {
        if self.policy == ResponsePolicy::LatestOnly && ticket.generation != self.latest {
            tracing::debug!(
                "Discarding stale fetch generation {} (latest {})",
                ticket.generation,
                self.latest
            );
            return SyncOutcome::Discarded;
        }

        match result {
            Ok(page) => {
                tracing::debug!(
                    "Applying fetch generation {}: {} contacts, {} pages",
                    ticket.generation,
                    page.content.len(),
                    page.total_pages
                );
                self.view.apply_page(page);
                SyncOutcome::Applied
            }
            Err(e) => {
                tracing::error!(
                    "Failed to fetch contacts (generation {}, query {:?}): {}",
                    ticket.generation,
                    ticket.query,
                    e
                );
                self.view.set_error(FETCH_FAILED_MESSAGE);
                SyncOutcome::Failed
            }
        }
    }

    /// Records a failed delete. The displayed page is left alone.
    pub fn delete_failed(&mut self, id: contacts_api::types::ContactId, err: &contacts_api::Error) {
        tracing::error!("Failed to delete contact {}: {}", id, err);
        self.view.set_error(DELETE_FAILED_MESSAGE);
    }
}
