//! The contact list view controller.
//!
//! Setter calls update the canonical query and start a fetch for it in the
//! background. Completions are applied one at a time through
//! [`ContactList::next_completion`], so the owner decides when the view
//! changes while requests stay in flight concurrently.

use std::sync::Arc;

use contacts_api::types::{Contact, ContactId, ContactPage};
use contacts_api::{Client, ContactQuery, ContactSortBy, SortDirection};
use tokio::task::JoinSet;

use crate::config::ListConfig;
use crate::error::ContactListError;
use crate::query_state::{QueryState, RefreshKey};
use crate::service::ContactService;
use crate::sync::{FetchTicket, SyncOutcome, Synchronizer};
use crate::view::{PageControls, ViewState};

type SelectHandler = Box<dyn FnMut(&Contact) + Send>;

/// Something that changed after a background request finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListEvent {
    Fetched {
        generation: u64,
        outcome: SyncOutcome,
    },
    /// The delete succeeded and a re-fetch of the current query was issued.
    Deleted { id: ContactId, refetch: u64 },
    DeleteFailed { id: ContactId },
}

enum Completion {
    Fetch(FetchTicket, Result<ContactPage, contacts_api::Error>),
    Delete(ContactId, Result<(), contacts_api::Error>),
}

/// A paginated, searchable, sortable contact list backed by a remote service.
pub struct ContactList<S> {
    service: Arc<S>,
    state: QueryState,
    sync: Synchronizer,
    tasks: JoinSet<Completion>,
    on_select: Option<SelectHandler>,
}

impl ContactList<Client> {
    /// Builds a list talking to the service at `config.base_url`.
    pub fn connect(config: &ListConfig) -> Result<Self, ContactListError> {
        let client = Client::with_base_url(&config.base_url)?;
        Ok(Self::new(client, config))
    }
}

impl<S: ContactService> ContactList<S> {
    pub fn new(service: S, config: &ListConfig) -> Self {
        Self {
            service: Arc::new(service),
            state: QueryState::new(config.page_size),
            sync: Synchronizer::new(config.response_policy),
            tasks: JoinSet::new(),
            on_select: None,
        }
    }

    /// Replaces the default starting query. Call before [`ContactList::mount`].
    pub fn starting_at(mut self, query: ContactQuery) -> Self {
        self.state = QueryState::from_query(query);
        self
    }

    /// Registers the callback that receives contacts picked for editing.
    pub fn on_select<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&Contact) + Send + 'static,
    {
        self.on_select = Some(Box::new(handler));
        self
    }

    pub fn query(&self) -> &ContactQuery {
        self.state.query()
    }

    pub fn view(&self) -> &ViewState {
        self.sync.view()
    }

    pub fn controls(&self) -> PageControls {
        PageControls::new(self.query().page(), self.view().total_pages())
    }

    /// Number of fetches and deletes still running.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Issues the initial fetch. Must be called from within a tokio runtime.
    pub fn mount(&mut self) -> u64 {
        self.fetch()
    }

    pub fn set_search(&mut self, text: &str) -> Option<u64> {
        let changed = self.state.set_search(text);
        self.fetch_if(changed)
    }

    pub fn set_sort_by(&mut self, sort_by: ContactSortBy) -> Option<u64> {
        let changed = self.state.set_sort_by(sort_by);
        self.fetch_if(changed)
    }

    pub fn set_sort_dir(&mut self, sort_dir: SortDirection) -> Option<u64> {
        let changed = self.state.set_sort_dir(sort_dir);
        self.fetch_if(changed)
    }

    pub fn set_page(&mut self, page: u32) -> Option<u64> {
        let changed = self.state.set_page(page);
        self.fetch_if(changed)
    }

    /// Re-fetches the current query when `key` differs from the last one seen.
    pub fn observe_refresh(&mut self, key: RefreshKey) -> Option<u64> {
        let changed = self.state.observe_refresh(key);
        self.fetch_if(changed)
    }

    /// Starts deleting `id`. The row stays visible until the re-fetch that
    /// follows a successful delete has been applied.
    pub fn delete(&mut self, id: ContactId) {
        tracing::debug!("Deleting contact {}", id);
        let service = Arc::clone(&self.service);
        self.tasks.spawn(async move {
            let result = service.delete_contact(id).await;
            Completion::Delete(id, result)
        });
    }

    /// Hands `contact` to the selection callback, if one is registered.
    pub fn select(&mut self, contact: &Contact) {
        if let Some(handler) = self.on_select.as_mut() {
            handler(contact);
        }
    }

    /// Selects the displayed contact with `id`. Returns `false` when no such
    /// row is on screen.
    pub fn edit(&mut self, id: ContactId) -> bool {
        let Some(contact) = self.view().contacts().iter().find(|c| c.id == id).cloned() else {
            return false;
        };
        self.select(&contact);
        true
    }

    /// Waits for the next background request to finish and applies it.
    /// Returns `None` once nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<ListEvent> {
        loop {
            match self.tasks.join_next().await? {
                Ok(completion) => return Some(self.apply(completion)),
                Err(e) => tracing::error!("Contact list task did not complete: {}", e),
            }
        }
    }

    /// Applies completions until nothing is in flight, including re-fetches
    /// started by deletes along the way.
    pub async fn settle(&mut self) -> Vec<ListEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.next_completion().await {
            events.push(event);
        }
        events
    }

    fn fetch_if(&mut self, changed: bool) -> Option<u64> {
        changed.then(|| self.fetch())
    }

    fn fetch(&mut self) -> u64 {
        let ticket = self.sync.issue(self.state.query());
        let generation = ticket.generation;
        tracing::debug!("Issuing fetch generation {}: {:?}", generation, ticket.query);

        let service = Arc::clone(&self.service);
        self.tasks.spawn(async move {
            let result = service.list_contacts(&ticket.query).await;
            Completion::Fetch(ticket, result)
        });
        generation
    }

    fn apply(&mut self, completion: Completion) -> ListEvent {
        match completion {
            Completion::Fetch(ticket, result) => ListEvent::Fetched {
                generation: ticket.generation,
                outcome: self.sync.complete(&ticket, result),
            },
            Completion::Delete(id, Ok(())) => {
                tracing::info!("Deleted contact {}", id);
                let refetch = self.fetch();
                ListEvent::Deleted { id, refetch }
            }
            Completion::Delete(id, Err(e)) => {
                self.sync.delete_failed(id, &e);
                ListEvent::DeleteFailed { id }
            }
        }
    }
}
