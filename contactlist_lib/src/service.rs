//! The remote operations the list view depends on.

use std::future::Future;

use contacts_api::types::{ContactId, ContactPage};
use contacts_api::{Client, ContactQuery, Error};

/// Remote contact store as seen by the list view.
///
/// Futures must be `Send` so the view can run them as background tasks.
pub trait ContactService: Send + Sync + 'static {
    fn list_contacts(
        &self,
        query: &ContactQuery,
    ) -> impl Future<Output = Result<ContactPage, Error>> + Send;

    fn delete_contact(&self, id: ContactId) -> impl Future<Output = Result<(), Error>> + Send;
}

impl ContactService for Client {
    async fn list_contacts(&self, query: &ContactQuery) -> Result<ContactPage, Error> {
        self.get_contacts(query).await
    }

    async fn delete_contact(&self, id: ContactId) -> Result<(), Error> {
        Client::delete_contact(self, id).await
    }
}
