//! HTTP client for the contact service REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{ContactQuery, Query},
    types::{Contact, ContactId, ContactPage},
    Error,
};

/// Request timeout for contact service calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const CONTACTS_PATH: &str = "/api/contacts";

/// HTTP client for the contact service.
///
/// Holds one pooled `reqwest::Client`; cloning is cheap and shares the pool.
#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
    /// Base URL for the service, without the `/api/contacts` path.
    base_api_url: String,
}

impl Client {
    /// Creates a new client with a custom base URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            client,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get_url<Q: Query>(&self, path: &str, query: Option<&Q>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    /// Sends the request and returns the body of a successful response.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, Error> {
        let resp = request
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach contact service: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let body = self.send(self.client.get(url)).await?;

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::MalformedResponse(e.to_string())
        })
    }

    /// Fetches one page of contacts matching the given query.
    pub async fn get_contacts(&self, query: &ContactQuery) -> Result<ContactPage, Error> {
        self.get::<ContactPage, ContactQuery>(CONTACTS_PATH, Some(query))
            .await
    }

    /// Fetches a single contact by id.
    pub async fn get_contact(&self, id: ContactId) -> Result<Contact, Error> {
        self.get::<Contact, ContactQuery>(format!("{}/{}", CONTACTS_PATH, id).as_str(), None)
            .await
    }

    /// Deletes a contact. Any 2xx status counts as success; the body is ignored.
    pub async fn delete_contact(&self, id: ContactId) -> Result<(), Error> {
        let url =
            self.get_url::<ContactQuery>(format!("{}/{}", CONTACTS_PATH, id).as_str(), None)?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() <= 2000 + "...[truncated]".len());
    }

    #[test]
    fn trailing_slash_in_base_url_is_dropped() {
        let client = Client::with_base_url("http://localhost:9000/").unwrap();
        let url = client
            .get_url(CONTACTS_PATH, Some(&ContactQuery::default()))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/api/contacts?page=0&size=10&search=&sortBy=name&sortDir=asc"
        );
    }
}
