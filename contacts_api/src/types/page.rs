use serde::{Deserialize, Serialize};

use super::Contact;

/// One page of results as returned by the service.
///
/// Only `content` and `totalPages` are required; the remaining paging
/// fields are read when the service sends them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
    /// Zero-based index of this page, as echoed by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_pages: u32) -> Self {
        Self {
            content,
            total_pages,
            total_elements: None,
            number: None,
            size: None,
        }
    }
}

pub type ContactPage = Page<Contact>;
