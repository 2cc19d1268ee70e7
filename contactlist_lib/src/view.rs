//! Displayed state and the pagination controls derived from it.

use contacts_api::types::{Contact, ContactPage};

/// Shown when a list fetch fails. The underlying error only goes to the log.
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to load contacts. Please ensure the backend is running.";

/// Shown when a delete request fails.
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete contact.";

/// What the list currently shows: the last applied page and an optional
/// error banner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    contacts: Vec<Contact>,
    total_pages: u32,
    error: Option<String>,
}

impl ViewState {
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Records and page count are replaced together, and the error cleared.
    pub(crate) fn apply_page(&mut self, page: ContactPage) {
        self.contacts = page.content;
        self.total_pages = page.total_pages;
        self.error = None;
    }

    /// Only the error changes; the displayed page stays as it was.
    pub(crate) fn set_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}

/// One numbered button in the pagination bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageButton {
    /// Zero-based page index the button selects.
    pub index: u32,
    pub current: bool,
}

impl PageButton {
    /// One-based label shown to the user.
    pub fn label(&self) -> u32 {
        self.index + 1
    }
}

/// Most page buttons rendered at once. Longer results get a window of
/// buttons around the current page.
pub const MAX_PAGE_BUTTONS: u32 = 100;

/// Prev/Next targets and one button per page, windowed to
/// [`MAX_PAGE_BUTTONS`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageControls {
    pub prev: Option<u32>,
    pub next: Option<u32>,
    pub pages: Vec<PageButton>,
}

impl PageControls {
    pub fn new(page: u32, total_pages: u32) -> Self {
        let prev = page.checked_sub(1);
        let next = if u64::from(page) + 1 < u64::from(total_pages) {
            Some(page + 1)
        } else {
            None
        };
        let (start, end) = button_window(page, total_pages);
        let pages = (start..end)
            .map(|index| PageButton {
                index,
                current: index == page,
            })
            .collect();
        Self { prev, next, pages }
    }

    pub fn prev_enabled(&self) -> bool {
        self.prev.is_some()
    }

    pub fn next_enabled(&self) -> bool {
        self.next.is_some()
    }
}

/// Half-open range of page indices that get a button.
fn button_window(page: u32, total_pages: u32) -> (u32, u32) {
    if total_pages <= MAX_PAGE_BUTTONS {
        return (0, total_pages);
    }
    let start = page
        .saturating_sub(MAX_PAGE_BUTTONS / 2)
        .min(total_pages - MAX_PAGE_BUTTONS);
    (start, start + MAX_PAGE_BUTTONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: i64, name: &str) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: String::new(),
        }
    }

    #[test]
    fn new_view_is_empty() {
        let view = ViewState::default();
        assert!(view.contacts().is_empty());
        assert_eq!(view.total_pages(), 0);
        assert_eq!(view.error(), None);
    }

    #[test]
    fn apply_page_replaces_everything_and_clears_error() {
        let mut view = ViewState::default();
        view.set_error(FETCH_FAILED_MESSAGE);
        view.apply_page(ContactPage::new(vec![contact(1, "Ada")], 3));
        assert_eq!(view.contacts().len(), 1);
        assert_eq!(view.total_pages(), 3);
        assert_eq!(view.error(), None);

        view.apply_page(ContactPage::new(vec![], 0));
        assert!(view.contacts().is_empty());
        assert_eq!(view.total_pages(), 0);
    }

    #[test]
    fn set_error_keeps_page() {
        let mut view = ViewState::default();
        view.apply_page(ContactPage::new(vec![contact(1, "Ada")], 2));
        let before = view.clone();
        view.set_error(DELETE_FAILED_MESSAGE);
        assert_eq!(view.contacts(), before.contacts());
        assert_eq!(view.total_pages(), before.total_pages());
        assert_eq!(view.error(), Some(DELETE_FAILED_MESSAGE));
    }

    #[test]
    fn controls_with_zero_pages() {
        let controls = PageControls::new(0, 0);
        assert!(controls.pages.is_empty());
        assert!(!controls.prev_enabled());
        assert!(!controls.next_enabled());
    }

    #[test]
    fn controls_on_first_page() {
        let controls = PageControls::new(0, 3);
        assert_eq!(controls.prev, None);
        assert_eq!(controls.next, Some(1));
        assert_eq!(controls.pages.len(), 3);
        assert!(controls.pages[0].current);
        assert_eq!(controls.pages[2].label(), 3);
    }

    #[test]
    fn controls_in_the_middle() {
        let controls = PageControls::new(1, 3);
        assert_eq!(controls.prev, Some(0));
        assert_eq!(controls.next, Some(2));
        assert_eq!(controls.pages.iter().filter(|b| b.current).count(), 1);
    }

    #[test]
    fn controls_on_last_page() {
        let controls = PageControls::new(2, 3);
        assert_eq!(controls.prev, Some(1));
        assert_eq!(controls.next, None);
    }

    #[test]
    fn controls_past_the_end() {
        // A page left over from a longer result set: nothing is current,
        // Prev still walks back.
        let controls = PageControls::new(5, 2);
        assert_eq!(controls.prev, Some(4));
        assert_eq!(controls.next, None);
        assert!(controls.pages.iter().all(|b| !b.current));
    }

    #[test]
    fn huge_page_count_is_windowed() {
        let controls = PageControls::new(0, 4_000_000_000);
        assert_eq!(controls.pages.len(), MAX_PAGE_BUTTONS as usize);
        assert_eq!(controls.pages[0].index, 0);
        assert!(controls.pages[0].current);
        assert_eq!(controls.next, Some(1));
    }

    #[test]
    fn window_follows_current_page() {
        let controls = PageControls::new(500, 1_000);
        assert_eq!(controls.pages.len(), MAX_PAGE_BUTTONS as usize);
        assert_eq!(controls.pages[0].index, 450);
        assert!(controls.pages.iter().any(|b| b.index == 500 && b.current));

        let last = PageControls::new(999, 1_000);
        assert_eq!(last.pages[0].index, 900);
        assert_eq!(last.pages.last().map(|b| b.index), Some(999));
        assert_eq!(last.next, None);
    }

    #[test]
    fn exactly_max_buttons_are_all_shown() {
        let controls = PageControls::new(70, MAX_PAGE_BUTTONS);
        assert_eq!(controls.pages.len(), MAX_PAGE_BUTTONS as usize);
        assert_eq!(controls.pages[0].index, 0);
    }
}
