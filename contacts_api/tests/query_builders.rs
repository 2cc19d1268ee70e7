use contacts_api::{ContactQuery, ContactSortBy, Query, SortDirection, DEFAULT_PAGE_SIZE};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/api/contacts").unwrap()
}

fn pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[test]
fn contact_query_defaults() {
    let query = ContactQuery::default();
    assert_eq!(query.page(), 0);
    assert_eq!(query.page_size(), DEFAULT_PAGE_SIZE);
    assert_eq!(query.search, "");
    assert_eq!(query.sort_by, ContactSortBy::Name);
    assert_eq!(query.common.sort_direction, SortDirection::Asc);
}

#[test]
fn contact_query_always_sends_all_five_fields() {
    let url = ContactQuery::default().add_to_url(&base_url());
    let keys: Vec<String> = pairs(&url).into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["page", "size", "search", "sortBy", "sortDir"]);
}

#[test]
fn contact_query_empty_search_is_sent_blank() {
    let url = ContactQuery::default().add_to_url(&base_url());
    assert!(pairs(&url).contains(&("search".to_string(), String::new())));
}

#[test]
fn contact_query_search_is_not_trimmed() {
    let url = ContactQuery::default()
        .with_search("  Ada ")
        .add_to_url(&base_url());
    assert!(pairs(&url).contains(&("search".to_string(), "  Ada ".to_string())));
}

#[test]
fn contact_query_sort_variants() {
    let url = ContactQuery::default()
        .with_sort_by(ContactSortBy::Email)
        .with_sort_direction(SortDirection::Desc)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("sortBy=email"));
    assert!(query.contains("sortDir=desc"));
}

#[test]
fn contact_query_pagination() {
    let url = ContactQuery::default()
        .with_page(4)
        .with_page_size(50)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=4"));
    assert!(query.contains("size=50"));
}

#[test]
fn sort_direction_parses_wire_names() {
    assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
    assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
    assert!("up".parse::<SortDirection>().is_err());
}
