use contacts_api::types::{Contact, ContactPage};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_contacts_page() {
    let json = load_fixture("contacts.json");
    let page: ContactPage = serde_json::from_str(&json).unwrap();
    assert_eq!(page.content.len(), 3);
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.total_elements, Some(11));
    assert_eq!(page.number, Some(0));
    assert_eq!(page.size, Some(3));

    let ada = &page.content[0];
    assert_eq!(ada.id, 1);
    assert_eq!(ada.name, "Ada Lovelace");
    assert_eq!(ada.email, "ada@example.com");
    assert_eq!(ada.phone, "555-0101");
    assert_eq!(page.content[2].phone, "");
}

#[test]
fn deserialize_contacts_empty() {
    let json = load_fixture("contacts_empty.json");
    let page: ContactPage = serde_json::from_str(&json).unwrap();
    assert!(page.content.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.total_elements, None);
}

#[test]
fn deserialize_single_contact() {
    let json = load_fixture("contact.json");
    let contact: Contact = serde_json::from_str(&json).unwrap();
    assert_eq!(contact.id, 2);
    assert_eq!(contact.name, "Alan Turing");
}

#[test]
fn page_without_total_pages_is_rejected() {
    let result = serde_json::from_str::<ContactPage>(r#"{"content": []}"#);
    assert!(result.is_err());
}

#[test]
fn page_with_negative_total_pages_is_rejected() {
    let result = serde_json::from_str::<ContactPage>(r#"{"content": [], "totalPages": -1}"#);
    assert!(result.is_err());
}
