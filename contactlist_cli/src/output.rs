use anyhow::Result;
use contactlist_lib::types::Contact;
use contactlist_lib::{PageControls, ViewState};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct ContactRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    #[serde(rename = "Phone")]
    phone: String,
}

// -- Row builders --

fn build_contact_rows(contacts: &[Contact]) -> Vec<ContactRow> {
    contacts
        .iter()
        .map(|c| ContactRow {
            id: c.id,
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
        })
        .collect()
}

// -- Table output --

pub fn print_contacts_table(contacts: &[Contact]) {
    println!("{}", Table::new(build_contact_rows(contacts)));
}

// -- Markdown output --

pub fn print_contacts_markdown(contacts: &[Contact]) {
    let mut table = Table::new(build_contact_rows(contacts));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_contacts_csv(contacts: &[Contact]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_contact_rows(contacts) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

pub fn print_contacts(contacts: &[Contact], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_contacts_table(contacts),
        OutputFormat::Json => print_json(contacts),
        OutputFormat::Csv => print_contacts_csv(contacts)?,
        OutputFormat::Markdown => print_contacts_markdown(contacts),
    }
    Ok(())
}

// -- Pagination and banners --

/// Renders the pagination bar. Disabled Prev/Next are wrapped in
/// parentheses, the current page in brackets.
pub fn render_controls(controls: &PageControls) -> String {
    let mut parts = Vec::with_capacity(controls.pages.len() + 2);
    parts.push(if controls.prev_enabled() {
        "Prev".to_string()
    } else {
        "(Prev)".to_string()
    });
    for button in &controls.pages {
        parts.push(if button.current {
            format!("[{}]", button.label())
        } else {
            button.label().to_string()
        });
    }
    parts.push(if controls.next_enabled() {
        "Next".to_string()
    } else {
        "(Next)".to_string()
    });
    parts.join(" ")
}

pub fn render_error(view: &ViewState) -> Option<String> {
    view.error().map(|message| format!("Error: {}", message))
}

/// Table, pagination bar and error banner, as the interactive session shows them.
pub fn print_view(view: &ViewState, controls: &PageControls) {
    print_contacts_table(view.contacts());
    println!("{}", render_controls(controls));
    if let Some(banner) = render_error(view) {
        println!("{}", banner);
    }
}
