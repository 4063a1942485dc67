use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ContactsError, Result};
use crate::index::index_contacts;
use crate::model::ContactInput;
use crate::store::{Backend, ContactStore};
use crate::validation::validate_input;

pub fn run<B: Backend>(store: &mut ContactStore<B>, input: &ContactInput) -> Result<CmdResult> {
    let mut contact = validate_input(input)?;
    contact.name = disambiguate_name(store, &contact.name);

    // Cannot fire after disambiguation today. Merging duplicates is not supported.
    if store.is_duplicate(&contact) {
        return Err(ContactsError::Duplicate(contact.name));
    }

    store.add(contact.clone())?;

    let mut result = CmdResult::default();
    if contact.name != input.name {
        result.add_message(CmdMessage::warning(format!(
            "A contact named \"{}\" already exists, saved as \"{}\".",
            input.name, contact.name
        )));
    }
    result.add_message(CmdMessage::success("Contact added successfully."));

    Ok(result
        .with_affected_contacts(vec![contact])
        .with_listed_contacts(index_contacts(store.contacts())))
}

/// Appends " (1)", " (2)", ... to `name` until no stored contact uses it.
pub fn disambiguate_name<B: Backend>(store: &ContactStore<B>, name: &str) -> String {
    let mut candidate = name.to_string();
    let mut counter = 1;
    while store.is_duplicate_name(&candidate) {
        candidate = format!("{} ({})", name, counter);
        counter += 1;
    }
    candidate
}
