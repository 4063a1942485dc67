use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ContactsError, Result};
use crate::index::{index_contacts, DisplayIndex};
use crate::model::ContactInput;
use crate::store::{Backend, ContactStore};
use crate::validation::validate_input;

use super::helpers::resolve_selection;

/// Replaces the selected contact with `input`. Names are stored as given.
pub fn run<B: Backend>(
    store: &mut ContactStore<B>,
    selection: Option<DisplayIndex>,
    input: &ContactInput,
) -> Result<CmdResult> {
    let position = resolve_selection(store, selection, "update")?;
    let contact = validate_input(input)?;
    if store.is_duplicate_except(&contact, position) {
        return Err(ContactsError::Duplicate(contact.name));
    }
    store.update(position, contact.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact updated successfully: {}",
        contact.name
    )));

    Ok(result
        .with_affected_contacts(vec![contact])
        .with_listed_contacts(index_contacts(store.contacts())))
}
