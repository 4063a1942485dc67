use crate::error::{ContactsError, Result};
use crate::index::DisplayIndex;
use crate::store::{Backend, ContactStore};

/// Turns the selected row into a store position.
///
/// `action` names the operation for the "nothing selected" message.
pub fn resolve_selection<B: Backend>(
    store: &ContactStore<B>,
    selection: Option<DisplayIndex>,
    action: &'static str,
) -> Result<usize> {
    let index = selection.ok_or(ContactsError::NoSelection(action))?;
    if index.position() >= store.len() {
        return Err(ContactsError::UnknownIndex(index.get()));
    }
    Ok(index.position())
}
