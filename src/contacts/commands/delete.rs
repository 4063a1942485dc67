use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{index_contacts, DisplayIndex};
use crate::store::{Backend, ContactStore};

use super::helpers::resolve_selection;

pub fn run<B: Backend>(
    store: &mut ContactStore<B>,
    selection: Option<DisplayIndex>,
) -> Result<CmdResult> {
    let position = resolve_selection(store, selection, "delete")?;
    let removed = store.delete(position)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact deleted successfully: {}",
        removed.name
    )));

    Ok(result
        .with_affected_contacts(vec![removed])
        .with_listed_contacts(index_contacts(store.contacts())))
}
