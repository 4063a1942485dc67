use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{DisplayContact, DisplayIndex};
use crate::store::{Backend, ContactStore};

use super::helpers::resolve_selection;

pub fn run<B: Backend>(
    store: &ContactStore<B>,
    selection: Option<DisplayIndex>,
) -> Result<CmdResult> {
    let position = resolve_selection(store, selection, "view")?;
    let listed = store
        .get(position)
        .map(|contact| DisplayContact {
            index: DisplayIndex::from_position(position),
            contact: contact.clone(),
        })
        .into_iter()
        .collect();
    Ok(CmdResult::default().with_listed_contacts(listed))
}
