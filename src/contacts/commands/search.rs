use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{DisplayContact, DisplayIndex};
use crate::store::{Backend, ContactStore};

/// An empty keyword shows the full list. Matches keep their full-list index.
pub fn run<B: Backend>(store: &ContactStore<B>, keyword: &str) -> Result<CmdResult> {
    if keyword.is_empty() {
        return super::list::run(store);
    }

    let listed = store
        .search_indexed(keyword)
        .into_iter()
        .map(|(pos, contact)| DisplayContact {
            index: DisplayIndex::from_position(pos),
            contact: contact.clone(),
        })
        .collect();

    Ok(CmdResult::default().with_listed_contacts(listed))
}
