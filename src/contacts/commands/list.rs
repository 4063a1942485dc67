use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_contacts;
use crate::store::{Backend, ContactStore};

pub fn run<B: Backend>(store: &ContactStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_contacts(index_contacts(store.contacts())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_in_insertion_order() {
        let store = StoreFixture::new()
            .with_contact("Zed", "1111111111", "z@b.co")
            .with_contact("Amy", "2222222222", "a@b.co")
            .store;

        let result = run(&store).unwrap();
        let names: Vec<_> = result
            .listed_contacts
            .iter()
            .map(|dc| dc.contact.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }
}
