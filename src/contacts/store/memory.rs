use super::Backend;
use crate::error::{ContactsError, Result};
use std::cell::RefCell;
use std::io;
use std::path::Path;

/// In-memory backend for testing.
///
/// Holds the serialized document exactly as a file would, so parse failures
/// and round-trips behave the same as on disk.
#[derive(Default)]
pub struct MemBackend {
    document: RefCell<Option<String>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-existing document, valid or not.
    pub fn with_document(document: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.document.borrow_mut() = Some(document.into());
        backend
    }

    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// Overwrite the document behind the store's back.
    pub fn set_document(&self, document: impl Into<String>) {
        *self.document.borrow_mut() = Some(document.into());
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl Backend for MemBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.document.borrow().clone())
    }

    fn write(&self, document: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ContactsError::Io(io::Error::other("simulated write error")));
        }
        *self.document.borrow_mut() = Some(document.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> &Path {
        Path::new("<memory>")
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Contact;
    use crate::store::ContactStore;

    pub struct StoreFixture {
        pub store: ContactStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: ContactStore::new(MemBackend::new()),
            }
        }

        /// Adds `count` contacts named "Contact 1".."Contact N" with distinct phones.
        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let contact = Contact::new(
                    format!("Contact {}", i + 1),
                    format!("{:010}", 5_550_000_000u64 + i as u64),
                    format!("contact{}@example.com", i + 1),
                );
                self.store.add(contact).unwrap();
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phone: &str, email: &str) -> Self {
            self.store.add(Contact::new(name, phone, email)).unwrap();
            self
        }
    }
}
