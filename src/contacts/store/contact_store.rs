use super::Backend;
use crate::error::{ContactsError, Result};
use crate::model::Contact;
use log::{debug, warn};

/// The ordered contact sequence plus the backend it is persisted to.
///
/// Every mutating call rewrites the whole document. Validation is the
/// caller's job; the store accepts any record it is given.
pub struct ContactStore<B: Backend> {
    contacts: Vec<Contact>,
    backend: B,
}

impl<B: Backend> ContactStore<B> {
    /// An empty store. Nothing is read until [`reload`](Self::reload).
    pub fn new(backend: B) -> Self {
        Self {
            contacts: Vec::new(),
            backend,
        }
    }

    /// Build a store and load whatever the backend already holds.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self::new(backend);
        store.reload()?;
        Ok(store)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn add(&mut self, contact: Contact) -> Result<()> {
        debug!("adding contact {:?}", contact.name);
        self.contacts.push(contact);
        self.persist()
    }

    /// True when a stored record has both the same name and the same phone.
    pub fn is_duplicate(&self, candidate: &Contact) -> bool {
        self.contacts
            .iter()
            .any(|c| c.name == candidate.name && c.phone == candidate.phone)
    }

    /// Like [`is_duplicate`](Self::is_duplicate), ignoring the record at `index`.
    pub fn is_duplicate_except(&self, candidate: &Contact, index: usize) -> bool {
        self.contacts
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && c.name == candidate.name && c.phone == candidate.phone)
    }

    pub fn is_duplicate_name(&self, name: &str) -> bool {
        self.contacts.iter().any(|c| c.name == name)
    }

    /// Removes and returns the record at `index`.
    pub fn delete(&mut self, index: usize) -> Result<Contact> {
        self.check_index(index)?;
        let removed = self.contacts.remove(index);
        debug!("deleted contact {} ({:?})", index, removed.name);
        self.persist()?;
        Ok(removed)
    }

    /// Replaces the record at `index` wholesale, returning the previous one.
    pub fn update(&mut self, index: usize, contact: Contact) -> Result<Contact> {
        self.check_index(index)?;
        let previous = std::mem::replace(&mut self.contacts[index], contact);
        debug!("updated contact {} ({:?})", index, previous.name);
        self.persist()?;
        Ok(previous)
    }

    /// Matching records in stored order.
    ///
    /// Names match case-insensitively, phones as a literal substring.
    pub fn search(&self, keyword: &str) -> Vec<Contact> {
        self.search_indexed(keyword)
            .into_iter()
            .map(|(_, c)| c.clone())
            .collect()
    }

    /// Like [`search`](Self::search), but keeps each match's position.
    pub fn search_indexed(&self, keyword: &str) -> Vec<(usize, &Contact)> {
        let keyword_lower = keyword.to_lowercase();
        self.contacts
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                c.name.to_lowercase().contains(&keyword_lower) || c.phone.contains(keyword)
            })
            .collect()
    }

    /// Serializes the full sequence and overwrites the backing document.
    pub fn persist(&self) -> Result<()> {
        let document =
            serde_json::to_string_pretty(&self.contacts).map_err(ContactsError::Serialization)?;
        self.backend.write(&document)?;
        debug!(
            "persisted {} contacts to {}",
            self.contacts.len(),
            self.backend.location().display()
        );
        Ok(())
    }

    /// Re-reads the backing document.
    ///
    /// A missing document leaves the store empty. A malformed one is reported
    /// and the in-memory sequence is left untouched.
    pub fn reload(&mut self) -> Result<()> {
        let Some(document) = self.backend.read()? else {
            debug!(
                "no contacts file at {}, starting empty",
                self.backend.location().display()
            );
            return Ok(());
        };

        match serde_json::from_str::<Vec<Contact>>(&document) {
            Ok(contacts) => {
                debug!(
                    "loaded {} contacts from {}",
                    contacts.len(),
                    self.backend.location().display()
                );
                self.contacts = contacts;
                Ok(())
            }
            Err(source) => {
                warn!(
                    "malformed contacts file {}: {}",
                    self.backend.location().display(),
                    source
                );
                Err(ContactsError::Malformed {
                    path: self.backend.location().to_path_buf(),
                    source,
                })
            }
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.contacts.len() {
            return Err(ContactsError::IndexOutOfRange {
                index,
                len: self.contacts.len(),
            });
        }
        Ok(())
    }
}
