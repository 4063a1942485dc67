//! # API Facade
//!
//! [`ContactsApi`] is the single entry point for front ends. It parses user
//! selections into [`DisplayIndex`]es and dispatches to `commands/*.rs`; it
//! holds no business logic and never prints.
//!
//! It is generic over the storage [`Backend`] so the same facade runs against
//! a real file ([`FileBackend`](crate::store::fs::FileBackend)) or memory.

use crate::commands;
use crate::error::{ContactsError, Result};
use crate::index::DisplayIndex;
use crate::model::ContactInput;
use crate::store::{Backend, ContactStore};
use std::path::{Path, PathBuf};

pub struct ContactsApi<B: Backend> {
    store: ContactStore<B>,
    config_dir: PathBuf,
}

impl<B: Backend> ContactsApi<B> {
    /// Wraps an empty store. Call [`reload`](Self::reload) to read the backing file.
    pub fn new(backend: B, config_dir: PathBuf) -> Self {
        Self {
            store: ContactStore::new(backend),
            config_dir,
        }
    }

    pub fn reload(&mut self) -> Result<()> {
        self.store.reload()
    }

    pub fn add_contact(&mut self, input: &ContactInput) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, input)
    }

    pub fn delete_contact(&mut self, selection: Option<&str>) -> Result<commands::CmdResult> {
        let selection = parse_selection(selection)?;
        commands::delete::run(&mut self.store, selection)
    }

    pub fn update_contact(
        &mut self,
        selection: Option<&str>,
        input: &ContactInput,
    ) -> Result<commands::CmdResult> {
        let selection = parse_selection(selection)?;
        commands::update::run(&mut self.store, selection, input)
    }

    pub fn search_contacts(&self, keyword: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, keyword)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_contact(&self, selection: Option<&str>) -> Result<commands::CmdResult> {
        let selection = parse_selection(selection)?;
        commands::view::run(&self.store, selection)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn store(&self) -> &ContactStore<B> {
        &self.store
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

fn parse_selection(selection: Option<&str>) -> Result<Option<DisplayIndex>> {
    selection
        .map(|s| s.parse::<DisplayIndex>().map_err(ContactsError::InvalidIndex))
        .transpose()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
