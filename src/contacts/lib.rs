//! # Contacts Architecture
//!
//! Contacts is a small contact book: an ordered list of name/phone/email
//! records kept in a single JSON file. The library is UI-agnostic; the
//! `contacts` binary is one front end over it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints lists and messages              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, parses selections into display indexes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, name disambiguation, selection checks        │
//! │  - Returns contacts to show plus leveled messages           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactStore: ordered list, full rewrite on each change  │
//! │  - Backend trait: FileBackend (production), MemBackend      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store never validates and never renames. Field checks live in
//! [`validation`]; the "Alice", "Alice (1)", "Alice (2)" renaming lives in
//! [`commands::add`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Shell operations (add, delete, update, search, list, view, config)
//! - [`store`]: `ContactStore` and its backends
//! - [`model`]: `Contact` and the `ContactInput` form DTO
//! - [`validation`]: Phone and email checks
//! - [`index`]: 1-based display indexes
//! - [`config`]: Configuration file and data file resolution
//! - [`logging`]: Logger bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
