use std::path::PathBuf;
use thiserror::Error;

/// Reasons a [`ContactInput`](crate::model::ContactInput) is rejected before it reaches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name and Phone are required.")]
    MissingField,

    #[error("Invalid phone number. Phone number should have 10 digits.")]
    InvalidPhone,

    #[error("Invalid email address.")]
    InvalidEmail,
}

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unable to load contacts from '{}'. The file contains invalid JSON data.", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Index {index} is out of range ({len} contacts)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{0}")]
    InvalidIndex(String),

    #[error("Index {0} not found")]
    UnknownIndex(usize),

    #[error("Please select a contact to {0}.")]
    NoSelection(&'static str),

    #[error("Contact already exists: {0}")]
    Duplicate(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, ContactsError>;
