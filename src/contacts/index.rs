use crate::model::Contact;
use std::fmt;
use std::str::FromStr;

/// A user-facing, 1-based position in the contact list.
///
/// The store works with 0-based positions; this is what the list view shows
/// and what users type back to select a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    /// Returns `None` for 0, which is never a valid display index.
    pub fn new(n: usize) -> Option<Self> {
        (n > 0).then_some(Self(n))
    }

    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    pub fn position(self) -> usize {
        self.0 - 1
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(DisplayIndex::new)
            .ok_or_else(|| format!("Invalid index: {}", s))
    }
}

/// A contact paired with the index it is shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayContact {
    pub index: DisplayIndex,
    pub contact: Contact,
}

pub fn index_contacts(contacts: &[Contact]) -> Vec<DisplayContact> {
    contacts
        .iter()
        .enumerate()
        .map(|(pos, contact)| DisplayContact {
            index: DisplayIndex::from_position(pos),
            contact: contact.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integers() {
        assert_eq!("3".parse::<DisplayIndex>().unwrap().get(), 3);
        assert_eq!(" 1 ".parse::<DisplayIndex>().unwrap().position(), 0);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!("0".parse::<DisplayIndex>().is_err());
        assert!("-1".parse::<DisplayIndex>().is_err());
        assert!("p1".parse::<DisplayIndex>().is_err());
        assert!("".parse::<DisplayIndex>().is_err());
    }

    #[test]
    fn indexes_in_stored_order() {
        let contacts = vec![
            Contact::new("A", "1111111111", "a@b.co"),
            Contact::new("B", "2222222222", "b@b.co"),
        ];
        let indexed = index_contacts(&contacts);
        assert_eq!(indexed[0].index.get(), 1);
        assert_eq!(indexed[1].index.get(), 2);
        assert_eq!(indexed[1].contact.name, "B");
    }
}
