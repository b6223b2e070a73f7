//! Named list module - Identity resolution for lists of records.
//!
//! A list is *named* when one candidate field (`name`, `key` or `id`, in that
//! order) is present in every entry. Named lists can be compared by matching
//! identities instead of positions.

mod identifier;
mod locate;
mod split;

#[cfg(test)]
mod namedlist_test;

pub use identifier::*;
pub use locate::*;
pub use split::*;

use crate::error::Result;
use crate::value::{Record, Value};

/// NamedList is a borrowed view over a list whose entries share an
/// identifier field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedList<'a> {
    entries: &'a [Value],
    identifier: String,
}

impl<'a> NamedList<'a> {
    /// Creates a view with an already known identifier.
    pub fn new(entries: &'a [Value], identifier: impl Into<String>) -> Self {
        NamedList {
            entries,
            identifier: identifier.into(),
        }
    }

    /// Resolves the identifier of `entries`, returning `None` for lists that
    /// must be compared by position.
    pub fn resolve(entries: &'a [Value], priority: &IdentifierPriority) -> Option<Self> {
        let identifier = resolve_identifier_with(entries, priority);
        if identifier.is_empty() {
            None
        } else {
            Some(NamedList::new(entries, identifier))
        }
    }

    /// Returns the identifier field of this list.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the underlying entries.
    pub fn entries(&self) -> &'a [Value] {
        self.entries
    }

    /// Returns the entry named `name`, if any.
    pub fn get(&self, name: &Value) -> Option<&'a Record> {
        find_by_identifier(self.entries, &self.identifier, name)
    }

    /// Returns the names of all entries, in list order.
    pub fn names(&self) -> Result<Vec<String>> {
        names_of_named_list(self.entries, &self.identifier)
    }

    /// Pairs the entries of this list (the older version) with the entries of
    /// `other` (the newer version) by name.
    pub fn pair_with(&self, other: &NamedList<'a>) -> Result<Pairing<'a>> {
        let mut pairing = Pairing::default();
        for name in self.names()? {
            let key = Value::from(name.as_str());
            match (self.get(&key), other.get(&key)) {
                (Some(from), Some(to)) => pairing.matched.push(Matched { name, from, to }),
                _ => pairing.removed.push(name),
            }
        }
        for name in other.names()? {
            if self.get(&Value::from(name.as_str())).is_none() {
                pairing.added.push(name);
            }
        }
        tracing::debug!(
            identifier = %self.identifier,
            matched = pairing.matched.len(),
            removed = pairing.removed.len(),
            added = pairing.added.len(),
            "paired named list entries"
        );
        Ok(pairing)
    }
}

/// Matched holds an entry present in both versions of a named list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched<'a> {
    pub name: String,
    pub from: &'a Record,
    pub to: &'a Record,
}

/// Pairing is the result of matching two versions of a named list by name.
///
/// `matched` and `removed` follow the order of the older list, `added` the
/// order of the newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairing<'a> {
    pub matched: Vec<Matched<'a>>,
    pub removed: Vec<String>,
    pub added: Vec<String>,
}

impl Pairing<'_> {
    /// Returns true if every entry was matched.
    pub fn is_aligned(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}
