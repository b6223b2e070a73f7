//! Entry lookup and bulk name extraction for named lists.

use crate::error::{Error, Result};
use crate::record::value_for;
use crate::value::{Record, Value};

/// Returns the first record whose `identifier` field equals `name`.
///
/// Only the first `identifier` pair of a record is consulted, as in
/// [`entry_by_identifier_and_name`](crate::record::entry_by_identifier_and_name).
///
/// Absence is an expected outcome when pairing two versions of a list, so it
/// is reported as `None` rather than as an error. Entries that are not
/// records cannot carry the identifier and are passed over.
pub fn find_by_identifier<'a>(
    list: &'a [Value],
    identifier: &str,
    name: &Value,
) -> Option<&'a Record> {
    for entry in list {
        match entry {
            Value::Record(record) => {
                if record.get_str(identifier) == Some(name) {
                    return Some(record);
                }
            }
            other => {
                tracing::warn!(kind = other.kind(), "named list lookup skipped a non-map entry");
            }
        }
    }
    None
}

/// Returns the string value of `identifier` for every entry, in list order.
///
/// Fails with [`Error::NotANamedList`] if any entry is not a record or has a
/// non-string name, and with [`Error::KeyNotFound`] if an entry lacks the
/// identifier. No partial result is returned.
pub fn names_of_named_list(list: &[Value], identifier: &str) -> Result<Vec<String>> {
    let key = Value::from(identifier);
    let mut names = Vec::with_capacity(list.len());
    for entry in list {
        let record = entry.as_record().ok_or(Error::NotANamedList)?;
        match value_for(record, &key)? {
            Value::String(name) => names.push(name.clone()),
            _ => return Err(Error::NotANamedList),
        }
    }
    Ok(names)
}
