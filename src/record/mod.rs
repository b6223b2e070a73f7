//! Record module - Safe key lookup and key enumeration over records.

use crate::error::{Error, Result};
use crate::value::{Record, Value};

/// Returns the string form of every key of the record, in record order.
pub fn keys_of(record: &Record) -> Vec<String> {
    record.keys().map(|k| k.to_string()).collect()
}

/// Returns the value stored under `key`.
///
/// On failure the error carries the keys actually present, rendered through
/// [`keys_of`].
pub fn value_for<'a>(record: &'a Record, key: &Value) -> Result<&'a Value> {
    match record.get(key) {
        Some(value) => Ok(value),
        None => {
            tracing::trace!(key = %key, "key not found in record");
            Err(Error::key_not_found(key.clone(), keys_of(record)))
        }
    }
}

/// Returns the first record in `list` whose `identifier` field equals `name`.
///
/// Entries that are not records never match. Duplicate names are not
/// reported; the earliest entry wins.
pub fn entry_by_identifier_and_name<'a>(
    list: &'a [Value],
    identifier: &str,
    name: &Value,
) -> Result<&'a Record> {
    list.iter()
        .filter_map(Value::as_record)
        .find(|record| record.get_str(identifier) == Some(name))
        .ok_or_else(|| Error::entry_not_found(identifier, name.clone()))
}
