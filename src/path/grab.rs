//! Value lookup along a path.

use super::parse::parse_path;
use super::path::{Path, PathElement};
use crate::error::{Error, Result};
use crate::record::{entry_by_identifier_and_name, value_for};
use crate::value::{Record, Value};

/// Grabs the value at `path` inside `document`.
///
/// Named entries are matched against the string name first and, if the name
/// is an integer, against the integer value. An index element applied to a
/// record looks up the integer key of that number, then its string form.
pub fn grab<'a>(document: &'a Value, path: &Path) -> Result<&'a Value> {
    let mut current = document;
    let mut walked = Path::new();

    for element in path {
        current = match (current, element) {
            (Value::Record(record), PathElement::Key(key)) => {
                value_for(record, &Value::from(key.as_str()))?
            }
            (Value::Record(record), PathElement::Index(index)) => {
                let number = i64::try_from(*index).ok().map(Value::Int);
                match number.as_ref().and_then(|key| record.get(key)) {
                    Some(value) => value,
                    None => value_for(record, &Value::from(index.to_string()))?,
                }
            }
            (Value::List(list), PathElement::Named { identifier, name }) => {
                let record = named_entry(list, identifier, name)?;
                owning_entry(list, record).ok_or_else(|| Error::NotTraversable {
                    path: walked.to_string(),
                    kind: "list",
                })?
            }
            (Value::List(list), PathElement::Index(index)) => {
                list.get(*index).ok_or(Error::IndexOutOfBounds {
                    index: *index,
                    len: list.len(),
                })?
            }
            (value, _) => {
                return Err(Error::NotTraversable {
                    path: walked.to_string(),
                    kind: value.kind(),
                });
            }
        };
        walked.push(element.clone());
    }

    tracing::trace!(path = %path, "grabbed value");
    Ok(current)
}

/// Parses `path_string` against `document` and grabs the value it points at.
pub fn grab_str<'a>(document: &'a Value, path_string: &str) -> Result<&'a Value> {
    let path = parse_path(path_string, document)?;
    grab(document, &path)
}

fn named_entry<'a>(list: &'a [Value], identifier: &str, name: &str) -> Result<&'a Record> {
    match entry_by_identifier_and_name(list, identifier, &Value::from(name)) {
        Err(err) => match name.parse::<i64>() {
            Ok(number) => entry_by_identifier_and_name(list, identifier, &Value::Int(number))
                .map_err(|_| err),
            Err(_) => Err(err),
        },
        found => found,
    }
}

/// Returns the list entry holding `record`, which must borrow from `list`.
pub(super) fn owning_entry<'a>(list: &'a [Value], record: &Record) -> Option<&'a Value> {
    list.iter()
        .find(|entry| matches!(entry, Value::Record(r) if std::ptr::eq(r, record)))
}
