//! Parsing of path expressions in go-patch and dot style.

use super::grab::owning_entry;
use super::path::{Path, PathElement, PathStyle};
use crate::error::{Error, Result};
use crate::namedlist::{find_by_identifier, resolve_identifier};
use crate::value::Value;

/// Parses `path_string`, choosing go-patch style for strings starting with a
/// slash and dot style otherwise. Dot style needs `document` to tell named
/// entries from indices.
pub fn parse_path(path_string: &str, document: &Value) -> Result<Path> {
    if path_string.starts_with('/') {
        parse_go_patch_path(path_string)
    } else {
        parse_dot_path(path_string, document)
    }
}

/// Parses a go-patch style path such as `/spec/containers/name=web/ports/0`.
///
/// A segment of the form `identifier=name` selects a named entry, an unsigned
/// integer selects a list position, anything else a record key.
pub fn parse_go_patch_path(path_string: &str) -> Result<Path> {
    let invalid =
        |explanation: &str| Error::invalid_path(PathStyle::GoPatch, path_string, explanation);

    let rest = path_string
        .strip_prefix('/')
        .ok_or_else(|| invalid("path does not start with a slash"))?;
    if rest.is_empty() {
        return Ok(Path::new());
    }

    let mut path = Path::new();
    for (i, segment) in rest.split('/').enumerate() {
        if segment.is_empty() {
            return Err(invalid(&format!("segment {} is empty", i + 1)));
        }
        let element = match segment.split_once('=') {
            Some(("", _)) => {
                return Err(invalid(&format!(
                    "segment '{}' has an empty identifier",
                    segment
                )));
            }
            Some((identifier, name)) => PathElement::named(identifier, name),
            None => match segment.parse::<usize>() {
                Ok(index) => PathElement::index(index),
                Err(_) => PathElement::key(segment),
            },
        };
        path.push(element);
    }

    tracing::trace!(path = %path, "parsed go-patch path");
    Ok(path)
}

/// Parses a dot style path such as `spec.containers.web.ports.0`, walking
/// `document` to decide what each segment refers to.
///
/// Inside a record a segment is a key. Inside a list it names an entry when
/// the list has an identifier and an entry of that name exists, matched as a
/// string first and then as an integer. Otherwise it must be a valid index.
pub fn parse_dot_path(path_string: &str, document: &Value) -> Result<Path> {
    let invalid =
        |explanation: String| Error::invalid_path(PathStyle::Dot, path_string, explanation);

    let mut path = Path::new();
    if path_string.is_empty() || path_string == "." {
        return Ok(path);
    }

    let mut current = document;
    for segment in path_string.split('.') {
        if segment.is_empty() {
            return Err(invalid("path contains an empty segment".to_string()));
        }
        match current {
            Value::Record(record) => {
                let value = record.get_str(segment).ok_or_else(|| {
                    invalid(format!("no key '{}' at {}", segment, path.styled(PathStyle::Dot)))
                })?;
                path.push(PathElement::key(segment));
                current = value;
            }
            Value::List(list) => {
                let identifier = resolve_identifier(list);
                let named = if identifier.is_empty() {
                    None
                } else {
                    find_by_identifier(list, &identifier, &Value::from(segment)).or_else(|| {
                        let number = segment.parse::<i64>().ok()?;
                        find_by_identifier(list, &identifier, &Value::Int(number))
                    })
                };
                if let Some(entry) = named.and_then(|record| owning_entry(list, record)) {
                    path.push(PathElement::named(identifier, segment));
                    current = entry;
                    continue;
                }
                let entry = segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| list.get(index).map(|entry| (index, entry)));
                match entry {
                    Some((index, entry)) => {
                        path.push(PathElement::index(index));
                        current = entry;
                    }
                    None => {
                        return Err(invalid(format!(
                            "'{}' is neither an entry name nor an index of the list at {}",
                            segment,
                            path.styled(PathStyle::Dot)
                        )));
                    }
                }
            }
            scalar => {
                return Err(invalid(format!(
                    "cannot descend into {} at {}",
                    scalar.kind(),
                    path.styled(PathStyle::Dot)
                )));
            }
        }
    }

    tracing::trace!(path = %path, "parsed dot path");
    Ok(path)
}
