//! Identifier resolution for lists of records.

use crate::value::Value;
use std::collections::{HashMap, HashSet};

/// Candidate identifier fields, highest priority first.
pub const DEFAULT_IDENTIFIERS: [&str; 3] = ["name", "key", "id"];

/// IdentifierPriority is the ranked list of fields that may identify the
/// entries of a named list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierPriority {
    candidates: Vec<String>,
}

impl Default for IdentifierPriority {
    fn default() -> Self {
        IdentifierPriority {
            candidates: DEFAULT_IDENTIFIERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl IdentifierPriority {
    /// Creates a priority list from the given candidates, in order.
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IdentifierPriority {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends candidates ranked below the existing ones. Duplicates are skipped.
    pub fn with_additional<I, S>(mut self, additional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for candidate in additional {
            let candidate = candidate.into();
            if !self.candidates.contains(&candidate) {
                self.candidates.push(candidate);
            }
        }
        self
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}

/// Returns the identifier of `list` using the default priority, or an empty
/// string if no candidate field is present in every entry.
pub fn resolve_identifier(list: &[Value]) -> String {
    resolve_identifier_with(list, &IdentifierPriority::default())
}

/// Returns the first candidate of `priority` carried by every entry of
/// `list`, or an empty string.
///
/// Entries that are not records count as having no fields, so a list with
/// any scalar entry never has an identifier. A key repeated inside one record
/// is counted once for that record.
pub fn resolve_identifier_with(list: &[Value], priority: &IdentifierPriority) -> String {
    if list.is_empty() {
        return String::new();
    }

    let mut counts: HashMap<&Value, usize> = HashMap::new();
    for record in list.iter().filter_map(Value::as_record) {
        let mut seen = HashSet::new();
        for pair in record {
            if seen.insert(&pair.key) {
                *counts.entry(&pair.key).or_insert(0) += 1;
            }
        }
    }

    let total = list.len();
    for candidate in priority.candidates() {
        let key = Value::from(candidate.as_str());
        if counts.get(&key).copied().unwrap_or(0) == total {
            tracing::debug!(
                identifier = %candidate,
                entries = total,
                "resolved named list identifier"
            );
            return candidate.clone();
        }
    }

    tracing::debug!(entries = total, "no identifier covers every list entry");
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{from_yaml, Record};
    use pretty_assertions::assert_eq;

    fn list(yaml: &str) -> Vec<Value> {
        match from_yaml(yaml).unwrap() {
            Value::List(items) => items,
            other => panic!("expected list, got {}", other.kind()),
        }
    }

    #[test]
    fn test_default_priority() {
        assert_eq!(
            IdentifierPriority::default().candidates(),
            &["name".to_string(), "key".to_string(), "id".to_string()]
        );
    }

    #[test]
    fn test_with_additional_ranks_after_defaults() {
        let p = IdentifierPriority::default().with_additional(["uuid", "name"]);
        assert_eq!(p.candidates(), &["name", "key", "id", "uuid"]);
    }

    #[test]
    fn test_resolve_id() {
        let l = list("- {id: 1, v: a}\n- {id: 2, v: b}\n");
        assert_eq!(resolve_identifier(&l), "id");
    }

    #[test]
    fn test_resolve_prefers_name_over_key() {
        let l = list("- {key: k1, name: a}\n- {name: b, key: k2}\n");
        assert_eq!(resolve_identifier(&l), "name");
    }

    #[test]
    fn test_resolve_key_when_name_partial() {
        let l = list("- {name: a, key: k1}\n- {key: k2}\n");
        assert_eq!(resolve_identifier(&l), "key");
    }

    #[test]
    fn test_resolve_partial_coverage() {
        let l = list("- {name: a}\n- {name: b}\n- {other: c}\n");
        assert_eq!(resolve_identifier(&l), "");
    }

    #[test]
    fn test_resolve_mixed_entries() {
        let l = list("- {name: a}\n- plain\n");
        assert_eq!(resolve_identifier(&l), "");
    }

    #[test]
    fn test_resolve_scalars_and_empty() {
        assert_eq!(resolve_identifier(&list("- 1\n- 2\n")), "");
        assert_eq!(resolve_identifier(&[]), "");
    }

    #[test]
    fn test_resolve_ignores_non_string_key() {
        let l = list("- {1: a}\n- {1: b}\n");
        let p = IdentifierPriority::new(["1"]);
        assert_eq!(resolve_identifier_with(&l, &p), "");
    }

    #[test]
    fn test_resolve_duplicate_key_counts_once() {
        let mut doubled = Record::new();
        doubled.push("name", "a");
        doubled.push("name", "b");
        let mut other = Record::new();
        other.push("x", 1);
        let l = vec![Value::Record(doubled), Value::Record(other)];
        assert_eq!(resolve_identifier(&l), "");
    }

    #[test]
    fn test_resolve_custom_priority() {
        let l = list("- {uuid: x}\n- {uuid: y}\n");
        assert_eq!(resolve_identifier(&l), "");
        let p = IdentifierPriority::default().with_additional(["uuid"]);
        assert_eq!(resolve_identifier_with(&l, &p), "uuid");
    }
}
