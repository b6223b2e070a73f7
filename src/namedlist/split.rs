//! Separating an entry's identity from its payload.

use crate::value::{Record, Value};

/// Splits `record` into the value of its `identifier` field and the
/// remaining pairs.
///
/// Only the first pair keyed by the string `identifier` is extracted; all
/// other pairs keep their relative order. A record without the field yields
/// [`Value::Null`] and an unchanged copy of the record.
pub fn split_name_and_data(record: &Record, identifier: &str) -> (Value, Record) {
    let mut name = None;
    let mut remainder = Record::new();
    for pair in record {
        if name.is_none() && pair.key.as_str() == Some(identifier) {
            name = Some(pair.value.clone());
        } else {
            remainder.push(pair.key.clone(), pair.value.clone());
        }
    }
    (name.unwrap_or_default(), remainder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::keys_of;
    use crate::value::from_yaml;
    use pretty_assertions::assert_eq;

    fn record(yaml: &str) -> Record {
        match from_yaml(yaml).unwrap() {
            Value::Record(r) => r,
            other => panic!("expected map, got {}", other.kind()),
        }
    }

    #[test]
    fn test_split_extracts_name() {
        let r = record("name: a\nx: 1\ny: 2\n");
        let (name, rest) = split_name_and_data(&r, "name");
        assert_eq!(name, Value::from("a"));
        assert_eq!(rest, record("x: 1\ny: 2\n"));
    }

    #[test]
    fn test_split_keeps_order_around_middle_field() {
        let r = record("c: 3\nid: 9\na: 1\n");
        let (name, rest) = split_name_and_data(&r, "id");
        assert_eq!(name, Value::Int(9));
        assert_eq!(keys_of(&rest), vec!["c", "a"]);
    }

    #[test]
    fn test_split_missing_identifier() {
        let r = record("x: 1\ny: 2\n");
        let (name, rest) = split_name_and_data(&r, "name");
        assert!(name.is_null());
        assert_eq!(rest, r);
    }

    #[test]
    fn test_split_only_string_keys_match() {
        let mut r = Record::new();
        r.push(1, "one");
        r.push("1", "string one");
        let (name, rest) = split_name_and_data(&r, "1");
        assert_eq!(name, Value::from("string one"));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest.get(&Value::Int(1)), Some(&Value::from("one")));
    }

    #[test]
    fn test_split_duplicate_keeps_later_pair() {
        let mut r = Record::new();
        r.push("name", "first");
        r.push("name", "second");
        let (name, rest) = split_name_and_data(&r, "name");
        assert_eq!(name, Value::from("first"));
        assert_eq!(rest.get_str("name"), Some(&Value::from("second")));
    }
}
