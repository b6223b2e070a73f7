//! Order-preserving serde support for [`Value`].
//!
//! The derived `untagged` representation would route maps through a sorted
//! container, so both directions are implemented by hand to keep the key
//! order of the source document.

use super::value::{Pair, Record, Value};
use serde::de::{
    self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor,
};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Record(record) => record.serialize(serializer),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for pair in self {
            map.serialize_entry(&pair.key, &pair.value)?;
        }
        map.end()
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON or YAML value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Int(i)),
            Err(_) => Ok(Value::Float(v as f64)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut pairs: Vec<Pair> = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<Value>()? {
            if pairs.iter().any(|p| p.key == key) {
                return Err(de::Error::custom(format!("duplicate key '{}' in map", key)));
            }
            let value = map.next_value::<Value>()?;
            pairs.push(Pair { key, value });
        }
        Ok(Value::Record(Record::from_pairs(pairs)))
    }

    /// Tagged YAML nodes such as `!Ref web` decode to a one-pair record keyed
    /// by the tag, `{"!Ref": "web"}`.
    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Value, A::Error> {
        let (tag, content) = data.variant::<String>()?;
        let value = content.newtype_variant::<Value>()?;
        let key = format!("!{}", tag.trim_start_matches('!'));
        Ok(Value::Record(Record::from_pairs(vec![Pair::new(key, value)])))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Parse a value from JSON.
pub fn from_json(json: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize a value to JSON.
pub fn to_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Parse a value from YAML.
pub fn from_yaml(yaml: &str) -> Result<Value, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Serialize a value to YAML.
pub fn to_yaml(value: &Value) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys(value: &Value) -> Vec<String> {
        value
            .as_record()
            .map(|r| r.keys().map(|k| k.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_yaml_keeps_key_order() {
        let v = from_yaml("zeta: 1\nalpha: 2\nmid: 3\n").unwrap();
        assert_eq!(keys(&v), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_json_keeps_key_order() {
        let v = from_json(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        assert_eq!(keys(&v), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_scalars() {
        let v = from_yaml("a: null\nb: true\nc: 3\nd: 1.5\ne: text\n").unwrap();
        let r = v.as_record().unwrap();
        assert_eq!(r.get_str("a"), Some(&Value::Null));
        assert_eq!(r.get_str("b"), Some(&Value::Bool(true)));
        assert_eq!(r.get_str("c"), Some(&Value::Int(3)));
        assert_eq!(r.get_str("d"), Some(&Value::Float(1.5)));
        assert_eq!(r.get_str("e"), Some(&Value::from("text")));
    }

    #[test]
    fn test_yaml_non_string_keys() {
        let v = from_yaml("1: one\ntrue: yes\n").unwrap();
        let r = v.as_record().unwrap();
        assert_eq!(r.get(&Value::Int(1)), Some(&Value::from("one")));
        assert_eq!(r.get(&Value::Bool(true)), Some(&Value::from("yes")));
    }

    #[test]
    fn test_json_duplicate_key_rejected() {
        let err = from_json(r#"{"a": 1, "a": 2}"#).unwrap_err();
        assert!(err.to_string().contains("duplicate key 'a'"));
    }

    #[test]
    fn test_yaml_tagged_nodes() {
        let v = from_yaml("a: !Ref web\nb: !Sub [x, y]\nc: plain\n").unwrap();
        let r = v.as_record().unwrap();
        let tagged = |tag: &str, value: Value| {
            Value::Record(Record::from_pairs(vec![Pair::new(tag, value)]))
        };
        assert_eq!(r.get_str("a"), Some(&tagged("!Ref", "web".into())));
        assert_eq!(
            r.get_str("b"),
            Some(&tagged("!Sub", Value::List(vec!["x".into(), "y".into()])))
        );
        assert_eq!(r.get_str("c"), Some(&Value::from("plain")));
    }

    #[test]
    fn test_yaml_tagged_list_entries_keep_identity() {
        let v = from_yaml("- name: web\n  image: !Ref Image\n- name: db\n  image: postgres\n")
            .unwrap();
        let list = v.as_list().unwrap();
        assert_eq!(crate::namedlist::resolve_identifier(list), "name");
    }

    #[test]
    fn test_json_output_keeps_order() {
        let v = from_yaml("b: 1\na: [x, y]\n").unwrap();
        assert_eq!(to_json(&v).unwrap(), r#"{"b":1,"a":["x","y"]}"#);
    }

    #[test]
    fn test_yaml_output() {
        let v = from_json(r#"{"name": "web", "port": 80}"#).unwrap();
        assert_eq!(to_yaml(&v).unwrap(), "name: web\nport: 80\n");
    }
}
