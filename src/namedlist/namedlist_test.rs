//! Scenario tests combining resolution, lookup and splitting on decoded documents.

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::namedlist::*;
    use crate::record::keys_of;
    use crate::value::{from_yaml, Value};
    use pretty_assertions::assert_eq;

    fn list(yaml: &str) -> Vec<Value> {
        match from_yaml(yaml).unwrap() {
            Value::List(items) => items,
            other => panic!("expected list, got {}", other.kind()),
        }
    }

    const BEFORE: &str = r#"
- name: web
  image: nginx:1.25
  ports: [80]
- name: cache
  image: redis:7
- name: worker
  image: app:1
"#;

    const AFTER: &str = r#"
- name: worker
  image: app:2
- name: web
  image: nginx:1.27
  ports: [80, 443]
- name: db
  image: postgres:16
"#;

    // ============ Resolution ============

    #[test]
    fn test_id_only_list_resolves_to_id() {
        let l = list("- {id: 1}\n- {id: 2}\n- {id: 3}\n");
        assert_eq!(resolve_identifier(&l), "id");
    }

    #[test]
    fn test_n_minus_one_coverage_has_no_identifier() {
        let l = list("- {name: a}\n- {name: b}\n- {name: c}\n- {title: d}\n");
        assert_eq!(resolve_identifier(&l), "");
        assert!(NamedList::resolve(&l, &IdentifierPriority::default()).is_none());
    }

    #[test]
    fn test_resolution_is_idempotent_and_read_only() {
        let l = list(BEFORE);
        let snapshot = l.clone();
        let first = resolve_identifier(&l);
        let second = resolve_identifier(&l);
        assert_eq!(first, "name");
        assert_eq!(first, second);
        assert_eq!(l, snapshot);
    }

    // ============ Lookup ============

    #[test]
    fn test_lookups_do_not_mutate() {
        let l = list(BEFORE);
        let snapshot = l.clone();
        let _ = find_by_identifier(&l, "name", &"cache".into());
        let _ = names_of_named_list(&l, "name");
        let _ = split_name_and_data(l[0].as_record().unwrap(), "name");
        assert_eq!(l, snapshot);
    }

    #[test]
    fn test_named_list_view() {
        let l = list(BEFORE);
        let named = NamedList::resolve(&l, &IdentifierPriority::default()).unwrap();
        assert_eq!(named.identifier(), "name");
        assert_eq!(named.names().unwrap(), vec!["web", "cache", "worker"]);

        let cache = named.get(&"cache".into()).unwrap();
        assert_eq!(cache.get_str("image"), Some(&Value::from("redis:7")));
        assert!(named.get(&"db".into()).is_none());
    }

    #[test]
    fn test_names_strict_on_scalar_entry() {
        let l = list("- {name: a}\n- {name: b}\n- 42\n");
        assert_eq!(names_of_named_list(&l, "name"), Err(Error::NotANamedList));
    }

    // ============ Pairing ============

    #[test]
    fn test_pair_two_versions_by_identity() {
        let before = list(BEFORE);
        let after = list(AFTER);
        let priority = IdentifierPriority::default();
        let from = NamedList::resolve(&before, &priority).unwrap();
        let to = NamedList::resolve(&after, &priority).unwrap();

        let pairing = from.pair_with(&to).unwrap();
        let matched: Vec<&str> = pairing.matched.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(matched, vec!["web", "worker"]);
        assert_eq!(pairing.removed, vec!["cache"]);
        assert_eq!(pairing.added, vec!["db"]);
        assert!(!pairing.is_aligned());

        let web = &pairing.matched[0];
        assert_eq!(web.from.get_str("image"), Some(&Value::from("nginx:1.25")));
        assert_eq!(web.to.get_str("image"), Some(&Value::from("nginx:1.27")));
    }

    #[test]
    fn test_pair_then_split_payloads() {
        let before = list(BEFORE);
        let after = list(AFTER);
        let from = NamedList::new(&before, "name");
        let to = NamedList::new(&after, "name");

        let pairing = from.pair_with(&to).unwrap();
        let worker = pairing.matched.iter().find(|m| m.name == "worker").unwrap();
        let (old_name, old_data) = split_name_and_data(worker.from, "name");
        let (new_name, new_data) = split_name_and_data(worker.to, "name");
        assert_eq!(old_name, new_name);
        assert_eq!(keys_of(&old_data), vec!["image"]);
        assert_ne!(old_data, new_data);
    }

    #[test]
    fn test_pair_identical_lists_is_aligned() {
        let before = list(BEFORE);
        let from = NamedList::new(&before, "name");
        let pairing = from.pair_with(&from).unwrap();
        assert!(pairing.is_aligned());
        assert_eq!(pairing.matched.len(), 3);
    }
}
