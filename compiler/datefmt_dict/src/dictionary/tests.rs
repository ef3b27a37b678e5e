use pretty_assertions::assert_eq;

use super::*;

#[test]
fn builtins_match_tables() {
    assert_eq!(Dictionary::strict().len(), STRICT_TOKENS.len());
    assert_eq!(Dictionary::standard().len(), STANDARD_TOKENS.len());
    assert_eq!(*crate::STANDARD, Dictionary::standard());
    assert_eq!(*crate::STRICT, Dictionary::strict());
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    let dict = Dictionary::strict();
    assert_eq!(dict.lookup("YYYY"), Some("2006"));
    assert_eq!(dict.lookup("yyyy"), None);
    assert_eq!(dict.lookup("YYY"), None);
    assert_eq!(dict.lookup("YYYYY"), None);
    assert_eq!(dict.lookup(""), None);
}

#[test]
fn lookup_bytes_requires_utf8() {
    let dict = Dictionary::standard();
    assert_eq!(dict.lookup_bytes(b"MMM"), Some("Jan"));
    assert_eq!(dict.lookup_bytes(&[0xFF, 0xFF]), None);
}

#[test]
fn empty_dictionary_matches_nothing() {
    let dict = Dictionary::new();
    assert!(dict.is_empty());
    assert_eq!(dict.lookup("YYYY"), None);
}

#[test]
fn insert_overrides_and_extends() {
    let mut dict = Dictionary::standard();
    assert_eq!(dict.insert("Day", "Mon"), Some("Monday".to_string()));
    assert_eq!(dict.insert("Q", "quarter"), None);
    assert_eq!(dict.lookup("Day"), Some("Mon"));
    assert_eq!(dict.lookup("Q"), Some("quarter"));
    assert_eq!(dict.len(), STANDARD_TOKENS.len() + 1);
    assert!(dict.contains("Q"));
    assert_eq!(dict.remove("Q"), Some("quarter".to_string()));
    assert!(!dict.contains("Q"));
}

#[test]
fn collect_and_extend() {
    let mut dict: Dictionary = [("a", "1"), ("b", "2")].into_iter().collect();
    dict.extend([("b".to_string(), "3".to_string())]);
    assert_eq!(dict.lookup("a"), Some("1"));
    assert_eq!(dict.lookup("b"), Some("3"));
}

#[test]
fn from_pairs_last_duplicate_wins() {
    let dict = Dictionary::from_pairs(&[("x", "1"), ("x", "2")]);
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.lookup("x"), Some("2"));
}

#[test]
fn sorted_orders_by_token() {
    let dict = Dictionary::from_pairs(&[("b", "2"), ("a", "1"), ("c", "3")]);
    assert_eq!(dict.sorted(), vec![("a", "1"), ("b", "2"), ("c", "3")]);
}

#[test]
fn kind_names_round_trip() {
    for kind in [DictionaryKind::Standard, DictionaryKind::Strict] {
        assert_eq!(DictionaryKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(DictionaryKind::from_name("loose"), None);
    assert_eq!(DictionaryKind::default(), DictionaryKind::Standard);
}

#[test]
fn kind_resolves_shared_instances() {
    assert_eq!(DictionaryKind::Strict.dictionary().len(), STRICT_TOKENS.len());
    assert_eq!(
        DictionaryKind::Standard.dictionary().lookup("Day"),
        Some("Monday")
    );
}
