use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn defaults() {
    let options = parse_translate_options(&[]);
    assert_eq!(options, TranslateOptions::default());
    assert_eq!(options.dictionary, DictionaryKind::Standard);
    assert_eq!(options.boundaries, Boundaries::Default);
}

#[test]
fn dict_flag() {
    let options = parse_translate_options(&args(&["--dict=strict"]));
    assert_eq!(options.dictionary, DictionaryKind::Strict);
}

#[test]
fn unknown_dict_keeps_default() {
    let options = parse_translate_options(&args(&["--dict=loose"]));
    assert_eq!(options.dictionary, DictionaryKind::Standard);
}

#[test]
fn strict_flag() {
    let options = parse_translate_options(&args(&["--strict"]));
    assert_eq!(options.boundaries, Boundaries::Strict);
}

#[test]
fn map_flags_accumulate() {
    let options = parse_translate_options(&args(&["--map=Q=quarter", "--map=T=T", "--map==x"]));
    assert_eq!(
        options.overrides,
        vec![
            ("Q".to_string(), "quarter".to_string()),
            ("T".to_string(), "T".to_string()),
        ]
    );
}

#[test]
fn map_value_may_contain_equals() {
    let options = parse_translate_options(&args(&["--map=E=a=b"]));
    assert_eq!(options.overrides, vec![("E".to_string(), "a=b".to_string())]);
}

#[test]
fn positional_arguments_are_ignored() {
    let options = parse_translate_options(&args(&["YYYY", "-", "--strict"]));
    assert_eq!(options.boundaries, Boundaries::Strict);
    assert!(options.overrides.is_empty());
}

#[test]
fn dictionary_is_shared_without_overrides() {
    let options = TranslateOptions::default();
    assert!(matches!(options.build_dictionary(), Cow::Borrowed(_)));
}

#[test]
fn dictionary_is_owned_with_overrides() {
    let options = TranslateOptions {
        dictionary: DictionaryKind::Strict,
        overrides: vec![("YYYY".to_string(), "%Y".to_string())],
        ..TranslateOptions::default()
    };
    let dict = options.build_dictionary();
    assert!(matches!(dict, Cow::Owned(_)));
    assert_eq!(dict.lookup("YYYY"), Some("%Y"));
    assert_eq!(dict.lookup("MM"), Some("01"));
}

#[test]
fn tokenizer_uses_boundaries() {
    let options = TranslateOptions {
        boundaries: Boundaries::Strict,
        ..TranslateOptions::default()
    };
    let tokens = options
        .tokenizer(&b"Dd"[..])
        .read_all()
        .expect("in-memory read");
    assert_eq!(tokens.len(), 2);
}
