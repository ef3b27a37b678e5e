use super::*;

fn all_pairs() -> impl Iterator<Item = (u8, u8)> {
    (0..=u8::MAX).flat_map(|a| (0..=u8::MAX).map(move |b| (a, b)))
}

// === Default predicate ===

#[test]
fn default_matches_table_for_every_pair() {
    for (current, next) in all_pairs() {
        let expected = current == next || CONTINUATION_PAIRS.contains(&(current, next));
        assert_eq!(
            DefaultAdjacency.continues(current, next),
            expected,
            "pair ({current:#04x}, {next:#04x})"
        );
    }
}

#[test]
fn default_true_count_is_identity_plus_exceptions() {
    let count = all_pairs()
        .filter(|&(a, b)| DefaultAdjacency.continues(a, b))
        .count();
    assert_eq!(count, 256 + CONTINUATION_PAIRS.len());
}

#[test]
fn default_exceptions_literal() {
    for pair in [
        b"Yy", b"Mm", b"Dd", b"Hh", b"Ss", b"Ff", b"Zz", b"Da", b"ay",
    ] {
        assert!(
            DefaultAdjacency.continues(pair[0], pair[1]),
            "{} should continue",
            String::from_utf8_lossy(pair)
        );
    }
}

#[test]
fn default_exceptions_are_one_directional() {
    for (current, next) in CONTINUATION_PAIRS {
        assert!(
            !DefaultAdjacency.continues(next, current),
            "reverse of ({}, {}) must not continue",
            current as char,
            next as char
        );
    }
}

#[test]
fn default_rejects_other_case_pairs() {
    assert!(!DefaultAdjacency.continues(b'A', b'a'));
    assert!(!DefaultAdjacency.continues(b'h', b'H'));
    assert!(!DefaultAdjacency.continues(b'y', b'Y'));
    assert!(!DefaultAdjacency.continues(b'm', b'M'));
}

#[test]
fn default_sentinel_only_continues_itself() {
    assert!(DefaultAdjacency.continues(0, 0));
    assert!(!DefaultAdjacency.continues(b'Y', 0));
    assert!(!DefaultAdjacency.continues(b'a', 0));
}

// === Strict predicate ===

#[test]
fn strict_is_exact_equality_for_every_pair() {
    for (current, next) in all_pairs() {
        assert_eq!(StrictAdjacency.continues(current, next), current == next);
    }
}

#[test]
fn strict_splits_mixed_case() {
    assert!(!StrictAdjacency.continues(b'D', b'd'));
    assert!(!StrictAdjacency.continues(b'D', b'a'));
    assert!(StrictAdjacency.continues(b'd', b'd'));
}

// === Boundaries / closures ===

#[test]
fn boundaries_dispatch_to_builtins() {
    for (current, next) in all_pairs() {
        assert_eq!(
            Boundaries::Default.continues(current, next),
            DefaultAdjacency.continues(current, next)
        );
        assert_eq!(
            Boundaries::Strict.continues(current, next),
            StrictAdjacency.continues(current, next)
        );
    }
}

#[test]
fn boundaries_default_and_names() {
    assert_eq!(Boundaries::default(), Boundaries::Default);
    assert_eq!(Boundaries::Default.name(), "default");
    assert_eq!(Boundaries::Strict.name(), "strict");
}

#[test]
fn closures_are_predicates() {
    let digits = |a: u8, b: u8| a.is_ascii_digit() && b.is_ascii_digit();
    assert!(digits.continues(b'1', b'9'));
    assert!(!digits.continues(b'1', b'x'));

    let boxed: Box<dyn AdjacencyPredicate> = Box::new(digits);
    assert!(boxed.continues(b'0', b'0'));
}
