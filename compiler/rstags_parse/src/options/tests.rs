use super::*;

#[test]
fn default_enables_everything_unqualified() {
    let options = TagOptions::default();
    for kind in TagKind::ALL {
        assert!(options.kinds.enables(kind));
    }
    assert!(!options.qualified);
}

#[test]
fn plain_letters_select_exactly() {
    assert_eq!(KindSet::from_letters("f"), Ok(KindSet::FUNCTION));
    assert_eq!(
        KindSet::from_letters("tl"),
        Ok(KindSet::TYPE_ALIAS | KindSet::LET)
    );
    assert_eq!(KindSet::from_letters(""), Ok(KindSet::empty()));
}

#[test]
fn edits_start_from_all() {
    assert_eq!(
        KindSet::from_letters("-l"),
        Ok(KindSet::FUNCTION | KindSet::TYPE_ALIAS)
    );
    assert_eq!(KindSet::from_letters("+f"), Ok(KindSet::all()));
    assert_eq!(
        KindSet::from_letters("-lt+t"),
        Ok(KindSet::FUNCTION | KindSet::TYPE_ALIAS)
    );
}

#[test]
fn unknown_letter_is_rejected() {
    assert_eq!(KindSet::from_letters("fx"), Err(UnknownKind('x')));
    assert_eq!(
        UnknownKind('x').to_string(),
        "unknown tag kind `x` (expected one of f, l, t)"
    );
}

#[test]
fn enables_single_kind() {
    let set = KindSet::of(TagKind::Let);
    assert!(set.enables(TagKind::Let));
    assert!(!set.enables(TagKind::Function));
    assert!(!set.enables(TagKind::TypeAlias));
}
