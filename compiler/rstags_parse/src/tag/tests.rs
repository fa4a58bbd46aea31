use super::*;

#[test]
fn kind_letters() {
    assert_eq!(TagKind::Function.letter(), 'f');
    assert_eq!(TagKind::Let.letter(), 'l');
    assert_eq!(TagKind::TypeAlias.letter(), 't');
}

#[test]
fn kind_from_letter() {
    for kind in TagKind::ALL {
        assert_eq!(TagKind::from_letter(kind.letter()), Some(kind));
    }
    assert_eq!(TagKind::from_letter('x'), None);
    assert_eq!(TagKind::from_letter('F'), None);
}

#[test]
fn kind_names() {
    assert_eq!(TagKind::Function.name(), "fn");
    assert_eq!(TagKind::Let.name(), "let");
    assert_eq!(TagKind::TypeAlias.name(), "type");
    assert_eq!(TagKind::TypeAlias.description(), "types");
}

#[test]
fn vec_sink_collects_in_order() {
    let mut sink: Vec<Tag> = Vec::new();
    for (i, name) in ["a", "b"].into_iter().enumerate() {
        sink.emit(Tag {
            name: name.to_owned(),
            kind: TagKind::Function,
            line: 1,
            offset: u32::try_from(i).unwrap_or_default(),
        });
    }
    let names: Vec<_> = sink.iter().map(|tag| tag.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
}
