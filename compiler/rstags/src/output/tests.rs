use pretty_assertions::assert_eq;
use rstags_parse::{Tag, TagKind};

use super::{write_kinds, write_tags, TagLine};

fn tag(kind: TagKind, name: &str, line: u32) -> Tag {
    Tag {
        name: name.to_owned(),
        kind,
        line,
        offset: 0,
    }
}

fn render(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut out = Vec::new();
    assert!(f(&mut out).is_ok());
    String::from_utf8_lossy(&out).into_owned()
}

#[test]
fn tag_line_layout() {
    let tag = tag(TagKind::Function, "area", 17);
    assert_eq!(
        TagLine::new(&tag, "src/geo.rs").to_string(),
        "area\tsrc/geo.rs\t17;\"\tf"
    );
}

#[test]
fn tags_keep_their_order() {
    let tags = [
        tag(TagKind::TypeAlias, "Area", 4),
        tag(TagKind::Let, "sx", 34),
        tag(TagKind::Let, "geo.sx", 34),
    ];
    assert_eq!(
        render(|out| write_tags(out, "g.rs", &tags)),
        "Area\tg.rs\t4;\"\tt\nsx\tg.rs\t34;\"\tl\ngeo.sx\tg.rs\t34;\"\tl\n"
    );
}

#[test]
fn no_tags_no_output() {
    assert_eq!(render(|out| write_tags(out, "empty.rs", &[])), "");
}

#[test]
fn kind_table() {
    assert_eq!(
        render(|out| write_kinds(out)),
        "f  functions\nl  let\nt  types\n"
    );
}
