//! End-to-end tag extraction over a small fixture file.
//!
//! The fixture in `tests/fixtures/geometry.src` mixes every declaration
//! form with constructs that must not produce tags, such as `fn` in a field
//! type or bindings inside function bodies.

use pretty_assertions::assert_eq;
use rstags_lexer::{KeywordTable, SourceBuffer};
use rstags_parse::{parse_file, KindSet, Tag, TagKind, TagOptions};

const GEOMETRY: &str = include_str!("fixtures/geometry.src");

fn tags_of(source: &str, options: TagOptions, scope: Option<&str>) -> Vec<Tag> {
    let keywords = KeywordTable::rust();
    let buf = SourceBuffer::new(source);
    let mut tags = Vec::new();
    parse_file(buf.reader(), &keywords, options, scope, &mut tags);
    tags
}

fn summary(tags: &[Tag]) -> Vec<(char, &str, u32)> {
    tags.iter()
        .map(|t| (t.kind.letter(), t.name.as_str(), t.line))
        .collect()
}

#[test]
fn geometry_tags() {
    let tags = tags_of(GEOMETRY, TagOptions::default(), None);
    assert_eq!(
        summary(&tags),
        [
            ('t', "Area", 4),
            ('t', "Width", 7),
            ('t', "Height", 8),
            ('f', "area", 17),
            ('f', "scale", 23),
            ('f', "describe", 30),
            ('l', "sx", 34),
            ('l', "sy", 34),
            ('l', "limit", 35),
            ('l', "margin", 35),
            ('f', "main", 37),
        ]
    );
}

#[test]
fn geometry_offsets_point_at_names() {
    for tag in tags_of(GEOMETRY, TagOptions::default(), None) {
        let start = tag.offset as usize;
        assert_eq!(
            &GEOMETRY[start..start + tag.name.len()],
            tag.name,
            "{tag:?}"
        );
    }
}

#[test]
fn geometry_functions_only() {
    let options = TagOptions {
        kinds: KindSet::FUNCTION,
        ..TagOptions::default()
    };
    let tags = tags_of(GEOMETRY, options, None);
    assert!(tags.iter().all(|t| t.kind == TagKind::Function));
    let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["area", "scale", "describe", "main"]);
}

#[test]
fn geometry_qualified() {
    let options = TagOptions {
        qualified: true,
        ..TagOptions::default()
    };
    let bare = tags_of(GEOMETRY, TagOptions::default(), None);
    let tags = tags_of(GEOMETRY, options, Some("geometry"));
    assert_eq!(tags.len(), bare.len() * 2);
    for (pair, tag) in tags.chunks(2).zip(&bare) {
        assert_eq!(&pair[0], tag);
        assert_eq!(pair[1].name, format!("geometry.{}", tag.name));
        assert_eq!(pair[1].line, tag.line);
    }
}

#[test]
fn crlf_line_endings() {
    let crlf = GEOMETRY.replace('\n', "\r\n");
    let tags = tags_of(&crlf, TagOptions::default(), None);
    assert_eq!(
        summary(&tags),
        summary(&tags_of(GEOMETRY, TagOptions::default(), None))
    );
}
