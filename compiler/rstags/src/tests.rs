use pretty_assertions::assert_eq;
use rstags_lexer::KeywordTable;
use rstags_parse::TagOptions;

use crate::args::TagConfig;
use crate::error::CliError;
use crate::tag_file;

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../rstags_parse/tests/fixtures/geometry.src"
);

fn config(options: TagOptions, scope: Option<&str>) -> TagConfig {
    TagConfig {
        options,
        scope: scope.map(str::to_owned),
        files: vec![FIXTURE.to_owned()],
    }
}

#[test]
fn tags_a_file_from_disk() {
    let keywords = KeywordTable::rust();
    let tags = match tag_file(FIXTURE, &keywords, &config(TagOptions::default(), None)) {
        Ok(tags) => tags,
        Err(err) => panic!("fixture should be readable: {err}"),
    };
    assert_eq!(tags.len(), 11);
    assert_eq!(tags[0].name, "Area");
    assert_eq!(tags[10].name, "main");
}

#[test]
fn scope_from_config_is_applied() {
    let keywords = KeywordTable::rust();
    let options = TagOptions {
        qualified: true,
        ..TagOptions::default()
    };
    let tags = match tag_file(FIXTURE, &keywords, &config(options, Some("geo"))) {
        Ok(tags) => tags,
        Err(err) => panic!("fixture should be readable: {err}"),
    };
    assert_eq!(tags.len(), 22);
    assert_eq!(tags[1].name, "geo.Area");
}

#[test]
fn missing_file_is_a_read_error() {
    let keywords = KeywordTable::rust();
    let path = "definitely/not/here.rs";
    let err = tag_file(path, &keywords, &config(TagOptions::default(), None));
    match err {
        Err(CliError::Read { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected a read error, got {other:?}"),
    }
}

#[test]
fn read_error_names_the_file() {
    let keywords = KeywordTable::rust();
    let Err(err) = tag_file("nope.rs", &keywords, &config(TagOptions::default(), None)) else {
        panic!("expected a read error");
    };
    assert!(err.to_string().starts_with("cannot read `nope.rs`"));
}
