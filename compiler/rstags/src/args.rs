//! Command-line argument parsing.
//!
//! Options use the `--name=value` form only; everything not starting with
//! `-` is an input file. A lone `--` makes every later argument a file.

use rstags_parse::{KindSet, TagOptions};

use crate::error::CliError;

/// What the command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    ListKinds,
    Tag(TagConfig),
}

/// Settings for a tagging run.
#[derive(Debug, PartialEq, Eq)]
pub struct TagConfig {
    pub options: TagOptions,
    /// Scope used to qualify tags from every input file.
    pub scope: Option<String>,
    /// Input files, in the order their tags are printed.
    pub files: Vec<String>,
}

/// Parse the arguments after the program name.
///
/// `--help` and `--list-kinds` win over everything else on the line,
/// including arguments that would otherwise be errors.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return Ok(Command::Help);
    }
    if args.iter().any(|arg| arg == "--list-kinds") {
        return Ok(Command::ListKinds);
    }

    let mut options = TagOptions::default();
    let mut scope = None;
    let mut files = Vec::new();
    let mut only_files = false;

    for arg in args {
        if only_files || !arg.starts_with('-') {
            files.push(arg.clone());
        } else if arg == "--" {
            only_files = true;
        } else if arg == "--qualified" {
            options.qualified = true;
        } else if let Some(letters) = arg.strip_prefix("--kinds=") {
            options.kinds = KindSet::from_letters(letters)?;
        } else if let Some(name) = arg.strip_prefix("--scope=") {
            scope = Some(name.to_string());
        } else {
            return Err(CliError::UnknownOption(arg.clone()));
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInput);
    }

    Ok(Command::Tag(TagConfig {
        options,
        scope,
        files,
    }))
}
