//! Errors reported by the command-line driver.

use std::io;

use rstags_parse::UnknownKind;

/// A failure that ends a run or skips one input file.
///
/// Argument errors end the run before any file is read. A [`CliError::Read`]
/// only skips the file it names; the remaining files are still tagged.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error(transparent)]
    BadKinds(#[from] UnknownKind),

    #[error("no input files")]
    NoInput,
}
