//! rstags command-line driver.
//!
//! Tags every input file and prints the tags to stdout, one ctags-format
//! line each. Files are tagged in parallel; output keeps the order the files
//! were given in.

mod args;
mod error;
mod output;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::sync::Once;

use rayon::prelude::*;
use rstags_lexer::{KeywordTable, SourceBuffer};
use rstags_parse::{parse_file, Tag};
use tracing::debug;

use args::{parse_args, Command, TagConfig};
use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Enable with `RUST_LOG=rstags_parse=debug` or `RUST_LOG=rstags_lexer=trace`.
/// Logs go to stderr so they never mix with tag output.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args) {
        Ok(Command::Help) => {
            print_usage();
            ExitCode::SUCCESS
        }
        Ok(Command::ListKinds) => {
            finish(output::write_kinds(&mut io::stdout().lock()).map(|()| true))
        }
        Ok(Command::Tag(config)) => finish(run(&config)),
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Run `rstags --help` for usage.");
            ExitCode::from(2)
        }
    }
}

/// Tag every file in `config` and print the results.
///
/// Returns `Ok(false)` if some file could not be read. Its error has
/// already been reported and the other files are still printed.
fn run(config: &TagConfig) -> io::Result<bool> {
    let keywords = KeywordTable::rust();
    let results: Vec<Result<Vec<Tag>, CliError>> = config
        .files
        .par_iter()
        .map(|path| tag_file(path, &keywords, config))
        .collect();

    let mut out = BufWriter::new(io::stdout().lock());
    let mut all_read = true;
    for (path, result) in config.files.iter().zip(results) {
        match result {
            Ok(tags) => output::write_tags(&mut out, path, &tags)?,
            Err(err) => {
                eprintln!("error: {err}");
                all_read = false;
            }
        }
    }
    out.flush()?;
    Ok(all_read)
}

/// Read and tag a single file.
fn tag_file(
    path: &str,
    keywords: &KeywordTable,
    config: &TagConfig,
) -> Result<Vec<Tag>, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    let buf = SourceBuffer::from_bytes(bytes);

    let mut tags = Vec::new();
    let count = parse_file(
        buf.reader(),
        keywords,
        config.options,
        config.scope.as_deref(),
        &mut tags,
    );
    debug!(path, count, bom = buf.has_bom(), "tagged file");
    Ok(tags)
}

/// Map the outcome of a run to the process exit code.
///
/// A closed stdout (e.g. output piped into `head`) is not an error.
fn finish(result: io::Result<bool>) -> ExitCode {
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: cannot write tags: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("rstags {}", env!("CARGO_PKG_VERSION"));
    println!("Generate tags for fn, type and let declarations");
    println!();
    println!("Usage: rstags [options] <file>...");
    println!();
    println!("Options:");
    println!("  --kinds=<letters>   Kinds to emit: f (functions), l (let), t (types)");
    println!("                      A leading + or - edits the full set, e.g. -l");
    println!("  --qualified         Also emit scope.name for every tag");
    println!("  --scope=<name>      Scope used by --qualified");
    println!("  --list-kinds        List tag kinds and exit");
    println!("  -h, --help          Show this help message");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=rstags_parse=debug   Log every emitted tag to stderr");
    println!();
    println!("Examples:");
    println!("  rstags src/main.rs");
    println!("  rstags --kinds=f src/*.rs             # Functions only");
    println!("  rstags --qualified --scope=geo a.rs   # Adds geo.<name> tags");
}

#[cfg(test)]
mod tests;
