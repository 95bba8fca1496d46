//! Relay execution for the binary.
//!
//! Wires a reader session into a writer over the process console: the
//! smallest useful host for the two primitives.

use crate::cli::parser::Cli;
use crate::error::Result;
use crate::pipeline::PipelineObject;
use crate::reader::ConsoleReader;
use crate::writer::{Console, ConsoleWriter};
use tracing::debug;

/// Runs the stdin → stdout relay described by the CLI options.
///
/// # Errors
///
/// Returns an error for invalid configuration or any stream fault.
pub fn execute(cli: &Cli) -> Result<()> {
    let reader = ConsoleReader::new()
        .read_count(cli.read_count)
        .byte_stream(cli.byte_stream);
    let writer = ConsoleWriter::new().no_newline(cli.no_newline);

    debug!(
        byte_stream = cli.byte_stream,
        read_count = cli.read_count,
        no_newline = cli.no_newline,
        "starting relay"
    );
    let session = reader.open_stdin()?;
    relay(session, writer)
}

/// Drives a sequence of pipeline objects into a writer.
///
/// The writer's `end` hook runs on every exit path, including after a
/// failed read or write; the first error wins.
///
/// # Errors
///
/// Returns the first reader or writer fault.
pub fn relay<I, C>(objects: I, mut writer: ConsoleWriter<C>) -> Result<()>
where
    I: IntoIterator<Item = Result<PipelineObject>>,
    C: Console,
{
    writer.begin()?;
    let outcome = pump(objects, &mut writer);
    let ended = writer.end();
    outcome.and(ended)
}

fn pump<I, C>(objects: I, writer: &mut ConsoleWriter<C>) -> Result<()>
where
    I: IntoIterator<Item = Result<PipelineObject>>,
    C: Console,
{
    for object in objects {
        writer.process(object?)?;
    }
    Ok(())
}
