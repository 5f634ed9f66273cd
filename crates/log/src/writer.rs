//! Writer construction

use std::io;

use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::WriterConfig;

pub(crate) fn make_writer(config: WriterConfig) -> BoxMakeWriter {
    match config {
        WriterConfig::Stderr => BoxMakeWriter::new(io::stderr),
        WriterConfig::Stdout => BoxMakeWriter::new(io::stdout),
    }
}
