use anyhow::{Context, Result};
use harlog_core::har::{HarReader, HarWriter, Log};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Read a HAR document from a file, or from stdin when the path is `-`
pub fn read_log(file: &Path) -> Result<Log> {
    if file.as_os_str() == STDIN_PATH {
        tracing::debug!("Reading HAR document from stdin");
        return HarReader::from_reader(io::stdin().lock()).context("Failed to read HAR from stdin");
    }

    HarReader::from_file(file).with_context(|| format!("Failed to read {}", file.display()))
}

/// Re-encode a HAR document, normalizing its formatting
pub fn execute(file: &Path, output: Option<PathBuf>, compact: bool) -> Result<()> {
    tracing::debug!("Formatting HAR file: {}", file.display());

    let log = read_log(file)?;

    if let Some(output_path) = output {
        tracing::debug!("Writing formatted HAR to: {}", output_path.display());
        let written = if compact {
            HarWriter::to_file_compact(&log, &output_path)
        } else {
            HarWriter::to_file(&log, &output_path)
        };
        written.with_context(|| format!("Failed to write {}", output_path.display()))?;
    } else {
        tracing::debug!("Writing formatted HAR to stdout");
        let mut stdout = io::stdout().lock();
        if compact {
            HarWriter::to_writer_compact(&mut stdout, &log)?;
        } else {
            HarWriter::to_writer(&mut stdout, &log)?;
        }
        stdout.write_all(b"\n")?;
    }

    Ok(())
}
