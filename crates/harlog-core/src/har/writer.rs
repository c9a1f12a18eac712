use super::reader::ENVELOPE_KEY;
use super::types::Log;
use crate::{Error, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Borrowed `{"log": ...}` wrapper so encoding never clones the log.
struct Envelope<'a>(&'a Log);

impl Serialize for Envelope<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(ENVELOPE_KEY, self.0)?;
        map.end()
    }
}

pub struct HarWriter;

impl HarWriter {
    /// Write an indented HAR document to any byte stream
    pub fn to_writer<W: Write>(writer: W, log: &Log) -> Result<()> {
        tracing::debug!("Writing HAR document");

        let data = serde_json::to_vec_pretty(&Envelope(log)).map_err(into_write_error)?;
        Self::write_all(writer, &data)?;

        tracing::info!(
            "Successfully wrote HAR document with {} entries",
            log.entries.len()
        );

        Ok(())
    }

    /// Write a single-line HAR document to any byte stream
    pub fn to_writer_compact<W: Write>(writer: W, log: &Log) -> Result<()> {
        tracing::debug!("Writing compact HAR document");

        let data = serde_json::to_vec(&Envelope(log)).map_err(into_write_error)?;
        Self::write_all(writer, &data)
    }

    /// Write a HAR document to a file
    pub fn to_file(log: &Log, path: &Path) -> Result<()> {
        tracing::debug!("Writing HAR file to: {}", path.display());

        let file = File::create(path)?;
        Self::to_writer(BufWriter::new(file), log)?;

        tracing::info!("Wrote HAR file {}", path.display());

        Ok(())
    }

    /// Write a single-line HAR document to a file
    pub fn to_file_compact(log: &Log, path: &Path) -> Result<()> {
        tracing::debug!("Writing compact HAR file to: {}", path.display());

        let file = File::create(path)?;
        Self::to_writer_compact(BufWriter::new(file), log)?;

        tracing::info!("Wrote compact HAR file {}", path.display());

        Ok(())
    }

    /// Convert a log to an indented JSON string
    pub fn to_string(log: &Log) -> Result<String> {
        tracing::debug!("Converting HAR to string");

        let json = serde_json::to_string_pretty(&Envelope(log)).map_err(into_write_error)?;
        Ok(json)
    }

    /// Convert a log to a compact JSON string
    pub fn to_string_compact(log: &Log) -> Result<String> {
        tracing::debug!("Converting HAR to compact string");

        let json = serde_json::to_string(&Envelope(log)).map_err(into_write_error)?;
        Ok(json)
    }

    fn write_all<W: Write>(mut writer: W, data: &[u8]) -> Result<()> {
        writer.write_all(data).map_err(Error::Write)?;
        writer.flush().map_err(Error::Write)
    }
}

fn into_write_error(err: serde_json::Error) -> Error {
    Error::Write(err.into())
}
