use super::types::Log;
use crate::Result;
use serde::de::Error as _;
use serde_json::{Deserializer, Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Key of the single-entry object wrapping the log on the wire.
pub(crate) const ENVELOPE_KEY: &str = "log";

pub struct HarReader;

impl HarReader {
    /// Read and parse a HAR document from any byte stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Log> {
        tracing::debug!("Parsing HAR from reader");

        // Only the first JSON value is read; anything after it is ignored.
        let root = Deserializer::from_reader(reader)
            .into_iter::<Map<String, Value>>()
            .next()
            .unwrap_or_else(|| Err(serde_json::Error::custom("empty HAR document")))?;
        let log = Self::unwrap_envelope(root)?;

        tracing::info!(
            "Successfully parsed HAR document with {} entries",
            log.entries.len()
        );

        Ok(log)
    }

    /// Read and parse a HAR file from the given path
    pub fn from_file(path: &Path) -> Result<Log> {
        tracing::debug!("Reading HAR file from: {}", path.display());

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a HAR document from a JSON string
    pub fn from_str(content: &str) -> Result<Log> {
        Self::from_reader(content.as_bytes())
    }

    // A missing (or null) "log" key yields an empty log instead of an error.
    fn unwrap_envelope(mut root: Map<String, Value>) -> Result<Log> {
        match root.remove(ENVELOPE_KEY) {
            None | Some(Value::Null) => {
                tracing::warn!("HAR document has no \"{}\" object", ENVELOPE_KEY);
                Ok(Log::default())
            }
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }
}
