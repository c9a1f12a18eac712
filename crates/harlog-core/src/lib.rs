//! In-memory model of the HTTP Archive (HAR) 1.2 format, with a decoder and
//! an encoder for the `{"log": ...}` JSON document.
//!
//! ```
//! let input = r#"{"log":{"version":"1.2","creator":{"name":"x","version":"1"},"entries":[]}}"#;
//! let log = harlog_core::decode(input.as_bytes()).unwrap();
//! assert_eq!(log.creator.name, "x");
//!
//! let mut out = Vec::new();
//! harlog_core::encode(&mut out, &log).unwrap();
//! assert_eq!(harlog_core::decode(out.as_slice()).unwrap(), log);
//! ```

pub mod error;
pub mod har;

pub use error::{Error, Result};
pub use har::Log;

use har::{HarReader, HarWriter};
use std::io::{Read, Write};

/// Parse a complete HAR document from `reader`.
pub fn decode<R: Read>(reader: R) -> Result<Log> {
    HarReader::from_reader(reader)
}

/// Write `log` to `writer` as an indented HAR document.
pub fn encode<W: Write>(writer: W, log: &Log) -> Result<()> {
    HarWriter::to_writer(writer, log)
}
