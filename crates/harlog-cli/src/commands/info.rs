use super::fmt::read_log;
use crate::OutputFormat;
use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use harlog_core::har::Log;
use serde::Serialize;
use std::path::Path;

/// Headline facts about a decoded log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogInfo {
    pub version: String,
    pub creator: String,
    pub browser: Option<String>,
    pub pages: usize,
    pub entries: usize,
    pub first_started: Option<DateTime<FixedOffset>>,
    pub last_started: Option<DateTime<FixedOffset>>,
}

impl LogInfo {
    pub fn from_log(log: &Log) -> Self {
        let started = log.entries.iter().filter_map(|e| e.started_date_time);

        Self {
            version: log.version.clone(),
            creator: format!("{} {}", log.creator.name, log.creator.version),
            browser: log
                .browser
                .as_ref()
                .map(|b| format!("{} {}", b.name, b.version)),
            pages: log.pages.as_ref().map_or(0, Vec::len),
            entries: log.entries.len(),
            first_started: started.clone().min(),
            last_started: started.max(),
        }
    }
}

/// Read a HAR file and summarize it
pub fn collect_info(file: &Path) -> Result<LogInfo> {
    let log = read_log(file)?;
    Ok(LogInfo::from_log(&log))
}

pub fn execute(file: &Path, format: OutputFormat) -> Result<()> {
    tracing::info!("Reading HAR file: {}", file.display());
    tracing::debug!("Output format: {}", format.as_str());

    let info = collect_info(file)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
        OutputFormat::Pretty => print_pretty(&info),
    }

    Ok(())
}

fn print_pretty(info: &LogInfo) {
    println!("HAR version:  {}", info.version);
    println!("Creator:      {}", info.creator);
    if let Some(browser) = &info.browser {
        println!("Browser:      {}", browser);
    }
    println!("Pages:        {}", info.pages);
    println!("Entries:      {}", info.entries);
    if let (Some(first), Some(last)) = (info.first_started, info.last_started) {
        println!("Time range:   {} .. {}", first.to_rfc3339(), last.to_rfc3339());
    }
}
