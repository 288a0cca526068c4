use super::types::{Record, RecordSet};
use crate::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub struct RecordReader;

impl RecordReader {
    /// Read every file in order and concatenate their records.
    ///
    /// The first file that cannot be opened or read aborts the whole load.
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<RecordSet> {
        let mut records = RecordSet::new();

        for path in paths {
            records.extend(Self::from_file(path.as_ref())?);
        }

        tracing::debug!(
            "Loaded {} records from {} file(s)",
            records.len(),
            paths.len()
        );

        Ok(records)
    }

    /// Read a JSON-lines log file, skipping lines that are not JSON objects
    pub fn from_file(path: &Path) -> Result<RecordSet> {
        tracing::debug!("Reading log file from: {}", path.display());

        let read_error = |source| Error::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_error)?;
        let (records, skipped) = read_lines(BufReader::new(file)).map_err(read_error)?;

        if skipped > 0 {
            tracing::debug!(
                "Skipped {} unparseable line(s) in {}",
                skipped,
                path.display()
            );
        }

        tracing::debug!("Parsed {} records from {}", records.len(), path.display());

        Ok(records)
    }

    /// Read JSON lines from any buffered source
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<RecordSet> {
        read_lines(reader).map(|(records, _)| records)
    }

    /// Parse JSON lines held in memory
    pub fn from_str(content: &str) -> RecordSet {
        content
            .lines()
            .filter_map(|line| Self::parse_line(line.as_bytes()))
            .collect()
    }

    /// Parse a single line; anything other than a JSON object yields `None`
    pub fn parse_line(line: &[u8]) -> Option<Record> {
        serde_json::from_slice(line).ok()
    }
}

/// Returns the parsed records and the number of non-blank lines skipped.
fn read_lines<R: BufRead>(reader: R) -> io::Result<(RecordSet, usize)> {
    let mut records = RecordSet::new();
    let mut skipped = 0;

    // Split on raw bytes so a line with invalid UTF-8 is skipped rather
    // than failing the whole file.
    for line in reader.split(b'\n') {
        let line = line?;

        match RecordReader::parse_line(&line) {
            Some(record) => records.push(record),
            None if line.trim_ascii().is_empty() => {}
            None => skipped += 1,
        }
    }

    Ok((records, skipped))
}
