//! Line-by-line reader over a snapshot file
//!
//! Provides a streaming iterator over the records of a vehicles or customers file.
//! The file is read one line at a time and every line is split on its own by the
//! record_format module, so a stray quote cannot swallow the lines after it.
//!
//! # Error Handling
//!
//! - Fatal errors (file cannot be opened) are returned from `open()`
//! - Individual line errors (invalid UTF-8) are yielded as `Err` items and reading
//!   continues with the next line
//! - An I/O error while reading ends the iteration after being yielded
//!
//! Blank lines are skipped but still counted, so record positions are file lines.

use crate::io::record_format::split_line;
use crate::types::RentalError;
use csv::StringRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Streaming reader over the lines of one snapshot file
#[derive(Debug)]
pub struct RecordReader {
    reader: BufReader<File>,
    line_number: u64,
    buffer: Vec<u8>,
    finished: bool,
}

impl RecordReader {
    /// Open a snapshot file for reading
    ///
    /// # Errors
    ///
    /// Returns `FileOpen` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, RentalError> {
        let file = File::open(path).map_err(|e| RentalError::file_open(path, &e))?;

        Ok(Self {
            reader: BufReader::new(file),
            line_number: 0,
            buffer: Vec::new(),
            finished: false,
        })
    }
}

impl Iterator for RecordReader {
    type Item = Result<StringRecord, RentalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => {
                    self.finished = true;
                    return None;
                }
                Ok(_) => {
                    self.line_number += 1;
                    match split_line(&self.buffer, self.line_number) {
                        Ok(Some(record)) => return Some(Ok(record)),
                        Ok(None) => continue,
                        Err(e) => return Some(Err(e)),
                    }
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}
