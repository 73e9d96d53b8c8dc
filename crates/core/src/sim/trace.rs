//! Trace front-end: record source seam and the file-backed reader.
//!
//! This module supplies decoded instruction records to the pipeline. It
//! provides:
//! 1. **Records:** The five-field trace record (pc, op, dest, src1, src2).
//! 2. **Source seam:** The [`RecordSource`] trait the fetch stage pulls from,
//!    implemented by the file reader and by in-memory queues for tests.
//! 3. **Reader:** A whitespace tokenizer over buffered input, so records may
//!    span line boundaries. The first malformed token ends the trace
//!    silently.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};

#[cfg(test)]
use mockall::automock;

use crate::common::SimError;
use crate::pipeline::instruction::FuType;

/// One decoded instruction as read from the trace.
///
/// Register fields are `None` where the trace says `-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Source address, parsed from unprefixed hexadecimal.
    pub pc: u64,
    /// Functional-unit class from the op field.
    pub fu: FuType,
    /// Architectural destination register.
    pub dest: Option<usize>,
    /// First architectural source register.
    pub src1: Option<usize>,
    /// Second architectural source register.
    pub src2: Option<usize>,
}

/// Producer of instruction records, one per call.
///
/// The fetch stage is written against this seam so the pipeline can be driven
/// from a trace file, an in-memory program, or a mock.
#[cfg_attr(test, automock)]
pub trait RecordSource {
    /// Yields the next record in program order, or `None` once the trace is
    /// exhausted.
    fn next_record(&mut self) -> Option<TraceRecord>;
}

impl RecordSource for VecDeque<TraceRecord> {
    fn next_record(&mut self) -> Option<TraceRecord> {
        self.pop_front()
    }
}

/// Trace reader over buffered input.
///
/// Tokens are delimited by any whitespace, matching the original scanner
/// semantics: a record may continue on the next line.
#[derive(Debug)]
pub struct TraceReader<R> {
    input: R,
    line: String,
    pos: usize,
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file for reading.
    pub fn open(path: &str) -> Result<Self, SimError> {
        let file = File::open(path).map_err(|err| SimError::TraceOpen(path.to_string(), err))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps any buffered reader.
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            pos: 0,
        }
    }

    /// Advances to the next whitespace-delimited token and returns its byte
    /// range within the current line buffer. Returns `None` at end of input.
    fn next_token(&mut self) -> Option<(usize, usize)> {
        loop {
            let bytes = self.line.as_bytes();
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < bytes.len() {
                let start = self.pos;
                while self.pos < bytes.len() && !bytes[self.pos].is_ascii_whitespace() {
                    self.pos += 1;
                }
                return Some((start, self.pos));
            }

            self.line.clear();
            self.pos = 0;
            match self.input.read_line(&mut self.line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
        }
    }

    /// Parses one register field: `-1` means no register.
    fn next_reg(&mut self) -> Option<Option<usize>> {
        let (start, end) = self.next_token()?;
        let value: i64 = self.line[start..end].parse().ok()?;
        Some(if value < 0 { None } else { Some(value as usize) })
    }
}

impl<R: BufRead> RecordSource for TraceReader<R> {
    fn next_record(&mut self) -> Option<TraceRecord> {
        let pc = {
            let (start, end) = self.next_token()?;
            u64::from_str_radix(&self.line[start..end], 16).ok()?
        };
        let fu = {
            let (start, end) = self.next_token()?;
            let code: u32 = self.line[start..end].parse().ok()?;
            FuType::from_code(code)?
        };
        let dest = self.next_reg()?;
        let src1 = self.next_reg()?;
        let src2 = self.next_reg()?;

        Some(TraceRecord {
            pc,
            fu,
            dest,
            src1,
            src2,
        })
    }
}
