use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::trace;

use crate::source::{FrameEvent, FrameSource, SourceError};

use super::reader::parse_record;

/// Frame source over any buffered reader of hex capture lines.
pub struct HexSource<R> {
    lines: Lines<R>,
    line: u64,
}

/// Frame source backed by a capture file on disk.
pub type HexFileSource = HexSource<BufReader<File>>;

impl<R: BufRead> HexSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl HexSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> FrameSource for HexSource<R> {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError> {
        for text in self.lines.by_ref() {
            let text = text?;
            self.line += 1;
            let record =
                parse_record(&text).map_err(|err| SourceError::from_record(self.line, err))?;
            if let Some(record) = record {
                trace!(line = self.line, bytes = record.data.len(), "read capture record");
                return Ok(Some(FrameEvent {
                    line: self.line,
                    ts: record.ts,
                    data: record.data,
                }));
            }
        }
        Ok(None)
    }
}
