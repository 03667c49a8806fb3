use std::io::{BufRead, Seek, SeekFrom};

use tracing::debug;

use lb_core::{Player, RankError};

use crate::PlayerStream;

/// Reads one JSON `Player` object per line, parsing a single line per request.
///
/// Construction makes one counting pass over the input and rewinds, so
/// `remaining()` is exact while only the current line is ever held in memory.
/// Blank lines are skipped; line numbers in errors are 1-based.
#[derive(Debug)]
pub struct JsonLinesPlayerStream<R> {
    reader: R,
    remaining: usize,
    line: usize,
    buf: String,
}

impl<R: BufRead + Seek> JsonLinesPlayerStream<R> {
    pub fn from_reader(mut reader: R) -> Result<Self, RankError> {
        let start = reader.stream_position()?;
        let mut buf = String::new();
        let mut remaining = 0;
        while reader.read_line(&mut buf)? > 0 {
            if !buf.trim().is_empty() {
                remaining += 1;
            }
            buf.clear();
        }
        reader.seek(SeekFrom::Start(start))?;

        debug!(players = remaining, "indexed json-lines population");
        Ok(Self {
            reader,
            remaining,
            line: 0,
            buf,
        })
    }
}

impl<R: BufRead> PlayerStream for JsonLinesPlayerStream<R> {
    fn remaining(&self) -> usize {
        self.remaining
    }

    fn next_player(&mut self) -> Result<Player, RankError> {
        if self.remaining == 0 {
            return Err(RankError::StreamExhausted);
        }
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                // The input shrank after it was counted.
                self.remaining = 0;
                return Err(RankError::StreamExhausted);
            }
            self.line += 1;
            let record = self.buf.trim();
            if record.is_empty() {
                continue;
            }
            self.remaining -= 1;
            return serde_json::from_str(record).map_err(|source| RankError::Parse {
                line: self.line,
                source,
            });
        }
    }
}
