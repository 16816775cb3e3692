use crate::error::{InventoryError, Result};
use csv::StringRecord;
use std::io::{BufRead, BufReader, Read, Split};
use std::iter::Enumerate;

/// A record together with the 1-based physical line it was read from.
#[derive(Debug, Clone)]
pub struct NumberedRecord {
    pub line: u64,
    pub record: StringRecord,
}

/// Splits a line-oriented source into comma-separated records.
///
/// Every physical line counts towards the line number, including blank lines
/// and comments, which are not yielded. Both `\n` and `\r\n` endings are
/// accepted. Each line is split with the given `csv::ReaderBuilder`, so
/// trimming and quoting follow its settings.
pub struct NumberedRecords<R: Read> {
    lines: Enumerate<Split<BufReader<R>>>,
    builder: csv::ReaderBuilder,
    comment: Option<u8>,
}

impl<R: Read> NumberedRecords<R> {
    pub fn new(source: R, builder: csv::ReaderBuilder) -> Self {
        Self {
            lines: BufReader::new(source).split(b'\n').enumerate(),
            builder,
            comment: None,
        }
    }

    /// Skips lines whose first non-blank byte is `marker`.
    pub fn with_comment(mut self, marker: u8) -> Self {
        self.comment = Some(marker);
        self
    }

    fn parse_line(&self, line: u64, mut bytes: Vec<u8>) -> Option<Result<NumberedRecord>> {
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let content = bytes.trim_ascii();
        if content.is_empty() || self.comment.is_some_and(|c| content[0] == c) {
            return None;
        }

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => {
                return Some(Err(InventoryError::Parse {
                    line,
                    reason: "line is not valid UTF-8".to_string(),
                }));
            }
        };

        let parsed = self
            .builder
            .from_reader(text.as_bytes())
            .into_records()
            .next()?;
        Some(
            parsed
                .map(|record| NumberedRecord { line, record })
                .map_err(|err| InventoryError::Parse {
                    line,
                    reason: err.to_string(),
                }),
        )
    }
}

impl<R: Read> Iterator for NumberedRecords<R> {
    type Item = Result<NumberedRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, bytes) = self.lines.next()?;
            let line = index as u64 + 1;
            match bytes {
                Ok(bytes) => {
                    if let Some(result) = self.parse_line(line, bytes) {
                        return Some(result);
                    }
                }
                Err(e) => return Some(Err(InventoryError::Io(e))),
            }
        }
    }
}
