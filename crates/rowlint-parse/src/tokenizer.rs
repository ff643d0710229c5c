//! Byte-oriented CSV tokenizer.
//!
//! Scans a source exactly once and yields logical records together with the
//! structural anomalies observed while reading them. Nothing here aborts on
//! malformed input; only real I/O failures surface as errors. The delimiter
//! and quote bytes are ASCII, and ASCII bytes never occur inside UTF-8
//! continuation sequences, so the scan can stay byte-level and defer UTF-8
//! validation to field boundaries.

use std::collections::VecDeque;
use std::io::BufRead;

use rowlint_model::Result;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Field delimiter and quote characters of a CSV source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: u8,
    pub quote: u8,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

/// Structural problem observed while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyKind {
    InvalidEncoding,
    StrayQuote,
    UnclosedQuote,
    Whitespace,
    LineBreaks,
}

/// Anomaly attached to the record it was discovered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnomaly {
    pub kind: AnomalyKind,
    /// 1-based field ordinal, absent for record-level anomalies.
    pub column: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub value: String,
    pub quoted: bool,
}

/// One logical record: its fields plus everything suspicious seen while
/// reading it. Quoted fields may span physical lines, so a record can cover
/// more than one line of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub fields: Vec<RawField>,
    pub anomalies: Vec<RawAnomaly>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnding {
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::CrLf => b"\r\n",
            LineEnding::Cr => b"\r",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    /// Nothing but optional leading whitespace seen for this field.
    Start,
    Unquoted,
    Quoted,
    /// Closing quote seen, waiting for delimiter or terminator.
    AfterQuote,
}

/// Per-field scan state, reset at every field boundary.
struct FieldScan {
    buf: Vec<u8>,
    lead_ws: Vec<u8>,
    state: FieldState,
    quoted: bool,
    stray_seen: bool,
    ws_seen: bool,
    trailing_ws: bool,
}

impl FieldScan {
    fn new() -> Self {
        Self {
            buf: Vec::new(),
            lead_ws: Vec::new(),
            state: FieldState::Start,
            quoted: false,
            stray_seen: false,
            ws_seen: false,
            trailing_ws: false,
        }
    }

    /// Closes the current field, recording pending whitespace and encoding
    /// anomalies, and resets for the next field.
    fn finish(
        &mut self,
        fields: &mut Vec<RawField>,
        anomalies: &mut Vec<RawAnomaly>,
        encoding_flagged: &mut bool,
    ) {
        let column = fields.len() as u64 + 1;
        if self.trailing_ws && !self.ws_seen {
            anomalies.push(RawAnomaly {
                kind: AnomalyKind::Whitespace,
                column: Some(column),
            });
        }
        if self.state == FieldState::Start {
            // Whitespace-only unquoted field: the whitespace is the value.
            self.buf.append(&mut self.lead_ws);
        }
        let value = match String::from_utf8(std::mem::take(&mut self.buf)) {
            Ok(value) => value,
            Err(err) => {
                if !*encoding_flagged {
                    *encoding_flagged = true;
                    anomalies.push(RawAnomaly {
                        kind: AnomalyKind::InvalidEncoding,
                        column: Some(column),
                    });
                }
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };
        fields.push(RawField {
            value,
            quoted: self.quoted,
        });
        *self = FieldScan::new();
    }
}

/// Single-pass CSV scanner over any buffered reader.
///
/// Not rewindable; restart by reopening the source.
pub struct Tokenizer<R: BufRead> {
    input: R,
    dialect: Dialect,
    pending: VecDeque<u8>,
    started: bool,
    ending: Option<LineEnding>,
    ending_flagged: bool,
    eof: bool,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(input: R) -> Self {
        Self::with_dialect(input, Dialect::default())
    }

    pub fn with_dialect(input: R, dialect: Dialect) -> Self {
        Self {
            input,
            dialect,
            pending: VecDeque::new(),
            started: false,
            ending: None,
            ending_flagged: false,
            eof: false,
        }
    }

    /// Reads the next logical record, or `None` at end of input.
    pub fn next_row(&mut self) -> Result<Option<RawRow>> {
        if self.eof {
            return Ok(None);
        }
        if !self.started {
            self.started = true;
            self.skip_bom()?;
        }
        if self.peek_byte()?.is_none() {
            self.eof = true;
            return Ok(None);
        }

        let delimiter = self.dialect.delimiter;
        let quote = self.dialect.quote;

        let mut fields: Vec<RawField> = Vec::new();
        let mut anomalies: Vec<RawAnomaly> = Vec::new();
        let mut encoding_flagged = false;
        let mut scan = FieldScan::new();

        loop {
            let Some(b) = self.read_byte()? else {
                self.eof = true;
                if scan.state == FieldState::Quoted {
                    anomalies.push(RawAnomaly {
                        kind: AnomalyKind::UnclosedQuote,
                        column: Some(fields.len() as u64 + 1),
                    });
                }
                scan.finish(&mut fields, &mut anomalies, &mut encoding_flagged);
                return Ok(Some(RawRow { fields, anomalies }));
            };

            match scan.state {
                FieldState::Start => {
                    if b == quote {
                        if !scan.lead_ws.is_empty() {
                            anomalies.push(RawAnomaly {
                                kind: AnomalyKind::Whitespace,
                                column: Some(fields.len() as u64 + 1),
                            });
                            scan.ws_seen = true;
                            scan.lead_ws.clear();
                        }
                        scan.quoted = true;
                        scan.state = FieldState::Quoted;
                    } else if b == delimiter {
                        scan.finish(&mut fields, &mut anomalies, &mut encoding_flagged);
                    } else if b == b'\n' || b == b'\r' {
                        let ending = self.read_ending(b)?;
                        scan.finish(&mut fields, &mut anomalies, &mut encoding_flagged);
                        self.note_ending(ending, &mut anomalies);
                        return Ok(Some(RawRow { fields, anomalies }));
                    } else if b == b' ' || b == b'\t' {
                        scan.lead_ws.push(b);
                    } else {
                        scan.buf.append(&mut scan.lead_ws);
                        scan.buf.push(b);
                        scan.state = FieldState::Unquoted;
                    }
                }
                FieldState::Unquoted => {
                    if b == quote {
                        if !scan.stray_seen {
                            scan.stray_seen = true;
                            anomalies.push(RawAnomaly {
                                kind: AnomalyKind::StrayQuote,
                                column: Some(fields.len() as u64 + 1),
                            });
                        }
                        scan.buf.push(b);
                    } else if b == delimiter {
                        scan.finish(&mut fields, &mut anomalies, &mut encoding_flagged);
                    } else if b == b'\n' || b == b'\r' {
                        let ending = self.read_ending(b)?;
                        scan.finish(&mut fields, &mut anomalies, &mut encoding_flagged);
                        self.note_ending(ending, &mut anomalies);
                        return Ok(Some(RawRow { fields, anomalies }));
                    } else {
                        scan.buf.push(b);
                    }
                }
                FieldState::Quoted => {
                    if b == quote {
                        if self.peek_byte()? == Some(quote) {
                            // Escaped quote, kept literally.
                            self.read_byte()?;
                            scan.buf.push(quote);
                        } else {
                            scan.state = FieldState::AfterQuote;
                        }
                    } else if b == b'\n' || b == b'\r' {
                        // Embedded line break: part of the value, verbatim.
                        let ending = self.read_ending(b)?;
                        scan.buf.extend_from_slice(ending.as_bytes());
                        self.note_ending(ending, &mut anomalies);
                    } else {
                        scan.buf.push(b);
                    }
                }
                FieldState::AfterQuote => {
                    if b == delimiter {
                        scan.finish(&mut fields, &mut anomalies, &mut encoding_flagged);
                    } else if b == b'\n' || b == b'\r' {
                        let ending = self.read_ending(b)?;
                        scan.finish(&mut fields, &mut anomalies, &mut encoding_flagged);
                        self.note_ending(ending, &mut anomalies);
                        return Ok(Some(RawRow { fields, anomalies }));
                    } else if b == b' ' || b == b'\t' {
                        scan.trailing_ws = true;
                    } else {
                        // Content continues after a closing quote.
                        if !scan.stray_seen {
                            scan.stray_seen = true;
                            anomalies.push(RawAnomaly {
                                kind: AnomalyKind::StrayQuote,
                                column: Some(fields.len() as u64 + 1),
                            });
                        }
                        scan.trailing_ws = false;
                        scan.buf.push(b);
                        scan.state = FieldState::Unquoted;
                    }
                }
            }
        }
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        if let Some(b) = self.pending.pop_front() {
            return Ok(Some(b));
        }
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        if self.pending.is_empty() {
            let mut buf = [0u8; 1];
            loop {
                match self.input.read(&mut buf) {
                    Ok(0) => break,
                    Ok(_) => {
                        self.pending.push_back(buf[0]);
                        break;
                    }
                    Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
                    Err(err) => return Err(err.into()),
                }
            }
        }
        Ok(self.pending.front().copied())
    }

    fn skip_bom(&mut self) -> Result<()> {
        let mut seen: Vec<u8> = Vec::with_capacity(UTF8_BOM.len());
        for expected in UTF8_BOM {
            match self.read_byte()? {
                Some(b) if b == expected => seen.push(b),
                Some(b) => {
                    seen.push(b);
                    for byte in seen.into_iter().rev() {
                        self.pending.push_front(byte);
                    }
                    return Ok(());
                }
                None => {
                    for byte in seen.into_iter().rev() {
                        self.pending.push_front(byte);
                    }
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    /// Consumes the rest of a terminator starting with `first`.
    fn read_ending(&mut self, first: u8) -> Result<LineEnding> {
        if first == b'\r' {
            if self.peek_byte()? == Some(b'\n') {
                self.read_byte()?;
                return Ok(LineEnding::CrLf);
            }
            return Ok(LineEnding::Cr);
        }
        Ok(LineEnding::Lf)
    }

    /// The first terminator seen fixes the file's convention; the first
    /// deviation is flagged once for the whole file.
    fn note_ending(&mut self, ending: LineEnding, anomalies: &mut Vec<RawAnomaly>) {
        match self.ending {
            None => self.ending = Some(ending),
            Some(first) if first != ending && !self.ending_flagged => {
                self.ending_flagged = true;
                anomalies.push(RawAnomaly {
                    kind: AnomalyKind::LineBreaks,
                    column: None,
                });
            }
            Some(_) => {}
        }
    }
}
