//! Streaming case decoder.
//!
//! Inverts [`CaseEncoder`](crate::CaseEncoder): a `T` uppercases exactly one
//! letter, a `U` uppercases letters until an `L` or a word boundary. Input may
//! be fed in arbitrary chunks; a UTF-8 sequence split across two chunks is
//! held back until it is complete.

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::{error::DecodeError, marker::Marker, normalized::Normalized};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Idle,
    /// Saw `T` at `anchor`; the next letter is uppercase.
    Title { anchor: usize },
    /// Saw `U` at `anchor`; the next letter opens an uppercase run.
    RunStart { anchor: usize },
    InRun,
}

/// One unit of the marker stream.
#[derive(Debug, Clone, Copy)]
enum Unit<'a> {
    Marker(Marker),
    Char(char, &'a [u8]),
    /// Bytes that are not valid UTF-8.
    Raw(&'a [u8]),
}

/// Decodes one marker stream back to original casing.
#[derive(Debug, Default)]
pub struct CaseDecoder {
    state: State,
    /// Unprocessed tail of the previous chunk: an incomplete UTF-8 sequence.
    pending: Vec<u8>,
    /// Input offset of the first byte of `pending`.
    pos: usize,
    out: Normalized,
    error: Option<DecodeError>,
}

impl CaseDecoder {
    /// Creates a decoder for a fresh stream.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a complete marker stream.
    ///
    /// # Errors
    ///
    /// See [`feed`](Self::feed) and [`finish`](Self::finish).
    pub fn decode(stream: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let mut decoder = Self::new();
        decoder.feed(stream)?;
        Ok(decoder.finish()?.text)
    }

    /// Feeds the next chunk and returns the bytes it decoded to.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::UnexpectedRevert`] for an `L` outside of a run.
    /// - [`DecodeError::DanglingAnchor`] for a `T` or `U` followed by anything
    ///   other than a letter.
    ///
    /// Errors are sticky: once one is returned, every later call returns it
    /// again.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<&[u8], DecodeError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let start = self.out.text.len();

        if self.pending.is_empty() {
            let used = self.run(chunk, false)?;
            self.pending.extend_from_slice(&chunk[used..]);
        } else {
            let mut pending = core::mem::take(&mut self.pending);
            pending.extend_from_slice(chunk);
            let used = self.run(&pending, false)?;
            pending.drain(..used);
            self.pending = pending;
        }

        Ok(&self.out.text[start..])
    }

    /// Ends the stream.
    ///
    /// Held-back bytes that never formed a valid UTF-8 sequence are passed
    /// through as they are. An uppercase run may still be open; the stream is
    /// allowed to end inside it.
    ///
    /// # Errors
    ///
    /// Returns the sticky error, if any, or [`DecodeError::DanglingAnchor`]
    /// if the stream ends right after a `T` or `U`.
    pub fn finish(mut self) -> Result<Normalized, DecodeError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let pending = core::mem::take(&mut self.pending);
        self.run(&pending, true)?;

        if let State::Title { anchor } | State::RunStart { anchor } = self.state {
            return Err(DecodeError::DanglingAnchor { offset: anchor });
        }
        debug!(len = self.out.text.len(), "case decoding finished");
        Ok(self.out)
    }

    /// Runs the state machine over `bytes`, which start at `self.pos`.
    /// Returns how many bytes were consumed; the rest is an incomplete UTF-8
    /// sequence that needs more input, unless `at_end` is set.
    fn run(&mut self, bytes: &[u8], at_end: bool) -> Result<usize, DecodeError> {
        let mut i = 0;
        while i < bytes.len() {
            let (ch, size) = bstr::decode_utf8(&bytes[i..]);
            let unit = match (ch, Marker::from_byte(bytes[i])) {
                (Some(_), Some(marker)) => Unit::Marker(marker),
                (Some(c), None) => Unit::Char(c, &bytes[i..i + size]),
                (None, _) if !at_end && i + size == bytes.len() => break,
                (None, _) => Unit::Raw(&bytes[i..i + size]),
            };

            if let Err(err) = self.step(unit) {
                self.error = Some(err);
                return Err(err);
            }
            self.pos += size;
            i += size;
        }
        Ok(i)
    }

    fn step(&mut self, unit: Unit<'_>) -> Result<(), DecodeError> {
        let offset = self.pos;
        match (self.state, unit) {
            (State::Title { anchor } | State::RunStart { anchor }, Unit::Marker(_) | Unit::Raw(_)) => {
                Err(DecodeError::DanglingAnchor { offset: anchor })
            }
            (State::Title { anchor } | State::RunStart { anchor }, Unit::Char(c, _))
                if !c.is_alphanumeric() =>
            {
                Err(DecodeError::DanglingAnchor { offset: anchor })
            }

            (State::Idle, Unit::Marker(Marker::Revert)) => {
                Err(DecodeError::UnexpectedRevert { offset })
            }
            (State::InRun, Unit::Marker(Marker::Revert)) => {
                trace!(offset, "uppercase run reverted");
                self.state = State::Idle;
                Ok(())
            }
            (_, Unit::Marker(Marker::Title)) => {
                self.state = State::Title { anchor: offset };
                Ok(())
            }
            (_, Unit::Marker(Marker::Upper)) => {
                trace!(offset, "uppercase run opened");
                self.state = State::RunStart { anchor: offset };
                Ok(())
            }

            (State::Title { .. }, Unit::Char(c, _)) => {
                self.push_upper(c, offset);
                self.state = State::Idle;
                Ok(())
            }
            (State::RunStart { .. } | State::InRun, Unit::Char(c, _)) if c.is_alphanumeric() => {
                self.push_upper(c, offset);
                self.state = State::InRun;
                Ok(())
            }
            (State::Idle, Unit::Char(c, bytes)) if c.is_alphanumeric() => {
                self.out.push(bytes, offset);
                Ok(())
            }
            (_, Unit::Char(_, bytes) | Unit::Raw(bytes)) => {
                self.out.push(bytes, offset);
                self.state = State::Idle;
                Ok(())
            }
        }
    }

    fn push_upper(&mut self, c: char, offset: usize) {
        let mut buf = [0; 4];
        for u in c.to_uppercase() {
            self.out.push(u.encode_utf8(&mut buf).as_bytes(), offset);
        }
    }
}
