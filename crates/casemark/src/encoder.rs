//! Streaming case encoder.
//!
//! The encoder folds case out of a classified fragment stream and replaces it
//! with at most one marker byte per run of uppercase letters:
//!
//! | original | encoded     |
//! |----------|-------------|
//! | `Hello`  | `Thello`    |
//! | `NASA x` | `UnasaL x`  |
//! | `NASAs`  | `UnasaLs`   |
//! | `ABC`    | `UabcL`     |
//!
//! A single capital cannot be told apart from the start of an all-caps run
//! until the next fragment arrives. The encoder therefore writes a `U` anchor
//! for the first capital and remembers its position; when the run closes after
//! one letter the anchor is patched to `T` in place. Every decision is taken
//! before anything is appended, so nothing is ever rolled back.

use core::ops::ControlFlow;

use tracing::{debug, trace, warn};

use crate::{
    error::EncodeError,
    fragment::Fragment,
    marker::{FragmentClass, Marker},
    normalized::Normalized,
    normalizer::{PrefixNormalizer, for_each_fragment},
};

/// How much of a fragment's text ended up in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keep {
    /// The whole fragment text was kept. For an uppercase fragment this means
    /// its `U` byte became the anchor of a new run.
    All,
    /// The leading classification byte was dropped and only the payload kept.
    Payload,
}

/// An open run of uppercase fragments. `len` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    /// Output position of the `U` anchor.
    anchor: usize,
    len: usize,
}

/// What closed a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    /// Content the decoder would keep uppercasing: a multi-letter run needs an
    /// explicit `L`.
    Revert,
    /// Punctuation, which carries no case: the decoder stops the run on its own.
    Punct,
}

/// Encodes one fragment stream. See the [module docs](self).
#[derive(Debug, Default)]
pub struct CaseEncoder {
    run: Option<Run>,
    out: Normalized,
    /// End offset of the furthest fragment seen.
    consumed: usize,
    finished: bool,
}

impl CaseEncoder {
    /// Creates an encoder for a fresh stream.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes a whole input pulled through `normalizer`.
    ///
    /// Fragment offsets are the running total of consumed bytes. The stream
    /// ends when the input is exhausted or the normalizer yields a truncated
    /// fragment.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::ReservedByte`] if the normalizer produced a
    /// payload containing a marker byte.
    pub fn encode_with<N>(normalizer: &mut N, input: &[u8]) -> Result<Normalized, EncodeError>
    where
        N: PrefixNormalizer + ?Sized,
    {
        let mut encoder = Self::new();
        for_each_fragment::<N, EncodeError>(normalizer, input, |fragment, offset| {
            encoder.encode(fragment, 0, offset)?;
            Ok(if encoder.is_finished() {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            })
        })?;
        Ok(encoder.finish())
    }

    /// Feeds one fragment.
    ///
    /// `index` is the sub-step of a fragment that the caller split into
    /// several steps; only sub-step `0` takes part in case tracking, later
    /// sub-steps are continuation bytes and are appended verbatim.
    /// `offset` is the original byte offset the fragment starts at.
    ///
    /// A truncated fragment (no text, or a `U` without a letter) ends the
    /// stream: any open run is closed as if the input had ended there.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::Finished`] once the stream has ended.
    /// - [`EncodeError::ReservedByte`] if the retained bytes contain a marker
    ///   byte. The encoder state is left untouched.
    pub fn encode(
        &mut self,
        fragment: &Fragment<'_>,
        index: usize,
        offset: usize,
    ) -> Result<Keep, EncodeError> {
        if self.finished {
            return Err(EncodeError::Finished { offset });
        }

        if fragment.is_truncated() {
            warn!(offset, "truncated fragment, closing stream");
            self.close(offset);
            return Ok(Keep::Payload);
        }

        let retained = if index == 0 {
            fragment.payload()
        } else {
            fragment.text()
        };
        if let Some(&byte) = retained.iter().find(|&&b| Marker::is_reserved(b)) {
            return Err(EncodeError::ReservedByte { byte, offset });
        }

        self.consumed = self.consumed.max(offset + fragment.consumed());

        // Decide first, then append.
        let keep = if index == 0 {
            self.transition(fragment.class(), offset)
        } else {
            Keep::All
        };
        if index == 0 && keep == Keep::All && fragment.class() == FragmentClass::Upper {
            self.out.push(&[Marker::Upper.byte()], offset);
        }
        self.out.push(retained, offset);
        #[cfg(any(test, feature = "fuzzing"))]
        assert_eq!(
            self.out.alignment.len(),
            self.out.text.len(),
            "Internal error: alignment out of step with output"
        );
        Ok(keep)
    }

    /// Ends the stream and returns the encoded output.
    ///
    /// The end of input closes any open run like a word boundary does.
    #[must_use]
    pub fn finish(mut self) -> Normalized {
        self.close(self.consumed);
        debug!(
            len = self.out.text.len(),
            inserted = self.out.norm_to_orig.len(),
            "case encoding finished"
        );
        self.out
    }

    /// Whether the stream has ended, either through a truncated fragment or
    /// [`finish`](Self::finish).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The prefix of the output that can no longer change.
    ///
    /// Bytes from the anchor of an open run onwards stay provisional until
    /// the run closes.
    #[must_use]
    pub fn committed(&self) -> &[u8] {
        match self.run {
            Some(run) => &self.out.text[..run.anchor],
            None => &self.out.text,
        }
    }

    fn transition(&mut self, class: FragmentClass, offset: usize) -> Keep {
        match class {
            FragmentClass::Upper => {
                if let Some(run) = &mut self.run {
                    run.len += 1;
                    Keep::Payload
                } else {
                    let anchor = self.out.text.len();
                    trace!(anchor, offset, "uppercase run opened");
                    self.run = Some(Run { anchor, len: 1 });
                    Keep::All
                }
            }
            FragmentClass::Space | FragmentClass::Neutral | FragmentClass::Empty => {
                self.close_run(offset, Boundary::Revert);
                Keep::All
            }
            FragmentClass::Lower => {
                self.close_run(offset, Boundary::Revert);
                Keep::Payload
            }
            FragmentClass::Punct => {
                self.close_run(offset, Boundary::Punct);
                Keep::Payload
            }
        }
    }

    fn close_run(&mut self, offset: usize, boundary: Boundary) {
        let Some(run) = self.run.take() else {
            return;
        };

        if run.len == 1 {
            if let Some(anchor) = self.out.text.get_mut(run.anchor) {
                debug_assert_eq!(*anchor, Marker::Upper.byte());
                *anchor = Marker::Title.byte();
            }
            trace!(anchor = run.anchor, "single capital, anchor patched to title");
        } else if boundary == Boundary::Revert {
            trace!(anchor = run.anchor, len = run.len, offset, "uppercase run reverted");
            self.out.push(&[Marker::Revert.byte()], offset);
            self.out.norm_to_orig.push(offset);
        } else {
            trace!(anchor = run.anchor, len = run.len, "uppercase run ended by punctuation");
        }
    }

    fn close(&mut self, offset: usize) {
        if !self.finished {
            self.close_run(offset, Boundary::Revert);
            self.finished = true;
        }
    }
}
