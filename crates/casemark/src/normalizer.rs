//! The boundary to the upstream prefix normalizer.
//!
//! The codec does not canonicalize text itself. It pulls classified fragments
//! from a [`PrefixNormalizer`], one input prefix at a time, and only looks at
//! the leading classification byte of each fragment. [`CaseClassifier`] is a
//! small reference normalizer that folds case per `char` and nothing else.

use alloc::vec::Vec;
use core::ops::ControlFlow;

use tracing::warn;

use crate::{fragment::Fragment, marker::FragmentClass};

/// A pull-based source of classified fragments.
///
/// Closures of the form `FnMut(&[u8], &mut Vec<u8>) -> usize` implement this
/// trait, so a normalizer can be plugged in without a named type.
pub trait PrefixNormalizer {
    /// Normalizes one prefix of `input`.
    ///
    /// Writes the fragment text, leading classification byte first, into
    /// `out` (which the caller clears beforehand) and returns how many bytes
    /// of `input` it stands for. Returning `0` with nothing written signals
    /// the end of the stream.
    fn normalize_prefix(&mut self, input: &[u8], out: &mut Vec<u8>) -> usize;
}

impl<F> PrefixNormalizer for F
where
    F: FnMut(&[u8], &mut Vec<u8>) -> usize,
{
    fn normalize_prefix(&mut self, input: &[u8], out: &mut Vec<u8>) -> usize {
        self(input, out)
    }
}

/// Pulls fragments out of `normalizer` until `input` is exhausted, the
/// normalizer stops, or `f` breaks. `f` receives each fragment together with
/// its original byte offset.
pub(crate) fn for_each_fragment<N, E>(
    normalizer: &mut N,
    input: &[u8],
    mut f: impl FnMut(&Fragment<'_>, usize) -> Result<ControlFlow<()>, E>,
) -> Result<(), E>
where
    N: PrefixNormalizer + ?Sized,
{
    let mut scratch = Vec::new();
    let mut pos = 0;
    while pos < input.len() {
        scratch.clear();
        let consumed = normalizer.normalize_prefix(&input[pos..], &mut scratch);
        if consumed == 0 && scratch.is_empty() {
            break;
        }

        let fragment = Fragment::new(&scratch, consumed);
        if f(&fragment, pos)?.is_break() {
            break;
        }
        if consumed == 0 {
            warn!(offset = pos, "normalizer made no progress, ending stream");
            break;
        }
        pos = pos.saturating_add(consumed).min(input.len());
    }
    Ok(())
}

/// Reference normalizer that classifies one `char` per fragment.
///
/// - uppercase letters become `U` followed by their lowercase form,
/// - lowercase letters become `L` followed by the letter,
/// - `' '` is a word boundary,
/// - ASCII punctuation becomes `P` followed by the punctuation,
/// - everything else, including bytes that are not valid UTF-8, is neutral
///   and copied verbatim.
///
/// An uppercase letter is only folded when it folds to a single alphanumeric
/// `char` that uppercases back to the very same letter; anything else stays
/// neutral so that decoding restores it byte for byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseClassifier;

impl CaseClassifier {
    /// Creates the classifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// The single lowercase `char` of `c`, if `c` is an uppercase letter whose
/// case round-trips through it.
fn reversible_lowercase(c: char) -> Option<char> {
    if !c.is_uppercase() {
        return None;
    }
    let mut lower = c.to_lowercase();
    let (Some(l), None) = (lower.next(), lower.next()) else {
        return None;
    };
    let mut upper = l.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if u == c && l != c && l.is_alphanumeric() => Some(l),
        _ => None,
    }
}

impl PrefixNormalizer for CaseClassifier {
    fn normalize_prefix(&mut self, input: &[u8], out: &mut Vec<u8>) -> usize {
        let (ch, size) = bstr::decode_utf8(input);
        let raw = &input[..size];
        let Some(ch) = ch else {
            out.extend_from_slice(raw);
            return size;
        };

        let mut buf = [0; 4];
        if let Some(lower) = reversible_lowercase(ch) {
            out.push(FragmentClass::UPPER);
            out.extend_from_slice(lower.encode_utf8(&mut buf).as_bytes());
        } else if ch.is_lowercase() {
            out.push(FragmentClass::LOWER);
            out.extend_from_slice(raw);
        } else if ch.is_ascii_punctuation() {
            out.push(FragmentClass::PUNCT);
            out.extend_from_slice(raw);
        } else {
            // ' ' lands here and classifies itself as a space fragment.
            out.extend_from_slice(raw);
        }
        size
    }
}
