//! The two closed marker alphabets of the codec.
//!
//! [`FragmentClass`] is the *input* alphabet: the leading byte the upstream
//! normalizer puts in front of every fragment to say what the original text
//! looked like. [`Marker`] is the *output* alphabet: the bytes the encoder
//! writes into the canonical stream and the decoder consumes.
//!
//! Canonical text is case-folded, so none of the uppercase ASCII marker bytes
//! can appear in a payload. The encoder checks this with
//! [`Marker::is_reserved`].

/// Classification of one normalizer fragment, taken from its leading byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FragmentClass {
    /// `U`: an uppercase letter in the original.
    Upper,
    /// `L`: a lowercase letter in the original.
    Lower,
    /// `P`: punctuation. The payload is the literal punctuation.
    Punct,
    /// ` `: a word boundary. The space is its own payload.
    Space,
    /// Any other leading byte. Passed through verbatim.
    Neutral,
    /// No bytes at all: a truncated fragment.
    Empty,
}

impl FragmentClass {
    /// Leading byte of an uppercase fragment.
    pub const UPPER: u8 = b'U';
    /// Leading byte of a lowercase fragment.
    pub const LOWER: u8 = b'L';
    /// Leading byte of a punctuation fragment.
    pub const PUNCT: u8 = b'P';
    /// Leading byte of a word boundary fragment.
    pub const SPACE: u8 = b' ';

    /// Classifies raw fragment text by its first byte.
    #[must_use]
    pub fn of(text: &[u8]) -> Self {
        match text.first() {
            None => Self::Empty,
            Some(&Self::UPPER) => Self::Upper,
            Some(&Self::LOWER) => Self::Lower,
            Some(&Self::PUNCT) => Self::Punct,
            Some(&Self::SPACE) => Self::Space,
            Some(_) => Self::Neutral,
        }
    }

    /// Whether the leading byte is a marker that is stripped from the payload.
    #[must_use]
    pub fn has_marker_byte(self) -> bool {
        matches!(self, Self::Upper | Self::Lower | Self::Punct)
    }
}

/// A case marker byte in the encoded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Marker {
    /// `T`: the next letter alone was uppercase.
    Title = b'T',
    /// `U`: the next letter starts a run of uppercase letters.
    Upper = b'U',
    /// `L`: zero-width end of an uppercase run.
    Revert = b'L',
}

impl Marker {
    /// The byte written to the stream for this marker.
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Maps a stream byte back to its marker, if it is one.
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'T' => Some(Self::Title),
            b'U' => Some(Self::Upper),
            b'L' => Some(Self::Revert),
            _ => None,
        }
    }

    /// Whether `byte` must never occur inside canonical text.
    #[inline]
    #[must_use]
    pub const fn is_reserved(byte: u8) -> bool {
        Self::from_byte(byte).is_some()
    }
}

impl From<Marker> for u8 {
    fn from(marker: Marker) -> Self {
        marker.byte()
    }
}
