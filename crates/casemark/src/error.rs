use thiserror::Error;

/// Rejected codec configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `encode_case` and `decode_case` were both requested.
    #[error("cannot set both encode_case=true and decode_case=true")]
    ConflictingModes,
}

/// Failure while encoding a fragment stream.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// A payload contained a byte the decoder would read as a case marker.
    #[error("reserved marker byte '{}' in fragment at offset {offset}", char::from(*byte))]
    ReservedByte {
        /// The offending byte.
        byte: u8,
        /// Original offset of the fragment carrying it.
        offset: usize,
    },
    /// A fragment was pushed after the stream had been closed.
    #[error("fragment at offset {offset} pushed after end of stream")]
    Finished {
        /// Original offset of the rejected fragment.
        offset: usize,
    },
}

/// Failure while decoding a marker stream.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// An `L` revert marker outside of an uppercase run.
    #[error("revert marker outside of an uppercase run at offset {offset}")]
    UnexpectedRevert {
        /// Input offset of the marker.
        offset: usize,
    },
    /// A `T` or `U` anchor that is not followed by a letter.
    #[error("case anchor at offset {offset} is not followed by a letter")]
    DanglingAnchor {
        /// Input offset of the anchor.
        offset: usize,
    },
}

/// Any failure of a [`CaseCodec`](crate::CaseCodec) pass.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Encoding failed.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
    /// Decoding failed.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
