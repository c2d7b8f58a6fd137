//! A streaming, reversible case-folding codec.
//!
//! Text headed for a subword tokenizer is first folded to a canonical,
//! case-insensitive form by an upstream normalizer. [`CaseEncoder`] records
//! just enough about the original casing to undo that fold, using at most one
//! ASCII marker byte per run of capitals, and [`CaseDecoder`] restores the
//! original text from the marker stream.
//!
//! ```rust
//! use casemark::{CaseClassifier, CaseDecoder, CaseEncoder};
//!
//! let encoded = CaseEncoder::encode_with(&mut CaseClassifier, b"NASA said hello").unwrap();
//! assert_eq!(encoded.text, b"UnasaL said hello");
//! assert_eq!(encoded.norm_to_orig, [4]);
//!
//! let decoded = CaseDecoder::decode(&encoded.text).unwrap();
//! assert_eq!(decoded, b"NASA said hello");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod codec;
mod decoder;
mod encoder;
mod error;
mod fragment;
mod marker;
mod normalized;
mod normalizer;
mod options;

#[doc(hidden)]
pub mod chunk_utils;

#[cfg(test)]
mod tests;

pub use codec::CaseCodec;
pub use decoder::CaseDecoder;
pub use encoder::{CaseEncoder, Keep};
pub use error::{CodecError, ConfigError, DecodeError, EncodeError};
pub use fragment::Fragment;
pub use marker::{FragmentClass, Marker};
pub use normalized::Normalized;
pub use normalizer::{CaseClassifier, PrefixNormalizer};
pub use options::CaseOptions;
