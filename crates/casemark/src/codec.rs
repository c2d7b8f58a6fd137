use core::{convert::Infallible, ops::ControlFlow};

use tracing::{debug, error};

use crate::{
    decoder::CaseDecoder,
    encoder::CaseEncoder,
    error::{CodecError, ConfigError},
    normalized::Normalized,
    normalizer::{PrefixNormalizer, for_each_fragment},
    options::CaseOptions,
};

/// Which direction a normalization pass runs, chosen once from
/// [`CaseOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseCodec {
    /// Classification markers are stripped and case is dropped.
    Identity,
    /// Case is encoded with [`CaseEncoder`].
    Encoder,
    /// The input is a marker stream decoded with [`CaseDecoder`].
    Decoder,
}

impl CaseCodec {
    /// Selects the codec for `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConflictingModes`] if both `encode_case` and
    /// `decode_case` are set.
    pub fn new(options: CaseOptions) -> Result<Self, ConfigError> {
        let codec = match (options.encode_case, options.decode_case) {
            (true, true) => {
                error!("cannot set both encode_case=true and decode_case=true");
                return Err(ConfigError::ConflictingModes);
            }
            (true, false) => Self::Encoder,
            (false, true) => Self::Decoder,
            (false, false) => Self::Identity,
        };
        debug!(?codec, "case codec selected");
        Ok(codec)
    }

    /// Whether this codec encodes case.
    #[must_use]
    pub fn is_encoder(&self) -> bool {
        matches!(self, Self::Encoder)
    }

    /// Whether this codec decodes case.
    #[must_use]
    pub fn is_decoder(&self) -> bool {
        matches!(self, Self::Decoder)
    }

    /// Runs one pass over `input`.
    ///
    /// The identity and encoder codecs pull fragments from `normalizer`. The
    /// decoder expects `input` to be an already canonical marker stream and
    /// does not consult the normalizer.
    ///
    /// # Errors
    ///
    /// Propagates [`EncodeError`](crate::EncodeError) and
    /// [`DecodeError`](crate::DecodeError) as [`CodecError`].
    pub fn normalize<N>(&self, normalizer: &mut N, input: &[u8]) -> Result<Normalized, CodecError>
    where
        N: PrefixNormalizer + ?Sized,
    {
        match self {
            Self::Identity => Ok(strip_markers(normalizer, input)),
            Self::Encoder => Ok(CaseEncoder::encode_with(normalizer, input)?),
            Self::Decoder => {
                let mut decoder = CaseDecoder::new();
                decoder.feed(input)?;
                Ok(decoder.finish()?)
            }
        }
    }
}

fn strip_markers<N>(normalizer: &mut N, input: &[u8]) -> Normalized
where
    N: PrefixNormalizer + ?Sized,
{
    let mut out = Normalized::default();
    let pass = for_each_fragment::<N, Infallible>(normalizer, input, |fragment, offset| {
        if fragment.is_truncated() {
            return Ok(ControlFlow::Break(()));
        }
        out.push(fragment.payload(), offset);
        Ok(ControlFlow::Continue(()))
    });
    if let Err(never) = pass {
        match never {}
    }
    out
}
