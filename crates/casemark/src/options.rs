/// Configuration options for [`CaseCodec`](crate::CaseCodec).
///
/// The two flags select which direction of the codec a pass runs. Leaving
/// both unset yields an identity codec that strips classification markers
/// without recording any case information.
///
/// # Examples
///
/// ```rust
/// use casemark::{CaseCodec, CaseOptions};
///
/// let codec = CaseCodec::new(CaseOptions {
///     encode_case: true,
///     ..Default::default()
/// })
/// .unwrap();
/// assert!(codec.is_encoder());
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CaseOptions {
    /// Whether to encode case into the canonical stream.
    ///
    /// Uppercase letters are folded and replaced by `T`/`U`/`L` run markers.
    ///
    /// # Default
    ///
    /// `false`
    pub encode_case: bool,

    /// Whether to decode a marker stream back to original casing.
    ///
    /// Mutually exclusive with `encode_case`; setting both is rejected by
    /// [`CaseCodec::new`](crate::CaseCodec::new).
    ///
    /// # Default
    ///
    /// `false`
    pub decode_case: bool,
}
