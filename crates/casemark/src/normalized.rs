use alloc::vec::Vec;

use bstr::BStr;

/// Output of one codec pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    /// The produced byte stream.
    pub text: Vec<u8>,
    /// Original byte offset for every byte of `text`.
    pub alignment: Vec<usize>,
    /// Original byte offset for every zero-width `L` marker inserted into
    /// `text`, in stream order.
    pub norm_to_orig: Vec<usize>,
}

impl Normalized {
    /// The produced text as a byte string.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(&self.text)
    }

    pub(crate) fn push(&mut self, bytes: &[u8], offset: usize) {
        self.text.extend_from_slice(bytes);
        self.alignment.extend(core::iter::repeat_n(offset, bytes.len()));
    }
}
