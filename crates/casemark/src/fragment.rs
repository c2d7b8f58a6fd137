use crate::marker::FragmentClass;

/// One classified step of normalizer output.
///
/// `text` starts with the classification byte (see [`FragmentClass`]);
/// `consumed` is the number of original input bytes this step stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    text: &'a [u8],
    consumed: usize,
}

impl<'a> Fragment<'a> {
    /// Wraps raw normalizer output.
    #[must_use]
    pub fn new(text: &'a [u8], consumed: usize) -> Self {
        Self { text, consumed }
    }

    /// The raw fragment text, classification byte included.
    #[must_use]
    pub fn text(&self) -> &'a [u8] {
        self.text
    }

    /// Original bytes covered by this fragment.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Classification of the fragment.
    #[must_use]
    pub fn class(&self) -> FragmentClass {
        FragmentClass::of(self.text)
    }

    /// The canonical bytes carried by the fragment.
    ///
    /// `U`, `L` and `P` markers are stripped; spaces and neutral content are
    /// their own payload.
    #[must_use]
    pub fn payload(&self) -> &'a [u8] {
        if self.class().has_marker_byte() {
            &self.text[1..]
        } else {
            self.text
        }
    }

    /// A fragment that cannot carry any content. Treated as end of stream.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        match self.class() {
            FragmentClass::Empty => true,
            FragmentClass::Upper => self.text.len() == 1,
            _ => false,
        }
    }
}
