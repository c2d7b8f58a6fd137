use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::arbitrary::CasedText;
use crate::{
    CaseClassifier, CaseDecoder, CaseEncoder, FragmentClass, Marker, PrefixNormalizer,
};

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: decoding the encoding of any text gives back the exact bytes.
#[test]
fn round_trip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: CasedText) -> bool {
        let encoded = CaseEncoder::encode_with(&mut CaseClassifier, text.0.as_bytes()).unwrap();
        CaseDecoder::decode(&encoded.text).as_deref() == Ok(text.0.as_bytes())
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(CasedText) -> bool);
}

/// Property: one offset per inserted `L`, in order, and one alignment entry
/// per output byte.
#[test]
fn offset_tables_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: CasedText) -> bool {
        let encoded = CaseEncoder::encode_with(&mut CaseClassifier, text.0.as_bytes()).unwrap();
        let reverts = encoded
            .text
            .iter()
            .filter(|&&b| b == Marker::Revert.byte())
            .count();

        encoded.norm_to_orig.len() == reverts
            && encoded.norm_to_orig.is_sorted()
            && encoded.norm_to_orig.iter().all(|&o| o <= text.0.len())
            && encoded.alignment.len() == encoded.text.len()
            && encoded.alignment.is_sorted()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(CasedText) -> bool);
}

/// Property: every `L` in the encoding sits at the original offset of the
/// first byte that is not part of the preceding uppercase run.
#[test]
fn revert_offsets_point_past_the_run_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: CasedText) -> bool {
        let input = text.0.as_bytes();
        let encoded = CaseEncoder::encode_with(&mut CaseClassifier, input).unwrap();
        encoded.norm_to_orig.iter().all(|&offset| {
            let mut next = Vec::new();
            CaseClassifier.normalize_prefix(&input[offset..], &mut next);
            text.0[..offset]
                .chars()
                .next_back()
                .is_some_and(char::is_uppercase)
                && next.first() != Some(&FragmentClass::UPPER)
        })
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(CasedText) -> bool);
}

/// Text without capitals or punctuation comes out unchanged, with nothing
/// inserted.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn lowercase_passes_through(text: String) -> bool {
    let folded: String = text
        .chars()
        .filter(|c| !c.is_uppercase() && !c.is_ascii_punctuation())
        .collect();
    let encoded = CaseEncoder::encode_with(&mut CaseClassifier, folded.as_bytes()).unwrap();
    encoded.text == folded.as_bytes() && encoded.norm_to_orig.is_empty()
}
