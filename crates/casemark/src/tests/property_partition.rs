use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::arbitrary::CasedText;
use crate::{CaseClassifier, CaseDecoder, CaseEncoder, chunk_utils::partition};

/// Property: feeding the marker stream in arbitrary chunks, including chunks
/// that split UTF-8 sequences, decodes to the same bytes and alignment as a
/// single feed.
#[test]
fn partition_decode_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: CasedText, splits: Vec<usize>) -> bool {
        let encoded = CaseEncoder::encode_with(&mut CaseClassifier, text.0.as_bytes()).unwrap();

        let mut whole = CaseDecoder::new();
        whole.feed(&encoded.text).unwrap();
        let whole = whole.finish().unwrap();

        let mut decoder = CaseDecoder::new();
        let mut streamed = Vec::new();
        for chunk in partition(&encoded.text, &splits) {
            streamed.extend_from_slice(decoder.feed(chunk).unwrap());
        }
        let finished = decoder.finish().unwrap();

        streamed == finished.text
            && finished.text == text.0.as_bytes()
            && finished.alignment == whole.alignment
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(CasedText, Vec<usize>) -> bool);
}

/// Property: arbitrary bytes never panic the decoder, and feeding them in
/// pieces reports the same outcome as feeding them at once.
#[test]
fn arbitrary_streams_decode_consistently_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(stream: Vec<u8>, splits: Vec<usize>) -> bool {
        let whole = CaseDecoder::decode(&stream);

        let mut decoder = CaseDecoder::new();
        let mut failed = None;
        for chunk in partition(&stream, &splits) {
            if let Err(err) = decoder.feed(chunk) {
                failed = Some(err);
                break;
            }
        }
        let streamed = match failed {
            Some(err) => Err(err),
            None => decoder.finish().map(|out| out.text),
        };
        streamed == whole
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Vec<u8>, Vec<usize>) -> bool);
}
