#![no_main]

use arbitrary::Arbitrary;
use casemark::{CaseClassifier, CaseDecoder, CaseEncoder, chunk_utils::partition};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    /// Raw bytes fed straight to the decoder.
    stream: Vec<u8>,
    splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
    let encoded = CaseEncoder::encode_with(&mut CaseClassifier, input.text.as_bytes())
        .expect("classifier output never contains marker bytes");
    assert_eq!(encoded.alignment.len(), encoded.text.len());

    let mut decoder = CaseDecoder::new();
    for chunk in partition(&encoded.text, &input.splits) {
        decoder.feed(chunk).expect("encoder output decodes");
    }
    let decoded = decoder.finish().expect("encoder output decodes");
    assert_eq!(decoded.text, input.text.as_bytes());

    // Arbitrary streams may be rejected, but never panic.
    let _ = CaseDecoder::decode(&input.stream);
});
