use alloc::vec::Vec;

/// Split `payload` into approximately equal-sized chunks.
///
/// Chunks may cut through UTF-8 sequences; the decoder carries partial
/// sequences over to the next feed.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    let chunk_size = payload.len().div_ceil(parts).max(1);
    payload.chunks(chunk_size).collect()
}

/// Split `payload` at the cut points derived from `splits`, the way the
/// property tests drive streaming input.
///
/// Each split is reduced modulo the remaining length, so any sequence of
/// numbers yields a valid partition. Whatever is left after `splits` runs out
/// becomes the last chunk.
#[must_use]
pub fn partition<'a>(payload: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::new();
    let mut rest = payload;
    for &s in splits {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(1 + s % rest.len());
        chunks.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}
