//! Synthetic FASTQ fixtures shared by the sampling tests

/// Writes one record whose sequence is `len` bases long
fn push_record(buf: &mut Vec<u8>, name: &str, len: usize) {
    buf.extend_from_slice(format!("@{name}\n").as_bytes());
    buf.extend(std::iter::repeat_n(b'A', len));
    buf.extend_from_slice(b"\n+\n");
    buf.extend(std::iter::repeat_n(b'I', len));
    buf.push(b'\n');
}

/// Interleaved stream where pair `i` has both mates of length `lengths[i]`
pub fn interleaved(lengths: &[usize]) -> Vec<u8> {
    let mut buf = Vec::new();
    for (idx, &len) in lengths.iter().enumerate() {
        push_record(&mut buf, &format!("p{idx}/1"), len);
        push_record(&mut buf, &format!("p{idx}/2"), len);
    }
    buf
}

/// Forward and reverse streams holding the same pairs as [`interleaved`]
pub fn split(lengths: &[usize]) -> (Vec<u8>, Vec<u8>) {
    let mut forward = Vec::new();
    let mut reverse = Vec::new();
    for (idx, &len) in lengths.iter().enumerate() {
        push_record(&mut forward, &format!("p{idx}/1"), len);
        push_record(&mut reverse, &format!("p{idx}/2"), len);
    }
    (forward, reverse)
}

/// Identifier lines of a written stream, in order
pub fn ids(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .step_by(4)
        .map(String::from)
        .collect()
}
