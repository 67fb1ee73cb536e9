use crate::engines::genome::{Gene, BITS_PER_GENE_WORD};
use crate::error::{BiosimError, Result};

fn ensure_equal_length(a: &[Gene], b: &[Gene]) -> Result<()> {
    if a.len() != b.len() {
        return Err(BiosimError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Bit-level Hamming similarity over packed gene words.
///
/// Two random bit patterns differ in about half their bits, so the differing
/// fraction is doubled to spread the score over the whole `0.0..=1.0` range
/// and clamped for negatively correlated inputs.
pub fn hamming_bits_similarity(a: &[Gene], b: &[Gene]) -> Result<f64> {
    ensure_equal_length(a, b)?;
    if a.is_empty() {
        return Ok(0.0);
    }

    let differing_bits: u64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| u64::from((x.to_word() ^ y.to_word()).count_ones()))
        .sum();
    let total_bits = a.len() as f64 * f64::from(BITS_PER_GENE_WORD);

    Ok(1.0 - (2.0 * differing_bits as f64 / total_bits).min(1.0))
}

/// Fraction of genes whose packed words are identical.
///
/// Historically called the "bytes" metric; it compares whole gene words.
pub fn hamming_words_similarity(a: &[Gene], b: &[Gene]) -> Result<f64> {
    ensure_equal_length(a, b)?;
    if a.is_empty() {
        return Ok(0.0);
    }

    let identical = a
        .iter()
        .zip(b)
        .filter(|(x, y)| x.to_word() == y.to_word())
        .count();

    Ok(identical as f64 / a.len() as f64)
}
