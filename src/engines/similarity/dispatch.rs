use super::hamming::{hamming_bits_similarity, hamming_words_similarity};
use super::jaro_winkler::jaro_winkler_similarity;
use crate::engines::genome::Gene;
use crate::error::{BiosimError, Result};
use serde::{Deserialize, Serialize};

/// Metric used for genomes of equal length.
///
/// Stored in configuration as its integer code (0, 1 or 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ComparisonMethod {
    #[default]
    JaroWinkler,
    HammingBits,
    HammingWords,
}

impl ComparisonMethod {
    pub fn code(self) -> u8 {
        match self {
            ComparisonMethod::JaroWinkler => 0,
            ComparisonMethod::HammingBits => 1,
            ComparisonMethod::HammingWords => 2,
        }
    }
}

impl TryFrom<u8> for ComparisonMethod {
    type Error = BiosimError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(ComparisonMethod::JaroWinkler),
            1 => Ok(ComparisonMethod::HammingBits),
            2 => Ok(ComparisonMethod::HammingWords),
            other => Err(BiosimError::InvalidConfiguration(format!(
                "Unknown genome comparison method {} (expected 0, 1 or 2)",
                other
            ))),
        }
    }
}

impl From<ComparisonMethod> for u8 {
    fn from(method: ComparisonMethod) -> Self {
        method.code()
    }
}

/// Blend applied when two genomes differ in length:
/// `approx * similarity_weight + (shorter / longer) * length_ratio_weight`.
///
/// Keeps selection from drifting toward extreme genome lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthPenalty {
    pub similarity_weight: f64,
    pub length_ratio_weight: f64,
}

impl Default for LengthPenalty {
    fn default() -> Self {
        Self {
            similarity_weight: 0.8,
            length_ratio_weight: 0.2,
        }
    }
}

impl LengthPenalty {
    pub fn validate(&self) -> Result<()> {
        let weights = [self.similarity_weight, self.length_ratio_weight];
        if weights.iter().any(|w| !(0.0..=1.0).contains(w)) {
            return Err(BiosimError::InvalidConfiguration(
                "Length penalty weights must be between 0 and 1".to_string(),
            ));
        }
        if (self.similarity_weight + self.length_ratio_weight - 1.0).abs() > 1e-9 {
            return Err(BiosimError::InvalidConfiguration(
                "Length penalty weights must sum to 1".to_string(),
            ));
        }
        Ok(())
    }

    fn apply(&self, approx: f64, len_a: usize, len_b: usize) -> f64 {
        let ratio = len_a.min(len_b) as f64 / len_a.max(len_b) as f64;
        approx * self.similarity_weight + ratio * self.length_ratio_weight
    }
}

/// Picks the metric for a pair of genomes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimilarityDispatcher {
    method: ComparisonMethod,
    length_penalty: LengthPenalty,
}

impl SimilarityDispatcher {
    pub fn new(method: ComparisonMethod) -> Self {
        Self {
            method,
            length_penalty: LengthPenalty::default(),
        }
    }

    pub fn with_length_penalty(mut self, length_penalty: LengthPenalty) -> Result<Self> {
        length_penalty.validate()?;
        self.length_penalty = length_penalty;
        Ok(self)
    }

    pub fn method(&self) -> ComparisonMethod {
        self.method
    }

    pub fn length_penalty(&self) -> LengthPenalty {
        self.length_penalty
    }

    /// Similarity in `0.0..=1.0`.
    ///
    /// Genomes of different length are always compared approximately, then
    /// blended with their length ratio. Equal lengths use the configured
    /// method.
    pub fn similarity(&self, a: &[Gene], b: &[Gene]) -> Result<f64> {
        if a.len() != b.len() {
            let approx = jaro_winkler_similarity(a, b);
            let blended = self.length_penalty.apply(approx, a.len(), b.len());
            log::trace!(
                "Length mismatch {} vs {}: approx {:.4}, blended {:.4}",
                a.len(),
                b.len(),
                approx,
                blended
            );
            return Ok(blended);
        }

        match self.method {
            ComparisonMethod::JaroWinkler => Ok(jaro_winkler_similarity(a, b)),
            ComparisonMethod::HammingBits => hamming_bits_similarity(a, b),
            ComparisonMethod::HammingWords => hamming_words_similarity(a, b),
        }
    }
}

/// Similarity of two genomes with the default length penalty
pub fn genome_similarity(a: &[Gene], b: &[Gene], method: ComparisonMethod) -> Result<f64> {
    SimilarityDispatcher::new(method).similarity(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::genome::{SinkType, SourceType};

    fn genome(ids: &[i16]) -> Vec<Gene> {
        ids.iter()
            .map(|&w| Gene::new(SourceType::Neuron, 2, SinkType::Neuron, 3, w))
            .collect()
    }

    #[test]
    fn test_method_codes() {
        for code in 0u8..3 {
            let method = ComparisonMethod::try_from(code).unwrap();
            assert_eq!(method.code(), code);
        }
        assert!(matches!(
            ComparisonMethod::try_from(3),
            Err(BiosimError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_unequal_lengths_ignore_method() {
        let a = genome(&[1, 2, 3, 4, 5]);
        let b = genome(&[1, 2, 3, 4, 5, 6, 7]);

        let expected = 0.8 * jaro_winkler_similarity(&a, &b) + 0.2 * (5.0 / 7.0);
        for code in 0u8..3 {
            let method = ComparisonMethod::try_from(code).unwrap();
            assert_eq!(genome_similarity(&a, &b, method).unwrap(), expected);
        }
    }

    #[test]
    fn test_one_side_empty_is_zero() {
        let a = genome(&[1, 2, 3]);
        assert_eq!(genome_similarity(&a, &[], ComparisonMethod::HammingBits).unwrap(), 0.0);
    }

    #[test]
    fn test_custom_length_penalty() {
        let penalty = LengthPenalty {
            similarity_weight: 0.5,
            length_ratio_weight: 0.5,
        };
        let dispatcher = SimilarityDispatcher::new(ComparisonMethod::JaroWinkler)
            .with_length_penalty(penalty)
            .unwrap();

        let a = genome(&[1, 2]);
        let b = genome(&[3, 4, 5, 6]);
        assert_eq!(dispatcher.similarity(&a, &b).unwrap(), 0.25);
    }

    #[test]
    fn test_rejects_bad_length_penalty() {
        let penalty = LengthPenalty {
            similarity_weight: 0.9,
            length_ratio_weight: 0.2,
        };
        assert!(SimilarityDispatcher::default().with_length_penalty(penalty).is_err());
    }

    #[test]
    fn test_equal_lengths_follow_method() {
        let a = genome(&[1, 2, 3, 4]);
        let b = genome(&[1, 2, 3, 9]);

        let words = genome_similarity(&a, &b, ComparisonMethod::HammingWords).unwrap();
        assert_eq!(words, 0.75);

        let bits = genome_similarity(&a, &b, ComparisonMethod::HammingBits).unwrap();
        assert_eq!(bits, hamming_bits_similarity(&a, &b).unwrap());

        let approx = genome_similarity(&a, &b, ComparisonMethod::JaroWinkler).unwrap();
        assert_eq!(approx, jaro_winkler_similarity(&a, &b));
    }
}
