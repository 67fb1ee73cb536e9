use super::traits::ConfigSection;
use crate::engines::diversity::DEFAULT_SAMPLE_SIZE;
use crate::engines::similarity::{ComparisonMethod, LengthPenalty};
use crate::error::BiosimError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// 0 = Jaro-Winkler, 1 = bit Hamming, 2 = word Hamming
    pub genome_comparison_method: ComparisonMethod,
    pub diversity_sample_size: usize,
    pub length_penalty: LengthPenalty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            genome_comparison_method: ComparisonMethod::JaroWinkler,
            diversity_sample_size: DEFAULT_SAMPLE_SIZE,
            length_penalty: LengthPenalty::default(),
            seed: None,
        }
    }
}

impl ConfigSection for AnalysisConfig {
    fn section_name() -> &'static str {
        "analysis"
    }

    fn validate(&self) -> Result<(), BiosimError> {
        if self.diversity_sample_size == 0 {
            return Err(BiosimError::InvalidConfiguration(
                "Diversity sample size must be at least 1".to_string(),
            ));
        }
        self.length_penalty.validate()
    }
}
