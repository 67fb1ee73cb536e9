use super::sampler::UniformSource;
use crate::config::AnalysisConfig;
use crate::engines::genome::GenomePool;
use crate::engines::similarity::{ComparisonMethod, SimilarityDispatcher};
use crate::error::{BiosimError, Result};
use rayon::prelude::*;

/// Upper bound on pairs sampled per estimate
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

/// Individuals drawn per genome length estimate
pub const GENOME_LENGTH_SAMPLES: usize = 100;

/// Estimates genetic diversity by sampling neighbouring individuals.
///
/// Each sample draws `i` from `1..=N-1` and compares individuals `i` and
/// `i + 1`. Pairs are always adjacent in population order, never two
/// independent picks, so the estimate reflects local similarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiversityEstimator {
    dispatcher: SimilarityDispatcher,
    sample_size: usize,
}

impl Default for DiversityEstimator {
    fn default() -> Self {
        Self {
            dispatcher: SimilarityDispatcher::default(),
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl DiversityEstimator {
    pub fn new(dispatcher: SimilarityDispatcher, sample_size: usize) -> Result<Self> {
        if sample_size == 0 {
            return Err(BiosimError::InvalidConfiguration(
                "Diversity sample size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            dispatcher,
            sample_size,
        })
    }

    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        let dispatcher = SimilarityDispatcher::new(config.genome_comparison_method)
            .with_length_penalty(config.length_penalty)?;
        Self::new(dispatcher, config.diversity_sample_size)
    }

    pub fn dispatcher(&self) -> &SimilarityDispatcher {
        &self.dispatcher
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Diversity in `0.0..=1.0`; 0.0 for fewer than two individuals.
    ///
    /// All indices are drawn from `rng` up front and in order, so a seeded
    /// source gives the same result regardless of how the pair scores are
    /// scheduled.
    pub fn estimate<P, U>(&self, population: &P, rng: &mut U) -> Result<f64>
    where
        P: GenomePool + Sync + ?Sized,
        U: UniformSource + ?Sized,
    {
        let size = population.population_size();
        if size < 2 {
            return Ok(0.0);
        }

        let samples = self.sample_size.min(size);
        let indices: Vec<usize> = (0..samples)
            .map(|_| rng.uniform_index(1, size - 1))
            .collect();

        let scores = indices
            .par_iter()
            .map(|&index| {
                self.dispatcher
                    .similarity(population.genome(index), population.genome(index + 1))
            })
            .collect::<Result<Vec<f64>>>()?;

        let similarity_sum: f64 = scores.iter().sum();
        let diversity = 1.0 - similarity_sum / samples as f64;

        log::debug!(
            "Genetic diversity {:.4} from {} adjacent pairs (population {}, method {:?})",
            diversity,
            samples,
            size,
            self.dispatcher.method()
        );

        Ok(diversity)
    }
}

/// Diversity of `population` using `method` and the default sample size
pub fn genetic_diversity<P, U>(
    population: &P,
    method: ComparisonMethod,
    rng: &mut U,
) -> Result<f64>
where
    P: GenomePool + Sync + ?Sized,
    U: UniformSource + ?Sized,
{
    DiversityEstimator::new(SimilarityDispatcher::new(method), DEFAULT_SAMPLE_SIZE)?
        .estimate(population, rng)
}

/// Mean genome length over [`GENOME_LENGTH_SAMPLES`] individuals drawn
/// uniformly from `1..=N`, with replacement. 0.0 for an empty population.
pub fn average_genome_length<P, U>(population: &P, rng: &mut U) -> f64
where
    P: GenomePool + ?Sized,
    U: UniformSource + ?Sized,
{
    let size = population.population_size();
    if size == 0 {
        return 0.0;
    }

    let total: usize = (0..GENOME_LENGTH_SAMPLES)
        .map(|_| population.genome(rng.uniform_index(1, size)).len())
        .sum();

    total as f64 / GENOME_LENGTH_SAMPLES as f64
}
