pub mod estimator;
pub mod sampler;

pub use estimator::{
    average_genome_length, genetic_diversity, DiversityEstimator, DEFAULT_SAMPLE_SIZE,
    GENOME_LENGTH_SAMPLES,
};
pub use sampler::UniformSource;
