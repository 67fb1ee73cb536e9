//! Genome similarity and population diversity analysis.
//!
//! Genomes are compared with a gap-tolerant Jaro-Winkler variant or, for
//! equal lengths, with bit and word Hamming metrics over each gene's packed
//! word. Diversity is estimated by sampling neighbouring individuals.

pub mod config;
pub mod engines;
pub mod error;

pub use engines::diversity::{
    average_genome_length, genetic_diversity, DiversityEstimator, UniformSource,
};
pub use engines::genome::{genes_match, Gene, Genome, GenomePool, Population, SinkType, SourceType};
pub use engines::similarity::{genome_similarity, ComparisonMethod, SimilarityDispatcher};
pub use error::{BiosimError, Result};
