pub mod gene;
pub mod population;

pub use gene::{
    genes_match, Gene, SinkType, SourceType, BITS_PER_GENE_WORD, MAX_CONNECTION_NUM, WEIGHT_SCALE,
};
pub use population::{GenomePool, Individual, Population};

/// Genome representation for similarity analysis
///
/// A genome is the ordered list of an individual's genes. Lengths may differ
/// between individuals, and order matters for the approximate metric: a
/// gene's position decides which part of the other genome it is searched
/// against and whether it counts toward the shared-prefix bonus.
///
/// Genomes are produced and owned elsewhere. Everything in this crate only
/// borrows them as `&[Gene]` for the duration of one comparison.
///
/// # Example
///
/// ```
/// use biosim_genetics::engines::genome::{Gene, Genome, SinkType, SourceType};
///
/// let genome: Genome = vec![Gene::new(SourceType::Sensor, 0, SinkType::Action, 0, 100)];
/// assert_eq!(genome[0].to_word(), 0x0064_0101);
/// ```
pub type Genome = Vec<Gene>;
