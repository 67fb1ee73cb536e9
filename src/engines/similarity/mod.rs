pub mod dispatch;
pub mod hamming;
pub mod jaro_winkler;

pub use dispatch::{genome_similarity, ComparisonMethod, LengthPenalty, SimilarityDispatcher};
pub use hamming::{hamming_bits_similarity, hamming_words_similarity};
pub use jaro_winkler::{jaro_winkler_similarity, MAX_GENES_TO_COMPARE};
