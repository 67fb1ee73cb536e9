pub mod diversity;
pub mod genome;
pub mod similarity;
