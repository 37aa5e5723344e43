// Service exports
pub mod files;

pub use files::{load_labels, load_population, load_score_matrix, FileError, PopulationFiles};
