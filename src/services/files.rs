use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::{MatchingError, Population};

/// Default file names inside a population directory
pub const SCORES_FILE: &str = "raw_scores.txt";
pub const GENDERS_FILE: &str = "genders.txt";
pub const PREFERENCES_FILE: &str = "gender_preferences.txt";

/// Errors that can occur while loading population files
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}:{column}: invalid number {token:?}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        token: String,
    },

    #[error("Invalid population: {0}")]
    Matching(#[from] MatchingError),
}

/// Raw contents of a population directory, before label parsing
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationFiles {
    pub scores: Vec<Vec<f64>>,
    pub identities: Vec<String>,
    pub preferences: Vec<String>,
}

impl PopulationFiles {
    /// Validate into a [`Population`]
    pub fn parse(&self) -> Result<Population, FileError> {
        Ok(Population::from_labels(&self.scores, &self.identities, &self.preferences)?)
    }
}

fn read(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a whitespace separated matrix, one row per line
///
/// Blank lines are skipped. Shape is not checked here.
pub fn parse_score_matrix(path: &Path, contents: &str) -> Result<Vec<Vec<f64>>, FileError> {
    let mut rows = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(column, token)| {
                token.parse::<f64>().map_err(|_| FileError::Parse {
                    path: path.to_path_buf(),
                    line: line_no + 1,
                    column: column + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    Ok(rows)
}

/// Parse one label per line, trimming trailing whitespace
///
/// Trailing blank lines are dropped; blank lines in the middle are kept so
/// they surface as unknown labels at the right index.
pub fn parse_labels(contents: &str) -> Vec<String> {
    let mut labels: Vec<String> = contents
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect();

    while labels.last().is_some_and(|label| label.is_empty()) {
        labels.pop();
    }

    labels
}

pub fn load_score_matrix<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<f64>>, FileError> {
    let path = path.as_ref();
    let contents = read(path)?;
    parse_score_matrix(path, &contents)
}

pub fn load_labels<P: AsRef<Path>>(path: P) -> Result<Vec<String>, FileError> {
    let contents = read(path.as_ref())?;
    Ok(parse_labels(&contents))
}

/// Load the three population files from `dir`
pub fn load_population<P: AsRef<Path>>(dir: P) -> Result<PopulationFiles, FileError> {
    let dir = dir.as_ref();

    let scores = load_score_matrix(dir.join(SCORES_FILE))?;
    let identities = load_labels(dir.join(GENDERS_FILE))?;
    let preferences = load_labels(dir.join(PREFERENCES_FILE))?;

    tracing::debug!(
        "Loaded {} score rows, {} identities, {} preferences from {}",
        scores.len(),
        identities.len(),
        preferences.len(),
        dir.display()
    );

    Ok(PopulationFiles {
        scores,
        identities,
        preferences,
    })
}
