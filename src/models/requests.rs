use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::CandidatePolicy;

/// Request to pair a population
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StableMatchRequest {
    /// N x N scores, row = proposer, column = receiver
    #[validate(length(min = 1))]
    pub scores: Vec<Vec<f64>>,
    #[validate(length(min = 1))]
    pub identities: Vec<String>,
    #[validate(length(min = 1))]
    pub preferences: Vec<String>,
    /// Fixes the side partition; omitted means a fresh random split
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default, alias = "candidate_policy", rename = "candidatePolicy")]
    pub candidate_policy: Option<CandidatePolicy>,
}

impl StableMatchRequest {
    /// Largest population any of the inputs describes, before shape checks
    pub fn participant_count(&self) -> usize {
        let widest_row = self.scores.iter().map(Vec::len).max().unwrap_or(0);
        self.identities
            .len()
            .max(self.preferences.len())
            .max(self.scores.len())
            .max(widest_row)
    }
}
