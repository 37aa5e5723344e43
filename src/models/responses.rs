use serde::{Deserialize, Serialize};
use crate::models::domain::MatchPair;

/// Response for the stable pairing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StableMatchResponse {
    #[serde(rename = "runId")]
    pub run_id: uuid::Uuid,
    pub pairs: Vec<MatchPair>,
    #[serde(rename = "unmatchedProposers")]
    pub unmatched_proposers: Vec<usize>,
    #[serde(rename = "unmatchedReceivers")]
    pub unmatched_receivers: Vec<usize>,
    pub proposals: usize,
    pub stable: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
