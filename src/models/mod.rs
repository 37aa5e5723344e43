// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidatePolicy, GenderIdentity, GenderPreference, MatchPair, ParseLabelError, Participant};
pub use requests::StableMatchRequest;
pub use responses::{StableMatchResponse, HealthResponse, ErrorResponse};
