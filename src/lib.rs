//! Lume Pairing - stable one-to-one pairing for Lume matchmaking events
//!
//! This library computes a stable pairing with deferred acceptance over
//! a randomly split population, honouring gender identity and preference
//! compatibility.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{run_matching, MatchOutcome, MatchingError, StableMatcher};
pub use models::{CandidatePolicy, GenderIdentity, GenderPreference, MatchPair, Participant, StableMatchRequest, StableMatchResponse};
