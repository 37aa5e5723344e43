use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Label that does not belong to one of the recognised sets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} label: {label:?}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub label: String,
}

/// Gender identity of a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenderIdentity {
    Male,
    Female,
    Nonbinary,
}

impl GenderIdentity {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenderIdentity::Male => "Male",
            GenderIdentity::Female => "Female",
            GenderIdentity::Nonbinary => "Nonbinary",
        }
    }
}

impl FromStr for GenderIdentity {
    type Err = ParseLabelError;

    /// Labels are matched case-insensitively; `Non-binary` is accepted as an alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(GenderIdentity::Male),
            "female" => Ok(GenderIdentity::Female),
            "nonbinary" | "non-binary" => Ok(GenderIdentity::Nonbinary),
            _ => Err(ParseLabelError {
                kind: "gender identity",
                label: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GenderIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which genders a participant wants to be paired with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenderPreference {
    Men,
    Women,
    Bisexual,
}

impl GenderPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenderPreference::Men => "Men",
            GenderPreference::Women => "Women",
            GenderPreference::Bisexual => "Bisexual",
        }
    }
}

impl FromStr for GenderPreference {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "men" => Ok(GenderPreference::Men),
            "women" => Ok(GenderPreference::Women),
            "bisexual" => Ok(GenderPreference::Bisexual),
            _ => Err(ParseLabelError {
                kind: "gender preference",
                label: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GenderPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A participant in a pairing run, addressed by its index in the input lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub index: usize,
    pub identity: GenderIdentity,
    pub preference: GenderPreference,
}

impl Participant {
    pub fn new(index: usize, identity: GenderIdentity, preference: GenderPreference) -> Self {
        Self {
            index,
            identity,
            preference,
        }
    }
}

/// Which opposite-side receivers end up in a proposer's preference list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidatePolicy {
    /// Only receivers the proposer is compatible with
    #[default]
    CompatibleOnly,
    /// Every receiver, incompatible ones ranked by their zeroed score
    AllOpposite,
}

impl FromStr for CandidatePolicy {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "compatible_only" => Ok(CandidatePolicy::CompatibleOnly),
            "all_opposite" => Ok(CandidatePolicy::AllOpposite),
            _ => Err(ParseLabelError {
                kind: "candidate policy",
                label: s.to_string(),
            }),
        }
    }
}

/// One stable pair: the proposer and the receiver holding it at termination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchPair {
    pub proposer: usize,
    pub receiver: usize,
}

impl MatchPair {
    pub fn new(proposer: usize, receiver: usize) -> Self {
        Self { proposer, receiver }
    }
}

impl fmt::Display for MatchPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.proposer, self.receiver)
    }
}
