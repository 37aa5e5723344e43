use rand::Rng;

use crate::core::{
    compatibility::filter_scores,
    engine::run_deferred_acceptance,
    error::MatchingError,
    partition::SideAssignment,
    population::{Population, ScoreMatrix},
    ranking::PreferenceTable,
    stability::find_blocking_pair,
};
use crate::models::{CandidatePolicy, MatchPair, Participant};

/// Result of one pairing run
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub pairs: Vec<MatchPair>,
    pub sides: SideAssignment,
    pub unmatched_proposers: Vec<usize>,
    pub unmatched_receivers: Vec<usize>,
    pub proposals: usize,
    pub participants: Vec<Participant>,
    /// Scores after incompatible entries were zeroed
    pub filtered_scores: ScoreMatrix,
    pub preferences: PreferenceTable,
}

impl MatchOutcome {
    pub fn blocking_pair(&self) -> Option<MatchPair> {
        find_blocking_pair(&self.pairs, &self.sides, &self.preferences)
    }

    pub fn is_stable(&self) -> bool {
        self.blocking_pair().is_none()
    }
}

/// Pairing pipeline orchestrator
///
/// # Pipeline Stages
/// 1. Input validation
/// 2. Compatibility filter over an owned copy of the scores
/// 3. Side partition
/// 4. Preference ranking
/// 5. Deferred acceptance
#[derive(Debug, Clone, Copy, Default)]
pub struct StableMatcher {
    policy: CandidatePolicy,
}

impl StableMatcher {
    pub fn new(policy: CandidatePolicy) -> Self {
        Self { policy }
    }

    pub fn with_default_policy() -> Self {
        Self::default()
    }

    pub fn policy(&self) -> CandidatePolicy {
        self.policy
    }

    /// Pair a population, drawing the side partition from `rng`
    ///
    /// # Arguments
    /// * `scores` - N x N matrix, row = proposer, column = receiver
    /// * `identities` - N gender identity labels
    /// * `preferences` - N gender preference labels
    /// * `rng` - source for the side partition
    pub fn run<R, S, G>(
        &self,
        scores: &[R],
        identities: &[S],
        preferences: &[S],
        rng: &mut G,
    ) -> Result<MatchOutcome, MatchingError>
    where
        R: AsRef<[f64]>,
        S: AsRef<str>,
        G: Rng + ?Sized,
    {
        let population = Population::from_labels(scores, identities, preferences)?;
        let sides = SideAssignment::random(population.size(), rng);
        Ok(self.pair(population, sides))
    }

    /// Pair a population with a fixed side partition
    pub fn run_with_sides<R, S>(
        &self,
        scores: &[R],
        identities: &[S],
        preferences: &[S],
        proposers: Vec<usize>,
    ) -> Result<MatchOutcome, MatchingError>
    where
        R: AsRef<[f64]>,
        S: AsRef<str>,
    {
        let population = Population::from_labels(scores, identities, preferences)?;
        let sides = SideAssignment::from_proposers(population.size(), proposers)?;
        Ok(self.pair(population, sides))
    }

    fn pair(&self, population: Population, sides: SideAssignment) -> MatchOutcome {
        let Population {
            participants,
            mut scores,
        } = population;

        let zeroed = filter_scores(&mut scores, &participants);
        tracing::debug!(
            "Zeroed {} incompatible scores across {} participants",
            zeroed,
            participants.len()
        );

        let preferences = PreferenceTable::build(&scores, &participants, &sides, self.policy);
        let result = run_deferred_acceptance(&sides, &preferences);

        tracing::info!(
            "Paired {} of {} participants ({} proposals, {} proposers unmatched, policy {:?})",
            result.pairs.len() * 2,
            participants.len(),
            result.proposals,
            result.unmatched_proposers.len(),
            self.policy
        );

        MatchOutcome {
            pairs: result.pairs,
            sides,
            unmatched_proposers: result.unmatched_proposers,
            unmatched_receivers: result.unmatched_receivers,
            proposals: result.proposals,
            participants,
            filtered_scores: scores,
            preferences,
        }
    }
}

/// Compute stable pairs with the default candidate policy
pub fn run_matching<R, S, G>(
    scores: &[R],
    identities: &[S],
    preferences: &[S],
    rng: &mut G,
) -> Result<Vec<MatchPair>, MatchingError>
where
    R: AsRef<[f64]>,
    S: AsRef<str>,
    G: Rng + ?Sized,
{
    StableMatcher::with_default_policy()
        .run(scores, identities, preferences, rng)
        .map(|outcome| outcome.pairs)
}
