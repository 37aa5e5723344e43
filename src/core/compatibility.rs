use crate::core::population::ScoreMatrix;
use crate::models::{GenderIdentity, GenderPreference, Participant};

/// Check whether `proposer` may be paired with `receiver`
///
/// The table is directional: it is always read from the proposer's
/// identity and preference.
#[inline]
pub fn is_compatible(proposer: &Participant, receiver: &Participant) -> bool {
    use GenderIdentity::{Female, Male, Nonbinary};
    use GenderPreference::{Bisexual, Men, Women};

    match (proposer.identity, proposer.preference) {
        (Male, Women) => receiver.identity == Female && receiver.preference == Men,
        (Male, Men) => receiver.identity == Male && receiver.preference != Women,
        (Female, Men) => receiver.identity == Male && receiver.preference == Women,
        (Female, Women) => receiver.identity == Female && receiver.preference != Men,
        // Preferences never name an identity, so only Bisexual receivers qualify
        (Male | Female, Bisexual) => receiver.preference == Bisexual,
        (Nonbinary, _) => receiver.preference == Bisexual,
    }
}

/// Zero every score whose ordered pair is incompatible
///
/// Returns how many entries changed, so a second pass over the same
/// matrix returns 0.
pub fn filter_scores(scores: &mut ScoreMatrix, participants: &[Participant]) -> usize {
    let mut zeroed = 0;

    for proposer in participants {
        for receiver in participants {
            if is_compatible(proposer, receiver) {
                continue;
            }
            if scores.get(proposer.index, receiver.index) != 0.0 {
                scores.set(proposer.index, receiver.index, 0.0);
                zeroed += 1;
            }
        }
    }

    zeroed
}
