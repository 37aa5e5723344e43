use crate::core::partition::SideAssignment;
use crate::core::ranking::PreferenceTable;
use crate::models::MatchPair;

/// Find a proposer/receiver pair that would both rather be together
///
/// A proposer blocks with any candidate it lists ahead of its partner (or
/// with any candidate at all when unmatched), provided that receiver is free
/// or ranks the proposer above its current partner. Returns the first such
/// pair in proposer order, or `None` when the pairing is stable.
pub fn find_blocking_pair(
    pairs: &[MatchPair],
    sides: &SideAssignment,
    preferences: &PreferenceTable,
) -> Option<MatchPair> {
    let size = sides.size();
    let mut partner_of: Vec<Option<usize>> = vec![None; size];
    let mut holder_of: Vec<Option<usize>> = vec![None; size];
    for pair in pairs {
        partner_of[pair.proposer] = Some(pair.receiver);
        holder_of[pair.receiver] = Some(pair.proposer);
    }

    for &proposer in sides.proposers() {
        for &receiver in preferences.candidates(proposer) {
            if partner_of[proposer] == Some(receiver) {
                break;
            }
            let blocks = match holder_of[receiver] {
                None => true,
                Some(holder) => preferences.receiver_prefers(receiver, proposer, holder),
            };
            if blocks {
                return Some(MatchPair::new(proposer, receiver));
            }
        }
    }

    None
}

/// Whether every participant shows up at most once in `pairs`
pub fn is_monogamous(pairs: &[MatchPair], size: usize) -> bool {
    let mut seen = vec![false; size];
    pairs.iter().all(|pair| {
        pair.proposer < size
            && pair.receiver < size
            && pair.proposer != pair.receiver
            && !std::mem::replace(&mut seen[pair.proposer], true)
            && !std::mem::replace(&mut seen[pair.receiver], true)
    })
}
