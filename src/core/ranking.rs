use std::cmp::Ordering;

use crate::core::compatibility::is_compatible;
use crate::core::partition::SideAssignment;
use crate::core::population::ScoreMatrix;
use crate::models::{CandidatePolicy, Participant};

/// Ranked preferences for both sides of a run
///
/// Proposers get an ordered candidate list; receivers get a rank table
/// (lower rank = more preferred) covering every participant.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceTable {
    candidates: Vec<Vec<usize>>,
    ranks: Vec<Vec<usize>>,
}

impl PreferenceTable {
    pub fn build(
        scores: &ScoreMatrix,
        participants: &[Participant],
        sides: &SideAssignment,
        policy: CandidatePolicy,
    ) -> Self {
        let size = participants.len();
        let mut candidates = vec![Vec::new(); size];
        let mut ranks = vec![Vec::new(); size];

        for &p in sides.proposers() {
            let mut list: Vec<usize> = sides
                .receivers()
                .iter()
                .copied()
                .filter(|&r| match policy {
                    CandidatePolicy::CompatibleOnly => is_compatible(&participants[p], &participants[r]),
                    CandidatePolicy::AllOpposite => true,
                })
                .collect();
            sort_descending(&mut list, |r| scores.get(p, r));
            candidates[p] = list;
        }

        for &r in sides.receivers() {
            let mut order: Vec<usize> = (0..size).collect();
            sort_descending(&mut order, |x| scores.get(x, r));

            let mut rank = vec![0; size];
            for (position, &x) in order.iter().enumerate() {
                rank[x] = position;
            }
            ranks[r] = rank;
        }

        Self { candidates, ranks }
    }

    /// Receivers `proposer` may propose to, best first
    pub fn candidates(&self, proposer: usize) -> &[usize] {
        &self.candidates[proposer]
    }

    /// Position of `participant` in `receiver`'s ordering
    #[inline]
    pub fn rank(&self, receiver: usize, participant: usize) -> usize {
        self.ranks[receiver][participant]
    }

    /// Whether `receiver` strictly prefers `challenger` over `holder`
    #[inline]
    pub fn receiver_prefers(&self, receiver: usize, challenger: usize, holder: usize) -> bool {
        self.rank(receiver, challenger) < self.rank(receiver, holder)
    }

    /// Full ordering of `receiver`, best first
    pub fn receiver_order(&self, receiver: usize) -> Vec<usize> {
        let rank = &self.ranks[receiver];
        let mut order = vec![0; rank.len()];
        for (participant, &position) in rank.iter().enumerate() {
            order[position] = participant;
        }
        order
    }
}

/// Stable sort by descending key; equal keys keep index order
fn sort_descending<F>(indices: &mut [usize], key: F)
where
    F: Fn(usize) -> f64,
{
    indices.sort_by(|&a, &b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
}
