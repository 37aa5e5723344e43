use std::collections::VecDeque;

use crate::core::partition::SideAssignment;
use crate::core::ranking::PreferenceTable;
use crate::models::MatchPair;

/// FIFO of proposers that currently hold no receiver
#[derive(Debug, Clone, Default)]
pub struct FreeQueue {
    inner: VecDeque<usize>,
}

impl FreeQueue {
    pub fn new<I: IntoIterator<Item = usize>>(proposers: I) -> Self {
        Self {
            inner: proposers.into_iter().collect(),
        }
    }

    pub fn push(&mut self, proposer: usize) {
        self.inner.push_back(proposer);
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.inner.pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Final state of the deferred-acceptance loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineResult {
    /// One pair per held receiver, ascending by receiver index
    pub pairs: Vec<MatchPair>,
    /// Proposers that ran out of candidates, ascending
    pub unmatched_proposers: Vec<usize>,
    /// Receivers nobody ended up proposing to successfully, ascending
    pub unmatched_receivers: Vec<usize>,
    pub proposals: usize,
}

/// Run deferred acceptance until no free proposer remains
///
/// A proposer whose candidate list is exhausted leaves the queue for good
/// and is reported as unmatched. Receivers never drop back to empty once
/// they hold someone.
pub fn run_deferred_acceptance(sides: &SideAssignment, preferences: &PreferenceTable) -> EngineResult {
    let size = sides.size();
    let mut next = vec![0usize; size];
    let mut held_by: Vec<Option<usize>> = vec![None; size];
    let mut free = FreeQueue::new(sides.proposers().iter().copied());
    let mut unmatched_proposers = Vec::new();
    let mut proposals = 0;

    while let Some(proposer) = free.pop() {
        let Some(&receiver) = preferences.candidates(proposer).get(next[proposer]) else {
            tracing::debug!("Proposer {} exhausted its candidates, leaving unmatched", proposer);
            unmatched_proposers.push(proposer);
            continue;
        };
        next[proposer] += 1;
        proposals += 1;

        match held_by[receiver] {
            None => {
                tracing::trace!("Receiver {} accepts proposer {}", receiver, proposer);
                held_by[receiver] = Some(proposer);
            }
            Some(holder) if preferences.receiver_prefers(receiver, proposer, holder) => {
                tracing::trace!("Receiver {} trades proposer {} for {}", receiver, holder, proposer);
                held_by[receiver] = Some(proposer);
                free.push(holder);
            }
            Some(_) => {
                tracing::trace!("Receiver {} rejects proposer {}", receiver, proposer);
                free.push(proposer);
            }
        }
    }

    let mut pairs = Vec::with_capacity(sides.receivers().len());
    let mut unmatched_receivers = Vec::new();
    for &receiver in sides.receivers() {
        match held_by[receiver] {
            Some(proposer) => pairs.push(MatchPair::new(proposer, receiver)),
            None => unmatched_receivers.push(receiver),
        }
    }
    unmatched_proposers.sort_unstable();

    EngineResult {
        pairs,
        unmatched_proposers,
        unmatched_receivers,
        proposals,
    }
}
