use rand::Rng;

use crate::core::error::MatchingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Proposer,
    Receiver,
}

/// Split of the participant indices into proposers and receivers
///
/// Proposers keep the order they were chosen in, which is also the order
/// they enter the free queue. Receivers are kept in ascending index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideAssignment {
    proposers: Vec<usize>,
    receivers: Vec<usize>,
    sides: Vec<Side>,
}

impl SideAssignment {
    /// Sample floor(N/2) proposers uniformly at random; everyone else receives
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let proposers = rand::seq::index::sample(rng, size, size / 2).into_vec();
        Self::build(size, proposers)
    }

    /// Use a caller-chosen proposer set, e.g. to replay a known partition
    ///
    /// The set must hold exactly floor(N/2) distinct in-range indices.
    pub fn from_proposers(size: usize, proposers: Vec<usize>) -> Result<Self, MatchingError> {
        let mut seen = vec![false; size];
        for &index in &proposers {
            if index >= size {
                return Err(MatchingError::InvalidSides(format!(
                    "proposer {} is out of range for {} participants",
                    index, size
                )));
            }
            if std::mem::replace(&mut seen[index], true) {
                return Err(MatchingError::InvalidSides(format!(
                    "proposer {} listed twice",
                    index
                )));
            }
        }
        if proposers.len() != size / 2 {
            return Err(MatchingError::InvalidSides(format!(
                "{} proposers given, {} participants need {}",
                proposers.len(),
                size,
                size / 2
            )));
        }

        Ok(Self::build(size, proposers))
    }

    fn build(size: usize, proposers: Vec<usize>) -> Self {
        let mut sides = vec![Side::Receiver; size];
        for &index in &proposers {
            sides[index] = Side::Proposer;
        }

        let receivers = (0..size)
            .filter(|&index| sides[index] == Side::Receiver)
            .collect();

        Self {
            proposers,
            receivers,
            sides,
        }
    }

    pub fn proposers(&self) -> &[usize] {
        &self.proposers
    }

    pub fn receivers(&self) -> &[usize] {
        &self.receivers
    }

    pub fn size(&self) -> usize {
        self.sides.len()
    }

    #[inline]
    pub fn side_of(&self, index: usize) -> Side {
        self.sides[index]
    }

    #[inline]
    pub fn is_proposer(&self, index: usize) -> bool {
        self.sides[index] == Side::Proposer
    }
}
