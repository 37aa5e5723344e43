use crate::core::error::MatchingError;
use crate::models::{GenderIdentity, GenderPreference, Participant};

/// Dense N x N score matrix, row = proposer, column = receiver
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    size: usize,
    values: Vec<f64>,
}

impl ScoreMatrix {
    /// Copy caller rows into an owned matrix, checking shape and finiteness
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R], size: usize) -> Result<Self, MatchingError> {
        if rows.len() != size {
            return Err(MatchingError::LengthMismatch {
                what: "score matrix rows",
                expected: size,
                actual: rows.len(),
            });
        }

        let mut values = Vec::with_capacity(size * size);
        for (row, entries) in rows.iter().enumerate() {
            let entries = entries.as_ref();
            if entries.len() != size {
                return Err(MatchingError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: size,
                });
            }
            for (col, &value) in entries.iter().enumerate() {
                if !value.is_finite() {
                    return Err(MatchingError::InvalidScore { row, col, value });
                }
                values.push(value);
            }
        }

        Ok(Self { size, values })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.values[row * self.size + col] = value;
    }
}

/// Validated input of one pairing run
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    pub participants: Vec<Participant>,
    pub scores: ScoreMatrix,
}

impl Population {
    /// Parse labels and copy scores, failing fast on any shape or label problem
    ///
    /// N is taken from the identity list; the preference list and the matrix
    /// must agree with it.
    pub fn from_labels<R, S>(
        scores: &[R],
        identities: &[S],
        preferences: &[S],
    ) -> Result<Self, MatchingError>
    where
        R: AsRef<[f64]>,
        S: AsRef<str>,
    {
        let size = identities.len();
        if preferences.len() != size {
            return Err(MatchingError::LengthMismatch {
                what: "gender preferences",
                expected: size,
                actual: preferences.len(),
            });
        }

        let scores = ScoreMatrix::from_rows(scores, size)?;

        let participants = identities
            .iter()
            .zip(preferences)
            .enumerate()
            .map(|(index, (identity, preference))| {
                let identity: GenderIdentity = identity.as_ref().parse().map_err(|_| {
                    MatchingError::UnknownIdentity {
                        index,
                        label: identity.as_ref().to_string(),
                    }
                })?;
                let preference: GenderPreference = preference.as_ref().parse().map_err(|_| {
                    MatchingError::UnknownPreference {
                        index,
                        label: preference.as_ref().to_string(),
                    }
                })?;
                Ok(Participant::new(index, identity, preference))
            })
            .collect::<Result<Vec<_>, MatchingError>>()?;

        Ok(Self {
            participants,
            scores,
        })
    }

    pub fn size(&self) -> usize {
        self.participants.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_labels_ok() {
        let scores = vec![vec![0.0, 3.0], vec![2.0, 0.0]];
        let population = Population::from_labels(&scores, &["Male", "Female"], &["Women", "Men"]).unwrap();

        assert_eq!(population.size(), 2);
        assert_eq!(population.participants[1].identity, GenderIdentity::Female);
        assert_eq!(population.scores.get(0, 1), 3.0);
        assert_eq!(population.scores.get(1, 0), 2.0);
    }

    #[test]
    fn test_short_preference_list() {
        let scores = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let err = Population::from_labels(&scores, &["Male", "Female"], &["Women"]).unwrap_err();

        assert_eq!(
            err,
            MatchingError::LengthMismatch { what: "gender preferences", expected: 2, actual: 1 }
        );
    }

    #[test]
    fn test_ragged_matrix() {
        let scores = vec![vec![0.0, 1.0], vec![1.0]];
        let err = Population::from_labels(&scores, &["Male", "Female"], &["Women", "Men"]).unwrap_err();

        assert_eq!(err, MatchingError::NotSquare { row: 1, len: 1, expected: 2 });
    }

    #[test]
    fn test_nan_score_rejected() {
        let scores = vec![vec![0.0, f64::NAN], vec![1.0, 0.0]];
        let err = Population::from_labels(&scores, &["Male", "Female"], &["Women", "Men"]).unwrap_err();

        assert!(matches!(err, MatchingError::InvalidScore { row: 0, col: 1, .. }));
    }

    #[test]
    fn test_unknown_labels_report_index() {
        let scores = vec![vec![0.0, 1.0], vec![1.0, 0.0]];

        let err = Population::from_labels(&scores, &["Male", "Robot"], &["Women", "Men"]).unwrap_err();
        assert_eq!(err, MatchingError::UnknownIdentity { index: 1, label: "Robot".to_string() });

        let err = Population::from_labels(&scores, &["Male", "Female"], &["Everyone", "Men"]).unwrap_err();
        assert_eq!(err, MatchingError::UnknownPreference { index: 0, label: "Everyone".to_string() });
    }
}
