use std::fmt::Debug;

use crate::candidate::Candidate;

/// Trait for selection strategies.
///
/// A selection strategy decides, one candidate at a time, whether an evaluated
/// candidate may act as a parent. It only touches the candidate's selection flag.
///
/// # Examples
///
/// ```
/// use genword::candidate::Candidate;
/// use genword::selection::{SelectionStrategy, ThresholdSelection};
///
/// let mut candidate = Candidate::new("cat").unwrap();
///
/// ThresholdSelection.select(&mut candidate, 0);
/// assert!(candidate.is_selected());
///
/// ThresholdSelection.select(&mut candidate, 1);
/// assert!(!candidate.is_selected());
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Sets the selection flag of an evaluated `candidate` against `threshold`.
    fn select(&self, candidate: &mut Candidate, threshold: usize);
}
