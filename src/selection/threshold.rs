use crate::candidate::Candidate;
use crate::selection::selection_strategy::SelectionStrategy;

/// Selects every candidate whose score reaches the threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdSelection;

impl SelectionStrategy for ThresholdSelection {
    fn select(&self, candidate: &mut Candidate, threshold: usize) {
        candidate.set_selected(candidate.score() >= threshold);
    }
}
