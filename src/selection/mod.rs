pub mod selection_strategy;
pub mod threshold;

pub use selection_strategy::SelectionStrategy;
pub use threshold::ThresholdSelection;
