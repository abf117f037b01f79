//! Terminal UI helpers

pub mod progress;

pub use progress::StepProgress;
