pub mod clock;
pub mod progress;
pub mod scoring;

pub use clock::{Clock, FixedClock, SystemClock};
pub use progress::ProgressTracker;
pub use scoring::{MasteryFilter, ProgressSummary, compute_accuracy};
