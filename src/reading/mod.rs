pub mod pacing;
pub mod source;

pub use pacing::Pacing;
pub use source::{TokenSource, WordCycle, DEMO_SENTENCE};
