/// Lifecycle of a reading session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// Tokens remain; one advance is pending
    Running,
    /// Source exhausted; nothing is scheduled
    Finished,
}

impl ReaderState {
    pub fn is_finished(self) -> bool {
        self == ReaderState::Finished
    }
}
