/// Errors that reject an arena operation without changing any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// Caller-supplied data fails a precondition.
    Validation(String),
    /// Operation is not valid for the current match state.
    State(String),
}

impl ArenaError {
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(s) => s,
            Self::State(s) => s,
        }
    }
}

impl std::fmt::Display for ArenaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ArenaError {}
