use thiserror::Error;

/// Errors surfaced by parsing, validation and solving.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid instance: {0}")]
    InvalidInstance(String),

    /// The grid was exhausted while cities were still uncovered.
    #[error("Unsatisfiable instance: {uncovered} cities cannot be covered by any grid cell")]
    UnsatisfiableInstance { uncovered: usize },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unknown solver '{0}' (expected one of: naive, simple-greedy, forreal, minnie)")]
    UnknownSolver(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlannerResult<T> = Result<T, PlannerError>;

impl PlannerError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        PlannerError::Parse {
            line,
            message: message.into(),
        }
    }
}
