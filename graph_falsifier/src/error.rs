use thiserror::Error as ThisError;

pub type Result<T> = core::result::Result<T, FalsifierError>;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum FalsifierError {
    #[error("unknown invariant variable: {0}")]
    UnknownVariable(String),
    #[error("unknown comparison operator: {0}")]
    UnknownOperator(String),
    #[error("edge mutation needs at least 2 vertices, graph has {0}")]
    TooFewVertices(usize),
    #[error("vertex {vertex} out of range for graph on {num_vertices} vertices")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },
    #[error("self-loop at vertex {0}")]
    SelfLoop(usize),
    #[error("edge budget {target} exceeds the {max} possible edges")]
    EdgeBudgetOutOfRange { target: usize, max: usize },
    #[error("{name} must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Checks that `value` is a probability; `name` is used in the error.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(FalsifierError::ProbabilityOutOfRange { name, value })
    }
}
