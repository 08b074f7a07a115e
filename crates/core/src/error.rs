#[derive(Debug, thiserror::Error)]
pub enum MoatError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("simulated upstream failure: {0}")]
    SimulatedUpstream(String),
    #[error("record store lock poisoned")]
    LockPoisoned,
    #[error("ORCID codec error: {0}")]
    Orcid(#[from] orcid::OrcidError),
}

pub type MoatResult<T> = std::result::Result<T, MoatError>;
