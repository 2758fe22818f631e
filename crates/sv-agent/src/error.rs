use sv_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent configuration error: {0}")]
    Config(String),

    #[error("could not build the spatial grid from the world bounds: {0}")]
    Spatial(#[from] SpatialError),
}

pub type AgentResult<T> = Result<T, AgentError>;
