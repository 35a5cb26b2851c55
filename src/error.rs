use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MountError {
    #[error("No mount region named '{0}'")]
    NotFound(String),

    #[error("View and tracer cannot share mount region '{0}'")]
    Shared(String),
}
