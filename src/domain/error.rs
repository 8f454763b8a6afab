use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Already signed up for this activity")]
    AlreadySignedUp,
    #[error("Not signed up for this activity")]
    NotSignedUp,
}
