use crate::prelude::*;
use thiserror::Error as ThisError;

#[derive(Debug, PartialEq, Eq, Clone, Error, ThisError)]
pub enum FFISessionError {
    #[error("Re-login failed, reason: '{:?}'", reason)]
    ReloginFailed { reason: Option<String> },
}
