use crate::prelude::*;

#[derive(Enum, Clone, Debug, PartialEq, Eq)]
pub enum FFISessionOutcome {
    Success { value: FFISessionStatus },
    Failure { error: FFISessionError },
}

impl From<FFISessionOutcome> for Result<FFISessionStatus, FFISessionError> {
    fn from(value: FFISessionOutcome) -> Self {
        match value {
            FFISessionOutcome::Success { value } => Ok(value),
            FFISessionOutcome::Failure { error } => Err(error),
        }
    }
}
