use crate::prelude::*;

#[derive(Enum, Clone, Debug, PartialEq, Eq)]
pub enum FFINetworkingOutcome {
    Success { value: FFINetworkingResponse },
    Failure { error: FFINetworkingError },
}

impl From<FFINetworkingOutcome> for Result<FFINetworkingResponse, FFINetworkingError> {
    fn from(value: FFINetworkingOutcome) -> Self {
        match value {
            FFINetworkingOutcome::Success { value } => Ok(value),
            FFINetworkingOutcome::Failure { error } => Err(error),
        }
    }
}
