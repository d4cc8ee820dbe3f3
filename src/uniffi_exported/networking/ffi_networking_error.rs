use crate::prelude::*;
use thiserror::Error as ThisError;

/// Transport level failure reported by the host request primitive, the
/// equivalent of the `fail` callback of `wx.request`.
#[derive(Debug, PartialEq, Eq, Clone, Error, ThisError)]
pub enum FFINetworkingError {
    #[error("Host failed to create a request from URL: '{string}'")]
    FailedToCreateURLFrom { string: String },

    #[error(
        "Host request failed with code '{:?}', error message: '{:?}'",
        status_code,
        error_message
    )]
    RequestFailed {
        status_code: Option<u16>,
        error_message: Option<String>,
    },
}
