use crate::prelude::*;
use thiserror::Error as ThisError;

/// Errors reported back to us by the host (FFI side), e.g. a failed
/// `wx.request` or a re-login the user dismissed.
#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum FFISideError {
    #[error(transparent)]
    Networking {
        #[from]
        error: FFINetworkingError,
    },

    #[error(transparent)]
    Session {
        #[from]
        error: FFISessionError,
    },
}

#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum RustSideError {
    #[error("Failed to receive response from FFI side, listener was dropped without being notified")]
    FailedToReceiveResponseFromFFI,

    #[error("Failed to propagate FFI operation result back to dispatcher")]
    FailedToPropagateResultFromFFIOperationBackToDispatcher,

    #[error("Invalid request URL: '{url}'")]
    InvalidRequestURL { url: String },

    #[error("Invalid request payload: {reason}")]
    InvalidRequestPayload { reason: String },

    #[error("Session still invalid after {replays} re-login replay(s)")]
    SessionInvalidAfterRelogin { replays: u8 },

    #[error("Invalid request helper configuration: {underlying}")]
    InvalidConfiguration { underlying: String },
}

#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum FFIBridgeError {
    #[error(transparent)]
    FromRust {
        #[from]
        error: RustSideError,
    },

    #[error(transparent)]
    FromFFI {
        #[from]
        error: FFISideError,
    },
}

impl From<FFINetworkingError> for FFIBridgeError {
    fn from(value: FFINetworkingError) -> Self {
        FFISideError::from(value).into()
    }
}

impl From<FFISessionError> for FFIBridgeError {
    fn from(value: FFISessionError) -> Self {
        FFISideError::from(value).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_errors_wrap_transparently() {
        let error = FFIBridgeError::from(FFINetworkingError::RequestFailed {
            status_code: Some(502),
            error_message: Some("bad gateway".to_owned()),
        });
        assert_eq!(
            error,
            FFIBridgeError::FromFFI {
                error: FFISideError::Networking {
                    error: FFINetworkingError::RequestFailed {
                        status_code: Some(502),
                        error_message: Some("bad gateway".to_owned()),
                    }
                }
            }
        );
        assert!(error.to_string().contains("bad gateway"));
    }

    #[test]
    fn rust_errors_display_their_context() {
        let error: FFIBridgeError = RustSideError::SessionInvalidAfterRelogin { replays: 1 }.into();
        assert_eq!(
            error.to_string(),
            "Session still invalid after 1 re-login replay(s)"
        );
    }
}
