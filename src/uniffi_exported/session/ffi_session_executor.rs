use crate::prelude::*;

/// Host side login session checker, e.g. `wx.checkSession` followed by
/// `wx.login` when the session has expired.
#[uniffi::export(with_foreign)]
pub trait FFISessionExecutor: Send + Sync {
    fn execute_session_check(
        &self,
        request: FFISessionCheckRequest,
        listener_rust_side: Arc<FFISessionOutcomeListener>,
    ) -> Result<(), FFISideError>;
}

impl FFIOperationExecutor<FFISessionOutcomeListener> for dyn FFISessionExecutor {
    fn execute_request(
        &self,
        request: <FFISessionOutcomeListener as IsOutcomeListener>::Request,
        listener_rust_side: FFISessionOutcomeListener,
    ) -> Result<(), FFISideError> {
        self.execute_session_check(request, listener_rust_side.into())
    }
}
