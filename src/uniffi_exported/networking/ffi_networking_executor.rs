use crate::prelude::*;

#[uniffi::export(with_foreign)]
pub trait FFINetworkingExecutor: Send + Sync {
    /// Rust asks the host to make `request` by calling this function. Once
    /// the request has finished (Success/Failure) the host passes back the
    /// outcome using `listener_rust_side`, exactly once.
    fn execute_networking_request(
        &self,
        request: FFINetworkingRequest,
        listener_rust_side: Arc<FFINetworkingOutcomeListener>,
    ) -> Result<(), FFISideError>;
}

impl FFIOperationExecutor<FFINetworkingOutcomeListener> for dyn FFINetworkingExecutor {
    fn execute_request(
        &self,
        request: <FFINetworkingOutcomeListener as IsOutcomeListener>::Request,
        listener_rust_side: FFINetworkingOutcomeListener,
    ) -> Result<(), FFISideError> {
        self.execute_networking_request(request, listener_rust_side.into())
    }
}
