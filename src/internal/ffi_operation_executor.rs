use crate::prelude::*;

/// Rust side view of a host executor. Every host trait exported with
/// `with_foreign` gets an impl of this on its `dyn` type, which lets one
/// [`FFIOperationDispatcher`] drive networking and session checks alike.
pub trait FFIOperationExecutor<L: IsOutcomeListener>: Send + Sync {
    fn execute_request(
        &self,
        request: L::Request,
        listener_rust_side: L,
    ) -> Result<(), FFISideError>;
}
