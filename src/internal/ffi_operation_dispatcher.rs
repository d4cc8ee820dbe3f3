use crate::prelude::*;
use std::marker::PhantomData;

/// Rust constructs one dispatcher per kind of host operation, each holding
/// an executor passed to us from the host (FFI side), e.g. a wrapper around
/// `wx.request` which can make network calls.
pub struct FFIOperationDispatcher<L, E: ?Sized> {
    /// Executor on the host side, receiving requests from us (Rust side),
    /// and passing the outcome of the operation back to us (Rust side).
    pub handler: Arc<E>,
    listener: PhantomData<fn() -> L>,
}

impl<L, E> FFIOperationDispatcher<L, E>
where
    L: IsOutcomeListener,
    E: ?Sized + FFIOperationExecutor<L>,
{
    pub fn new(handler: Arc<E>) -> Self {
        Self {
            handler,
            listener: PhantomData,
        }
    }

    pub(crate) async fn dispatch(&self, request: L::Request) -> Result<L::Response, FFIBridgeError> {
        // Underlying tokio channel used to get the outcome from the host back to Rust.
        let (sender, receiver) = channel::<L::Outcome>();

        // Our callback we pass to the host
        let outcome_listener = FFIOperationOutcomeListener::new(sender);

        // Host calls `notify_outcome` on the listener, possibly before returning.
        self.handler
            .execute_request(request, L::from(outcome_listener))?;

        let outcome = receiver
            .await
            .map_err(|_| RustSideError::FailedToReceiveResponseFromFFI)?;

        let result: Result<L::Response, L::Failure> = outcome.into();
        result.map_err(|failure| FFIBridgeError::from(Into::<FFISideError>::into(failure)))
    }
}
