use crate::prelude::*;

/// An object representing that Rust is listening on the outcome of an operation
/// carried out by the host (FFI side). When the host has finished the operation,
/// either successfully or with failure, it passes back the outcome to Rust by
/// calling `notify_outcome`. This is effectively a callback pattern.
pub struct FFIOperationOutcomeListener<R> {
    sender: Mutex<Option<Sender<R>>>,
}

impl<R> FFIOperationOutcomeListener<R> {
    pub(crate) fn new(sender: Sender<R>) -> Self {
        Self {
            sender: Mutex::new(Some(sender)),
        }
    }

    /// Called from the host inside its `execute_*` implementation once the
    /// operation has finished. Only the first notification is delivered.
    pub(crate) fn notify_outcome(&self, outcome: R) {
        let sender = match self.sender.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        let Some(sender) = sender else {
            warn!(
                target: "miniapp_request::bridge",
                "Host notified the same listener twice, ignoring second outcome"
            );
            return;
        };
        if sender.send(outcome).is_err() {
            debug!(
                target: "miniapp_request::bridge",
                "{}, the awaiting call was dropped",
                RustSideError::FailedToPropagateResultFromFFIOperationBackToDispatcher
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_first_outcome_only() {
        let (sender, receiver) = channel::<u8>();
        let listener = FFIOperationOutcomeListener::new(sender);
        listener.notify_outcome(1);
        listener.notify_outcome(2);
        assert_eq!(receiver.await, Ok(1));
    }

    #[test]
    fn notifying_after_receiver_dropped_does_not_panic() {
        let (sender, receiver) = channel::<u8>();
        drop(receiver);
        FFIOperationOutcomeListener::new(sender).notify_outcome(7);
    }
}
