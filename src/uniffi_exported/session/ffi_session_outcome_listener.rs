use crate::prelude::*;

#[derive(Object)]
pub struct FFISessionOutcomeListener {
    result_listener: FFIOperationOutcomeListener<FFISessionOutcome>,
}
impl IsOutcomeListener for FFISessionOutcomeListener {
    type Request = FFISessionCheckRequest;
    type Response = FFISessionStatus;
    type Failure = FFISessionError;
    type Outcome = FFISessionOutcome;
}

impl From<FFIOperationOutcomeListener<FFISessionOutcome>> for FFISessionOutcomeListener {
    fn from(value: FFIOperationOutcomeListener<FFISessionOutcome>) -> Self {
        Self::with_result_listener(value)
    }
}
impl FFISessionOutcomeListener {
    pub fn with_result_listener(
        result_listener: FFIOperationOutcomeListener<FFISessionOutcome>,
    ) -> Self {
        Self { result_listener }
    }
}

#[export]
impl FFISessionOutcomeListener {
    /// This is called from the host, inside its implementation of
    /// `execute_session_check`, once the session state is known (after a
    /// re-login attempt, if one was needed).
    pub fn notify_outcome(&self, result: FFISessionOutcome) {
        self.result_listener.notify_outcome(result)
    }
}
