use crate::prelude::*;

/// Ties together the types flowing through one kind of host round trip: what
/// we send, what the host answers with, and how a failure on the host side is
/// lifted into an [`FFISideError`].
pub trait IsOutcomeListener: From<FFIOperationOutcomeListener<Self::Outcome>> {
    type Request;
    type Response;
    type Failure: Into<FFISideError>;
    type Outcome: Into<Result<Self::Response, Self::Failure>>;
}
