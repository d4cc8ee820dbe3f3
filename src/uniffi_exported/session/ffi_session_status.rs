use crate::prelude::*;

/// What the host session checker concluded about the login session.
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FFISessionStatus {
    /// The session is active, requests may be sent right away.
    Valid,

    /// The session had expired and the host logged the user in again. The
    /// gated call is replayed, session check included.
    ReloginSucceeded,
}
