use crate::prelude::*;

/// Host side accessor of the bearer token of the current login session.
/// Read once per dispatched request, after any re-login has completed.
#[uniffi::export(with_foreign)]
pub trait FFITokenProvider: Send + Sync {
    fn current_token(&self) -> String;
}
