use crate::prelude::*;

/// Per call callbacks. Exactly one of `on_success`, `on_server_error` and
/// `on_fail` is called, always followed by `on_complete`.
#[uniffi::export(with_foreign)]
pub trait FFIRequestListener: Send + Sync {
    fn on_success(&self, response: FFINetworkingResponse);
    fn on_server_error(&self, error: ServerErrorResponse);
    fn on_fail(&self, error: FFIBridgeError);
    fn on_complete(&self);
}
