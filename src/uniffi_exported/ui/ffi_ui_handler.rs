use crate::prelude::*;

/// The host UI toolkit, used for the loading indicator and error dialogs.
/// All methods are fire-and-forget.
#[uniffi::export(with_foreign)]
pub trait FFIUIHandler: Send + Sync {
    fn show_loading(&self, title: String);
    fn hide_loading(&self);
    fn show_modal(&self, modal: FFIModal);
}
