mod ffi_modal;
mod ffi_ui_handler;

pub use ffi_modal::*;
pub use ffi_ui_handler::*;
