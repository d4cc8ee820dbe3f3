mod ffi_session_check_request;
mod ffi_session_error;
mod ffi_session_executor;
mod ffi_session_outcome;
mod ffi_session_outcome_listener;
mod ffi_session_status;
mod ffi_token_provider;

pub use ffi_session_check_request::*;
pub use ffi_session_error::*;
pub use ffi_session_executor::*;
pub use ffi_session_outcome::*;
pub use ffi_session_outcome_listener::*;
pub use ffi_session_status::*;
pub use ffi_token_provider::*;
