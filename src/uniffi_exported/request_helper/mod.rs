mod ffi_request_listener;
mod http_method;
mod request_helper;
mod request_helper_config;
mod request_options;
mod request_outcome;
mod server_error_response;

pub use ffi_request_listener::*;
pub use http_method::*;
pub use request_helper::*;
pub use request_helper_config::*;
pub use request_options::*;
pub use request_outcome::*;
pub use server_error_response::*;
