mod ffi_operation_dispatcher;
mod ffi_operation_executor;
mod ffi_operation_outcome_listener;
mod is_outcome_listener;
mod logic;
mod models;

pub(crate) use ffi_operation_dispatcher::*;
pub(crate) use ffi_operation_executor::*;
pub(crate) use ffi_operation_outcome_listener::*;
pub(crate) use is_outcome_listener::*;
pub(crate) use logic::*;
pub(crate) use models::*;
