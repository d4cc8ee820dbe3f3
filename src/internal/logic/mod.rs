mod build_networking_request;
mod classify_response;
mod loading_indicator;
mod perform_request;
mod session_gate;

pub(crate) use build_networking_request::*;
pub(crate) use classify_response::*;
pub(crate) use loading_indicator::*;
