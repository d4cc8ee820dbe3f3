use crate::prelude::*;

/// A response which made it through the transport, but whose envelope
/// `code` was not the success code.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct ServerErrorResponse {
    pub response: FFINetworkingResponse,

    /// `None` if the envelope had no numeric code, or no envelope at all.
    pub code: Option<i64>,

    /// The envelope `message`, or the configured fallback text when it was
    /// missing or not a string.
    pub message: String,
}
