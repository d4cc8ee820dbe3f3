use crate::prelude::*;

/// An abstraction of a HTTP response the host completed a
/// [`FFINetworkingRequest`] with.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct FFINetworkingResponse {
    pub status_code: u16,

    /// Can be empty.
    pub body: Vec<u8>,
}
