use crate::prelude::*;

/// An abstraction of a HTTP request to be made by the host, e.g. by
/// `wx.request` in a mini-app shell.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct FFINetworkingRequest {
    pub url: String,
    pub method: String,
    pub headers: HashMap<String, String>,

    pub body: Vec<u8>,
}
