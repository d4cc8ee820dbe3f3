use crate::prelude::*;

#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct FFISessionCheckRequest {
    /// `0` for the first check of a call, incremented for every replay
    /// following a successful re-login.
    pub replay_count: u8,
}

impl FFISessionCheckRequest {
    pub fn new(replay_count: u8) -> Self {
        Self { replay_count }
    }
}
