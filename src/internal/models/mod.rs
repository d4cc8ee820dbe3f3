mod response_envelope;

pub(crate) use response_envelope::*;
