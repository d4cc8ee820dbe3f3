use crate::prelude::*;

/// The outcome of [`RequestHelper::get`], [`RequestHelper::post`] and
/// [`RequestHelper::send`], mirroring which listener callback fired.
#[derive(Enum, Clone, Debug, PartialEq, Eq, enum_as_inner::EnumAsInner)]
pub enum RequestOutcome {
    Success { response: FFINetworkingResponse },
    ServerError { error: ServerErrorResponse },
    Failure { error: FFIBridgeError },
}
