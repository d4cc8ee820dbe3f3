use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ResponseClassification {
    Success,
    ServerError(ServerErrorResponse),
}

/// Routes a response which made it through the transport by the `code` of
/// its envelope. The HTTP status code of the response is not consulted.
pub(crate) fn classify_response(
    response: &FFINetworkingResponse,
    config: &RequestHelperConfig,
) -> ResponseClassification {
    let envelope = ResponseEnvelope::from_body(&response.body);
    let code = envelope.numeric_code();
    if code == Some(config.success_code) {
        return ResponseClassification::Success;
    }

    let message = envelope
        .string_message()
        .map(str::to_owned)
        .unwrap_or_else(|| config.fallback_error_message.clone());

    ResponseClassification::ServerError(ServerErrorResponse {
        response: response.clone(),
        code,
        message,
    })
}
