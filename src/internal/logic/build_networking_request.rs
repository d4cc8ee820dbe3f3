use crate::prelude::*;
use serde_json::Value;
use url::Url;

/// Builds the request handed to the host, without the token header, which
/// is only added once the session gate has passed.
pub(crate) fn build_networking_request(
    options: &RequestOptions,
    config: &RequestHelperConfig,
) -> Result<FFINetworkingRequest, RustSideError> {
    let mut url = Url::parse(&options.url).map_err(|_| RustSideError::InvalidRequestURL {
        url: options.url.clone(),
    })?;

    let payload = options
        .data
        .as_deref()
        .map(|json| {
            serde_json::from_str::<Value>(json).map_err(|e| RustSideError::InvalidRequestPayload {
                reason: e.to_string(),
            })
        })
        .transpose()?;

    let body = match (options.method, payload) {
        (_, None) | (HttpMethod::Get, Some(Value::Null)) => Vec::new(),
        (HttpMethod::Get, Some(Value::Object(members))) => {
            append_query_pairs(&mut url, members);
            Vec::new()
        }
        (HttpMethod::Get, Some(_)) => {
            return Err(RustSideError::InvalidRequestPayload {
                reason: "GET payload must be a JSON object".to_owned(),
            })
        }
        // Sent verbatim, it has been checked to be JSON above.
        (HttpMethod::Post, Some(_)) => options.data.clone().unwrap_or_default().into_bytes(),
    };

    Ok(FFINetworkingRequest {
        url: url.to_string(),
        method: options.method.as_str().to_owned(),
        headers: HashMap::<String, String>::from_iter([(
            "Content-Type".to_owned(),
            config.content_type.clone(),
        )]),
        body,
    })
}

fn append_query_pairs(url: &mut Url, members: serde_json::Map<String, Value>) {
    if members.values().all(Value::is_null) {
        return;
    }
    let mut pairs = url.query_pairs_mut();
    for (key, value) in members {
        match value {
            Value::Null => continue,
            Value::String(string) => pairs.append_pair(&key, &string),
            other => pairs.append_pair(&key, &other.to_string()),
        };
    }
}
