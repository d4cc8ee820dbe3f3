use crate::prelude::*;

/// Configuration of a [`RequestHelper`]. Every field has a default, so a JSON
/// document only needs to name the fields it overrides.
#[derive(Record, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RequestHelperConfig {
    /// Header carrying the bearer token of the login session.
    pub token_header: String,
    pub content_type: String,

    /// Envelope `code` treated as success.
    pub success_code: i64,

    /// How many times a call is replayed after the host reports a successful
    /// re-login, before giving up.
    pub max_relogin_replays: u8,

    pub loading_title: String,
    pub server_error_title: String,
    pub network_error_title: String,

    /// Shown for transport failures, and for server errors whose envelope
    /// carries no string `message`.
    pub fallback_error_message: String,
}

impl Default for RequestHelperConfig {
    fn default() -> Self {
        Self {
            token_header: "X-Gj-Token".to_owned(),
            content_type: "application/json".to_owned(),
            success_code: 200,
            max_relogin_replays: 1,
            loading_title: "Loading".to_owned(),
            server_error_title: "Error".to_owned(),
            network_error_title: "Request error".to_owned(),
            fallback_error_message: "Network error, please retry".to_owned(),
        }
    }
}

impl RequestHelperConfig {
    pub fn from_json(json: impl AsRef<str>) -> Result<Self, RustSideError> {
        serde_json::from_str(json.as_ref()).map_err(|e| RustSideError::InvalidConfiguration {
            underlying: e.to_string(),
        })
    }
}

#[uniffi::export]
pub fn new_request_helper_config_default() -> RequestHelperConfig {
    RequestHelperConfig::default()
}

#[uniffi::export]
pub fn new_request_helper_config_from_json(
    json: String,
) -> Result<RequestHelperConfig, RustSideError> {
    RequestHelperConfig::from_json(json)
}
