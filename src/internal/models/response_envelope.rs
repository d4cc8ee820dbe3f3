use crate::prelude::*;
use serde_json::Value;

/// The JSON body every endpoint answers with:
/// `{ "code": 200, "message": "...", "data": ... }`
///
/// Both fields are kept as raw JSON, a server is free to send a numeric
/// string as `code` or an object as `message`.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub(crate) struct ResponseEnvelope {
    #[serde(default)]
    pub(crate) code: Option<Value>,
    #[serde(default)]
    pub(crate) message: Option<Value>,
}

impl ResponseEnvelope {
    /// Lenient parse, a body which is not a JSON object yields an envelope
    /// without code and message.
    pub(crate) fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(object @ Value::Object(_)) => serde_json::from_value(object).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// The code as an integer, accepting numbers and numeric strings alike.
    pub(crate) fn numeric_code(&self) -> Option<i64> {
        match self.code.as_ref()? {
            Value::Number(number) => number.as_i64().or_else(|| {
                number
                    .as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| f as i64)
            }),
            Value::String(string) => string.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    pub(crate) fn string_message(&self) -> Option<&str> {
        self.message.as_ref().and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_string_code_is_accepted() {
        let envelope = ResponseEnvelope::from_body(br#"{ "code": " 200 ", "message": "ok" }"#);
        assert_eq!(envelope.numeric_code(), Some(200));
        assert_eq!(envelope.string_message(), Some("ok"));
    }

    #[test]
    fn float_code_with_zero_fraction_is_accepted() {
        assert_eq!(
            ResponseEnvelope::from_body(br#"{ "code": 200.0 }"#).numeric_code(),
            Some(200)
        );
        assert_eq!(
            ResponseEnvelope::from_body(br#"{ "code": 200.5 }"#).numeric_code(),
            None
        );
    }

    #[test]
    fn non_object_body_yields_empty_envelope() {
        assert_eq!(ResponseEnvelope::from_body(b"<html>"), ResponseEnvelope::default());
        assert_eq!(ResponseEnvelope::from_body(b""), ResponseEnvelope::default());
        assert_eq!(ResponseEnvelope::from_body(b"[1, 2]"), ResponseEnvelope::default());
    }

    #[test]
    fn non_string_message_is_ignored() {
        let envelope = ResponseEnvelope::from_body(br#"{ "code": 500, "message": { "detail": "x" } }"#);
        assert_eq!(envelope.numeric_code(), Some(500));
        assert_eq!(envelope.string_message(), None);
    }
}
