use crate::prelude::*;

/// Per call options, constructed by the caller and consumed by one call.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    pub url: String,

    /// JSON text. Sent as query pairs for GET (must be an object) and as
    /// the body for POST.
    pub data: Option<String>,

    /// Ignored by [`RequestHelper::get`] and [`RequestHelper::post`].
    pub method: HttpMethod,

    pub need_display_loading: bool,
    pub need_display_error_modal: bool,
}

impl RequestOptions {
    pub fn new(url: impl AsRef<str>, method: HttpMethod) -> Self {
        Self {
            url: url.as_ref().to_owned(),
            data: None,
            method,
            need_display_loading: false,
            need_display_error_modal: false,
        }
    }

    pub fn with_data(mut self, json: impl AsRef<str>) -> Self {
        self.data = Some(json.as_ref().to_owned());
        self
    }

    pub fn displaying_loading(mut self) -> Self {
        self.need_display_loading = true;
        self
    }

    pub fn displaying_error_modal(mut self) -> Self {
        self.need_display_error_modal = true;
        self
    }
}
