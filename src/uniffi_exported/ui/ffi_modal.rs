use crate::prelude::*;

/// A blocking dialog, shown by the host with e.g. `wx.showModal`.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct FFIModal {
    pub title: String,
    pub content: String,
    pub show_cancel: bool,
}

impl FFIModal {
    /// A dialog with a single confirm button.
    pub fn alert(title: impl AsRef<str>, content: impl AsRef<str>) -> Self {
        Self {
            title: title.as_ref().to_owned(),
            content: content.as_ref().to_owned(),
            show_cancel: false,
        }
    }
}
