use crate::prelude::*;

impl RequestHelper {
    /// The full call: loading indicator, session gate, dispatch,
    /// classification, error modals and listener callbacks, in that order.
    pub(crate) async fn perform(
        &self,
        options: RequestOptions,
        listener: Option<Arc<dyn FFIRequestListener>>,
    ) -> RequestOutcome {
        let mut loading = LoadingIndicator::show_if(
            options.need_display_loading,
            self.ui.clone(),
            &self.config.loading_title,
        );

        let result = self.gated_request(&options).await;
        loading.retract();

        let outcome = match result {
            Ok(response) => self.on_response(response, &options, listener.as_deref()),
            Err(error) => self.on_failure(error, listener.as_deref()),
        };

        if let Some(listener) = listener.as_deref() {
            listener.on_complete();
        }
        outcome
    }

    fn on_response(
        &self,
        response: FFINetworkingResponse,
        options: &RequestOptions,
        listener: Option<&dyn FFIRequestListener>,
    ) -> RequestOutcome {
        match classify_response(&response, &self.config) {
            ResponseClassification::Success => {
                if let Some(listener) = listener {
                    listener.on_success(response.clone());
                }
                RequestOutcome::Success { response }
            }
            ResponseClassification::ServerError(error) => {
                info!(
                    target: "miniapp_request::http",
                    "Server error from {} {}, code: {:?}, message: '{}'",
                    options.method,
                    options.url,
                    error.code,
                    error.message
                );
                if options.need_display_error_modal {
                    self.ui.show_modal(FFIModal::alert(
                        &self.config.server_error_title,
                        &error.message,
                    ));
                }
                if let Some(listener) = listener {
                    listener.on_server_error(error.clone());
                }
                RequestOutcome::ServerError { error }
            }
        }
    }

    fn on_failure(
        &self,
        error: FFIBridgeError,
        listener: Option<&dyn FFIRequestListener>,
    ) -> RequestOutcome {
        warn!(target: "miniapp_request::http", "Request failed: {}", error);
        self.ui.show_modal(FFIModal::alert(
            &self.config.network_error_title,
            &self.config.fallback_error_message,
        ));
        if let Some(listener) = listener {
            listener.on_fail(error.clone());
        }
        RequestOutcome::Failure { error }
    }
}
