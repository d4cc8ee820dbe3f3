use crate::prelude::*;

pub(crate) type NetworkingDispatcher =
    FFIOperationDispatcher<FFINetworkingOutcomeListener, dyn FFINetworkingExecutor>;

pub(crate) type SessionDispatcher =
    FFIOperationDispatcher<FFISessionOutcomeListener, dyn FFISessionExecutor>;

/// Session gated JSON requests for a mini-app, made through a request
/// primitive "installed" from the host, with the host's loading indicator and
/// error dialogs driven from Rust.
#[derive(Object)]
pub struct RequestHelper {
    pub(crate) networking_dispatcher: NetworkingDispatcher,
    pub(crate) session_dispatcher: SessionDispatcher,
    pub(crate) token_provider: Arc<dyn FFITokenProvider>,
    pub(crate) ui: Arc<dyn FFIUIHandler>,
    pub(crate) config: RequestHelperConfig,
}

#[export]
impl RequestHelper {
    /// Constructs a new [`RequestHelper`] from the host collaborators: a
    /// "network antenna" wrapping e.g. `wx.request`, a session checker, the
    /// token accessor and the UI toolkit.
    #[uniffi::constructor]
    pub fn new(
        network_antenna: Arc<dyn FFINetworkingExecutor>,
        session_checker: Arc<dyn FFISessionExecutor>,
        token_provider: Arc<dyn FFITokenProvider>,
        ui: Arc<dyn FFIUIHandler>,
        config: RequestHelperConfig,
    ) -> Self {
        Self {
            networking_dispatcher: NetworkingDispatcher::new(network_antenna),
            session_dispatcher: SessionDispatcher::new(session_checker),
            token_provider,
            ui,
            config,
        }
    }

    /// The bare session gated call: no loading indicator, no modals and no
    /// envelope classification, the host response is returned as is.
    /// Display flags of `options` are ignored.
    pub async fn request(
        &self,
        options: RequestOptions,
    ) -> Result<FFINetworkingResponse, FFIBridgeError> {
        self.gated_request(&options).await
    }

    pub async fn get(
        &self,
        options: RequestOptions,
        listener: Option<Arc<dyn FFIRequestListener>>,
    ) -> RequestOutcome {
        self.perform(
            RequestOptions {
                method: HttpMethod::Get,
                ..options
            },
            listener,
        )
        .await
    }

    pub async fn post(
        &self,
        options: RequestOptions,
        listener: Option<Arc<dyn FFIRequestListener>>,
    ) -> RequestOutcome {
        self.perform(
            RequestOptions {
                method: HttpMethod::Post,
                ..options
            },
            listener,
        )
        .await
    }

    /// Like [`RequestHelper::get`] and [`RequestHelper::post`], using the
    /// method of `options`.
    pub async fn send(
        &self,
        options: RequestOptions,
        listener: Option<Arc<dyn FFIRequestListener>>,
    ) -> RequestOutcome {
        self.perform(options, listener).await
    }
}
