use crate::prelude::*;

impl RequestHelper {
    /// Checks the login session with the host before sending `options`,
    /// replaying the check after each successful re-login, at most
    /// `max_relogin_replays` times. The token is read only once the session
    /// is valid, so a replay always carries the fresh token.
    pub(crate) async fn gated_request(
        &self,
        options: &RequestOptions,
    ) -> Result<FFINetworkingResponse, FFIBridgeError> {
        let mut request = build_networking_request(options, &self.config)?;

        let mut replay_count: u8 = 0;
        loop {
            let status = self
                .session_dispatcher
                .dispatch(FFISessionCheckRequest::new(replay_count))
                .await?;

            match status {
                FFISessionStatus::Valid => break,
                FFISessionStatus::ReloginSucceeded => {
                    if replay_count >= self.config.max_relogin_replays {
                        warn!(
                            target: "miniapp_request::session",
                            "Session still invalid after {} replay(s), giving up on {} {}",
                            replay_count,
                            request.method,
                            request.url
                        );
                        return Err(RustSideError::SessionInvalidAfterRelogin {
                            replays: replay_count,
                        }
                        .into());
                    }
                    replay_count += 1;
                    info!(
                        target: "miniapp_request::session",
                        "Not logged in, replaying {} {} after re-login (replay {})",
                        request.method,
                        request.url,
                        replay_count
                    );
                }
            }
        }

        request.headers.insert(
            self.config.token_header.clone(),
            self.token_provider.current_token(),
        );

        debug!(
            target: "miniapp_request::http",
            "Dispatching {} {}", request.method, request.url
        );

        self.networking_dispatcher.dispatch(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use tracing_test::traced_test;

    struct ReloginForever;
    impl FFISessionExecutor for ReloginForever {
        fn execute_session_check(
            &self,
            _request: FFISessionCheckRequest,
            listener_rust_side: Arc<FFISessionOutcomeListener>,
        ) -> Result<(), FFISideError> {
            listener_rust_side.notify_outcome(FFISessionOutcome::Success {
                value: FFISessionStatus::ReloginSucceeded,
            });
            Ok(())
        }
    }

    #[derive(Default)]
    struct OkNetwork {
        sent: Mutex<VecDeque<FFINetworkingRequest>>,
    }
    impl FFINetworkingExecutor for OkNetwork {
        fn execute_networking_request(
            &self,
            request: FFINetworkingRequest,
            listener_rust_side: Arc<FFINetworkingOutcomeListener>,
        ) -> Result<(), FFISideError> {
            self.sent.lock().unwrap().push_back(request);
            listener_rust_side.notify_outcome(FFINetworkingOutcome::Success {
                value: FFINetworkingResponse {
                    status_code: 200,
                    body: br#"{"code":200}"#.to_vec(),
                },
            });
            Ok(())
        }
    }

    struct FixedToken;
    impl FFITokenProvider for FixedToken {
        fn current_token(&self) -> String {
            "t0k3n".to_owned()
        }
    }

    struct SilentUI;
    impl FFIUIHandler for SilentUI {
        fn show_loading(&self, _title: String) {}
        fn hide_loading(&self) {}
        fn show_modal(&self, _modal: FFIModal) {}
    }

    fn helper(network: Arc<OkNetwork>, max_relogin_replays: u8) -> RequestHelper {
        RequestHelper::new(
            network,
            Arc::new(ReloginForever),
            Arc::new(FixedToken),
            Arc::new(SilentUI),
            RequestHelperConfig {
                max_relogin_replays,
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    #[traced_test]
    async fn replays_are_bounded_and_logged() {
        let network = Arc::new(OkNetwork::default());
        let error = helper(network.clone(), 2)
            .gated_request(&RequestOptions::new(
                "https://api.example.com/me",
                HttpMethod::Get,
            ))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            FFIBridgeError::from(RustSideError::SessionInvalidAfterRelogin { replays: 2 })
        );
        assert!(network.sent.lock().unwrap().is_empty());
        assert!(logs_contain("replaying GET https://api.example.com/me after re-login (replay 2)"));
        assert!(logs_contain("giving up on GET"));
    }

    #[tokio::test]
    async fn zero_replays_fails_on_first_relogin() {
        let network = Arc::new(OkNetwork::default());
        let error = helper(network, 0)
            .gated_request(&RequestOptions::new(
                "https://api.example.com/me",
                HttpMethod::Get,
            ))
            .await
            .unwrap_err();
        assert_eq!(
            error,
            FFIBridgeError::from(RustSideError::SessionInvalidAfterRelogin { replays: 0 })
        );
    }

    #[tokio::test]
    async fn invalid_request_fails_before_session_check() {
        let network = Arc::new(OkNetwork::default());
        let error = helper(network.clone(), 1)
            .gated_request(&RequestOptions::new("not a url", HttpMethod::Post))
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            FFIBridgeError::FromRust {
                error: RustSideError::InvalidRequestURL { .. }
            }
        ));
        assert!(network.sent.lock().unwrap().is_empty());
    }
}
