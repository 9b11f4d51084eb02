//! JSON requests to the marker server.

use gloo::net::http::Request;
use log::{debug, error, info};
use marker_settings::{classify_response, RequestError, ResponseOutcome};
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

/// Makes requests to the server. Provided by [`ServerPausedManager`], which shows the "server
/// paused" overlay when a request finds the server suspended.
///
/// [`ServerPausedManager`]: crate::server_paused::ServerPausedManager
#[derive(Debug, Clone, PartialEq)]
pub struct Requester {
    /// Shows the server paused overlay.
    on_suspended: Callback<()>,
}

impl Requester {
    pub(crate) fn new(on_suspended: Callback<()>) -> Self {
        Self { on_suspended }
    }

    /// POSTs to `endpoint` with `params` as query parameters and expects a JSON response.
    ///
    /// Exactly one of these happens once the request completes: `on_success` is called with the
    /// body, `on_failure` is called with the error (or the error is logged if there is no
    /// `on_failure`), or the server paused overlay is shown because the server is suspended.
    pub fn json_request(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        on_success: Callback<Value>,
        on_failure: Option<Callback<RequestError>>,
    ) {
        let endpoint = endpoint.to_owned();
        let params: Vec<(String, String)> = params
            .iter()
            .map(|&(key, value)| (key.to_owned(), value.to_owned()))
            .collect();
        let on_suspended = self.on_suspended.clone();
        spawn_local(async move {
            let outcome = match post_json(&endpoint, &params).await {
                Ok(body) => {
                    debug!("Response from {endpoint}: {body}");
                    classify_response(body)
                }
                Err(e) => ResponseOutcome::Failure(e),
            };
            match outcome {
                ResponseOutcome::Success(body) => on_success.emit(body),
                ResponseOutcome::Suspended => {
                    info!("Action was not completed because the server is suspended.");
                    on_suspended.emit(());
                }
                ResponseOutcome::Failure(e) => match on_failure {
                    Some(on_failure) => on_failure.emit(e),
                    None => error!("Request to {endpoint} failed: {e}"),
                },
            }
        });
    }
}

/// Sends the request and decodes the body.
async fn post_json(endpoint: &str, params: &[(String, String)]) -> Result<Value, RequestError> {
    let response = Request::post(endpoint)
        .query(params.iter().map(|(key, value)| (key.as_str(), value)))
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| RequestError::Transport(e.to_string()))?;
    response
        .json::<Value>()
        .await
        .map_err(|e| RequestError::Decode(e.to_string()))
}
