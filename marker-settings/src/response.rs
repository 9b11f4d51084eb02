use serde_json::Value;
use thiserror::Error;

/// `Error` value the server responds with when it is suspended.
pub const SERVER_SUSPENDED: &str = "Server is suspended";

/// Errors from a JSON request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The request couldn't be sent or no response arrived.
    #[error("{0}")]
    Transport(String),
    /// The response body wasn't valid JSON.
    #[error("Unable to read the server response: {0}")]
    Decode(String),
    /// The response body was empty, `null`, or otherwise falsy.
    #[error("The server returned an empty response")]
    EmptyResponse,
    /// The server reported an error in the `Error` field.
    #[error("{0}")]
    Server(String),
}

impl RequestError {
    /// Message to show the user for this error.
    pub fn error_message(&self) -> String {
        match self {
            // This is what the browser reports when the server process is gone.
            Self::Transport(msg) if msg.contains("Failed to fetch") => format!(
                "{msg}. The server may have exited unexpectedly, please check the console."
            ),
            _ => self.to_string(),
        }
    }
}

/// What to do with a response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// The request succeeded with the given body.
    Success(Value),
    /// The request failed.
    Failure(RequestError),
    /// The server is suspended. Neither success nor failure handling applies.
    Suspended,
}

/// Sorts a decoded JSON body into success, failure, or the suspended-server case.
///
/// Falsy bodies and bodies with a truthy `Error` field are failures, except that an `Error` of
/// exactly [`SERVER_SUSPENDED`] means the server is suspended.
pub fn classify_response(body: Value) -> ResponseOutcome {
    if !is_truthy(&body) {
        return ResponseOutcome::Failure(RequestError::EmptyResponse);
    }
    match body.get("Error") {
        Some(error) if is_truthy(error) => match error.as_str() {
            Some(SERVER_SUSPENDED) => ResponseOutcome::Suspended,
            Some(msg) => ResponseOutcome::Failure(RequestError::Server(msg.to_owned())),
            None => ResponseOutcome::Failure(RequestError::Server(error.to_string())),
        },
        _ => ResponseOutcome::Success(body),
    }
}

/// Javascript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn suspended_sentinel() {
        assert_eq!(
            classify_response(json!({ "Error": "Server is suspended" })),
            ResponseOutcome::Suspended
        );
    }

    #[test]
    fn server_errors_are_failures() {
        assert_eq!(
            classify_response(json!({ "Error": "Marker not found" })),
            ResponseOutcome::Failure(RequestError::Server("Marker not found".to_owned()))
        );
        assert_eq!(
            classify_response(json!({ "Error": 404 })),
            ResponseOutcome::Failure(RequestError::Server("404".to_owned()))
        );
    }

    #[test]
    fn falsy_bodies_are_failures() {
        for body in [json!(null), json!(false), json!(0), json!("")] {
            assert_eq!(
                classify_response(body),
                ResponseOutcome::Failure(RequestError::EmptyResponse)
            );
        }
    }

    #[test]
    fn falsy_error_field_is_success() {
        let body = json!({ "Error": "", "id": 3 });
        assert_eq!(classify_response(body.clone()), ResponseOutcome::Success(body));
    }

    #[test]
    fn payloads_are_success() {
        for body in [json!({ "useThumbnails": true }), json!([]), json!(1), json!("ok")] {
            assert_eq!(classify_response(body.clone()), ResponseOutcome::Success(body));
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            RequestError::Transport("TypeError: Failed to fetch".to_owned()).error_message(),
            "TypeError: Failed to fetch. The server may have exited unexpectedly, please check \
            the console."
        );
        assert_eq!(
            RequestError::Server("Marker not found".to_owned()).error_message(),
            "Marker not found"
        );
        assert_eq!(
            RequestError::EmptyResponse.error_message(),
            "The server returned an empty response"
        );
    }
}
