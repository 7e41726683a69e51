use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Connectivity-failure message surfaced whenever a request went out but no
/// response came back.
pub const NETWORK_ERROR_MESSAGE: &str = "network connection error, check your network connection";

/// Generic message for failures that happen before a request is even sent.
pub const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

/// The normalized error every call through the gateway resolves to.
///
/// The three variants are mutually exclusive and exhaustive: a failure is
/// either a rejection by the server, a transport-level loss of the response,
/// or a local problem before transmission. Callers never see the underlying
/// `reqwest::Error`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server {
        code: u16,
        message: String,
        data: Option<Value>,
    },

    /// The request was sent but no response arrived (unreachable, timeout,
    /// connection dropped mid-response).
    #[error("{NETWORK_ERROR_MESSAGE}")]
    Network,

    /// The request could not be constructed or dispatched, or a successful
    /// exchange produced a body we could not decode.
    #[error("{UNKNOWN_ERROR_MESSAGE}")]
    Unknown,
}

impl ApiError {
    /// Builds a `Server` error from the status and raw body of a rejected
    /// request. The body's `message` field wins when present; otherwise a
    /// generated `request failed: <status>` string stands in. A `data` field
    /// is carried through verbatim.
    pub(crate) fn server(status: StatusCode, body: &[u8]) -> Self {
        let payload: Option<Value> = serde_json::from_slice(body).ok();
        let message = payload
            .as_ref()
            .and_then(|p| p.get("message"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("request failed: {}", status.as_u16()));
        let data = payload.as_ref().and_then(|p| p.get("data")).cloned();

        ApiError::Server {
            code: status.as_u16(),
            message,
            data,
        }
    }

    /// The envelope code: the HTTP status for server rejections, or the fixed
    /// `NETWORK_ERROR` / `UNKNOWN_ERROR` markers.
    pub fn code(&self) -> String {
        match self {
            ApiError::Server { code, .. } => code.to_string(),
            ApiError::Network => "NETWORK_ERROR".to_string(),
            ApiError::Unknown => "UNKNOWN_ERROR".to_string(),
        }
    }
}
