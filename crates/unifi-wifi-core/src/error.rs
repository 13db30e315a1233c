// ── Core error types ──
//
// User-facing errors from unifi-wifi-core. Consumers never see raw HTTP
// status codes or JSON parse failures -- the `From<unifi_wifi_api::Error>`
// impl translates transport-layer errors into domain-appropriate variants.
//
// The taxonomy matters to callers:
// - configuration errors (unknown controller, unknown SSID, bad password
//   spec) are unresolvable at runtime and never retried;
// - authentication failures mean the single re-login retry already ran
//   and failed;
// - unreachable/timeout means nothing changed on the controller;
// - rejected means the controller saw the request and refused it.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Configuration errors (never retried) ─────────────────────────
    #[error("Controller not configured: {name}")]
    UnknownController { name: String },

    #[error("SSID {ssid} does not exist on controller {controller}")]
    SsidNotFound { ssid: String, controller: String },

    #[error("Duplicate controller name: {name}")]
    DuplicateController { name: String },

    #[error("Invalid password spec: {message}")]
    InvalidPasswordSpec { message: String },

    // ── Authentication (re-login retry already exhausted) ────────────
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    // ── Transport (controller state unchanged) ───────────────────────
    #[error("Controller unreachable: {reason}")]
    ControllerUnreachable { reason: String },

    #[error("Controller request timed out")]
    Timeout,

    // ── Controller rejection (request seen and refused) ──────────────
    #[error("Operation rejected by controller: {message}")]
    Rejected { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<unifi_wifi_api::Error> for CoreError {
    fn from(err: unifi_wifi_api::Error) -> Self {
        match err {
            unifi_wifi_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            unifi_wifi_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else {
                    CoreError::ControllerUnreachable {
                        reason: e.to_string(),
                    }
                }
            }
            unifi_wifi_api::Error::InvalidUrl(e) => CoreError::Internal(e.to_string()),
            unifi_wifi_api::Error::Tls(message) => {
                CoreError::ControllerUnreachable { reason: message }
            }
            unifi_wifi_api::Error::Rejected { message } => CoreError::Rejected { message },
            unifi_wifi_api::Error::Deserialization { message, .. } => {
                CoreError::Rejected {
                    message: format!("unparseable controller response: {message}"),
                }
            }
        }
    }
}
