use thiserror::Error;

/// Top-level error type for the `unifi-wifi-api` crate.
///
/// Distinguishes the three failure classes the session client must keep
/// apart: authentication rejections (eligible for one re-login retry),
/// transport failures (controller unreachable), and controller-side
/// rejections (valid request, refused -- never retried).
#[derive(Debug, Error)]
pub enum Error {
    /// The controller rejected the request as unauthenticated
    /// (login failed, session cookie expired or revoked).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// HTTP transport error (connection refused, DNS failure, timeout).
    /// The controller is unreachable; no assumption about its state.
    #[error("Controller unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup error (client construction, certificate handling).
    #[error("TLS error: {0}")]
    Tls(String),

    /// The controller validated the request and rejected it
    /// (parsed from the `{meta: {rc, msg}}` envelope or a 4xx status).
    #[error("Controller rejected request: {message}")]
    Rejected { message: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error is an authentication rejection that a
    /// single re-login may resolve.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}
