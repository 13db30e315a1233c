// Transport configuration for building the session's reqwest::Client.
//
// Session auth always needs a cookie jar, so one is created unconditionally.
// TLS verification is a per-controller switch: when disabled, the handshake
// still runs in full but certificate validation is skipped. Nothing else is
// relaxed.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;

/// TLS certificate verification mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsVerification {
    /// Verify against the system certificate store.
    System,
    /// Accept any certificate. Default because local controllers almost
    /// always present self-signed certificates.
    #[default]
    AcceptInvalid,
}

/// Transport settings for one controller session.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsVerification,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a cookie-carrying `reqwest::Client` from this config.
    ///
    /// Returns the client together with the jar so callers can inspect the
    /// session cookie if they need to.
    pub fn build_client(&self) -> Result<(reqwest::Client, Arc<Jar>), crate::error::Error> {
        let jar = Arc::new(Jar::default());

        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("unifi-wifi/", env!("CARGO_PKG_VERSION")))
            .cookie_provider(Arc::clone(&jar));

        if self.tls == TlsVerification::AcceptInvalid {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| crate::error::Error::Tls(format!("failed to build HTTP client: {e}")))?;

        Ok((client, jar))
    }
}
