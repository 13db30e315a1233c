// ── Runtime connection configuration ──
//
// These types describe *how* to reach a UniFi controller. They carry
// credential data and connection tuning, but never touch disk -- the host
// platform validates its own configuration surface and hands in a finished
// `ControllerConfig` per controller.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

pub use unifi_wifi_api::{ControllerPlatform, TlsVerification};

/// Configuration for one controller coordinator.
///
/// Immutable after construction; the coordinator owns it for its lifetime.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Unique name among configured controllers; the registry lookup key.
    pub name: String,
    /// Controller root URL (e.g. `https://192.168.1.1`).
    pub url: Url,
    /// Site to operate on.
    pub site: String,
    /// Controller admin username.
    pub username: String,
    /// Controller admin password.
    pub password: SecretString,
    /// Controller family (selects login endpoint and URL prefix).
    pub platform: ControllerPlatform,
    /// TLS certificate verification mode.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
    /// How often the platform should call `refresh()`. The coordinator
    /// records it but does not schedule anything itself.
    pub refresh_interval: Duration,
    /// Allow-list of SSIDs to expose. Empty means all.
    pub monitored_ssids: Vec<String>,
}

impl ControllerConfig {
    /// A config with the conventional defaults: site `default`, UniFi OS
    /// family, certificate verification off, 600 s refresh interval.
    pub fn new(name: impl Into<String>, url: Url, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            name: name.into(),
            url,
            site: "default".into(),
            username: username.into(),
            password,
            platform: ControllerPlatform::UnifiOs,
            tls: TlsVerification::AcceptInvalid,
            timeout: Duration::from_secs(30),
            refresh_interval: Duration::from_secs(600),
            monitored_ssids: Vec::new(),
        }
    }
}
