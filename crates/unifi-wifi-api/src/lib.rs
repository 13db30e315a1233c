//! Async HTTP session client for the UniFi controller's WLAN configuration
//! endpoints.
//!
//! This crate owns the transport mechanics of talking to a controller:
//!
//! - **[`SessionClient`]** — cookie-authenticated session bound to one
//!   controller. Performs login, attaches session state (cookie + CSRF
//!   token) to every request, and transparently re-authenticates exactly
//!   once when the controller rejects a request as unauthenticated.
//!
//! - **[`ControllerPlatform`]** — the two controller families (UniFi OS
//!   devices vs the standalone classic Network Application) differ only in
//!   login endpoint and URL prefix; this enum isolates those differences.
//!
//! - **[`WlanConf`]** — one SSID's configuration as the controller returns
//!   it, with controller-specific extra fields passed through opaquely.
//!
//! Higher-level caching and update semantics live in `unifi-wifi-core`;
//! this crate never holds WLAN state beyond the session itself.

pub mod error;
pub mod models;
pub mod platform;
pub mod session;
pub mod transport;
mod wlans;

pub use error::Error;
pub use models::{Envelope, EnvelopeMeta, WlanConf};
pub use platform::ControllerPlatform;
pub use session::SessionClient;
pub use transport::{TlsVerification, TransportConfig};
