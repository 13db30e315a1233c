//! Controller coordinators, password generation, and the WLAN read model
//! for managing UniFi WiFi configuration from a home-automation platform.
//!
//! - **[`Coordinator`]** — one per configured controller. Owns the
//!   authenticated session, caches the WLAN configuration list (replaced
//!   wholesale on each successful [`refresh()`](Coordinator::refresh)),
//!   and applies partial updates (password rotation, enable/disable).
//!   Reads are cache-only; callers control staleness by choosing when to
//!   refresh.
//!
//! - **[`CoordinatorRegistry`]** — ordered name lookup for the service
//!   layer.
//!
//! - **[`PasswordSpec`]** — passphrase/random password generation from
//!   validated constraints, backed by the OS CSPRNG, always landing inside
//!   the controller's 8..=63 byte WPA bound. Use [`generate_password`] from
//!   async contexts; generation runs on the blocking pool.
//!
//! - **[`WlanUpdate`]** — typed partial-update payloads; the controller
//!   leaves unspecified fields unchanged.
//!
//! The platform decides when to call `refresh` and how to render state;
//! this crate never schedules anything and holds no state beyond the
//! in-memory caches.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod password;
pub mod qr;
pub mod registry;
pub mod requests;
mod wordlist;

pub use config::{ControllerConfig, ControllerPlatform, TlsVerification};
pub use coordinator::{Coordinator, WlanSnapshot};
pub use error::CoreError;
pub use password::{Delimiter, Method, PasswordSpec, generate_password};
pub use registry::CoordinatorRegistry;
pub use requests::WlanUpdate;

// Wire model re-export: the read surface hands these out directly.
pub use unifi_wifi_api::WlanConf;
