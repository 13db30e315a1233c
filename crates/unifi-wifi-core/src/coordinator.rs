// ── Controller coordinator ──
//
// One instance per configured controller. Wraps the session client, caches
// the WLAN configuration list, and exposes refresh/read/update operations.
//
// Cache contract: `refresh()` replaces the snapshot wholesale on success
// and leaves it untouched (stale-but-available) on failure. Reads never
// trigger network I/O -- callers that need freshness call `refresh()` first
// and decide their own staleness tolerance. Updates address the cached
// controller id and do not re-poll afterward; the cache is expected to go
// stale immediately after a write.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use unifi_wifi_api::{SessionClient, TransportConfig, WlanConf};

use crate::config::ControllerConfig;
use crate::error::CoreError;
use crate::password::{WPA_MAX_LEN, WPA_MIN_LEN};
use crate::qr;
use crate::requests::WlanUpdate;

/// Shared snapshot of the cached WLAN list.
pub type WlanSnapshot = Arc<Vec<Arc<WlanConf>>>;

/// Coordinates session, cache, and updates for one controller.
pub struct Coordinator {
    config: ControllerConfig,
    client: SessionClient,
    /// Snapshot channel: readers and the entity layer observe whole
    /// replacements, never partial states.
    wlans: watch::Sender<WlanSnapshot>,
    last_refresh: watch::Sender<Option<DateTime<Utc>>>,
    last_error: Mutex<Option<String>>,
}

impl Coordinator {
    /// Build a coordinator from configuration. Does not authenticate;
    /// call [`login()`](Self::login) or let the first request re-auth.
    pub fn new(config: ControllerConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: config.tls,
            timeout: config.timeout,
        };
        let client = SessionClient::new(
            config.url.clone(),
            config.site.clone(),
            config.platform,
            config.username.clone(),
            config.password.clone(),
            &transport,
        )?;
        Ok(Self::with_client(config, client))
    }

    /// Build a coordinator around a pre-built session client (tests,
    /// callers managing their own transport).
    pub fn with_client(config: ControllerConfig, client: SessionClient) -> Self {
        let (wlans, _) = watch::channel(Arc::new(Vec::new()));
        let (last_refresh, _) = watch::channel(None);
        Self {
            config,
            client,
            wlans,
            last_refresh,
            last_error: Mutex::new(None),
        }
    }

    /// The configured coordinator name (registry lookup key).
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// The coordinator's configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    // ── Session lifecycle ────────────────────────────────────────────

    /// Authenticate with the controller.
    pub async fn login(&self) -> Result<(), CoreError> {
        self.client.login().await.map_err(CoreError::from)
    }

    /// End the session. Logout failures are logged, not surfaced --
    /// the coordinator is shutting down either way.
    pub async fn logout(&self) {
        if let Err(e) = self.client.logout().await {
            warn!(controller = self.name(), error = %e, "logout failed");
        }
    }

    // ── Refresh / read ───────────────────────────────────────────────

    /// Re-read the WLAN configuration list from the controller.
    ///
    /// Success replaces the cache atomically and clears the last error.
    /// Failure keeps the previous cache and records the error; refresh
    /// failures are not fatal to the coordinator.
    pub async fn refresh(&self) -> Result<(), CoreError> {
        match self.client.list_wlans().await {
            Ok(raw) => {
                let entries: Vec<Arc<WlanConf>> = raw
                    .into_iter()
                    .filter(|w| self.is_monitored(&w.name))
                    .map(Arc::new)
                    .collect();
                debug!(
                    controller = self.name(),
                    wlans = entries.len(),
                    "refresh complete"
                );
                // `send_modify`/`send_replace` update even with zero
                // receivers; plain `send` would fail once the initial
                // receiver is dropped.
                self.wlans.send_modify(|snap| *snap = Arc::new(entries));
                self.last_refresh.send_replace(Some(Utc::now()));
                *self.last_error.lock().expect("last_error lock poisoned") = None;
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                warn!(controller = self.name(), error = %err, "refresh failed, cache kept");
                *self.last_error.lock().expect("last_error lock poisoned") =
                    Some(err.to_string());
                Err(err)
            }
        }
    }

    /// The current cached WLAN list (cheap Arc clone).
    pub fn wlans(&self) -> WlanSnapshot {
        self.wlans.borrow().clone()
    }

    /// Subscribe to cache replacements (entity layer).
    pub fn subscribe(&self) -> watch::Receiver<WlanSnapshot> {
        self.wlans.subscribe()
    }

    /// Timestamp of the last successful refresh.
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.borrow()
    }

    /// The error recorded by the last failed refresh, if the most recent
    /// refresh failed.
    pub fn last_error(&self) -> Option<String> {
        self.last_error
            .lock()
            .expect("last_error lock poisoned")
            .clone()
    }

    /// Find a cached WLAN by SSID. First match wins -- the controller does
    /// not guarantee unique names. Never triggers a refresh.
    pub fn find_by_ssid(&self, ssid: &str) -> Result<Arc<WlanConf>, CoreError> {
        self.wlans
            .borrow()
            .iter()
            .find(|w| w.name == ssid)
            .cloned()
            .ok_or_else(|| CoreError::SsidNotFound {
                ssid: ssid.to_owned(),
                controller: self.name().to_owned(),
            })
    }

    // ── Updates ──────────────────────────────────────────────────────

    /// Apply a partial update to the named SSID.
    ///
    /// The controller-assigned id comes from the cache; an uncached SSID
    /// fails with [`CoreError::SsidNotFound`] before any HTTP request.
    /// The cache is not refreshed afterward.
    pub async fn update_wlan(&self, ssid: &str, update: &WlanUpdate) -> Result<(), CoreError> {
        let entry = self.find_by_ssid(ssid)?;
        self.client.update_wlan(&entry.id, update).await?;
        info!(controller = self.name(), ssid, "wlanconf updated");
        Ok(())
    }

    /// Set a new passphrase for the named SSID.
    ///
    /// The service layer validates its inputs; this re-checks the WPA
    /// bound and ASCII-only constraint defensively before the write.
    pub async fn set_password(&self, ssid: &str, password: &str) -> Result<(), CoreError> {
        if !(WPA_MIN_LEN..=WPA_MAX_LEN).contains(&password.len()) {
            return Err(CoreError::InvalidPasswordSpec {
                message: format!(
                    "password must be {WPA_MIN_LEN} to {WPA_MAX_LEN} characters"
                ),
            });
        }
        if !password.is_ascii() {
            return Err(CoreError::InvalidPasswordSpec {
                message: "password may only contain ASCII characters".into(),
            });
        }
        self.update_wlan(ssid, &WlanUpdate::password(password)).await
    }

    /// Enable or disable the named SSID.
    pub async fn set_enabled(&self, ssid: &str, enabled: bool) -> Result<(), CoreError> {
        self.update_wlan(ssid, &WlanUpdate::enabled(enabled)).await
    }

    // ── Image surface ────────────────────────────────────────────────

    /// Render the join QR code for a cached SSID as PNG bytes.
    ///
    /// Open networks encode `nopass`; protected ones embed the cached
    /// passphrase.
    pub fn join_qr_png(&self, ssid: &str) -> Result<Vec<u8>, CoreError> {
        let entry = self.find_by_ssid(ssid)?;
        let passphrase = if entry.is_open() {
            None
        } else {
            entry.passphrase.as_deref()
        };
        qr::join_qr_png(&entry.name, passphrase)
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn is_monitored(&self, ssid: &str) -> bool {
        self.config.monitored_ssids.is_empty()
            || self.config.monitored_ssids.iter().any(|s| s == ssid)
    }
}
