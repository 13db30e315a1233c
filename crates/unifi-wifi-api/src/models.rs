// Wire models for the controller's WLAN configuration endpoints.
//
// Only the fields this project reads are typed; everything else the
// controller returns rides along opaquely in `extra` so partial updates
// never have to reconstruct fields we don't understand.

use serde::{Deserialize, Serialize};

/// The `meta` portion of the controller's response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvelopeMeta {
    /// `"ok"` on success; anything else is a rejection.
    pub rc: String,
    /// Controller error identifier, e.g. `api.err.LoginRequired`.
    #[serde(default)]
    pub msg: Option<String>,
}

/// The controller's `{ meta: { rc, msg }, data: [...] }` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub meta: EnvelopeMeta,
    // Explicit default path: a bare `default` would put a `T: Default`
    // bound on the derived impl, which `WlanConf` doesn't satisfy.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// One SSID's configuration as returned by `rest/wlanconf`.
///
/// Names are not guaranteed unique by the controller; `_id` is the only
/// stable identifier and the one partial updates are addressed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WlanConf {
    /// Controller-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// The SSID.
    pub name: String,
    /// Whether the WLAN is currently broadcast.
    pub enabled: bool,
    /// WPA passphrase. Absent for open networks.
    #[serde(rename = "x_passphrase", skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    /// Security mode string as the controller reports it
    /// (`wpapsk`, `wpaeap`, `open`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    /// Set when the WLAN fronts a guest portal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_guest: Option<bool>,
    /// All remaining controller fields, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl WlanConf {
    /// Whether this WLAN fronts a guest portal.
    pub fn is_guest(&self) -> bool {
        self.is_guest.unwrap_or(false)
    }

    /// Whether this WLAN is an open (passphrase-less) network.
    pub fn is_open(&self) -> bool {
        self.security.as_deref() == Some("open") || self.passphrase.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wlanconf_roundtrips_extra_fields() {
        let raw = json!({
            "_id": "5f1a2b3c",
            "name": "Guest",
            "enabled": true,
            "x_passphrase": "hunter2hunter2",
            "security": "wpapsk",
            "is_guest": true,
            "wpa_mode": "wpa2",
            "vlan_enabled": false,
        });

        let conf: WlanConf = serde_json::from_value(raw).unwrap();
        assert_eq!(conf.id, "5f1a2b3c");
        assert_eq!(conf.name, "Guest");
        assert!(conf.is_guest());
        assert!(!conf.is_open());
        assert_eq!(conf.extra["wpa_mode"], "wpa2");

        let back = serde_json::to_value(&conf).unwrap();
        assert_eq!(back["vlan_enabled"], false);
    }

    #[test]
    fn envelope_deserializes_without_default_bound_on_payload() {
        // `WlanConf` has no `Default` impl; this instantiation must still
        // deserialize, including when `data` is absent entirely.
        let full: Envelope<WlanConf> = serde_json::from_value(json!({
            "meta": { "rc": "ok" },
            "data": [{ "_id": "w1", "name": "Guest", "enabled": true }],
        }))
        .unwrap();
        assert_eq!(full.data.len(), 1);

        let empty: Envelope<WlanConf> = serde_json::from_value(json!({
            "meta": { "rc": "error", "msg": "api.err.Invalid" },
        }))
        .unwrap();
        assert!(empty.data.is_empty());
        assert_eq!(empty.meta.msg.as_deref(), Some("api.err.Invalid"));
    }

    #[test]
    fn open_network_has_no_passphrase() {
        let conf: WlanConf = serde_json::from_value(json!({
            "_id": "aa",
            "name": "Cafe",
            "enabled": true,
            "security": "open",
        }))
        .unwrap();
        assert!(conf.is_open());
        assert!(!conf.is_guest());
    }
}
