// ── Typed partial-update payloads ──
//
// The service layer maps its user-facing commands (custom password,
// randomized password, enable/disable) onto these structs; the coordinator
// serializes only the fields that are set, matching the controller's
// merge-on-PUT behavior for `rest/wlanconf`.

use serde::{Serialize, Serializer};

/// Partial update for one WLAN. Unset fields are left unchanged by the
/// controller.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WlanUpdate {
    /// New WPA passphrase.
    #[serde(rename = "x_passphrase", skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    /// Broadcast the WLAN or not. `rest/wlanconf` takes this as the
    /// strings `"true"`/`"false"`, not a JSON boolean.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "bool_as_string"
    )]
    pub enabled: Option<bool>,
}

#[allow(clippy::ref_option)]
fn bool_as_string<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(true) => serializer.serialize_str("true"),
        Some(false) => serializer.serialize_str("false"),
        None => serializer.serialize_none(),
    }
}

impl WlanUpdate {
    /// An update that only rotates the passphrase.
    pub fn password(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: Some(passphrase.into()),
            enabled: None,
        }
    }

    /// An update that only toggles the enabled state.
    pub fn enabled(enabled: bool) -> Self {
        Self {
            passphrase: None,
            enabled: Some(enabled),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn password_update_serializes_only_passphrase() {
        let value = serde_json::to_value(WlanUpdate::password("Sunshine1")).unwrap();
        assert_eq!(value, serde_json::json!({ "x_passphrase": "Sunshine1" }));
    }

    #[test]
    fn enabled_update_serializes_as_string_form() {
        let value = serde_json::to_value(WlanUpdate::enabled(false)).unwrap();
        assert_eq!(value, serde_json::json!({ "enabled": "false" }));

        let value = serde_json::to_value(WlanUpdate::enabled(true)).unwrap();
        assert_eq!(value, serde_json::json!({ "enabled": "true" }));
    }
}
