// WLAN configuration endpoints
//
// Site-scoped `rest/wlanconf` reads and partial updates, as inherent
// methods on `SessionClient`.

use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::models::WlanConf;
use crate::session::SessionClient;

impl SessionClient {
    /// List all WLAN configurations for the session's site.
    ///
    /// `GET /api/s/{site}/rest/wlanconf`
    pub async fn list_wlans(&self) -> Result<Vec<WlanConf>, Error> {
        debug!("listing wlanconf");
        self.get_json("rest/wlanconf").await
    }

    /// Apply a partial update to one WLAN by controller-assigned id.
    ///
    /// `PUT /api/s/{site}/rest/wlanconf/{id}` -- the controller merges the
    /// payload, leaving unspecified fields unchanged. The caller supplies
    /// only the fields it wants to change.
    pub async fn update_wlan(
        &self,
        id: &str,
        payload: &(impl Serialize + Sync),
    ) -> Result<(), Error> {
        debug!(id, "updating wlanconf");
        let body = serde_json::to_value(payload).map_err(|e| Error::Deserialization {
            message: format!("payload serialization failed: {e}"),
            body: String::new(),
        })?;
        let _: Vec<serde_json::Value> = self
            .put_json(&format!("rest/wlanconf/{id}"), &body)
            .await?;
        Ok(())
    }
}
