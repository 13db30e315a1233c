// Cookie-authenticated controller session.
//
// Owns the reqwest::Client (with cookie jar), the stored credentials, and
// the CSRF token UniFi OS requires on mutating requests. The retry contract
// lives here: an authentication rejection on a data request triggers exactly
// one re-login and one retry of the original request; a second rejection is
// surfaced to the caller.

use std::sync::RwLock;

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, trace, warn};
use url::Url;

use crate::error::Error;
use crate::models::Envelope;
use crate::platform::ControllerPlatform;
use crate::transport::TransportConfig;

const PREVIEW_LEN: usize = 200;

/// Truncate an error body for log/error messages, backing off to the
/// nearest UTF-8 char boundary.
fn preview(body: &str) -> &str {
    let mut end = body.len().min(PREVIEW_LEN);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

/// UniFi OS wraps some errors as `{"error":{"code":N,"message":"..."}}`
/// with HTTP 200.
#[derive(serde::Deserialize)]
struct OsErrorWrapper {
    error: Option<OsErrorInner>,
}

#[derive(serde::Deserialize)]
struct OsErrorInner {
    code: u16,
    message: Option<String>,
}

/// An authenticated HTTP session to one UniFi controller.
///
/// Created unauthenticated; call [`login()`](Self::login) before issuing
/// requests, or let the first request fail and be retried after the
/// automatic re-login. The session cookie lives in the client's jar; the
/// CSRF token (UniFi OS only) is captured at login and rotated whenever the
/// controller sends a replacement.
pub struct SessionClient {
    http: reqwest::Client,
    base_url: Url,
    site: String,
    platform: ControllerPlatform,
    username: String,
    password: SecretString,
    csrf_token: RwLock<Option<String>>,
    /// Serializes the re-login sequence so an interleaved retry can't
    /// double-login against the same jar.
    login_gate: tokio::sync::Mutex<()>,
}

impl SessionClient {
    /// Create a session client from transport settings.
    ///
    /// `base_url` is the controller root (`https://192.168.1.1` for UniFi OS,
    /// `https://controller:8443` for classic). Does not authenticate.
    pub fn new(
        base_url: Url,
        site: String,
        platform: ControllerPlatform,
        username: String,
        password: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let (http, _jar) = transport.build_client()?;
        Ok(Self::with_client(
            http, base_url, site, platform, username, password,
        ))
    }

    /// Create a session client with a pre-built `reqwest::Client`.
    ///
    /// The client must carry a cookie store or the session cookie set at
    /// login will be dropped. Intended for tests and callers that manage
    /// their own transport.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        site: String,
        platform: ControllerPlatform,
        username: String,
        password: SecretString,
    ) -> Self {
        Self {
            http,
            base_url,
            site,
            platform,
            username,
            password,
            csrf_token: RwLock::new(None),
            login_gate: tokio::sync::Mutex::new(()),
        }
    }

    /// The configured site identifier.
    pub fn site(&self) -> &str {
        &self.site
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured controller platform family.
    pub fn platform(&self) -> ControllerPlatform {
        self.platform
    }

    // ── Authentication ───────────────────────────────────────────────

    /// Authenticate with the controller.
    ///
    /// On success the session cookie is stored in the client's jar and,
    /// on UniFi OS, the CSRF token is captured from the response headers.
    pub async fn login(&self) -> Result<(), Error> {
        let url = self.base_url.join(self.platform.login_path())?;
        debug!(%url, "logging in");

        let body = json!({
            "username": self.username,
            "password": self.password.expose_secret(),
        });

        let resp = self.http.post(url).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {body}"),
            });
        }

        // CSRF token is required on all mutating requests through the
        // UniFi OS proxy. Classic controllers never send one.
        if let Some(token) = resp
            .headers()
            .get("X-CSRF-Token")
            .or_else(|| resp.headers().get("x-csrf-token"))
            .and_then(|v| v.to_str().ok())
        {
            self.set_csrf_token(token.to_owned());
        }

        debug!("login successful");
        Ok(())
    }

    /// End the current session. Errors are surfaced but the session is
    /// considered gone either way.
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.base_url.join(self.platform.logout_path())?;
        debug!(%url, "logging out");

        // Logout is a mutation: UniFi OS rejects it without the token.
        let _resp = self.apply_csrf(self.http.post(url)).send().await?;
        *self.csrf_token.write().expect("CSRF lock poisoned") = None;
        Ok(())
    }

    // ── Request dispatch ─────────────────────────────────────────────

    /// GET a site-scoped endpoint and unwrap the envelope, re-authenticating
    /// once if the session has expired.
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, Error> {
        self.request(Method::GET, endpoint, None).await
    }

    /// PUT a JSON body to a site-scoped endpoint and unwrap the envelope,
    /// re-authenticating once if the session has expired.
    pub async fn put_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<Vec<T>, Error> {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    /// Dispatch with the single re-login retry.
    ///
    /// An auth rejection invalidates the session, performs exactly one
    /// login, and replays the original request once. Any other error, and
    /// a second auth rejection, is returned as-is.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Vec<T>, Error> {
        match self.send(method.clone(), endpoint, body).await {
            Err(e) if e.is_auth_rejection() => {
                warn!(endpoint, "session rejected, re-authenticating once");
                {
                    let _gate = self.login_gate.lock().await;
                    self.login().await?;
                }
                self.send(method, endpoint, body).await
            }
            other => other,
        }
    }

    /// Send one request and parse the envelope. No retry logic here.
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Vec<T>, Error> {
        let path = self.platform.site_path(&self.site, endpoint);
        let url = self.base_url.join(&path)?;
        debug!(%method, %url, "dispatching request");

        let mut builder = self.http.request(method.clone(), url);
        if method != Method::GET {
            builder = self.apply_csrf(builder);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        self.parse_envelope(resp).await
    }

    // ── CSRF token management ────────────────────────────────────────

    fn set_csrf_token(&self, token: String) {
        trace!("storing CSRF token");
        *self.csrf_token.write().expect("CSRF lock poisoned") = Some(token);
    }

    /// UniFi OS may rotate tokens mid-session -- prefer the updated one.
    fn update_csrf_from_response(&self, headers: &reqwest::header::HeaderMap) {
        let new_token = headers
            .get("X-Updated-CSRF-Token")
            .or_else(|| headers.get("x-csrf-token"))
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        if let Some(token) = new_token {
            trace!("CSRF token rotated");
            *self.csrf_token.write().expect("CSRF lock poisoned") = Some(token);
        }
    }

    fn apply_csrf(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let guard = self.csrf_token.read().expect("CSRF lock poisoned");
        match guard.as_deref() {
            Some(token) => builder.header("X-CSRF-Token", token),
            None => builder,
        }
    }

    // ── Envelope parsing ─────────────────────────────────────────────

    /// Parse the `{ meta, data }` envelope, returning `data` on success.
    ///
    /// Auth rejections (HTTP 401, the UniFi OS `{"error":{"code":401}}`
    /// shape, and the classic `api.err.LoginRequired` envelope) map to
    /// [`Error::Authentication`] so the dispatch layer can re-login; every
    /// other failure maps to [`Error::Rejected`].
    async fn parse_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Vec<T>, Error> {
        let status = resp.status();

        // Capture any CSRF rotation before consuming the response.
        self.update_csrf_from_response(resp.headers());

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "session expired or invalid credentials".into(),
            });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Rejected {
                message: format!("HTTP {status}: {}", preview(&body)),
            });
        }

        let body = resp.text().await?;

        // UniFi OS sometimes returns errors with HTTP 200 in its own shape.
        if let Ok(wrapper) = serde_json::from_str::<OsErrorWrapper>(&body) {
            if let Some(err) = wrapper.error {
                let msg = err.message.unwrap_or_default();
                return Err(if err.code == 401 {
                    Error::Authentication { message: msg }
                } else {
                    Error::Rejected {
                        message: format!("UniFi OS error {}: {msg}", err.code),
                    }
                });
            }
        }

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            Error::Deserialization {
                message: format!("{e} (body preview: {:?})", preview(&body)),
                body: body.clone(),
            }
        })?;

        match envelope.meta.rc.as_str() {
            "ok" => Ok(envelope.data),
            _ => {
                let msg = envelope
                    .meta
                    .msg
                    .unwrap_or_else(|| format!("rc={}", envelope.meta.rc));
                if msg == "api.err.LoginRequired" {
                    Err(Error::Authentication { message: msg })
                } else {
                    Err(Error::Rejected { message: msg })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PREVIEW_LEN, preview};

    #[test]
    fn preview_truncates_on_char_boundary() {
        assert_eq!(preview("short"), "short");

        let ascii = "x".repeat(PREVIEW_LEN + 50);
        assert_eq!(preview(&ascii).len(), PREVIEW_LEN);

        // Multi-byte char straddling the cut point must not panic.
        let mut body = "x".repeat(PREVIEW_LEN - 1);
        body.push('é');
        body.push_str("tail");
        let cut = preview(&body);
        assert_eq!(cut.len(), PREVIEW_LEN - 1);
        assert!(cut.chars().all(|c| c == 'x'));
    }
}
