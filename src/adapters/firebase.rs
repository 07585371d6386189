//! Firebase Realtime Database adapter.
//!
//! Implements [`DatabaseClient`] for the [`CloudSync`](crate::cloud::CloudSync)
//! module.
//!
//! - **`target_os = "espidf"`**: REST API over HTTPS:
//!   `PUT`/`GET https://{host}/{path}.json?auth={secret}`, JSON bodies, TLS
//!   verified against the ESP-IDF certificate bundle. One connection per
//!   call; the Wi-Fi link must already be up.
//! - **all other targets**: in-memory JSON tree for host-side tests, with
//!   an offline switch to exercise failure paths.

use log::info;

use crate::error::CloudError;
use crate::ports::DatabaseClient;

#[cfg(not(target_os = "espidf"))]
use serde_json::Value;

#[cfg(target_os = "espidf")]
use esp_idf_svc::http::Method;

/// Largest response body accepted from the server.
#[cfg(target_os = "espidf")]
const MAX_RESPONSE_LEN: usize = 4096;

pub struct FirebaseAdapter {
    host: String,
    auth: String,
    session_open: bool,
    auto_reconnect: bool,
    #[cfg(not(target_os = "espidf"))]
    tree: Value,
    #[cfg(not(target_os = "espidf"))]
    online: bool,
}

impl FirebaseAdapter {
    pub fn new() -> Self {
        Self {
            host: String::new(),
            auth: String::new(),
            session_open: false,
            auto_reconnect: false,
            #[cfg(not(target_os = "espidf"))]
            tree: Value::Null,
            #[cfg(not(target_os = "espidf"))]
            online: true,
        }
    }

    pub fn auto_reconnect(&self) -> bool {
        self.auto_reconnect
    }

    fn ensure_session(&self) -> Result<(), CloudError> {
        if self.session_open {
            Ok(())
        } else {
            Err(CloudError::NotInitialized)
        }
    }

    /// `https://{host}/{path}.json[?auth=…]` with each path segment
    /// percent-encoded.
    fn url(&self, path: &str) -> String {
        let mut url = format!("https://{}/", self.host);
        for (i, segment) in path.split('/').enumerate() {
            if i > 0 {
                url.push('/');
            }
            percent_encode_into(&mut url, segment);
        }
        url.push_str(".json");
        if !self.auth.is_empty() {
            url.push_str("?auth=");
            percent_encode_into(&mut url, &self.auth);
        }
        url
    }
}

impl Default for FirebaseAdapter {
    fn default() -> Self {
        Self::new()
    }
}

/// RFC 3986 unreserved characters pass through; everything else is `%XX`.
fn percent_encode_into(out: &mut String, s: &str) {
    use core::fmt::Write;
    for b in s.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'~' | b'.') {
            out.push(char::from(b));
        } else {
            let _ = write!(out, "%{:02X}", b);
        }
    }
}

// ── Simulation backend ────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
impl FirebaseAdapter {
    /// Simulate the link dropping (`false`) or coming back (`true`).
    pub fn sim_set_online(&mut self, online: bool) {
        self.online = online;
    }

    /// Store an arbitrary JSON value, bypassing the string-only write path.
    pub fn sim_insert(&mut self, path: &str, value: Value) {
        *node_mut(&mut self.tree, path) = value;
    }

    /// The whole database as one JSON document.
    pub fn sim_tree(&self) -> &Value {
        &self.tree
    }

    /// The URL a request for `path` would be sent to on hardware.
    pub fn sim_url(&self, path: &str) -> String {
        self.url(path)
    }

    fn link(&self) -> Result<(), CloudError> {
        self.ensure_session()?;
        if self.online {
            Ok(())
        } else {
            Err(CloudError::Network)
        }
    }
}

#[cfg(not(target_os = "espidf"))]
impl DatabaseClient for FirebaseAdapter {
    fn begin(&mut self, host: &str, auth: &str) -> Result<(), CloudError> {
        if !self.online {
            return Err(CloudError::Network);
        }
        host.clone_into(&mut self.host);
        auth.clone_into(&mut self.auth);
        self.session_open = true;
        info!("FirebaseAdapter: simulation backend ({})", self.host);
        Ok(())
    }

    fn set_auto_reconnect(&mut self, enabled: bool) {
        self.auto_reconnect = enabled;
    }

    fn set_string(&mut self, path: &str, value: &str) -> Result<(), CloudError> {
        self.link()?;
        *node_mut(&mut self.tree, path) = Value::String(value.to_owned());
        Ok(())
    }

    fn get(&mut self, path: &str) -> Result<Value, CloudError> {
        self.link()?;
        let mut node = &self.tree;
        for key in segments(path) {
            match node.get(key) {
                Some(child) => node = child,
                None => return Ok(Value::Null),
            }
        }
        Ok(node.clone())
    }
}

#[cfg(not(target_os = "espidf"))]
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Walk to `path`, turning every leaf on the way into an object. Writing a
/// node replaces its whole subtree, as the Realtime Database does.
#[cfg(not(target_os = "espidf"))]
fn node_mut<'a>(tree: &'a mut Value, path: &str) -> &'a mut Value {
    let mut node = tree;
    for key in segments(path) {
        if !node.is_object() {
            *node = Value::Null;
        }
        // Indexing a null with a string key makes it an empty object.
        node = &mut node[key];
    }
    node
}

// ── ESP-IDF backend ───────────────────────────────────────────

#[cfg(target_os = "espidf")]
impl FirebaseAdapter {
    fn request(&mut self, method: Method, path: &str, body: Option<&str>) -> Result<Vec<u8>, CloudError> {
        use esp_idf_svc::http::client::{Configuration, EspHttpConnection};

        let url = self.url(path);
        let mut conn = EspHttpConnection::new(&Configuration {
            crt_bundle_attach: Some(esp_idf_svc::sys::esp_crt_bundle_attach),
            timeout: Some(core::time::Duration::from_secs(10)),
            ..Default::default()
        })
        .map_err(|_| CloudError::Network)?;

        let content_length = body.map_or(0, str::len).to_string();
        let headers = [
            ("Content-Type", "application/json"),
            ("Content-Length", content_length.as_str()),
        ];
        conn.initiate_request(method, &url, &headers)
            .map_err(|_| self.network_error())?;

        if let Some(body) = body {
            let mut remaining = body.as_bytes();
            while !remaining.is_empty() {
                let n = conn.write(remaining).map_err(|_| self.network_error())?;
                if n == 0 {
                    return Err(self.network_error());
                }
                remaining = &remaining[n..];
            }
        }

        conn.initiate_response().map_err(|_| self.network_error())?;
        let status = conn.status();

        let mut response = Vec::new();
        let mut chunk = [0u8; 256];
        loop {
            let n = conn.read(&mut chunk).map_err(|_| self.network_error())?;
            if n == 0 {
                break;
            }
            if response.len() + n > MAX_RESPONSE_LEN {
                return Err(CloudError::Serialization);
            }
            response.extend_from_slice(&chunk[..n]);
        }

        if !(200..300).contains(&status) {
            log::warn!(
                "FirebaseAdapter: HTTP {} for {}: {}",
                status,
                path,
                String::from_utf8_lossy(&response)
            );
            return Err(CloudError::HttpStatus(status));
        }
        Ok(response)
    }

    /// Kick the Wi-Fi driver when auto-reconnect is on.
    fn network_error(&self) -> CloudError {
        if self.auto_reconnect {
            // SAFETY: esp_wifi_connect is safe to call from task context once
            // the Wi-Fi driver has been started by main().
            let ret = unsafe { esp_idf_svc::sys::esp_wifi_connect() };
            log::warn!("FirebaseAdapter: link down, reconnect requested (rc={})", ret);
        }
        CloudError::Network
    }
}

#[cfg(target_os = "espidf")]
impl DatabaseClient for FirebaseAdapter {
    fn begin(&mut self, host: &str, auth: &str) -> Result<(), CloudError> {
        host.clone_into(&mut self.host);
        auth.clone_into(&mut self.auth);
        self.session_open = true;
        info!("FirebaseAdapter: REST session for {}", self.host);
        Ok(())
    }

    fn set_auto_reconnect(&mut self, enabled: bool) {
        self.auto_reconnect = enabled;
    }

    fn set_string(&mut self, path: &str, value: &str) -> Result<(), CloudError> {
        self.ensure_session()?;
        let body = serde_json::to_string(value).map_err(|_| CloudError::Serialization)?;
        self.request(Method::Put, path, Some(&body)).map(|_| ())
    }

    fn get(&mut self, path: &str) -> Result<serde_json::Value, CloudError> {
        self.ensure_session()?;
        let body = self.request(Method::Get, path, None)?;
        serde_json::from_slice(&body).map_err(|_| CloudError::Serialization)
    }
}
