// Hand-crafted async HTTP client for the EventGo events service.
//
// All endpoints live at the service root (default http://localhost:8001).
// Errors arrive as FastAPI-style `{"detail": ...}` bodies.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types;

// ── Error response shape from the events service ─────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    detail: Option<Value>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the EventGo storefront API.
///
/// Read-only: the storefront browses events, tickets, and seat
/// availability; reservations and payment happen elsewhere.
pub struct StorefrontClient {
    http: reqwest::Client,
    base_url: Url,
}

impl StorefrontClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Parse the base URL and guarantee a trailing slash so joins work.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// The normalized base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"events/42/tickets"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/`, so joining relative paths works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        self.handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(500)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            if let Some(detail) = err.detail {
                let message = match detail {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                return Error::Api {
                    status: status.as_u16(),
                    message,
                };
            }
        }

        Error::Api {
            status: status.as_u16(),
            message: if raw.is_empty() {
                status.to_string()
            } else {
                raw
            },
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Events ───────────────────────────────────────────────────────

    /// List events. When `featured_only` is set, the `is_featured=true`
    /// query flag is sent; otherwise no flag at all (the service treats
    /// an absent flag as "all events").
    pub async fn list_events(
        &self,
        featured_only: bool,
    ) -> Result<Vec<types::EventResponse>, Error> {
        if featured_only {
            self.get_with_params("events", &[("is_featured", "true".to_owned())])
                .await
        } else {
            self.get("events").await
        }
    }

    pub async fn get_event(&self, event_id: u64) -> Result<types::EventResponse, Error> {
        match self.get(&format!("events/{event_id}")).await {
            Err(e) if e.is_not_found() => Err(Error::NotFound {
                resource: "event",
                id: event_id,
            }),
            result => result,
        }
    }

    // ── Tickets ──────────────────────────────────────────────────────

    pub async fn list_tickets(&self, event_id: u64) -> Result<Vec<types::TicketResponse>, Error> {
        match self.get(&format!("events/{event_id}/tickets")).await {
            Err(e) if e.is_not_found() => Err(Error::NotFound {
                resource: "event",
                id: event_id,
            }),
            result => result,
        }
    }

    // ── Seats ────────────────────────────────────────────────────────

    pub async fn list_seats(&self, event_id: u64) -> Result<Vec<types::SeatResponse>, Error> {
        match self.get(&format!("events/{event_id}/seats")).await {
            Err(e) if e.is_not_found() => Err(Error::NotFound {
                resource: "event",
                id: event_id,
            }),
            result => result,
        }
    }
}
