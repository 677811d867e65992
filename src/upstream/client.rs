//! Outbound HTTP client for the two upstream services.

use reqwest::Method;
use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::upstream::reply::{RelayBody, UpstreamReply};

/// Transport-level failure: the upstream never produced a response
/// (connection refused, DNS failure, reset mid-body).
///
/// Upstream-reported errors are not represented here; a non-2xx status
/// comes back as a normal [`UpstreamReply`] and is relayed verbatim.
#[derive(Debug, thiserror::Error)]
#[error("upstream request failed: {0}")]
pub struct UpstreamError(#[from] reqwest::Error);

/// Client for the product and order services.
///
/// Base URLs are fixed at construction for the process lifetime. The inner
/// client carries no timeout, so a hung upstream hangs the inbound request.
pub struct UpstreamClient {
    http: reqwest::Client,
    product_base: String,
    order_base: String,
}

impl UpstreamClient {
    pub fn new(upstreams: &UpstreamConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            product_base: upstreams.product_base.clone(),
            order_base: upstreams.order_base.clone(),
        }
    }

    /// GET `{PRODUCT_BASE}`
    pub async fn list_products(&self) -> Result<UpstreamReply, UpstreamError> {
        self.relay(Method::GET, self.product_base.clone(), None).await
    }

    /// POST `{PRODUCT_BASE}`
    pub async fn create_product(&self, body: &Value) -> Result<UpstreamReply, UpstreamError> {
        self.relay(Method::POST, self.product_base.clone(), Some(body))
            .await
    }

    /// PUT `{PRODUCT_BASE}/{id}`
    pub async fn update_product(
        &self,
        id: &str,
        body: &Value,
    ) -> Result<UpstreamReply, UpstreamError> {
        let url = format!("{}/{}", self.product_base, id);
        self.relay(Method::PUT, url, Some(body)).await
    }

    /// DELETE `{PRODUCT_BASE}/{id}`
    pub async fn delete_product(&self, id: &str) -> Result<UpstreamReply, UpstreamError> {
        let url = format!("{}/{}", self.product_base, id);
        self.relay(Method::DELETE, url, None).await
    }

    /// GET `{ORDER_BASE}`
    pub async fn list_orders(&self) -> Result<UpstreamReply, UpstreamError> {
        self.relay(Method::GET, self.order_base.clone(), None).await
    }

    /// PATCH `{ORDER_BASE}/{id}`
    ///
    /// The order service has no separate `/status` endpoint; both local
    /// PATCH routes land here.
    pub async fn update_order(
        &self,
        id: &str,
        body: &Value,
    ) -> Result<UpstreamReply, UpstreamError> {
        let url = format!("{}/{}", self.order_base, id);
        self.relay(Method::PATCH, url, Some(body)).await
    }

    /// Send one outbound request and tag the response for relaying.
    async fn relay(
        &self,
        method: Method,
        url: String,
        body: Option<&Value>,
    ) -> Result<UpstreamReply, UpstreamError> {
        tracing::debug!(%method, %url, "Forwarding to upstream");

        let mut request = self.http.request(method, url);
        if let Some(json) = body {
            request = request.json(json);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!(%status, bytes = bytes.len(), "Upstream responded");

        Ok(UpstreamReply {
            status,
            body: RelayBody::from_bytes(&bytes),
        })
    }
}
