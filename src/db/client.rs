use async_trait::async_trait;
use serde_json::Value;

use crate::config::ServiceConfig;
use crate::error::ServiceError;

use super::filter::OrFilter;
use super::{DataService, Row};

/// Thin authenticated handle to the hosted data service's REST
/// interface. One handle is constructed per process and used for every
/// round trip; no retries, batching, pagination, or timeouts.
pub struct RestClient {
    http: reqwest::Client,
    base: String,
    key: String,
}

impl RestClient {
    pub fn new(cfg: &ServiceConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base: cfg.url.trim_end_matches('/').to_string(),
            key: cfg.key.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base, table)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.key).bearer_auth(&self.key)
    }

    /// Collapse a non-2xx response into an Api error carrying the body.
    async fn read_body(resp: reqwest::Response) -> Result<String, ServiceError> {
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: body.trim().to_string(),
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl DataService for RestClient {
    async fn select(
        &self,
        table: &str,
        columns: &str,
        filter: Option<&OrFilter>,
    ) -> Result<Vec<Row>, ServiceError> {
        let mut req = self
            .http
            .get(self.table_url(table))
            .query(&[("select", columns)]);
        if let Some(f) = filter {
            req = req.query(&[("or", f.to_expression())]);
        }
        let resp = self.authed(req).send().await?;
        let body = Self::read_body(resp).await?;
        let rows: Vec<Row> = serde_json::from_str(&body)?;
        Ok(rows)
    }

    async fn update(&self, table: &str, patch: &Value, id: &str) -> Result<(), ServiceError> {
        let req = self
            .http
            .patch(self.table_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(patch);
        let resp = self.authed(req).send().await?;
        Self::read_body(resp).await?;
        Ok(())
    }
}
