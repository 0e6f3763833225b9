use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{CountData, PageApi, StatQuery};
use crate::config::Config;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no comment server configured")]
    MissingServer,
    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Serialize)]
struct PvRequest<'a> {
    page_key: &'a str,
    page_title: &'a str,
    site_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct PvResponse {
    pv: f64,
}

#[derive(Debug, Deserialize)]
struct StatResponse {
    #[serde(default)]
    data: CountData,
}

/// [`PageApi`] over the comment server's HTTP API
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    server: String,
    site_name: String,
    page_key: String,
    page_title: String,
}

impl HttpApi {
    pub fn new(
        server: impl Into<String>,
        site_name: impl Into<String>,
        page_key: impl Into<String>,
        page_title: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            server: server.into().trim_end_matches('/').to_string(),
            site_name: site_name.into(),
            page_key: page_key.into(),
            page_title: page_title.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let server = config.server.as_deref().ok_or(ApiError::MissingServer)?;
        Ok(Self::new(
            server,
            &config.site_name,
            &config.page_key,
            &config.page_title,
        ))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v2/{}", self.server, path.trim_start_matches('/'))
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    }
    .into())
}

#[async_trait]
impl PageApi for HttpApi {
    async fn pv(&self) -> Result<f64> {
        let url = self.endpoint("pages/pv");
        log::debug!("recording page view for {:?}", self.page_key);

        let response = self
            .client
            .post(&url)
            .json(&PvRequest {
                page_key: &self.page_key,
                page_title: &self.page_title,
                site_name: &self.site_name,
            })
            .send()
            .await
            .with_context(|| format!("POST {url}"))?;
        let body: PvResponse = check_status(response)
            .await?
            .json()
            .await
            .context("Failed to decode page view response")?;

        Ok(body.pv)
    }

    async fn stat(&self, query: StatQuery, page_keys: &[String]) -> Result<CountData> {
        let url = self.endpoint(&format!("stats/{query}"));
        log::debug!("fetching {} for {} page keys", query, page_keys.len());

        let response = self
            .client
            .get(&url)
            .query(&[
                ("page_keys", page_keys.join(",")),
                ("site_name", self.site_name.clone()),
            ])
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;
        let body: StatResponse = check_status(response)
            .await?
            .json()
            .await
            .with_context(|| format!("Failed to decode {query} response"))?;

        Ok(body.data)
    }
}
