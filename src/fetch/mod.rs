// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::Client;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::config::Config;

pub mod raw;

pub use raw::RawResponse;

/// ACS variables requested, in the order the feature table labels them.
pub static FIELD_CODES: &[&str] = &[
    "NAME",
    "B01001_001E",  // total population
    "B19058_002E",  // households with SNAP
    "B19058_003E",  // households without SNAP
    "B17020I_002E", // below poverty level
    "B06009_002E",  // less than high school
    "B06009_003E",  // high school graduate
    "B06009_004E",  // some college or associate's
    "B06009_005E",  // bachelor's
    "B06009_006E",  // graduate or professional
    "B08137_003E",  // renter-occupied
    "B25081_002E",  // with a mortgage
    "B02001_003E",  // Black or African American alone
    "B03001_003E",  // Hispanic or Latino
    "B02001_004E",  // American Indian and Alaska Native alone
    "B27011_008E",  // unemployed
    "B27011_013E",  // not in labor force
];

/// The request parameters; also the identity of a cached response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcsQuery {
    pub endpoint: String,
    pub geography: String,
    /// Variables requested, in labelling order.
    pub fields: Vec<String>,
    pub api_key: Option<String>,
    pub max_retries: u32,
    pub backoff_ms: u64,
}

impl AcsQuery {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            endpoint: cfg.endpoint.clone(),
            geography: cfg.geography.clone(),
            fields: FIELD_CODES.iter().map(|c| c.to_string()).collect(),
            api_key: cfg.api_key.clone(),
            max_retries: cfg.max_retries,
            backoff_ms: cfg.backoff_ms,
        }
    }

    /// Full request URL with `get`, `for` and optional `key` parameters.
    pub fn url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint)
            .with_context(|| format!("parsing endpoint {}", self.endpoint))?;
        {
            let mut q = url.query_pairs_mut();
            q.append_pair("get", &self.fields.join(","));
            q.append_pair("for", &self.geography);
            if let Some(key) = &self.api_key {
                q.append_pair("key", key);
            }
        }
        Ok(url)
    }

    /// Filesystem-safe key: endpoint path and geography, then a digest of the field list.
    /// The API key is not part of it.
    pub fn cache_key(&self) -> String {
        let raw = format!("{}_{}", self.endpoint, self.geography);
        let trimmed = raw
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        let mut key = String::with_capacity(trimmed.len());
        let mut last_us = false;
        for c in trimmed.chars() {
            if c.is_ascii_alphanumeric() {
                key.push(c.to_ascii_lowercase());
                last_us = false;
            } else if !last_us {
                key.push('_');
                last_us = true;
            }
        }
        format!("{}_{}", key.trim_matches('_'), fields_digest(&self.fields))
    }
}

/// First 12 hex digits of the SHA-256 of the comma-joined codes.
fn fields_digest(fields: &[String]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(fields.join(",").as_bytes());
    let hex = format!("{:x}", hasher.finalize());
    hex[..12].to_string()
}

async fn get_text_core(client: &Client, url: &Url) -> Result<String> {
    debug!("GET {}", redact(url));
    Ok(client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", redact(url)))?
        .error_for_status()
        .with_context(|| format!("non-success status from {}", redact(url)))?
        .text()
        .await
        .with_context(|| format!("reading body from {}", redact(url)))?)
}

async fn get_text_with_retry(
    client: &Client,
    url: &Url,
    max_retries: u32,
    initial_backoff_ms: u64,
) -> Result<String> {
    let mut attempts = 0;
    loop {
        match get_text_core(client, url).await {
            Ok(t) => return Ok(t),
            Err(e) if attempts < max_retries => {
                attempts += 1;
                let backoff = initial_backoff_ms * 2u64.pow(attempts - 1);
                warn!(attempt = attempts, delay_ms = backoff, error = %e, "retrying ACS request");
                sleep(Duration::from_millis(backoff)).await;
            }
            Err(e) => {
                error!(error = %e, "exhausted retries");
                return Err(e);
            }
        }
    }
}

/// Fetch the raw ACS table for `query`.
#[instrument(level = "info", skip(client, query), fields(geography = %query.geography))]
pub async fn fetch_acs(client: &Client, query: &AcsQuery) -> Result<RawResponse> {
    let url = query.url()?;
    let body = get_text_with_retry(client, &url, query.max_retries, query.backoff_ms).await?;
    let raw = RawResponse::from_json(&body).context("decoding ACS response")?;
    info!(rows = raw.rows.len(), "fetched ACS table");
    Ok(raw)
}

/// URL with any `key` parameter masked, for logs and error messages.
fn redact(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "key") {
        return url.to_string();
    }
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
