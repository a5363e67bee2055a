// src/pipeline.rs

use anyhow::{Context, Result};
use reqwest::Client;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::cache::{FeatureStore, ResponseCache};
use crate::config::Config;
use crate::features::FeatureTable;
use crate::fetch::{self, AcsQuery, RawResponse};
use crate::regions::RegionLookup;

/// Fetch (or reuse) the raw reply and derive the feature table.
pub struct Pipeline {
    client: Client,
    query: AcsQuery,
    responses: ResponseCache,
    store: FeatureStore,
    lookup: RegionLookup,
    config: Config,
}

impl Pipeline {
    pub fn new(client: Client, config: Config) -> Result<Self> {
        let lookup = match &config.regions_file {
            Some(path) => RegionLookup::from_path(path)
                .with_context(|| format!("loading region lookup {:?}", path))?,
            None => RegionLookup::embedded()
                .map_err(|e| anyhow::anyhow!("embedded region lookup: {}", e))?
                .clone(),
        };
        Ok(Self {
            client,
            query: AcsQuery::from_config(&config),
            responses: ResponseCache::new(&config.cache_dir)?,
            store: FeatureStore::new(),
            lookup,
            config,
        })
    }

    pub fn cache_key(&self) -> String {
        self.query.cache_key()
    }

    /// Drop both the cached response and the memoised table.
    pub fn refresh(&self) -> Result<()> {
        let key = self.cache_key();
        let removed = self.responses.invalidate(&key)?;
        let dropped = self.store.invalidate(&key);
        info!(key, removed, dropped, "cache invalidated");
        Ok(())
    }

    /// The raw reply from the disk cache, or from the API on a miss.
    pub async fn raw(&self) -> Result<RawResponse> {
        let key = self.cache_key();
        if let Some(raw) = self.responses.load(&key)? {
            return Ok(raw);
        }
        let raw = fetch::fetch_acs(&self.client, &self.query).await?;
        if let Err(e) = self.responses.store(&key, &raw) {
            warn!(error = %e, "could not cache response");
        }
        Ok(raw)
    }

    #[instrument(level = "info", skip(self))]
    pub async fn table(&self) -> Result<Arc<FeatureTable>> {
        let key = self.cache_key();
        if let Some(table) = self.store.get(&key) {
            return Ok(table);
        }
        let raw = self.raw().await?;
        let table = self
            .store
            .get_or_try_insert_with(&key, || {
                FeatureTable::from_raw(&raw, &self.lookup, self.config.join_policy())
            })
            .context("building feature table")?;

        let unmatched = table.unmatched();
        if !unmatched.is_empty() {
            let names: Vec<&str> = unmatched.iter().map(|r| r.state.as_str()).collect();
            warn!(?names, "regions without metadata");
        }
        Ok(table)
    }
}
