//! Shared test helpers
#![allow(dead_code)]

use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use comment_state::api::{CountData, PageApi, StatQuery};

/// In-memory API that records every call it receives
#[derive(Debug, Default)]
pub struct MockApi {
    pub pv_count: f64,
    pub counts: CountData,
    pub fail: bool,
    /// Fail only this statistic, every other call succeeds
    pub fail_query: Option<StatQuery>,
    pub pv_calls: Mutex<usize>,
    pub stat_calls: Mutex<Vec<(StatQuery, Vec<String>)>>,
}

impl MockApi {
    pub fn with_counts(pairs: &[(&str, f64)]) -> Self {
        Self {
            counts: pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn failing_query(query: StatQuery) -> Self {
        Self {
            fail_query: Some(query),
            ..Default::default()
        }
    }

    pub fn stat_calls(&self) -> Vec<(StatQuery, Vec<String>)> {
        self.stat_calls.lock().unwrap().clone()
    }

    pub fn pv_calls(&self) -> usize {
        *self.pv_calls.lock().unwrap()
    }
}

#[async_trait]
impl PageApi for MockApi {
    async fn pv(&self) -> Result<f64> {
        *self.pv_calls.lock().unwrap() += 1;
        if self.fail {
            bail!("pv endpoint unreachable");
        }
        Ok(self.pv_count)
    }

    async fn stat(&self, query: StatQuery, page_keys: &[String]) -> Result<CountData> {
        self.stat_calls
            .lock()
            .unwrap()
            .push((query, page_keys.to_vec()));
        if self.fail || self.fail_query == Some(query) {
            bail!("stat endpoint unreachable");
        }
        Ok(page_keys
            .iter()
            .filter_map(|key| self.counts.get(key).map(|count| (key.clone(), *count)))
            .collect())
    }
}
