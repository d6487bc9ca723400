//! In-memory resolver with canned answers, used by the test suites.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{anyhow, Result};

use super::RecordResolver;

/// Canned DNS answers keyed by queried name. Unknown names answer with no records.
///
/// MX hosts get preferences 10, 20, 30, ... in the order given.
#[derive(Clone, Default)]
pub struct StaticResolver {
    mx: Arc<HashMap<String, Result<Vec<(u16, String)>, String>>>,
    txt: Arc<HashMap<String, Result<Vec<String>, String>>>,
}

impl StaticResolver {
    /// Creates a resolver with no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers MX queries for `name` with `hosts`.
    pub fn with_mx(mut self, name: &str, hosts: &[&str]) -> Self {
        let records = hosts
            .iter()
            .zip((10u16..).step_by(10))
            .map(|(host, preference)| (preference, host.to_string()))
            .collect();
        Arc::make_mut(&mut self.mx).insert(name.to_string(), Ok(records));
        self
    }

    /// Answers TXT queries for `name` with `records`, in order.
    pub fn with_txt(mut self, name: &str, records: &[&str]) -> Self {
        let records = records.iter().map(|r| r.to_string()).collect();
        Arc::make_mut(&mut self.txt).insert(name.to_string(), Ok(records));
        self
    }

    /// Fails MX queries for `name` with `message`.
    pub fn failing_mx(mut self, name: &str, message: &str) -> Self {
        Arc::make_mut(&mut self.mx).insert(name.to_string(), Err(message.to_string()));
        self
    }

    /// Fails TXT queries for `name` with `message`.
    pub fn failing_txt(mut self, name: &str, message: &str) -> Self {
        Arc::make_mut(&mut self.txt).insert(name.to_string(), Err(message.to_string()));
        self
    }
}

impl RecordResolver for StaticResolver {
    async fn lookup_mx(&self, name: &str) -> Result<Vec<(u16, String)>> {
        match self.mx.get(name) {
            Some(Ok(records)) => Ok(records.clone()),
            Some(Err(message)) => Err(anyhow!("{message}")),
            None => Ok(Vec::new()),
        }
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>> {
        match self.txt.get(name) {
            Some(Ok(records)) => Ok(records.clone()),
            Some(Err(message)) => Err(anyhow!("{message}")),
            None => Ok(Vec::new()),
        }
    }
}
