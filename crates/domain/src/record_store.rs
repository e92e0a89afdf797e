use super::config::RecordTable;
use super::dns_query::normalize_domain;
use std::collections::HashMap;

/// Read-only A/MX table consulted for every query.
///
/// Lookups expect an already normalized name (see [`normalize_domain`]).
/// A key whose value is the empty string behaves exactly like a missing key.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    a: HashMap<String, String>,
    mx: HashMap<String, String>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the store from the configured table, normalizing every key.
    pub fn from_table(table: &RecordTable) -> Self {
        let a = table
            .a
            .iter()
            .map(|(name, ip)| (normalize_domain(name), ip.trim().to_string()))
            .collect();
        let mx = table
            .mx
            .iter()
            .map(|(name, host)| {
                let host = host.trim();
                let host = host.strip_suffix('.').unwrap_or(host);
                (normalize_domain(name), host.to_string())
            })
            .collect();
        Self { a, mx }
    }

    pub fn with_a(mut self, name: impl Into<String>, ip: impl Into<String>) -> Self {
        self.a.insert(name.into(), ip.into());
        self
    }

    pub fn with_mx(mut self, name: impl Into<String>, host: impl Into<String>) -> Self {
        self.mx.insert(name.into(), host.into());
        self
    }

    pub fn lookup_a(&self, name: &str) -> Option<&str> {
        Self::non_empty(self.a.get(name))
    }

    pub fn lookup_mx(&self, name: &str) -> Option<&str> {
        Self::non_empty(self.mx.get(name))
    }

    pub fn a_count(&self) -> usize {
        self.a.len()
    }

    pub fn mx_count(&self) -> usize {
        self.mx.len()
    }

    fn non_empty(value: Option<&String>) -> Option<&str> {
        value.map(String::as_str).filter(|v| !v.is_empty())
    }
}
