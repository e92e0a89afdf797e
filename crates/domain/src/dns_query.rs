use super::RecordType;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Builds a query from a question name as it appears on the wire
    /// (`Example.COM.`), normalizing it into the lookup key.
    pub fn from_wire_name(name: &str, record_type: RecordType) -> Self {
        Self::new(normalize_domain(name), record_type)
    }
}

/// Lookup key for a domain name: lowercase with a single trailing dot removed.
pub fn normalize_domain(name: &str) -> String {
    let name = name.strip_suffix('.').unwrap_or(name);
    name.to_ascii_lowercase()
}
