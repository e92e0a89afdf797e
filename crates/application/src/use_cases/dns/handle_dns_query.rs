use crate::ports::UpstreamForwarder;
use relay_dns_domain::{DnsQuery, DomainError, LocalAnswer, RecordStore, RecordType};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of handling one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Answered from the static table; the caller synthesizes the response.
    Local(LocalAnswer),
    /// Raw reply from the upstream resolver, to be written back verbatim.
    Forwarded(Vec<u8>),
}

/// Decides, per query, between a static answer and a round trip to the
/// upstream resolver.
///
/// Holds only shared read-only state, so a single instance serves every
/// concurrent query.
pub struct HandleDnsQueryUseCase {
    records: Arc<RecordStore>,
    forwarder: Arc<dyn UpstreamForwarder>,
}

impl HandleDnsQueryUseCase {
    pub fn new(records: Arc<RecordStore>, forwarder: Arc<dyn UpstreamForwarder>) -> Self {
        Self { records, forwarder }
    }

    pub async fn execute(
        &self,
        query: &DnsQuery,
        packet: &[u8],
    ) -> Result<QueryOutcome, DomainError> {
        if let Some(answer) = self.resolve_local(query) {
            debug!(domain = %query.domain, record_type = %query.record_type, "Answering from static records");
            return Ok(QueryOutcome::Local(answer));
        }

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            upstream = %self.forwarder.remote(),
            "Forwarding query"
        );
        let response = self.forwarder.forward(packet).await?;
        Ok(QueryOutcome::Forwarded(response))
    }

    /// Static-table lookup only; `None` means the query must be forwarded.
    pub fn resolve_local(&self, query: &DnsQuery) -> Option<LocalAnswer> {
        match query.record_type {
            RecordType::A => self
                .records
                .lookup_a(&query.domain)
                .map(|ip| LocalAnswer::A(parse_address(&query.domain, ip))),
            RecordType::MX => self.records.lookup_mx(&query.domain).map(LocalAnswer::mx),
            RecordType::Other(_) => None,
        }
    }
}

// The config loader rejects anything but IPv4 literals; a table built any
// other way still answers, with the unspecified address.
fn parse_address(domain: &str, literal: &str) -> Ipv4Addr {
    literal.parse().unwrap_or_else(|_| {
        warn!(domain = %domain, value = %literal, "Stored A record is not an IPv4 address");
        Ipv4Addr::UNSPECIFIED
    })
}
