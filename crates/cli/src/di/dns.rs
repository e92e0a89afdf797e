use relay_dns_application::ports::UpstreamForwarder;
use relay_dns_application::use_cases::HandleDnsQueryUseCase;
use relay_dns_domain::{Config, RecordStore};
use relay_dns_infrastructure::dns::{DnsServerHandler, UdpForwarder};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let records = Arc::new(RecordStore::from_table(&config.record));
        info!(
            a_records = records.a_count(),
            mx_records = records.mx_count(),
            "Static records loaded"
        );

        let forwarder: Arc<dyn UpstreamForwarder> = Arc::new(UdpForwarder::new(
            config.remote_dns.clone(),
            config.query_timeout(),
        ));
        info!(
            remote = %config.remote_dns,
            timeout_ms = config.query_timeout_ms,
            "Upstream forwarder configured"
        );

        let use_case = Arc::new(HandleDnsQueryUseCase::new(records, forwarder));

        Self {
            handler: DnsServerHandler::new(use_case),
        }
    }
}
