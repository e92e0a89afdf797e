use crate::dns::record_type_map::RecordTypeMapper;
use crate::dns::wire_response;
use hickory_proto::op::Message;
use relay_dns_application::use_cases::{HandleDnsQueryUseCase, QueryOutcome};
use relay_dns_domain::{DnsQuery, LocalAnswer};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Per-datagram request handler.
///
/// `handle_packet` returns the bytes to send back to the client, or `None`
/// when the client gets no reply at all.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn handle_packet(&self, packet: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(packet) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %client, error = %e, bytes = packet.len(), "Dropping unparseable datagram");
                return None;
            }
        };

        if request.queries().len() != 1 {
            debug!(client = %client, questions = request.queries().len(), "Dropping query without exactly one question");
            return None;
        }

        let question = &request.queries()[0];
        let hickory_record_type = question.query_type();
        let query = DnsQuery::from_wire_name(
            &question.name().to_ascii(),
            RecordTypeMapper::from_hickory(hickory_record_type),
        );

        info!(record_type = %hickory_record_type, domain = %query.domain, client = %client, "DNS query received");

        match self.use_case.execute(&query, packet).await {
            Ok(QueryOutcome::Local(answer)) => Self::reply_local(request, &answer, &query),
            Ok(QueryOutcome::Forwarded(response)) => {
                debug!(domain = %query.domain, bytes = response.len(), "Relaying upstream response");
                Some(response)
            }
            Err(e) => {
                error!(domain = %query.domain, record_type = %hickory_record_type, error = %e, "Forward to remote failed");
                None
            }
        }
    }

    fn reply_local(request: Message, answer: &LocalAnswer, query: &DnsQuery) -> Option<Vec<u8>> {
        let response = wire_response::build_local_response(request, answer)
            .and_then(|message| wire_response::encode(&message));

        match response {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(domain = %query.domain, record_type = %query.record_type, error = %e, "Failed to build local reply");
                None
            }
        }
    }
}
