//! Synthesis of locally answered responses.
//!
//! The inbound query message is reused as the response template, so the
//! transaction id, opcode and question section carry over unchanged.

use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::rdata::{A, MX};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use relay_dns_domain::{DomainError, LocalAnswer};

/// Turns `request` into an authoritative answer carrying exactly one record
/// built from `answer`. The record's name and class echo the question.
pub fn build_local_response(
    mut request: Message,
    answer: &LocalAnswer,
) -> Result<Message, DomainError> {
    let question = request.queries().first().cloned().ok_or_else(|| {
        DomainError::InvalidDnsMessage("message has no question to answer".to_string())
    })?;

    let rdata = match answer {
        LocalAnswer::A(ipv4) => RData::A(A(*ipv4)),
        LocalAnswer::Mx {
            preference,
            exchange,
        } => {
            let exchange = Name::from_ascii(exchange).map_err(|e| {
                DomainError::InvalidDomainName(format!(
                    "Invalid MX exchange '{}': {}",
                    exchange, e
                ))
            })?;
            RData::MX(MX::new(*preference, exchange))
        }
    };

    let mut record = Record::from_rdata(question.name().clone(), answer.ttl(), rdata);
    record.set_dns_class(question.query_class());

    request
        .set_message_type(MessageType::Response)
        .set_authoritative(true)
        .set_recursion_available(true)
        .set_authentic_data(false)
        .add_answer(record);

    Ok(request)
}

/// Serialize a Message to wire format bytes
pub fn encode(message: &Message) -> Result<Vec<u8>, DomainError> {
    message.to_bytes().map_err(|e| {
        DomainError::InvalidDnsMessage(format!("Failed to serialize DNS message: {}", e))
    })
}
