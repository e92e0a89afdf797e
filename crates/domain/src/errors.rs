use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Failed to resolve upstream address {server}: {reason}")]
    UpstreamAddressResolution { server: String, reason: String },

    #[error("Failed to bind UDP socket for {server}: {reason}")]
    TransportBind { server: String, reason: String },

    #[error("Failed to connect to {server}: {reason}")]
    TransportConnect { server: String, reason: String },

    #[error("Failed to send query to {server}: {reason}")]
    TransportSend { server: String, reason: String },

    #[error("Failed to receive response from {server}: {reason}")]
    TransportReceive { server: String, reason: String },

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Remote server {server} response empty")]
    EmptyResponse { server: String },
}

