use async_trait::async_trait;
use relay_dns_domain::DomainError;

#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    /// Send a wire-format query to the remote resolver and return its reply
    /// exactly as received. A zero-length reply is an error.
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, DomainError>;

    /// Address the forwarder talks to, for logging.
    fn remote(&self) -> &str;
}
