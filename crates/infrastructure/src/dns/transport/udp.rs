//! UDP forwarding transport (RFC 1035 §4.2.1)
//!
//! One ephemeral socket per forwarded query: resolve, connect, send, read a
//! single datagram, drop the socket. Replies longer than
//! [`MAX_UDP_RESPONSE_SIZE`] are truncated, there is no TCP fallback.

use async_trait::async_trait;
use relay_dns_application::ports::UpstreamForwarder;
use relay_dns_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Read buffer for the upstream reply.
pub const MAX_UDP_RESPONSE_SIZE: usize = 1024;

/// DNS over UDP forwarder
pub struct UdpForwarder {
    remote: String,
    timeout: Option<Duration>,
}

impl UdpForwarder {
    /// `remote` is a `host:port` string, resolved again on every query.
    pub fn new(remote: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            remote: remote.into(),
            timeout,
        }
    }

    async fn resolve_remote(&self) -> Result<SocketAddr, DomainError> {
        let mut addrs = tokio::net::lookup_host(self.remote.as_str())
            .await
            .map_err(|e| DomainError::UpstreamAddressResolution {
                server: self.remote.clone(),
                reason: e.to_string(),
            })?;

        addrs
            .next()
            .ok_or_else(|| DomainError::UpstreamAddressResolution {
                server: self.remote.clone(),
                reason: "no addresses found".to_string(),
            })
    }

    async fn connect(&self, server_addr: SocketAddr) -> Result<UdpSocket, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::TransportBind {
                server: server_addr.to_string(),
                reason: e.to_string(),
            })?;

        socket
            .connect(server_addr)
            .await
            .map_err(|e| DomainError::TransportConnect {
                server: server_addr.to_string(),
                reason: e.to_string(),
            })?;

        Ok(socket)
    }

    async fn receive(
        &self,
        socket: &UdpSocket,
        server_addr: SocketAddr,
        buf: &mut [u8],
    ) -> Result<usize, DomainError> {
        let received = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, socket.recv(buf))
                .await
                .map_err(|_| DomainError::TransportTimeout {
                    server: server_addr.to_string(),
                })?,
            None => socket.recv(buf).await,
        };

        received.map_err(|e| DomainError::TransportReceive {
            server: server_addr.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl UpstreamForwarder for UdpForwarder {
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        let server_addr = self.resolve_remote().await?;
        let socket = self.connect(server_addr).await?;

        let bytes_sent = socket
            .send(query)
            .await
            .map_err(|e| DomainError::TransportSend {
                server: server_addr.to_string(),
                reason: e.to_string(),
            })?;

        debug!(server = %server_addr, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = self.receive(&socket, server_addr, &mut recv_buf).await?;

        if bytes_received == 0 {
            return Err(DomainError::EmptyResponse {
                server: server_addr.to_string(),
            });
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }

    fn remote(&self) -> &str {
        &self.remote
    }
}
