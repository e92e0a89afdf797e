use relay_dns_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{error, info};

const RECV_BUFFER_SIZE: usize = 4096;

pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: DnsServerHandler,
) -> anyhow::Result<()> {
    let socket = Arc::new(create_udp_socket(bind_addr)?);

    info!(bind_address = %socket.local_addr()?, "listen on udp");

    run_udp_listener(socket, Arc::new(handler)).await
}

/// Receives forever; each datagram is handled on its own task.
async fn run_udp_listener(
    socket: Arc<UdpSocket>,
    handler: Arc<DnsServerHandler>,
) -> anyhow::Result<()> {
    let mut recv_buf = [0u8; RECV_BUFFER_SIZE];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        let handler = handler.clone();
        let socket = socket.clone();
        let query: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        tokio::spawn(async move {
            if let Some(response) = handler.handle_packet(&query, from).await {
                if let Err(e) = socket.send_to(&response, from).await {
                    error!(client = %from, error = %e, "Failed to send DNS response");
                }
            }
        });
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::op::{Message, Query};
    use hickory_proto::rr::{Name, RData, RecordType};
    use relay_dns_domain::Config;
    use std::str::FromStr;
    use std::time::Duration;

    fn query_bytes(id: u16, name: &str, record_type: RecordType) -> Vec<u8> {
        let mut message = Message::new();
        message
            .set_id(id)
            .set_recursion_desired(true)
            .add_query(Query::query(Name::from_str(name).unwrap(), record_type));
        message.to_vec().unwrap()
    }

    async fn spawn_listener(config: &Config) -> SocketAddr {
        let services = crate::di::DnsServices::new(config);
        let socket = Arc::new(create_udp_socket("127.0.0.1:0".parse().unwrap()).unwrap());
        let addr = socket.local_addr().unwrap();
        tokio::spawn(run_udp_listener(socket, Arc::new(services.handler)));
        addr
    }

    async fn client() -> UdpSocket {
        UdpSocket::bind("127.0.0.1:0").await.unwrap()
    }

    #[tokio::test]
    async fn test_answers_static_a_record_over_udp() {
        let mut config = Config::default();
        config
            .record
            .a
            .insert("example.com".to_string(), "1.2.3.4".to_string());
        let addr = spawn_listener(&config).await;

        let client = client().await;
        client
            .send_to(&query_bytes(0x0101, "example.com.", RecordType::A), addr)
            .await
            .unwrap();

        let mut buf = [0u8; 512];
        let (n, _) = tokio::time::timeout(Duration::from_secs(2), client.recv_from(&mut buf))
            .await
            .unwrap()
            .unwrap();
        let response = Message::from_vec(&buf[..n]).unwrap();

        assert_eq!(response.id(), 0x0101);
        assert!(response.authoritative());
        assert_eq!(response.answers().len(), 1);
        assert_eq!(response.answers()[0].ttl(), 60);
        match response.answers()[0].data() {
            Some(RData::A(a)) => assert_eq!(a.0.to_string(), "1.2.3.4"),
            other => panic!("expected A rdata, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_relays_upstream_reply_over_udp() {
        let upstream = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let mut config = Config::default();
        config.remote_dns = upstream.local_addr().unwrap().to_string();
        let addr = spawn_listener(&config).await;

        let upstream_task = tokio::spawn(async move {
            let mut buf = [0u8; 512];
            let (_, peer) = upstream.recv_from(&mut buf).await.unwrap();
            upstream.send_to(b"upstream-bytes", peer).await.unwrap();
        });

        let client = client().await;
        client
            .send_to(&query_bytes(0x0202, "other.com.", RecordType::A), addr)
            .await
            .unwrap();

        let mut buf = [0u8; 512];
        let (n, _) = tokio::time::timeout(Duration::from_secs(2), client.recv_from(&mut buf))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(&buf[..n], b"upstream-bytes");
        upstream_task.await.unwrap();
    }

    #[tokio::test]
    async fn test_silent_upstream_sends_nothing_back() {
        let upstream = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let mut config = Config::default();
        config.remote_dns = upstream.local_addr().unwrap().to_string();
        config.query_timeout_ms = 100;
        let addr = spawn_listener(&config).await;

        let client = client().await;
        client
            .send_to(&query_bytes(0x0303, "other.com.", RecordType::A), addr)
            .await
            .unwrap();

        let mut buf = [0u8; 512];
        let received =
            tokio::time::timeout(Duration::from_millis(500), client.recv_from(&mut buf)).await;
        assert!(received.is_err());
    }
}
