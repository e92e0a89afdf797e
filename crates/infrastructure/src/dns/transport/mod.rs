pub mod udp;

pub use udp::{UdpForwarder, MAX_UDP_RESPONSE_SIZE};
