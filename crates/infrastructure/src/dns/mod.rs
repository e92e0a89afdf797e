pub mod record_type_map;
pub mod server;
pub mod transport;
pub mod wire_response;

pub use record_type_map::RecordTypeMapper;
pub use server::DnsServerHandler;
pub use transport::UdpForwarder;
