mod builders;
mod dns_server_mock;

pub use builders::QueryBuilder;
pub use dns_server_mock::{MockDnsServer, MockReply};
