//! Relay DNS Domain Layer
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod local_answer;
pub mod record_store;
pub mod record_type;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, RecordTable};
pub use dns_query::{normalize_domain, DnsQuery};
pub use errors::DomainError;
pub use local_answer::{LocalAnswer, LOCAL_ANSWER_TTL, MX_PREFERENCE};
pub use record_store::RecordStore;
pub use record_type::RecordType;
