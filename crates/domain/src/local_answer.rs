use std::net::Ipv4Addr;

/// TTL carried by every locally synthesized record.
pub const LOCAL_ANSWER_TTL: u32 = 60;

/// Preference carried by every locally synthesized MX record.
pub const MX_PREFERENCE: u16 = 10;

/// An answer produced from the static record table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalAnswer {
    A(Ipv4Addr),
    Mx {
        preference: u16,
        /// Fully-qualified exchange name, trailing dot included
        exchange: String,
    },
}

impl LocalAnswer {
    pub fn mx(hostname: &str) -> Self {
        LocalAnswer::Mx {
            preference: MX_PREFERENCE,
            exchange: format!("{}.", hostname),
        }
    }

    pub fn ttl(&self) -> u32 {
        LOCAL_ANSWER_TTL
    }
}
