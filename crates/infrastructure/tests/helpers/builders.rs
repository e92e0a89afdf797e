#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use std::str::FromStr;

/// Builds wire-format queries for handler tests.
pub struct QueryBuilder {
    id: u16,
    questions: Vec<(String, RecordType)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            questions: vec![],
        }
    }

    pub fn a(name: &str) -> Vec<u8> {
        Self::new().question(name, RecordType::A).build()
    }

    pub fn mx(name: &str) -> Vec<u8> {
        Self::new().question(name, RecordType::MX).build()
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        self.questions.push((name.to_string(), record_type));
        self
    }

    pub fn message(&self) -> Message {
        let mut message = Message::new();
        message
            .set_id(self.id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true);
        for (name, record_type) in &self.questions {
            message.add_query(Query::query(Name::from_str(name).unwrap(), *record_type));
        }
        message
    }

    pub fn build(&self) -> Vec<u8> {
        self.message().to_vec().unwrap()
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
