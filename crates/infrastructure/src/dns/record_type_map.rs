//! Mapping from `hickory_proto::rr::RecordType` to `relay_dns_domain::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use relay_dns_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Every wire type maps; types without a static table become `Other`.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
