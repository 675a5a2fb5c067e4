use hearthbook_domain::{MemberId, RecordId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HouseholdValidationError {
    #[error("member {0} is declared more than once")]
    DuplicateMember(MemberId),
    #[error("paid record {record} has no payer")]
    MissingPayer { record: RecordId },
    #[error("paid record {record} names unknown payer {payer}")]
    UnknownPayer { record: RecordId, payer: MemberId },
}
