use hearthbook_application::{HouseholdValidationError, MemberDirectory};
use hearthbook_domain::MemberId;

/// Validation error with member ids resolved against the directory where possible.
pub fn format_validation_error(
    error: &HouseholdValidationError,
    member_directory: &dyn MemberDirectory,
) -> String {
    match error {
        HouseholdValidationError::DuplicateMember(id) => {
            format!(
                "Member {} is declared more than once",
                describe_member(*id, member_directory)
            )
        }
        HouseholdValidationError::MissingPayer { record } => {
            format!("Paid expense record {record} has no payer")
        }
        HouseholdValidationError::UnknownPayer { record, payer } => {
            format!("Paid expense record {record} names payer {payer}, who is not a household member")
        }
    }
}

fn describe_member(id: MemberId, member_directory: &dyn MemberDirectory) -> String {
    match member_directory.display_name(id) {
        Some(name) => format!("{name} ({id})"),
        None => id.to_string(),
    }
}
